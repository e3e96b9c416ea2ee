//! PRX Math - vector, matrix and ray algebra for the PRX ray tracer.
//!
//! Vectors and matrices are glam types. This crate adds the pieces the ray
//! tracer needs on top of them: checked normalization, cofactor-based matrix
//! inversion, point/direction transforms, projection matrices and the `Ray`
//! and `Interval` value types.

// Re-export glam for convenience
pub use glam::*;

mod error;
mod interval;
mod matrix;
mod ray;
mod transform;
mod vector;

pub use error::{MathError, MathResult};
pub use interval::Interval;
pub use matrix::{look_at, ortho, perspective, Cofactor, SINGULAR_EPSILON};
pub use ray::{Ray, DEFAULT_MAX_DEPTH};
pub use transform::Mat4Ext;
pub use vector::VectorExt;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_dot_products() {
        assert_eq!(Vec2::new(1.0, 2.0).dot(Vec2::new(3.0, 4.0)), 11.0);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(
            Vec4::new(1.0, 2.0, 3.0, 4.0).dot(Vec4::new(5.0, 6.0, 7.0, 8.0)),
            70.0
        );
    }

    #[test]
    fn test_cross_matches_component_formula() {
        let (a, b) = (Vec3::new(1.0, -2.0, 3.0), Vec3::new(-4.0, 5.0, 0.5));
        let expected = Vec3::new(
            a.y * b.z - a.z * b.y,
            -(a.x * b.z - a.z * b.x),
            a.x * b.y - a.y * b.x,
        );
        assert_eq!(a.cross(b), expected);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }
}
