use glam::{Vec2, Vec3, Vec4};

use crate::{MathError, MathResult};

/// Checked helpers for glam vectors.
pub trait VectorExt: Sized {
    /// Normalize to unit length.
    ///
    /// Fails with [`MathError::ZeroLength`] where `normalize()` would
    /// silently produce NaN or infinity.
    fn normalize_checked(self) -> MathResult<Self>;
}

macro_rules! impl_vector_ext {
    ($($t:ty),*) => {
        $(
            impl VectorExt for $t {
                #[inline]
                fn normalize_checked(self) -> MathResult<Self> {
                    self.try_normalize().ok_or(MathError::ZeroLength)
                }
            }
        )*
    };
}

impl_vector_ext!(Vec2, Vec3, Vec4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_checked() {
        let n = Vec3::new(3.0, 0.0, 4.0).normalize_checked().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);

        let n2 = Vec2::new(0.0, -2.0).normalize_checked().unwrap();
        assert_eq!(n2, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_normalize_zero_is_error() {
        assert_eq!(Vec3::ZERO.normalize_checked(), Err(MathError::ZeroLength));
        assert_eq!(Vec4::ZERO.normalize_checked(), Err(MathError::ZeroLength));
        assert_eq!(
            Vec3::new(f32::NAN, 1.0, 0.0).normalize_checked(),
            Err(MathError::ZeroLength)
        );
    }
}
