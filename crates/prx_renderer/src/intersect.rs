//! Intersect trait and IntersectInfo for ray-object intersection.

use prx_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Only written by a successful [`Intersect::intersects`] call; after a miss
/// the previous contents are left untouched and must not be read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectInfo {
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection (always points against the ray)
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl Default for IntersectInfo {
    fn default() -> Self {
        Self {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            t: f32::INFINITY,
            front_face: false,
        }
    }
}

impl IntersectInfo {
    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }

    /// Fill in every field for a hit at parameter `t`.
    pub(crate) fn record(&mut self, ray: &Ray, t: f32, outward_normal: Vec3) {
        self.t = t;
        self.point = ray.at(t);
        self.set_face_normal(ray, outward_normal);
    }
}

/// Trait for shapes that can be hit by rays.
pub trait Intersect: Send + Sync {
    /// Test if a ray hits this shape with a parameter inside `ray_t`.
    ///
    /// Returns true if hit, and fills in the intersection info.
    fn intersects(&self, ray: &Ray, ray_t: Interval, info: &mut IntersectInfo) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_normal_front() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let mut info = IntersectInfo::default();
        info.set_face_normal(&ray, Vec3::Z);

        assert!(info.front_face);
        assert_eq!(info.normal, Vec3::Z);
    }

    #[test]
    fn test_face_normal_back() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut info = IntersectInfo::default();
        info.record(&ray, 2.0, Vec3::Z);

        assert!(!info.front_face);
        assert_eq!(info.normal, Vec3::NEG_Z);
        assert_eq!(info.point, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(info.t, 2.0);
    }
}
