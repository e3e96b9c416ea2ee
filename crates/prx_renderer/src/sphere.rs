//! Sphere primitive for ray tracing.

use prx_math::{Interval, Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::intersect::{Intersect, IntersectInfo};
use crate::shading::solve_quadratic;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SphereDesc")]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Intersect for Sphere {
    fn intersects(&self, ray: &Ray, ray_t: Interval, info: &mut IntersectInfo) -> bool {
        if self.radius == 0.0 {
            return false;
        }

        let l = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * ray.direction().dot(l);
        let c = l.length_squared() - self.radius * self.radius;

        let Some((t0, t1)) = solve_quadratic(a, b, c) else {
            return false;
        };

        // Find the nearest root in the acceptable range
        let t = if ray_t.contains(t0) {
            t0
        } else if ray_t.contains(t1) {
            t1
        } else {
            return false;
        };

        let outward_normal = (ray.at(t) - self.center) / self.radius;
        info.record(ray, t, outward_normal);
        true
    }
}

#[derive(Deserialize)]
struct SphereDesc {
    center: Vec3,
    radius: f32,
}

impl From<SphereDesc> for Sphere {
    fn from(desc: SphereDesc) -> Self {
        Sphere::new(desc.center, desc.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut info = IntersectInfo::default();

        assert!(sphere.intersects(&ray, Interval::FORWARD, &mut info));
        assert!((info.t - 0.5).abs() < 0.001);
        assert!(info.front_face);
    }

    #[test]
    fn test_sphere_miss_leaves_info_untouched() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let mut info = IntersectInfo::default();

        assert!(!sphere.intersects(&ray, Interval::FORWARD, &mut info));
        assert_eq!(info, IntersectInfo::default());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut info = IntersectInfo::default();

        assert!(!sphere.intersects(&ray, Interval::FORWARD, &mut info));
    }

    #[test]
    fn test_sphere_round_trip_distance() {
        let center = Vec3::new(1.0, -2.0, 3.0);
        let radius = 1.5;
        let sphere = Sphere::new(center, radius);

        for (d, dir) in [
            (0.25, Vec3::X),
            (2.0, Vec3::new(1.0, 1.0, 0.0).normalize()),
            (10.0, Vec3::new(-0.3, 0.2, 0.9).normalize()),
        ] {
            // Start `d` outside the surface and aim at the center
            let origin = center + dir * (radius + d);
            let ray = Ray::new(origin, -dir);
            let mut info = IntersectInfo::default();

            assert!(sphere.intersects(&ray, Interval::FORWARD, &mut info));
            assert!((info.t - d).abs() < 1e-4, "t={} d={}", info.t, d);

            let radial = (info.point - center).normalize();
            assert!(info.normal.cross(radial).length() < 1e-4);
            assert!((info.normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ray_from_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let mut info = IntersectInfo::default();

        assert!(sphere.intersects(&ray, Interval::FORWARD, &mut info));
        assert!((info.t - 2.0).abs() < 1e-5);
        assert!(!info.front_face);
        assert!((info.normal - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_interval_limits_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut info = IntersectInfo::default();

        assert!(!sphere.intersects(&ray, Interval::new(0.0, 5.0), &mut info));
        assert!(sphere.intersects(&ray, Interval::new(0.0, 1000.0), &mut info));
    }

    #[test]
    fn test_desc_clamps_radius() {
        let sphere = Sphere::from(SphereDesc {
            center: Vec3::Y,
            radius: -2.0,
        });
        assert_eq!(sphere.radius(), 0.0);
        assert_eq!(sphere.center(), Vec3::Y);
    }
}
