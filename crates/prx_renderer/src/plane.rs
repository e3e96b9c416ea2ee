//! Infinite plane primitive.

use prx_math::{Interval, MathResult, Ray, Vec3, VectorExt};
use serde::{Deserialize, Serialize};

use crate::intersect::{Intersect, IntersectInfo};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlaneDesc")]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a plane. The normal is normalized; a zero normal is an error.
    pub fn new(point: Vec3, normal: Vec3) -> MathResult<Self> {
        Ok(Self {
            point,
            normal: normal.normalize_checked()?,
        })
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Intersect for Plane {
    fn intersects(&self, ray: &Ray, ray_t: Interval, info: &mut IntersectInfo) -> bool {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < 1e-8 {
            return false;
        }

        let t = self.normal.dot(self.point - ray.origin()) / denom;
        if !ray_t.contains(t) {
            return false;
        }

        info.record(ray, t, self.normal);
        true
    }
}

#[derive(Deserialize)]
struct PlaneDesc {
    point: Vec3,
    normal: Vec3,
}

impl TryFrom<PlaneDesc> for Plane {
    type Error = prx_math::MathError;

    fn try_from(desc: PlaneDesc) -> Result<Self, Self::Error> {
        Plane::new(desc.point, desc.normal)
    }
}
