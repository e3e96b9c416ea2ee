//! Axis-aligned box primitive.

use prx_math::{Interval, Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::intersect::{Intersect, IntersectInfo};

/// An axis-aligned box given by its center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CuboidDesc")]
pub struct Cuboid {
    center: Vec3,
    half_extents: Vec3,
}

impl Cuboid {
    /// Create a new box. Negative extents are taken by magnitude.
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// Create a box spanning two opposite corners.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self::new((a + b) * 0.5, (b - a) * 0.5)
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

impl Intersect for Cuboid {
    /// Slab test. The normal is the face the ray enters through, or the face
    /// it leaves through when the origin is inside the box.
    fn intersects(&self, ray: &Ray, ray_t: Interval, info: &mut IntersectInfo) -> bool {
        let origin = ray.origin();
        let dir = ray.direction();
        let (min, max) = (self.min(), self.max());
        if dir == Vec3::ZERO {
            return false;
        }

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut enter_axis = 0;
        let mut exit_axis = 0;

        for axis in 0..3 {
            if dir[axis] == 0.0 {
                // Parallel to this slab: must already be between its planes
                if origin[axis] < min[axis] || origin[axis] > max[axis] {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / dir[axis];
            let mut t0 = (min[axis] - origin[axis]) * inv;
            let mut t1 = (max[axis] - origin[axis]) * inv;
            if inv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            if t0 > t_enter {
                t_enter = t0;
                enter_axis = axis;
            }
            if t1 < t_exit {
                t_exit = t1;
                exit_axis = axis;
            }
            if t_exit < t_enter {
                return false;
            }
        }

        let (t, axis) = if ray_t.contains(t_enter) {
            (t_enter, enter_axis)
        } else if ray_t.contains(t_exit) {
            (t_exit, exit_axis)
        } else {
            return false;
        };

        let point = ray.at(t);
        let mut outward_normal = Vec3::ZERO;
        outward_normal[axis] = if point[axis] >= self.center[axis] { 1.0 } else { -1.0 };

        info.record(ray, t, outward_normal);
        true
    }
}

#[derive(Deserialize)]
struct CuboidDesc {
    center: Vec3,
    half_extents: Vec3,
}

impl From<CuboidDesc> for Cuboid {
    fn from(desc: CuboidDesc) -> Self {
        Cuboid::new(desc.center, desc.half_extents)
    }
}
