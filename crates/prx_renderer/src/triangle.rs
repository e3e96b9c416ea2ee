//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then keeps the hit only if it lies
//! on the inner side of all three edges.

use prx_math::{Interval, MathResult, Ray, Vec3, VectorExt};
use serde::{Deserialize, Serialize};

use crate::intersect::{Intersect, IntersectInfo};

/// Rays this close to parallel with the plane are treated as misses.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TriangleVertices", into = "TriangleVertices")]
pub struct Triangle {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length), `(v1 - v0) x (v2 - v0)`
    normal: Vec3,
    /// Reject hits on the back face
    single_sided: bool,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// Fails with `MathError::ZeroLength` when the vertices are collinear.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> MathResult<Self> {
        let normal = (v1 - v0).cross(v2 - v0).normalize_checked()?;
        Ok(Self {
            v0,
            v1,
            v2,
            normal,
            single_sided: false,
        })
    }

    /// Only accept hits on the side the normal points to.
    pub fn with_single_sided(mut self, single_sided: bool) -> Self {
        self.single_sided = single_sided;
        self
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn is_single_sided(&self) -> bool {
        self.single_sided
    }

    /// Edges v0->v1, v0->v2 and v1->v2.
    pub fn edges(&self) -> [Vec3; 3] {
        [self.v1 - self.v0, self.v2 - self.v0, self.v2 - self.v1]
    }

    /// True if `p` (assumed to lie in the triangle's plane) is inside the
    /// triangle or on its boundary.
    pub fn contains_point(&self, p: Vec3) -> bool {
        let n = self.normal;
        let inside = |a: Vec3, b: Vec3| n.dot((b - a).cross(p - a)) >= 0.0;

        inside(self.v0, self.v1) && inside(self.v1, self.v2) && inside(self.v2, self.v0)
    }
}

impl Intersect for Triangle {
    fn intersects(&self, ray: &Ray, ray_t: Interval, info: &mut IntersectInfo) -> bool {
        let n_dot_dir = self.normal.dot(ray.direction());

        // Ray is parallel to the triangle's plane
        if n_dot_dir.abs() < PARALLEL_EPSILON {
            return false;
        }

        // Back face: the ray travels along the normal
        if self.single_sided && n_dot_dir > 0.0 {
            return false;
        }

        let t = self.normal.dot(self.v0 - ray.origin()) / n_dot_dir;
        if !ray_t.contains(t) {
            return false;
        }

        if !self.contains_point(ray.at(t)) {
            return false;
        }

        info.record(ray, t, self.normal);
        true
    }
}

/// Serialized form: just the vertices and the sidedness flag.
#[derive(Serialize, Deserialize)]
struct TriangleVertices {
    vertices: [Vec3; 3],
    #[serde(default)]
    single_sided: bool,
}

impl TryFrom<TriangleVertices> for Triangle {
    type Error = prx_math::MathError;

    fn try_from(value: TriangleVertices) -> Result<Self, Self::Error> {
        let [v0, v1, v2] = value.vertices;
        Ok(Triangle::new(v0, v1, v2)?.with_single_sided(value.single_sided))
    }
}

impl From<Triangle> for TriangleVertices {
    fn from(triangle: Triangle) -> Self {
        Self {
            vertices: triangle.vertices(),
            single_sided: triangle.single_sided,
        }
    }
}
