use crate::Vec3;

/// Default number of reflection bounces a ray may spawn.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// A ray in 3D space with origin, direction, and a reflection depth budget.
///
/// Rays are used for raytracing - they represent a line starting at `origin`
/// and traveling in `direction`. Secondary rays spawned from a surface carry
/// the `max_depth` of the ray that produced them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_depth: u32,
}

impl Ray {
    /// Create a new ray with the default depth budget.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the depth budget.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::NEG_Z)
    }
}
