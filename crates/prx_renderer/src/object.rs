//! Scene objects: a shape plus its material.

use prx_math::{Interval, Ray};
use serde::{Deserialize, Serialize};

use crate::intersect::{Intersect, IntersectInfo};
use crate::{Cuboid, Material, Plane, ShadeMode, Sphere, Triangle};

/// The closed set of supported primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Sphere(Sphere),
    #[serde(rename = "box")]
    Cuboid(Cuboid),
    Triangle(Triangle),
    Plane(Plane),
}

impl Intersect for Shape {
    fn intersects(&self, ray: &Ray, ray_t: Interval, info: &mut IntersectInfo) -> bool {
        match self {
            Shape::Sphere(sphere) => sphere.intersects(ray, ray_t, info),
            Shape::Cuboid(cuboid) => cuboid.intersects(ray, ray_t, info),
            Shape::Triangle(triangle) => triangle.intersects(ray, ray_t, info),
            Shape::Plane(plane) => plane.intersects(ray, ray_t, info),
        }
    }
}

/// A renderable object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub shape: Shape,
    #[serde(default)]
    pub material: Material,
}

impl Object {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    pub fn diffuse(&self) -> f32 {
        self.material.diffuse
    }

    pub fn specular(&self) -> f32 {
        self.material.specular
    }

    pub fn shininess(&self) -> f32 {
        self.material.shininess
    }

    pub fn shade_mode(&self) -> ShadeMode {
        self.material.shade
    }
}

impl Intersect for Object {
    fn intersects(&self, ray: &Ray, ray_t: Interval, info: &mut IntersectInfo) -> bool {
        self.shape.intersects(ray, ray_t, info)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Cuboid> for Shape {
    fn from(cuboid: Cuboid) -> Self {
        Shape::Cuboid(cuboid)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}
