//! PRX Renderer - CPU ray tracing
//!
//! A Whitted-style ray tracer: one primary ray per pixel, Phong direct
//! lighting from point lights, and recursive mirror reflection with a
//! bounded depth. Intersection is a linear scan over the scene's objects.

mod camera;
mod cuboid;
mod error;
mod image_buffer;
mod intersect;
mod light;
mod material;
mod object;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;

pub use camera::{Camera, RayGenerator};
pub use cuboid::Cuboid;
pub use error::{RenderError, RenderResult};
pub use image_buffer::ImageBuffer;
pub use intersect::{Intersect, IntersectInfo};
pub use light::{Light, PointLight};
pub use material::{Color, Material, ShadeMode};
pub use object::{Object, Shape};
pub use plane::Plane;
pub use renderer::{
    cast_ray, render_into, trace, CancelToken, RenderConfig, MAX_DEPTH_LIMIT, SURFACE_BIAS,
};
pub use scene::{Hit, Scene};
pub use shading::{diffuse, reflection_direction, refraction_direction, solve_quadratic, specular};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from prx_math
pub use prx_math::{Interval, Ray, Vec3};
