//! Whitted-style ray tracing.
//!
//! Implements:
//! - Phong direct lighting from every point light
//! - Recursive mirror reflection with a per-ray depth bound
//! - Row-parallel rendering with rayon

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use prx_math::{Interval, Ray, VectorExt, DEFAULT_MAX_DEPTH};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::intersect::{Intersect, IntersectInfo};
use crate::scene::Hit;
use crate::shading::{diffuse, reflection_direction, specular};
use crate::{Color, ImageBuffer, RayGenerator, RenderError, RenderResult, Scene, ShadeMode};

/// Offset along the normal for secondary ray origins.
pub const SURFACE_BIAS: f32 = 1e-3;

/// Upper bound applied to [`RenderConfig::max_depth`].
pub const MAX_DEPTH_LIMIT: u32 = 256;

/// Shadow rays stop just short of the shaded point.
const SHADOW_EPSILON: f32 = 1e-4;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Deepest reflection ray traced; the first bounce is depth 0
    pub max_depth: u32,
    /// Attenuation applied at every mirror bounce
    pub reflectance: f32,
    /// Color of rays that hit nothing
    pub background: Color,
    /// Test other objects between a light and the shaded point
    pub cast_shadows: bool,
    /// Render rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reflectance: 0.8,
            background: Color::ZERO,
            cast_shadows: false,
            parallel: true,
        }
    }
}

impl RenderConfig {
    /// The depth bound stamped onto primary rays.
    pub fn effective_max_depth(&self) -> u32 {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }
}

/// Shared flag for stopping a render between rows.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Compute the color seen by a primary ray.
///
/// Only primary rays are limited to `ray_t`; reflection rays see everything
/// in front of the mirror.
pub fn cast_ray(scene: &Scene, ray: &Ray, ray_t: Interval, config: &RenderConfig) -> Color {
    shade_nearest(scene, ray, ray_t, 0, config)
}

/// Compute the color seen by a reflection ray at `depth`.
///
/// The first bounce off a mirror is depth 0. Rays deeper than their own
/// `max_depth` are black.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32, config: &RenderConfig) -> Color {
    if depth > ray.max_depth() {
        return Color::ZERO;
    }
    shade_nearest(scene, ray, Interval::FORWARD, depth + 1, config)
}

/// Shade the nearest hit; a mirror spawns its bounce at `bounce_depth`.
fn shade_nearest(
    scene: &Scene,
    ray: &Ray,
    ray_t: Interval,
    bounce_depth: u32,
    config: &RenderConfig,
) -> Color {
    let Some(hit) = scene.nearest_hit(ray, ray_t) else {
        return config.background;
    };

    match hit.object.shade_mode() {
        ShadeMode::Phong => shade_phong(scene, ray, &hit, config),
        ShadeMode::Reflect => shade_reflect(scene, ray, &hit, bounce_depth, config),
        ShadeMode::Other => Color::ZERO,
    }
}

fn shade_phong(scene: &Scene, ray: &Ray, hit: &Hit<'_>, config: &RenderConfig) -> Color {
    let Ok(view_dir) = ray.direction().normalize_checked() else {
        return Color::ZERO;
    };
    let info = &hit.info;
    let object = hit.object;

    let mut color = Color::ZERO;
    for light in scene.lights() {
        let to_hit = info.point - light.position();
        let Ok(light_dir) = to_hit.normalize_checked() else {
            log::trace!("light at {} coincides with shaded point", light.position());
            continue;
        };

        if !light_reaches(scene, hit, &Ray::new(light.position(), to_hit), config) {
            continue;
        }

        let Ok(reflect_dir) = reflection_direction(info.normal, light_dir).normalize_checked() else {
            continue;
        };

        let diffuse_term = diffuse(info.normal, light_dir, light.color(), light.intensity());
        let specular_term = specular(reflect_dir, view_dir, light.intensity(), object.shininess());
        color += diffuse_term * object.diffuse() + specular_term * object.specular();
    }
    color
}

/// Whether light travelling along `shadow_ray` reaches the shaded point.
///
/// The shadow ray runs from the light with the unnormalized light-to-point
/// vector, so the shaded point sits at t = 1.
fn light_reaches(scene: &Scene, hit: &Hit<'_>, shadow_ray: &Ray, config: &RenderConfig) -> bool {
    let mut scratch = IntersectInfo::default();
    if !hit.object.intersects(shadow_ray, Interval::FORWARD, &mut scratch) {
        return false;
    }

    !config.cast_shadows
        || !scene.occluded(shadow_ray, Interval::new(0.0, 1.0 - SHADOW_EPSILON), hit.index)
}

fn shade_reflect(scene: &Scene, ray: &Ray, hit: &Hit<'_>, depth: u32, config: &RenderConfig) -> Color {
    let info = &hit.info;
    let Ok(direction) = reflection_direction(info.normal, -ray.direction()).normalize_checked() else {
        return Color::ZERO;
    };

    let bounce = Ray::new(info.point + info.normal * SURFACE_BIAS, direction)
        .with_max_depth(ray.max_depth());
    trace(scene, &bounce, depth, config) * config.reflectance
}

/// Render every pixel of `image` with rays from `rays`.
///
/// Rows are independent; each worker writes only its own row slice, so the
/// result does not depend on scheduling. Returns [`RenderError::Cancelled`]
/// if `cancel` fired, in which case unrendered rows keep their old contents.
pub fn render_into(
    rays: &RayGenerator,
    scene: &Scene,
    config: &RenderConfig,
    image: &mut ImageBuffer,
    cancel: &CancelToken,
) -> RenderResult<()> {
    if (image.x_res(), image.y_res()) != (rays.width(), rays.height()) {
        return Err(RenderError::ResolutionMismatch {
            camera_width: rays.width(),
            camera_height: rays.height(),
            image_width: image.x_res(),
            image_height: image.y_res(),
        });
    }
    if rays.width() == 0 || rays.height() == 0 {
        return Err(RenderError::InvalidResolution {
            width: rays.width(),
            height: rays.height(),
        });
    }

    if config.max_depth > MAX_DEPTH_LIMIT {
        log::warn!("max depth {} clamped to {MAX_DEPTH_LIMIT}", config.max_depth);
    }
    let max_depth = config.effective_max_depth();
    let ray_t = rays.draw_distance();

    log::info!(
        "Rendering {}x{} ({} objects, {} lights, {})",
        rays.width(),
        rays.height(),
        scene.len(),
        scene.lights().len(),
        if config.parallel { "parallel" } else { "single-threaded" }
    );
    let start = Instant::now();

    let render_row = |(row, pixels): (usize, &mut [Color])| {
        if cancel.is_cancelled() {
            return;
        }
        for (x, pixel) in pixels.iter_mut().enumerate() {
            let ray = rays.image_ray(x as u32, row as u32).with_max_depth(max_depth);
            *pixel = cast_ray(scene, &ray, ray_t, config);
        }
    };

    let width = rays.width() as usize;
    if config.parallel {
        image.pixels_mut().par_chunks_mut(width).enumerate().for_each(&render_row);
    } else {
        image.pixels_mut().chunks_mut(width).enumerate().for_each(&render_row);
    }

    if cancel.is_cancelled() {
        log::info!("Render cancelled after {:.2?}", start.elapsed());
        return Err(RenderError::Cancelled);
    }

    log::info!("Render complete in {:.2?}", start.elapsed());
    Ok(())
}
