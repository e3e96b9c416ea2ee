//! Lighting formulas and small numeric helpers.
//!
//! All functions here are pure. Direction arguments are expected to be
//! normalized by the caller.

use prx_math::{Interval, Vec3};

use crate::Color;

/// Lambertian diffuse term.
///
/// `light_dir` points from the light toward the surface, so the cosine is
/// taken against `-light_dir`.
pub fn diffuse(normal: Vec3, light_dir: Vec3, light_color: Color, intensity: f32) -> Color {
    let lambert_cos = Interval::UNIT.clamp(normal.dot(-light_dir));
    light_color * (lambert_cos * intensity)
}

/// Phong specular term.
///
/// The highlight is monochrome: the same value in every channel regardless
/// of the light color. Negative exponents are treated as zero.
pub fn specular(reflect_dir: Vec3, view_dir: Vec3, intensity: f32, shininess: f32) -> Color {
    let cos = Interval::UNIT.clamp(view_dir.dot(reflect_dir));
    Color::splat(cos.powf(shininess.max(0.0)) * intensity)
}

/// Reflection of `light_dir` about `normal`: `2 n (n . l) - l`.
///
/// The result is not normalized.
pub fn reflection_direction(normal: Vec3, light_dir: Vec3) -> Vec3 {
    normal * (2.0 * normal.dot(light_dir)) - light_dir
}

/// Refraction of `incidence` through a surface with index of refraction `ior`.
///
/// Handles rays leaving the surface by flipping the normal and swapping the
/// indices. Returns `None` on total internal reflection.
pub fn refraction_direction(incidence: Vec3, normal: Vec3, ior: f32) -> Option<Vec3> {
    let mut cosi = incidence.dot(normal).clamp(-1.0, 1.0);
    let (mut etai, mut etat) = (1.0, ior);
    let mut n = normal;
    if cosi < 0.0 {
        cosi = -cosi;
    } else {
        std::mem::swap(&mut etai, &mut etat);
        n = -normal;
    }

    let eta = etai / etat;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        None
    } else {
        Some(incidence * eta + n * (eta * cosi - k.sqrt()))
    }
}

/// Real roots of `a x^2 + b x + c`, smallest first.
///
/// Uses the `q = -0.5 (b + sign(b) sqrt(disc))` form to avoid cancellation.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discr = b * b - 4.0 * a * c;
    if discr < 0.0 {
        return None;
    }

    let (x0, x1) = if discr == 0.0 {
        let x = -0.5 * b / a;
        (x, x)
    } else {
        let q = if b > 0.0 {
            -0.5 * (b + discr.sqrt())
        } else {
            -0.5 * (b - discr.sqrt())
        };
        (q / a, c / q)
    };

    Some(if x0 > x1 { (x1, x0) } else { (x0, x1) })
}
