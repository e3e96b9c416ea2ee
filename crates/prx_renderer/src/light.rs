//! Light sources.

use prx_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::Color;

/// An omnidirectional light at a point in space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    #[serde(default = "white")]
    pub color: Color,
    #[serde(default = "unit_intensity")]
    pub intensity: f32,
}

fn white() -> Color {
    Color::ONE
}

fn unit_intensity() -> f32 {
    1.0
}

impl PointLight {
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// A white light with intensity 1.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, white(), unit_intensity())
    }
}

/// Light sources understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    Point(PointLight),
}

impl Light {
    pub fn position(&self) -> Vec3 {
        match self {
            Light::Point(light) => light.position,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Point(light) => light.color,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Point(light) => light.intensity,
        }
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_light_accessors() {
        let light: Light = PointLight::new(Vec3::new(2.0, 2.0, 2.0), Color::new(1.0, 0.5, 0.0), 0.75).into();

        assert_eq!(light.position(), Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(light.color(), Color::new(1.0, 0.5, 0.0));
        assert_eq!(light.intensity(), 0.75);
    }

    #[test]
    fn test_white_light() {
        let light = PointLight::white(Vec3::Y);
        assert_eq!(light.color, Color::ONE);
        assert_eq!(light.intensity, 1.0);
    }
}
