//! Surface material parameters and shading modes.

use prx_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::{RenderError, RenderResult};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Illumination algorithm used for an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadeMode {
    /// Direct lighting: Lambertian diffuse plus a Phong highlight per light.
    #[default]
    Phong,
    /// Perfect mirror: color comes from a recursively traced reflection ray.
    Reflect,
    /// Contributes no color.
    Other,
}

/// Shading parameters shared by every shape.
///
/// Deserialized materials are validated with [`Material::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MaterialDesc")]
pub struct Material {
    /// Weight of the diffuse term
    pub diffuse: f32,
    /// Weight of the specular term
    pub specular: f32,
    /// Phong exponent
    pub shininess: f32,
    pub shade: ShadeMode,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: 0.8,
            specular: 0.2,
            shininess: 32.0,
            shade: ShadeMode::Phong,
        }
    }
}

impl Material {
    /// Phong material with the given weights.
    pub fn phong(diffuse: f32, specular: f32, shininess: f32) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
            shade: ShadeMode::Phong,
        }
    }

    /// Mirror material.
    pub fn mirror() -> Self {
        Self {
            shade: ShadeMode::Reflect,
            ..Default::default()
        }
    }

    /// Material that renders black.
    pub fn unlit() -> Self {
        Self {
            shade: ShadeMode::Other,
            ..Default::default()
        }
    }

    /// Check that the weights and the exponent are finite and non-negative.
    pub fn validate(&self) -> RenderResult<()> {
        let fields = [
            ("diffuse", self.diffuse),
            ("specular", self.specular),
            ("shininess", self.shininess),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(RenderError::InvalidMaterial { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct MaterialDesc {
    diffuse: f32,
    specular: f32,
    shininess: f32,
    shade: ShadeMode,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        let m = Material::default();
        Self {
            diffuse: m.diffuse,
            specular: m.specular,
            shininess: m.shininess,
            shade: m.shade,
        }
    }
}

impl TryFrom<MaterialDesc> for Material {
    type Error = RenderError;

    fn try_from(desc: MaterialDesc) -> Result<Self, Self::Error> {
        let material = Material {
            diffuse: desc.diffuse,
            specular: desc.specular,
            shininess: desc.shininess,
            shade: desc.shade,
        };
        material.validate()?;
        Ok(material)
    }
}
