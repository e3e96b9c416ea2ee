//! Scene file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use prx_math::Vec3;
use prx_renderer::{Camera, RenderConfig, Scene};
use serde::{Deserialize, Serialize};

use crate::cli::Args;

/// Camera block of a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: Vec3,
    /// Viewing direction, not a target point
    pub forward: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub width: u32,
    pub height: u32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        let camera = Camera::new();
        let draw = camera.draw_distance();
        Self {
            position: camera.position(),
            forward: camera.forward(),
            up: camera.up(),
            fov: camera.fov(),
            width: camera.x_resolution(),
            height: camera.y_resolution(),
            near: draw.min,
            far: draw.max,
        }
    }
}

impl CameraSettings {
    pub fn to_camera(&self) -> Camera {
        Camera::new()
            .with_position(self.position)
            .with_forward(self.forward)
            .with_up(self.up)
            .with_fov(self.fov)
            .with_resolution(self.width, self.height)
            .with_draw_distance(self.near, self.far)
    }
}

/// Everything needed for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFile {
    pub camera: CameraSettings,
    pub render: RenderConfig,
    pub scene: Scene,
}

impl SceneFile {
    /// Load a scene file from JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse scene file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply command line overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(width) = args.width {
            self.camera.width = width;
        }
        if let Some(height) = args.height {
            self.camera.height = height;
        }
        if let Some(fov) = args.fov {
            self.camera.fov = fov;
        }
        if let Some(max_depth) = args.max_depth {
            self.render.max_depth = max_depth;
        }
        if args.single_threaded {
            self.render.parallel = false;
        }
        if args.shadows {
            self.render.cast_shadows = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use prx_renderer::{Light, ShadeMode, Shape};

    const ROOM: &str = r#"{
        "camera": { "position": [0.0, 1.0, 6.0], "width": 64, "height": 32 },
        "render": { "max_depth": 3, "cast_shadows": true },
        "scene": {
            "objects": [
                { "shape": { "type": "sphere", "center": [0.0, 1.0, 0.0], "radius": 1.0 },
                  "material": { "shade": "reflect" } },
                { "shape": { "type": "box", "center": [2.0, 0.5, 0.0], "half_extents": [0.5, 0.5, 0.5] } },
                { "shape": { "type": "triangle",
                             "vertices": [[-1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
                             "single_sided": true } },
                { "shape": { "type": "plane", "point": [0.0, 0.0, 0.0], "normal": [0.0, 2.0, 0.0] },
                  "material": { "diffuse": 0.5, "specular": 0.0 } }
            ],
            "lights": [
                { "type": "point", "position": [0.0, 5.0, 5.0], "color": [1.0, 0.9, 0.8], "intensity": 0.75 }
            ]
        }
    }"#;

    #[test]
    fn test_parse_scene_file() {
        let file = SceneFile::from_json(ROOM).unwrap();

        assert_eq!(file.camera.position, Vec3::new(0.0, 1.0, 6.0));
        assert_eq!(file.camera.forward, Vec3::NEG_Z);
        assert_eq!((file.camera.width, file.camera.height), (64, 32));
        assert_eq!(file.render.max_depth, 3);
        assert!(file.render.cast_shadows);
        assert_eq!(file.render.reflectance, 0.8);

        let objects = file.scene.objects();
        assert_eq!(objects.len(), 4);
        assert_eq!(objects[0].shade_mode(), ShadeMode::Reflect);
        assert!(matches!(objects[1].shape, Shape::Cuboid(_)));
        assert!(matches!(objects[2].shape, Shape::Triangle(t) if t.is_single_sided()));
        match objects[3].shape {
            Shape::Plane(plane) => assert_eq!(plane.normal(), Vec3::Y),
            other => panic!("expected plane, got {other:?}"),
        }
        assert_eq!(objects[3].diffuse(), 0.5);
        assert_eq!(objects[3].shininess(), 32.0);

        let Light::Point(light) = file.scene.lights()[0];
        assert_eq!(light.intensity, 0.75);
    }

    #[test]
    fn test_degenerate_triangle_is_rejected() {
        let text = r#"{ "scene": { "objects": [
            { "shape": { "type": "triangle", "vertices": [[0, 0, 0], [1, 1, 1], [2, 2, 2]] } }
        ] } }"#;
        assert!(SceneFile::from_json(text).is_err());
    }

    #[test]
    fn test_shapes_are_normalized_on_load() {
        let text = r#"{ "scene": { "objects": [
            { "shape": { "type": "sphere", "center": [0, 0, 0], "radius": -1 } },
            { "shape": { "type": "box", "center": [0, 0, 0], "half_extents": [-1, 2, -3] } }
        ] } }"#;
        let file = SceneFile::from_json(text).unwrap();
        let objects = file.scene.objects();

        match objects[0].shape {
            Shape::Sphere(sphere) => assert_eq!(sphere.radius(), 0.0),
            other => panic!("expected sphere, got {other:?}"),
        }
        match objects[1].shape {
            Shape::Cuboid(cuboid) => assert_eq!(cuboid.half_extents(), Vec3::new(1.0, 2.0, 3.0)),
            other => panic!("expected box, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_material_is_rejected() {
        let text = r#"{ "scene": { "objects": [
            { "shape": { "type": "sphere", "center": [0, 0, 0], "radius": 1 },
              "material": { "specular": 0.0, "shininess": -2.0 } }
        ] } }"#;
        let err = SceneFile::from_json(text).unwrap_err();
        assert!(err.to_string().contains("shininess"), "{err}");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = SceneFile::from_json("{}").unwrap();
        assert_eq!(file, SceneFile::default());
        assert!(file.scene.is_empty());

        let camera = file.camera.to_camera();
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(camera.fov(), 45.0);
    }

    #[test]
    fn test_args_override_file() {
        let mut file = SceneFile::from_json(ROOM).unwrap();
        let args = Args::parse_from(["prx", "--width", "10", "--fov", "60", "--single-threaded"]);
        file.apply_args(&args);

        assert_eq!((file.camera.width, file.camera.height), (10, 32));
        assert_eq!(file.camera.fov, 60.0);
        assert!(!file.render.parallel);
        assert_eq!(file.render.max_depth, 3);
    }
}
