//! Built-in scene rendered when no scene file is given.

use prx_math::Vec3;
use prx_renderer::{Color, Material, Object, PointLight, Scene, Sphere};

/// A mirror sphere at the origin ringed by rows of small Phong spheres,
/// lit by four colored lights in front of it.
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_object(Object::new(Sphere::new(Vec3::ZERO, 0.75), Material::mirror()));

    // Columns around the center, three deep
    let columns = [
        (-2.0, 0.0),
        (2.0, 0.0),
        (-2.0, 2.0),
        (2.0, 2.0),
        (-2.0, -2.0),
        (2.0, -2.0),
        (0.0, 2.0),
        (0.0, -2.0),
    ];
    for (x, y) in columns {
        for z in [-4.0, -3.0, -2.0] {
            scene.add_object(small_sphere(Vec3::new(x, y, z)));
        }
    }

    // The four side columns run up to the camera plane of the center sphere
    for (x, y) in [(-2.0, 0.0), (2.0, 0.0), (0.0, 2.0), (0.0, -2.0)] {
        for z in [-1.0, 0.0] {
            scene.add_object(small_sphere(Vec3::new(x, y, z)));
        }
    }

    let lights = [
        (Vec3::new(2.5, 1.5, 2.0), Color::new(1.0, 0.0, 0.0)),
        (Vec3::new(-2.5, 1.5, 2.0), Color::new(0.0, 0.0, 1.0)),
        (Vec3::new(2.5, -1.5, 2.0), Color::new(0.0, 1.0, 0.0)),
        (Vec3::new(-2.5, -1.5, 2.0), Color::new(1.0, 1.0, 0.0)),
    ];
    for (position, color) in lights {
        scene.add_light(PointLight::new(position, color, 0.8));
    }

    scene
}

fn small_sphere(center: Vec3) -> Object {
    Object::new(Sphere::new(center, 0.5), Material::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prx_renderer::{Camera, RenderConfig};

    #[test]
    fn test_demo_scene_contents() {
        let scene = demo_scene();
        assert_eq!(scene.len(), 33);
        assert_eq!(scene.lights().len(), 4);
    }

    #[test]
    fn test_demo_scene_renders() {
        let camera = Camera::new().with_resolution(32, 24);
        let image = camera.render(&demo_scene(), &RenderConfig::default()).unwrap();

        assert!(image.pixels().iter().all(|c| c.is_finite()));
        assert!(image.pixels().iter().any(|c| c.length() > 0.0));
    }
}
