//! Scene container: owned objects and lights.

use prx_math::{Interval, Ray};
use serde::{Deserialize, Serialize};

use crate::intersect::{Intersect, IntersectInfo};
use crate::{Light, Object};

/// Objects and lights to render. Read-only while a render is running.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    objects: Vec<Object>,
    #[serde(default)]
    lights: Vec<Light>,
}

/// The nearest object along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Index of the object in the scene
    pub index: usize,
    pub object: &'a Object,
    pub info: IntersectInfo,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: impl Into<Light>) {
        self.lights.push(light.into());
    }

    /// Builder form of [`Scene::add_object`].
    pub fn with_object(mut self, object: Object) -> Self {
        self.add_object(object);
        self
    }

    /// Builder form of [`Scene::add_light`].
    pub fn with_light(mut self, light: impl Into<Light>) -> Self {
        self.add_light(light);
        self
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Scan every object and return the closest hit inside `ray_t`.
    ///
    /// On equal distances the object added first wins.
    pub fn nearest_hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let mut nearest: Option<(usize, IntersectInfo)> = None;
        let mut closest_so_far = ray_t.max;

        for (index, object) in self.objects.iter().enumerate() {
            let mut info = IntersectInfo::default();
            if !object.intersects(ray, ray_t.with_max(closest_so_far), &mut info) {
                continue;
            }
            if nearest.is_none() || info.t < closest_so_far {
                closest_so_far = info.t;
                nearest = Some((index, info));
            }
        }

        nearest.map(|(index, info)| Hit {
            index,
            object: &self.objects[index],
            info,
        })
    }

    /// True if any object other than `skip` intersects the ray inside `ray_t`.
    pub fn occluded(&self, ray: &Ray, ray_t: Interval, skip: usize) -> bool {
        let mut info = IntersectInfo::default();
        self.objects
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != skip)
            .any(|(_, object)| object.intersects(ray, ray_t, &mut info))
    }
}
