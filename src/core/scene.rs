//! Scene objects and the scene itself. Objects pair a posed shape with
//! an optional material and an optional emitter; the scene owns every
//! object and keeps an index list of the emissive ones. Intersection is
//! a linear scan over all objects.

// others
use rayon::prelude::*;
// crate
use crate::core::geometry::{Ray, Vector3f};
use crate::core::interaction::SurfaceInteraction;
use crate::core::material::Material;
use crate::core::pbrt::{Float, SHADOW_EPSILON};
use crate::core::transform::{Matrix4x4, Quaternion};
use crate::lights::DiffuseAreaLight;
use crate::shapes::Shape;

/// Translation and rotation with the derived world matrix.
#[derive(Debug, Clone)]
pub struct ScenePose {
    pub translate: Vector3f,
    pub rotation: Quaternion,
    pub to_world: Matrix4x4,
}

impl ScenePose {
    pub fn new() -> Self {
        ScenePose {
            translate: Vector3f::default(),
            rotation: Quaternion::identity(),
            to_world: Matrix4x4::identity(),
        }
    }
    pub fn update_world_transform(&mut self) {
        self.to_world = Matrix4x4::translate_rotate(&self.translate, &self.rotation);
    }
}

impl Default for ScenePose {
    fn default() -> Self {
        ScenePose::new()
    }
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    pub pose: ScenePose,
    pub shape: Shape,
    pub material: Option<Material>,
    pub light: Option<DiffuseAreaLight>,
}

impl SceneObject {
    pub fn new(shape: Shape) -> Self {
        SceneObject {
            pose: ScenePose::new(),
            shape,
            material: None,
            light: None,
        }
    }
    pub fn set_translate(&mut self, x: Float, y: Float, z: Float) {
        self.pose.translate = Vector3f::new(x, y, z);
    }
    pub fn set_rotation(&mut self, q: Quaternion) {
        self.pose.rotation = q;
    }
    pub fn update_world_transform(&mut self) {
        self.pose.update_world_transform();
        self.shape.update_world_transform(&self.pose.to_world);
    }
}

#[derive(Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }
    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }
    /// Refresh every world transform and collect the emissive list.
    /// Call once after construction; the scene is read-only afterwards.
    pub fn build(&mut self) {
        self.objects
            .par_iter_mut()
            .for_each(|object| object.update_world_transform());
        self.lights = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.light.is_some())
            .map(|(index, _)| index)
            .collect();
    }
    pub fn object(&self, index: usize) -> &SceneObject {
        &self.objects[index]
    }
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
    /// Nearest hit with `t >= epsilon`, optionally skipping one object.
    pub fn intersect(
        &self,
        ray: &Ray,
        exclude: Option<usize>,
        epsilon: Float,
    ) -> Option<SurfaceInteraction> {
        let mut result: Option<SurfaceInteraction> = None;
        for (index, object) in self.objects.iter().enumerate() {
            if exclude == Some(index) {
                continue;
            }
            if let Some(hit) = object.shape.intersect_with_ray(ray, epsilon) {
                let nearer = match result {
                    Some(ref best) => hit.t < best.t_hit,
                    None => true,
                };
                if nearer {
                    result = Some(SurfaceInteraction {
                        object: index,
                        is_on_outer_surface: hit.is_on_outer_surface,
                        n: hit.n,
                        t_hit: hit.t,
                    });
                }
            }
        }
        result
    }
    /// Uniform discrete selection over the emissive objects.
    pub fn uniform_sample_light(&self, u: Float) -> Option<usize> {
        if self.lights.is_empty() {
            return None;
        }
        let n = self.lights.len();
        let index = ((u * n as Float) as usize).min(n - 1);
        Some(self.lights[index])
    }
    /// Solid-angle pdf of hitting an emitter along *ray* under uniform
    /// light selection; zero when no emitter is hit.
    pub fn sample_light_pdf(&self, ray: &Ray) -> Float {
        let mut nearest: Option<(usize, SurfaceInteraction)> = None;
        for &light_index in &self.lights {
            let object = &self.objects[light_index];
            if let Some(hit) = object.shape.intersect_with_ray(ray, SHADOW_EPSILON) {
                let nearer = match nearest {
                    Some((_, ref best)) => hit.t < best.t_hit,
                    None => true,
                };
                if nearer {
                    nearest = Some((
                        light_index,
                        SurfaceInteraction {
                            object: light_index,
                            is_on_outer_surface: hit.is_on_outer_surface,
                            n: hit.n,
                            t_hit: hit.t,
                        },
                    ));
                }
            }
        }
        match nearest {
            Some((light_index, si)) => {
                self.objects[light_index].shape.sample_pdf(&si, ray) / self.lights.len() as Float
            }
            None => 0.0 as Float,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Point3f;
    use crate::core::pbrt::radians;
    use crate::core::spectrum::Spectrum;
    use crate::materials::matte::create_matte;
    use crate::shapes::{Rect, Sphere};

    /// Sphere at z = 10 and an emissive rect at z = 20 facing the
    /// origin.
    fn two_object_scene() -> Scene {
        let mut scene = Scene::new();
        let mut sphere = SceneObject::new(Shape::Sphere(Sphere::new(2.0)));
        sphere.set_translate(0.0, 0.0, 10.0);
        sphere.material = Some(create_matte(Spectrum::new(0.5)));
        scene.add_object(sphere);
        let mut light = SceneObject::new(Shape::Rect(Rect::new(5.0, 5.0)));
        light.set_translate(0.0, 0.0, 20.0);
        light.set_rotation(Quaternion::rotate_y(radians(90.0)));
        light.material = Some(create_matte(Spectrum::new(0.0)));
        light.light = Some(DiffuseAreaLight::white(1.0));
        scene.add_object(light);
        scene.build();
        scene
    }

    #[test]
    fn nearest_object_wins() {
        let scene = two_object_scene();
        let ray = Ray::new(Point3f::default(), Vector3f::unit_z());
        let si = scene.intersect(&ray, None, SHADOW_EPSILON).unwrap();
        assert_eq!(si.object, 0);
        assert!((si.t_hit - 8.0).abs() < 1e-9);
    }

    #[test]
    fn exclusion_skips_an_object() {
        let scene = two_object_scene();
        let ray = Ray::new(Point3f::default(), Vector3f::unit_z());
        let si = scene.intersect(&ray, Some(0), SHADOW_EPSILON).unwrap();
        assert_eq!(si.object, 1);
        assert!((si.t_hit - 20.0).abs() < 1e-9);
    }

    #[test]
    fn emissive_list_is_collected_at_build() {
        let scene = two_object_scene();
        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.uniform_sample_light(0.0), Some(1));
        assert_eq!(scene.uniform_sample_light(0.999), Some(1));
        let empty = Scene::new();
        assert_eq!(empty.uniform_sample_light(0.5), None);
    }

    #[test]
    fn light_pdf_scans_emitters_only() {
        let scene = two_object_scene();
        // straight through the sphere toward the light: the light is
        // still the nearest *emitter*, so the pdf is its area form
        let ray = Ray::new(Point3f::default(), Vector3f::unit_z());
        let pdf = scene.sample_light_pdf(&ray);
        let expected = 400.0 / (4.0 * 5.0 * 5.0);
        assert!((pdf - expected).abs() < 1e-9);
        // away from every emitter the pdf vanishes
        let ray = Ray::new(Point3f::default(), -Vector3f::unit_z());
        assert_eq!(scene.sample_light_pdf(&ray), 0.0);
    }
}
