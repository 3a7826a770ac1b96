//! Progressive render driver. A pass traces one jittered camera ray
//! per pixel; pixels are independent, so passes fan out over the rayon
//! pool with a sampler and an integrator per worker. The scene is
//! read-only once built and every pixel accumulator is owned by exactly
//! one task, so a pass never contends.

// others
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
// crate
use crate::core::camera::PinholeCamera;
use crate::core::film::Film;
use crate::core::pbrt::{Float, SHADOW_EPSILON};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::integrators::PathIntegrator;

#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub samples_per_pixel: u32,
    pub vertical_fov: Float,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: 480,
            height: 360,
            samples_per_pixel: 64,
            vertical_fov: 50.0,
        }
    }
}

pub struct Renderer {
    pub scene: Scene,
    pub camera: PinholeCamera,
    pub film: Film,
}

impl Renderer {
    pub fn new(scene: Scene, camera: PinholeCamera, film: Film) -> Self {
        Renderer {
            scene,
            camera,
            film,
        }
    }
    /// Accumulate one sample into every pixel.
    pub fn render_pass(&mut self) {
        let scene = &self.scene;
        let camera = &self.camera;
        let width = self.film.width;
        self.film
            .pixels_mut()
            .par_iter_mut()
            .enumerate()
            .for_each_init(
                || (Rng::new(), PathIntegrator::new()),
                |(rng, integrator), (index, pixel)| {
                    let col = index % width;
                    let row = index / width;
                    let ray = camera.generate_ray(col, row, rng);
                    let first_hit = scene.intersect(&ray, None, SHADOW_EPSILON);
                    pixel.add(integrator.li(scene, &ray, first_hit));
                },
            );
        self.film.increase_sample_count();
    }
    /// Run *passes* full passes. Cancellation is cooperative between
    /// passes; an in-flight pass always completes.
    pub fn render(&mut self, passes: u32) {
        for _ in 0..passes {
            self.render_pass();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::SceneObject;
    use crate::core::spectrum::Spectrum;
    use crate::core::transform::Quaternion;
    use crate::lights::DiffuseAreaLight;
    use crate::materials::matte::create_matte;
    use crate::core::pbrt::radians;
    use crate::shapes::{Rect, Shape};

    /// A big emitter filling the whole view.
    fn emitter_scene() -> Scene {
        let mut scene = Scene::new();
        let mut light = SceneObject::new(Shape::Rect(Rect::new(100.0, 100.0)));
        light.set_translate(0.0, 0.0, 10.0);
        light.set_rotation(Quaternion::rotate_y(radians(90.0)));
        light.material = Some(create_matte(Spectrum::new(0.0)));
        light.light = Some(DiffuseAreaLight::new(Spectrum::rgb(0.25, 0.5, 0.75)));
        scene.add_object(light);
        scene.build();
        scene
    }

    #[test]
    fn passes_accumulate_exactly_one_sample_per_pixel() {
        let scene = emitter_scene();
        let camera = PinholeCamera::new(50.0, 8, 6);
        let film = Film::new(8, 6);
        let mut renderer = Renderer::new(scene, camera, film);
        renderer.render(3);
        assert_eq!(renderer.film.sample_count(), 3);
        for pixel in renderer.film.pixels() {
            assert_eq!(pixel.count, 3);
            // direct view of the emitter: every sample is exactly Le
            let resolved = pixel.resolve();
            assert!((resolved[0] - 0.25).abs() < 1e-12);
            assert!((resolved[2] - 0.75).abs() < 1e-12);
        }
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = RenderSettings::default();
        let text = serde_json::to_string(&settings).unwrap();
        let back: RenderSettings = serde_json::from_str(&text).unwrap();
        assert_eq!(back.width, settings.width);
        assert_eq!(back.samples_per_pixel, settings.samples_per_pixel);
    }
}
