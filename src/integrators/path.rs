//! Path tracing with next-event estimation. Each bounce combines a
//! direct-light sample and a BSDF sample with power-heuristic weights;
//! specular bounces skip the light sample because the near-delta lobe
//! concentrates all weight on the reflection direction, where area
//! sampling cannot compete.

// others
use num::{One, Zero};
// crate
use crate::core::geometry::{nrm_dot_vec3f, vec3_coordinate_system, Ray, Vector3f};
use crate::core::interaction::SurfaceInteraction;
use crate::core::pbrt::{Float, SHADOW_EPSILON};
use crate::core::reflection::BxdfType;
use crate::core::rng::Rng;
use crate::core::sampling::power_heuristic;
use crate::core::scene::Scene;
use crate::core::spectrum::Spectrum;

const MAX_BOUNCES: u32 = 10;

pub struct PathIntegrator {
    pub rr_enabled: bool,
    rng: Rng,
}

impl PathIntegrator {
    pub fn new() -> Self {
        PathIntegrator {
            rr_enabled: true,
            rng: Rng::new(),
        }
    }
    pub fn from_seed_u64(seed: u64) -> Self {
        PathIntegrator {
            rr_enabled: true,
            rng: Rng::from_seed_u64(seed),
        }
    }
    /// Estimate the radiance arriving along *camera_ray*, whose first
    /// intersection has already been found (a miss returns the black
    /// background).
    pub fn li(
        &mut self,
        scene: &Scene,
        camera_ray: &Ray,
        first_hit: Option<SurfaceInteraction>,
    ) -> Spectrum {
        let mut hit = match first_hit {
            Some(record) => record,
            None => return Spectrum::zero(),
        };

        let mut l = Spectrum::zero();
        let mut beta = Spectrum::one();
        let mut ray = *camera_ray;
        let mut was_specular_bounce = false;
        let mut rr_continue_probability: Float = 1.0;

        for bounce in 0..MAX_BOUNCES {
            if beta.is_black() {
                break;
            }
            let object = scene.object(hit.object);

            // emitters terminate the path; their radiance is counted
            // only where the previous vertex could not have sampled it
            if let Some(ref light) = object.light {
                if bounce == 0 || was_specular_bounce {
                    l += beta * light.le();
                }
                break;
            }
            let material = match object.material {
                Some(ref material) => material,
                None => break,
            };

            let u = [
                self.rng.uniform_float(),
                self.rng.uniform_float(),
                self.rng.uniform_float(),
            ];
            let n = hit.n;
            let wo = -ray.d;
            let mut tangent = Vector3f::default();
            let mut bitangent = Vector3f::default();
            vec3_coordinate_system(&Vector3f::from(n), &mut tangent, &mut bitangent);
            let component = material.get_component_by_u(u[0]);
            let biased_distance = hit.t_hit.max(0.0 as Float);
            let p = ray.position(biased_distance);

            // next-event estimation
            if !was_specular_bounce {
                if let Some(light_index) = scene.uniform_sample_light(u[0]) {
                    if light_index != hit.object {
                        let light_object = scene.object(light_index);
                        let light_point = light_object.shape.sample_random_point(u);
                        let light_ray = Ray::from_to(p, light_point);
                        let wi = light_ray.d;
                        if let Some(light_si) = scene.intersect(&light_ray, None, SHADOW_EPSILON) {
                            let cos_theta_prime = nrm_dot_vec3f(&light_si.n, &-wi);
                            let visible = light_si.object == light_index
                                && (cos_theta_prime > SHADOW_EPSILON
                                    || (cos_theta_prime < -SHADOW_EPSILON
                                        && light_object.shape.is_dual_face()));
                            if visible {
                                let pdf_light = light_object.shape.sample_pdf(&light_si, &light_ray)
                                    / scene.light_count() as Float;
                                if pdf_light > 0.0 as Float {
                                    let pdf_bsdf = material.sample_pdf(&n, &tangent, &wo, &wi);
                                    let weight = power_heuristic(pdf_light, pdf_bsdf);
                                    let f = material.sample_f(&n, &tangent, &wo, &wi);
                                    if let Some(ref light) = light_object.light {
                                        l += beta * f * light.le() * (weight / pdf_light);
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // BSDF sampling
            let (wi, sample_mask) = component.sample_wi(u, &n, &tangent, &wo);
            let n_dot_l = nrm_dot_vec3f(&n, &wi);
            if n_dot_l <= 0.0 as Float {
                break;
            }
            was_specular_bounce = sample_mask & BxdfType::Reflection as u8 != 0;
            ray = Ray::new(p, wi);
            let pdf_light = scene.sample_light_pdf(&ray);
            let pdf_bsdf = material.sample_pdf(&n, &tangent, &wo, &wi);
            if pdf_bsdf <= 0.0 as Float {
                break;
            }
            let weight = power_heuristic(pdf_bsdf, pdf_light);
            let f = material.sample_f(&n, &tangent, &wo, &wi);
            beta *= f * (weight * component.weight() * n_dot_l / pdf_bsdf);
            debug_assert!(!beta.has_nans(), "beta = {:?}", beta);

            // russian roulette beyond the first few bounces
            if bounce > 3 && self.rr_enabled {
                rr_continue_probability *= 0.95;
                if self.rng.uniform_float() > rr_continue_probability {
                    break;
                }
                beta /= rr_continue_probability;
            }

            hit = match scene.intersect(&ray, None, SHADOW_EPSILON) {
                Some(record) => record,
                None => break,
            };
        }
        l
    }
}

impl Default for PathIntegrator {
    fn default() -> Self {
        PathIntegrator::new()
    }
}
