//! Sphere at the pose origin, intersected in closed form.

// crate
use crate::core::geometry::{nrm_dot_vec3f, vec3_dot_vec3f, Normal3f, Point3f, Ray};
use crate::core::interaction::SurfaceInteraction;
use crate::core::pbrt::{Float, PI, SHADOW_EPSILON};
use crate::core::sampling::uniform_sample_sphere;
use crate::core::transform::Matrix4x4;
use crate::shapes::ShapeHit;

#[derive(Debug, Clone)]
pub struct Sphere {
    pub radius: Float,
    world_center: Point3f,
}

impl Sphere {
    pub fn new(radius: Float) -> Self {
        Sphere {
            radius,
            world_center: Point3f::default(),
        }
    }
    pub fn update_world_transform(&mut self, m: &Matrix4x4) {
        self.world_center = m.transform_point(&Point3f::default());
    }
    pub fn intersect_with_ray(&self, ray: &Ray, error: Float) -> Option<ShapeHit> {
        let oc = ray.o - self.world_center;
        let a = vec3_dot_vec3f(&ray.d, &ray.d);
        let b = 2.0 as Float * vec3_dot_vec3f(&ray.d, &oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let det = b * b - 4.0 as Float * a * c;
        if det <= 0.0 as Float {
            return None;
        }
        let det = det.sqrt();
        let inv_2a = 0.5 as Float / a;
        let t0 = (-b - det) * inv_2a;
        let t1 = (-b + det) * inv_2a;
        if t1 < error {
            return None;
        }
        // smallest positive root inside the sphere means the ray
        // started inside; take the exit instead
        let (t, is_on_outer_surface) = if t0 < error { (t1, false) } else { (t0, true) };
        let n = ((ray.position(t) - self.world_center) / self.radius).normalize();
        Some(ShapeHit {
            is_on_outer_surface,
            n: Normal3f::from(if is_on_outer_surface { n } else { -n }),
            t,
        })
    }
    pub fn area(&self) -> Float {
        4.0 as Float * PI * self.radius * self.radius
    }
    pub fn sample_random_point(&self, u: [Float; 3]) -> Point3f {
        self.world_center + uniform_sample_sphere(u[1], u[2]) * self.radius
    }
    pub fn sample_pdf(&self, si: &SurfaceInteraction, ray: &Ray) -> Float {
        let cos_theta_prime = nrm_dot_vec3f(&si.n, &-ray.d);
        if cos_theta_prime <= SHADOW_EPSILON {
            return 0.0 as Float;
        }
        si.t_hit * si.t_hit / (self.area() * cos_theta_prime)
    }
}
