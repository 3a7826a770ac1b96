//! Disk in a plane, facing +x before the pose is applied.

// crate
use crate::core::geometry::{
    nrm_dot_vec3f, vec3_coordinate_system, Normal3f, Point3f, Ray, Vector3f,
};
use crate::core::interaction::SurfaceInteraction;
use crate::core::pbrt::{Float, PI, SHADOW_EPSILON};
use crate::core::sampling::concentric_sample_disk;
use crate::core::transform::Matrix4x4;
use crate::shapes::{intersect_plane, planar_sample_pdf, ShapeHit};

#[derive(Debug, Clone)]
pub struct Disk {
    pub radius: Float,
    dual_face: bool,
    world_position: Point3f,
    world_normal: Normal3f,
}

impl Disk {
    pub fn new(radius: Float) -> Self {
        Disk {
            radius,
            dual_face: false,
            world_position: Point3f::default(),
            world_normal: Normal3f::new(1.0, 0.0, 0.0),
        }
    }
    pub fn set_dual_face(&mut self, dual: bool) {
        self.dual_face = dual;
    }
    pub fn is_dual_face(&self) -> bool {
        self.dual_face
    }
    pub fn update_world_transform(&mut self, m: &Matrix4x4) {
        self.world_position = m.transform_point(&Point3f::default());
        self.world_normal = Normal3f::from(m.transform_vector(&Vector3f::unit_x()));
    }
    pub fn intersect_with_ray(&self, ray: &Ray, error: Float) -> Option<ShapeHit> {
        let t = intersect_plane(
            ray,
            &self.world_position,
            &self.world_normal,
            self.dual_face,
            error,
        )?;
        let offset = ray.position(t) - self.world_position;
        if offset.length_squared() > self.radius * self.radius {
            return None;
        }
        let is_on_outer_surface = nrm_dot_vec3f(&self.world_normal, &ray.d) < 0.0 as Float;
        Some(ShapeHit {
            is_on_outer_surface,
            n: if is_on_outer_surface {
                self.world_normal
            } else {
                -self.world_normal
            },
            t,
        })
    }
    pub fn area(&self) -> Float {
        PI * self.radius * self.radius
    }
    pub fn sample_random_point(&self, u: [Float; 3]) -> Point3f {
        let n = Vector3f::from(self.world_normal);
        let mut tangent = Vector3f::default();
        let mut bitangent = Vector3f::default();
        vec3_coordinate_system(&n, &mut tangent, &mut bitangent);
        let d = concentric_sample_disk(u[1], u[2]);
        self.world_position + tangent * (d.x * self.radius) + bitangent * (d.y * self.radius)
    }
    pub fn sample_pdf(&self, si: &SurfaceInteraction, ray: &Ray) -> Float {
        planar_sample_pdf(
            &self.world_normal,
            self.dual_face,
            self.area(),
            si,
            ray,
            SHADOW_EPSILON,
        )
    }
}
