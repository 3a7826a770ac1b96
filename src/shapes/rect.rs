//! Rectangle in a plane. Before the pose is applied the rect sits at
//! the origin facing +x with its tangent along +z; half-extents span
//! the tangent and bitangent directions.

// crate
use crate::core::geometry::{
    nrm_cross_vec3, nrm_dot_vec3f, vec3_dot_vec3f, Normal3f, Point3f, Ray, Vector3f,
};
use crate::core::interaction::SurfaceInteraction;
use crate::core::pbrt::{Float, SHADOW_EPSILON};
use crate::core::transform::Matrix4x4;
use crate::shapes::{intersect_plane, planar_sample_pdf, ShapeHit};

#[derive(Debug, Clone)]
pub struct Rect {
    pub extend_x: Float,
    pub extend_y: Float,
    dual_face: bool,
    world_position: Point3f,
    world_normal: Normal3f,
    world_tangent: Vector3f,
}

impl Rect {
    pub fn new(extend_x: Float, extend_y: Float) -> Self {
        Rect {
            extend_x,
            extend_y,
            dual_face: false,
            world_position: Point3f::default(),
            world_normal: Normal3f::new(1.0, 0.0, 0.0),
            world_tangent: Vector3f::unit_z(),
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
        self.world_tangent = m.transform_vector(&Vector3f::unit_z());
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
        let along_tangent = vec3_dot_vec3f(&offset, &self.world_tangent);
        let projection = self.world_tangent * along_tangent;
        let x = along_tangent.abs();
        let y = (offset - projection).length();
        if x > self.extend_x || y > self.extend_y {
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
        4.0 as Float * self.extend_x * self.extend_y
    }
    pub fn sample_random_point(&self, u: [Float; 3]) -> Point3f {
        let bitangent = nrm_cross_vec3(&self.world_normal, &self.world_tangent);
        let e1 = (2.0 as Float * u[1] - 1.0) * self.extend_x;
        let e2 = (2.0 as Float * u[2] - 1.0) * self.extend_y;
        self.world_position + self.world_tangent * e1 + bitangent * e2
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::radians;
    use crate::core::transform::Quaternion;

    /// Rect at *z*, rotated to face -z (toward the origin).
    fn facing_rect(z: Float, ex: Float, ey: Float) -> Rect {
        let mut rect = Rect::new(ex, ey);
        let m = Matrix4x4::translate_rotate(
            &Vector3f::new(0.0, 0.0, z),
            &Quaternion::rotate_y(radians(90.0)),
        );
        rect.update_world_transform(&m);
        rect
    }

    #[test]
    fn front_hit_inside_the_extents() {
        let rect = facing_rect(5.0, 2.0, 1.0);
        let ray = Ray::new(Point3f::default(), Vector3f::unit_z());
        let hit = rect.intersect_with_ray(&ray, SHADOW_EPSILON).unwrap();
        assert!(hit.is_on_outer_surface);
        assert!((hit.t - 5.0).abs() < 1e-9);
        assert!((Vector3f::from(hit.n) - -Vector3f::unit_z()).length() < 1e-9);
    }

    #[test]
    fn hits_outside_the_extents_are_rejected() {
        let rect = facing_rect(5.0, 2.0, 1.0);
        let ray = Ray::from_to(Point3f::default(), Point3f::new(2.5, 0.0, 5.0));
        assert!(rect.intersect_with_ray(&ray, SHADOW_EPSILON).is_none());
        let ray = Ray::from_to(Point3f::default(), Point3f::new(0.0, 1.5, 5.0));
        assert!(rect.intersect_with_ray(&ray, SHADOW_EPSILON).is_none());
    }

    #[test]
    fn back_side_needs_the_dual_face_flag()  {
        let mut rect = facing_rect(-5.0, 2.0, 2.0);
        // ray leaves the origin away from the rect's facing direction
        let ray = Ray::new(Point3f::default(), -Vector3f::unit_z());
        assert!(rect.intersect_with_ray(&ray, SHADOW_EPSILON).is_none());
        rect.set_dual_face(true);
        let hit = rect.intersect_with_ray(&ray, SHADOW_EPSILON).unwrap();
        assert!(!hit.is_on_outer_surface);
        // returned normal is flipped toward the ray
        assert!((Vector3f::from(hit.n) - Vector3f::unit_z()).length() < 1e-9);
    }

    #[test]
    fn sampled_points_cover_the_rect() {
        let rect = facing_rect(5.0, 2.0, 1.0);
        for &(u1, u2) in &[(0.0, 0.0), (1.0, 1.0), (0.5, 0.5), (0.25, 0.9)] {
            let p = rect.sample_random_point([0.0, u1, u2]);
            assert!((p.z - 5.0).abs() < 1e-9);
            assert!(p.x.abs() <= 2.0 + 1e-9 && p.y.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn solid_angle_pdf_matches_the_area_form() {
        let rect = facing_rect(10.0, 15.0, 15.0);
        let ray = Ray::new(Point3f::default(), Vector3f::unit_z());
        let si = SurfaceInteraction {
            object: 0,
            is_on_outer_surface: true,
            n: Normal3f::new(0.0, 0.0, -1.0),
            t_hit: 10.0,
        };
        let pdf = rect.sample_pdf(&si, &ray);
        // t^2 / (area * cos), head-on so cos = 1
        let expected = 100.0 / (4.0 * 15.0 * 15.0);
        assert!((pdf - expected).abs() < 1e-9);
    }

    #[test]
    fn escape_ray_from_sampled_point_leaves_the_plane() {
        let rect = facing_rect(5.0, 2.0, 1.0);
        let p = rect.sample_random_point([0.0, 0.3, 0.8]);
        let ray = Ray::new(p, -Vector3f::unit_z());
        assert!(rect.intersect_with_ray(&ray, SHADOW_EPSILON).is_none());
    }
}
