//! Oriented box intersected with slab tests against its three world
//! axes. Both entry and exit are tracked so that rays starting inside
//! report the inner surface with an inward normal.

// crate
use crate::core::geometry::{nrm_dot_vec3f, vec3_dot_vec3f, Normal3f, Point3f, Ray, Vector3f};
use crate::core::interaction::SurfaceInteraction;
use crate::core::pbrt::{Float, SHADOW_EPSILON};
use crate::core::transform::Matrix4x4;
use crate::shapes::ShapeHit;

#[derive(Debug, Clone)]
pub struct Cube {
    pub extend: Vector3f,
    world_position: Point3f,
    world_axis_x: Vector3f,
    world_axis_y: Vector3f,
    world_axis_z: Vector3f,
}

impl Cube {
    pub fn new(extend_x: Float, extend_y: Float, extend_z: Float) -> Self {
        Cube {
            extend: Vector3f::new(extend_x, extend_y, extend_z),
            world_position: Point3f::default(),
            world_axis_x: Vector3f::unit_x(),
            world_axis_y: Vector3f::unit_y(),
            world_axis_z: Vector3f::unit_z(),
        }
    }
    pub fn update_world_transform(&mut self, m: &Matrix4x4) {
        self.world_position = m.transform_point(&Point3f::default());
        self.world_axis_x = m.transform_vector(&Vector3f::unit_x());
        self.world_axis_y = m.transform_vector(&Vector3f::unit_y());
        self.world_axis_z = m.transform_vector(&Vector3f::unit_z());
    }
    fn axes(&self) -> [Vector3f; 3] {
        [self.world_axis_x, self.world_axis_y, self.world_axis_z]
    }
    fn extents(&self) -> [Float; 3] {
        [self.extend.x, self.extend.y, self.extend.z]
    }
    pub fn intersect_with_ray(&self, ray: &Ray, error: Float) -> Option<ShapeHit> {
        let axes = self.axes();
        let extents = self.extents();
        let to_center = self.world_position - ray.o;

        let mut found = false;
        let mut t0 = 0.0 as Float;
        let mut t1 = 0.0 as Float;
        let mut n0 = Vector3f::default();
        let mut n1 = Vector3f::default();
        for i in 0..3 {
            let dir_dot_axis = vec3_dot_vec3f(&ray.d, &axes[i]);
            let oc_dot_axis = vec3_dot_vec3f(&to_center, &axes[i]);
            if dir_dot_axis.abs() < SHADOW_EPSILON {
                // ray parallel to this slab: reject unless the origin
                // lies between the two faces
                if oc_dot_axis.abs() > extents[i] {
                    return None;
                }
                continue;
            }
            let sign = if dir_dot_axis > 0.0 as Float { 1.0 } else { -1.0 };
            let extend_i = sign * extents[i];
            let inv = 1.0 as Float / dir_dot_axis;
            let s0 = (oc_dot_axis - extend_i) * inv;
            let s1 = (oc_dot_axis + extend_i) * inv;
            if !found {
                t0 = s0;
                t1 = s1;
                n0 = -axes[i] * sign;
                n1 = axes[i] * sign;
                found = true;
            } else {
                if s0 > t0 {
                    t0 = s0;
                    n0 = -axes[i] * sign;
                }
                if s1 < t1 {
                    t1 = s1;
                    n1 = axes[i] * sign;
                }
                if t0 > t1 {
                    return None;
                }
            }
        }
        if !found || t1 < error {
            return None;
        }
        if t0 < error {
            // started inside; surface seen from within, normal flipped
            Some(ShapeHit {
                is_on_outer_surface: false,
                n: Normal3f::from(-n1),
                t: t1,
            })
        } else {
            Some(ShapeHit {
                is_on_outer_surface: true,
                n: Normal3f::from(n0),
                t: t0,
            })
        }
    }
    pub fn area(&self) -> Float {
        8.0 as Float
            * (self.extend.x * self.extend.y
                + self.extend.y * self.extend.z
                + self.extend.z * self.extend.x)
    }
    pub fn sample_random_point(&self, u: [Float; 3]) -> Point3f {
        let axes = self.axes();
        let extents = self.extents();
        // pick a face pair by its share of the surface area, the sign
        // by the leftover of the draw
        let face_areas = [
            extents[1] * extents[2],
            extents[2] * extents[0],
            extents[0] * extents[1],
        ];
        let total = face_areas[0] + face_areas[1] + face_areas[2];
        let pick = u[0] * total;
        let axis = if pick < face_areas[0] {
            0
        } else if pick < face_areas[0] + face_areas[1] {
            1
        } else {
            2
        };
        let fraction = (pick
            - match axis {
                0 => 0.0,
                1 => face_areas[0],
                _ => face_areas[0] + face_areas[1],
            })
            / face_areas[axis];
        let sign = if fraction < 0.5 { 1.0 } else { -1.0 };
        let (u_axis, v_axis) = ((axis + 1) % 3, (axis + 2) % 3);
        self.world_position
            + axes[axis] * (sign * extents[axis])
            + axes[u_axis] * ((2.0 as Float * u[1] - 1.0) * extents[u_axis])
            + axes[v_axis] * ((2.0 as Float * u[2] - 1.0) * extents[v_axis])
    }
    pub fn sample_pdf(&self, si: &SurfaceInteraction, ray: &Ray) -> Float {
        let cos_theta_prime = nrm_dot_vec3f(&si.n, &-ray.d);
        if cos_theta_prime <= SHADOW_EPSILON {
            return 0.0 as Float;
        }
        si.t_hit * si.t_hit / (self.area() * cos_theta_prime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::radians;
    use crate::core::transform::Quaternion;

    fn unit_cube_at(z: Float) -> Cube {
        let mut cube = Cube::new(1.0, 1.0, 1.0);
        let m = Matrix4x4::translate_rotate(
            &Vector3f::new(0.0, 0.0, z),
            &Quaternion::identity(),
        );
        cube.update_world_transform(&m);
        cube
    }

    #[test]
    fn entry_face_and_normal() {
        let cube = unit_cube_at(5.0);
        let ray = Ray::new(Point3f::default(), Vector3f::unit_z());
        let hit = cube.intersect_with_ray(&ray, SHADOW_EPSILON).unwrap();
        assert!(hit.is_on_outer_surface);
        assert!((hit.t - 4.0).abs() < 1e-9);
        assert!((Vector3f::from(hit.n) - -Vector3f::unit_z()).length() < 1e-9);
    }

    #[test]
    fn interior_ray_sees_the_exit_face_inward() {
        let cube = unit_cube_at(0.0);
        let ray = Ray::new(Point3f::default(), Vector3f::unit_x());
        let hit = cube.intersect_with_ray(&ray, SHADOW_EPSILON).unwrap();
        assert!(!hit.is_on_outer_surface);
        assert!((hit.t - 1.0).abs() < 1e-9);
        assert!((Vector3f::from(hit.n) - -Vector3f::unit_x()).length() < 1e-9);
    }

    #[test]
    fn rotated_cube_still_intersects() {
        let mut cube = Cube::new(1.0, 2.0, 1.0);
        let m = Matrix4x4::translate_rotate(
            &Vector3f::new(0.0, 0.0, 6.0),
            &Quaternion::rotate_y(radians(45.0)),
        );
        cube.update_world_transform(&m);
        let ray = Ray::new(Point3f::default(), Vector3f::unit_z());
        let hit = cube.intersect_with_ray(&ray, SHADOW_EPSILON).unwrap();
        assert!(hit.is_on_outer_surface);
        // corner-on: the near face is sqrt(2) in front of the center
        assert!((hit.t - (6.0 - (2.0 as Float).sqrt())).abs() < 1e-9);
    }

    #[test]
    fn parallel_ray_outside_the_slab_misses() {
        let cube = unit_cube_at(5.0);
        let ray = Ray::new(Point3f::new(0.0, 2.0, 0.0), Vector3f::unit_z());
        assert!(cube.intersect_with_ray(&ray, SHADOW_EPSILON).is_none());
    }

    #[test]
    fn sampled_points_lie_on_the_surface() {
        let cube = unit_cube_at(0.0);
        for &(u0, u1, u2) in &[(0.05, 0.3, 0.7), (0.4, 0.9, 0.1), (0.99, 0.5, 0.5)] {
            let p = cube.sample_random_point([u0, u1, u2]);
            let max_coord = p.x.abs().max(p.y.abs()).max(p.z.abs());
            assert!((max_coord - 1.0).abs() < 1e-9, "p = {:?}", p);
        }
    }

    #[test]
    fn escape_ray_from_sampled_point_leaves_the_surface() {
        let cube = unit_cube_at(0.0);
        let p = cube.sample_random_point([0.2, 0.6, 0.4]);
        // sample-side normal of an axis-aligned unit cube
        let n = if (p.x.abs() - 1.0).abs() < 1e-9 {
            Vector3f::new(p.x.signum(), 0.0, 0.0)
        } else if (p.y.abs() - 1.0).abs() < 1e-9 {
            Vector3f::new(0.0, p.y.signum(), 0.0)
        } else {
            Vector3f::new(0.0, 0.0, p.z.signum())
        };
        let ray = Ray::new(p, n);
        assert!(cube.intersect_with_ray(&ray, SHADOW_EPSILON).is_none());
    }
}
