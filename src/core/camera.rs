//! Pinhole camera looking down +z from the negative z axis. The image
//! plane is centered at the origin at 0.1 units per pixel; the camera
//! distance follows from the vertical field of view.

// crate
use crate::core::geometry::{Point3f, Ray};
use crate::core::pbrt::{clamp_t, radians, Float};
use crate::core::rng::Rng;

pub const PIXEL_SIZE: Float = 0.1;

#[derive(Debug, Clone)]
pub struct PinholeCamera {
    pub position: Point3f,
    half_width: Float,
    half_height: Float,
}

impl PinholeCamera {
    /// *vertical_fov* in degrees, clamped to [1, 179].
    pub fn new(vertical_fov: Float, canvas_width: usize, canvas_height: usize) -> Self {
        let fov = clamp_t(vertical_fov, 1.0, 179.0);
        let half_fov_tangent = (radians(fov) * 0.5).tan();
        let half_width = canvas_width as Float * 0.5 * PIXEL_SIZE;
        let half_height = canvas_height as Float * 0.5 * PIXEL_SIZE;
        //     <---> (half height)
        //  .  o----. (o = image plane at the origin)
        //  |  |  /   camera sits on the negative z axis where
        //  |  | /    tan(half fov) = half_height / camera_z
        //  .  |/
        // (z) .
        let camera_z = half_height / half_fov_tangent;
        PinholeCamera {
            position: Point3f::new(0.0, 0.0, -camera_z),
            half_width,
            half_height,
        }
    }
    /// Ray through the pixel center, jittered by up to half a pixel on
    /// both axes.
    pub fn generate_ray(&self, col: usize, row: usize, rng: &mut Rng) -> Ray {
        let half_pixel = 0.5 as Float * PIXEL_SIZE;
        let pixel_center_x = col as Float * PIXEL_SIZE + half_pixel - self.half_width;
        let pixel_center_y = row as Float * PIXEL_SIZE + half_pixel - self.half_height;
        let jitter_x = rng.uniform_in_range(1.0) * half_pixel;
        let jitter_y = rng.uniform_in_range(1.0) * half_pixel;
        let target = Point3f::new(pixel_center_x + jitter_x, pixel_center_y + jitter_y, 0.0);
        Ray::new(self.position, target - self.position)
    }
    /// Unjittered ray through an exact pixel center.
    pub fn generate_centered_ray(&self, col: usize, row: usize) -> Ray {
        let half_pixel = 0.5 as Float * PIXEL_SIZE;
        let target = Point3f::new(
            col as Float * PIXEL_SIZE + half_pixel - self.half_width,
            row as Float * PIXEL_SIZE + half_pixel - self.half_height,
            0.0,
        );
        Ray::new(self.position, target - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Vector3f;

    #[test]
    fn fov_is_clamped() {
        let too_wide = PinholeCamera::new(400.0, 100, 100);
        let max = PinholeCamera::new(179.0, 100, 100);
        assert!((too_wide.position.z - max.position.z).abs() < 1e-12);
    }

    #[test]
    fn camera_distance_follows_the_fov() {
        // 90 degrees: distance equals the half height
        let camera = PinholeCamera::new(90.0, 100, 100);
        assert!((camera.position.z + 5.0).abs() < 1e-9);
    }

    #[test]
    fn center_pixel_ray_runs_along_z() {
        let camera = PinholeCamera::new(60.0, 101, 101);
        let ray = camera.generate_centered_ray(50, 50);
        assert!((ray.d - Vector3f::unit_z()).length() < 1e-9);
    }

    #[test]
    fn jitter_stays_within_the_pixel() {
        let camera = PinholeCamera::new(60.0, 100, 100);
        let mut rng = Rng::from_seed_u64(31);
        let centered = camera.generate_centered_ray(10, 20);
        let t = -camera.position.z;
        for _ in 0..200 {
            let ray = camera.generate_ray(10, 20, &mut rng);
            let p = ray.position(t / ray.d.z);
            let c = centered.position(t / centered.d.z);
            assert!((p.x - c.x).abs() <= 0.5 * PIXEL_SIZE + 1e-9);
            assert!((p.y - c.y).abs() <= 0.5 * PIXEL_SIZE + 1e-9);
        }
    }
}
