//! Draw random directions from a chosen probability distribution.

// crate
use crate::core::geometry::{Normal3f, Point2f, ShadingFrame, Vector3f};
use crate::core::pbrt::{saturate, Float, INV_2_PI, INV_PI, PI, TWO_PI};

/// Cosine-weighted direction on the hemisphere around *n*; *t* supplies
/// the tangent of the frame. PDF is `max(n . w, 0) / pi`.
pub fn cosine_sample_hemisphere(u1: Float, u2: Float, n: &Normal3f, t: &Vector3f) -> Vector3f {
    let cos_theta = u1.sqrt();
    let sin_theta = (1.0 as Float - u1).sqrt();
    let phi = TWO_PI * u2;
    ShadingFrame::new(n, t).local_to_world(&Vector3f::new(
        sin_theta * phi.cos(),
        sin_theta * phi.sin(),
        cos_theta,
    ))
}

pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    saturate(cos_theta) * INV_PI
}

/// Uniform direction on the hemisphere around *n*. PDF is `1 / (2 pi)`.
pub fn uniform_sample_hemisphere(u1: Float, u2: Float, n: &Normal3f, t: &Vector3f) -> Vector3f {
    let cos_theta = u1;
    let sin_theta = (1.0 as Float - cos_theta * cos_theta).sqrt();
    let phi = TWO_PI * u2;
    ShadingFrame::new(n, t).local_to_world(&Vector3f::new(
        sin_theta * phi.cos(),
        sin_theta * phi.sin(),
        cos_theta,
    ))
}

pub fn uniform_hemisphere_pdf() -> Float {
    INV_2_PI
}

/// Uniform direction on the full unit sphere.
pub fn uniform_sample_sphere(u1: Float, u2: Float) -> Vector3f {
    let z = 1.0 as Float - 2.0 as Float * u1;
    let r = (0.0 as Float).max(1.0 as Float - z * z).sqrt();
    let phi = TWO_PI * u2;
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Uniformly distribute samples over a unit disk (concentric mapping).
pub fn concentric_sample_disk(u1: Float, u2: Float) -> Point2f {
    let ox = 2.0 as Float * u1 - 1.0;
    let oy = 2.0 as Float * u2 - 1.0;
    if ox == 0.0 as Float && oy == 0.0 as Float {
        return Point2f::default();
    }
    let (r, theta) = if ox.abs() > oy.abs() {
        (ox, (PI / 4.0) * (oy / ox))
    } else {
        (oy, (PI / 2.0) - (PI / 4.0) * (ox / oy))
    };
    Point2f {
        x: r * theta.cos(),
        y: r * theta.sin(),
    }
}

/// Power heuristic for one sample from each of two strategies:
/// `a^2 / (a^2 + b^2)`. Weights for swapped arguments sum to one.
pub fn power_heuristic(f_pdf: Float, g_pdf: Float) -> Float {
    (f_pdf * f_pdf) / (f_pdf * f_pdf + g_pdf * g_pdf)
}

pub fn balance_heuristic(f_pdf: Float, g_pdf: Float) -> Float {
    f_pdf / (f_pdf + g_pdf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{nrm_dot_vec3f, vec3_coordinate_system};
    use crate::core::rng::Rng;

    fn frame() -> (Normal3f, Vector3f) {
        let n = Normal3f::from(Vector3f::new(0.3, 0.8, -0.2).normalize());
        let mut t = Vector3f::default();
        let mut b = Vector3f::default();
        vec3_coordinate_system(&Vector3f::from(n), &mut t, &mut b);
        (n, t)
    }

    #[test]
    fn heuristic_weights_sum_to_one() {
        for &(a, b) in &[(0.5, 0.5), (1e-6, 3.0), (42.0, 0.17), (1e8, 1e-8)] {
            let sum = power_heuristic(a, b) + power_heuristic(b, a);
            assert!((sum - 1.0).abs() < 1e-12, "sum = {}", sum);
            assert!((balance_heuristic(a, b) + balance_heuristic(b, a) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn cosine_samples_stay_in_upper_hemisphere() {
        let (n, t) = frame();
        let mut rng = Rng::from_seed_u64(3);
        for _ in 0..1_000 {
            let w = cosine_sample_hemisphere(rng.uniform_float(), rng.uniform_float(), &n, &t);
            assert!((w.length() - 1.0).abs() < 1e-9);
            assert!(nrm_dot_vec3f(&n, &w) >= 0.0);
        }
    }

    #[test]
    fn uniform_hemisphere_integrates_cosine() {
        // E[cos theta] under the uniform hemisphere pdf is 1/2, so the
        // estimator sum cos / (N * pdf) converges to pi.
        let (n, t) = frame();
        let mut rng = Rng::from_seed_u64(4);
        let samples = 200_000;
        let mut acc = 0.0;
        for _ in 0..samples {
            let w = uniform_sample_hemisphere(rng.uniform_float(), rng.uniform_float(), &n, &t);
            acc += nrm_dot_vec3f(&n, &w) / uniform_hemisphere_pdf();
        }
        let estimate = acc / samples as Float;
        assert!((estimate - PI).abs() < 0.05, "estimate = {}", estimate);
    }

    #[test]
    fn concentric_disk_stays_inside_unit_circle() {
        let mut rng = Rng::from_seed_u64(5);
        for _ in 0..1_000 {
            let d = concentric_sample_disk(rng.uniform_float(), rng.uniform_float());
            assert!(d.x * d.x + d.y * d.y <= 1.0 + 1e-12);
        }
    }
}
