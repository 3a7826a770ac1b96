//! Microfacet normal distributions and the sampling of visible
//! normals. Directions handed to `sample_wh` live in the local shading
//! frame with the macro normal at +z.

// crate
use crate::core::geometry::{vec3_cross_vec3, Vector3f};
use crate::core::pbrt::{saturate, square, Float, INV_PI};

/// GTR2 (Trowbridge-Reitz) normal distribution,
/// `a2 / (pi * ((n.h)^2 (a2 - 1) + 1)^2)` with `a2 = alpha^2`.
pub fn distribution_gtr2(alpha_sq: Float, n_dot_h: Float) -> Float {
    let n_dot_h = saturate(n_dot_h);
    let denominator = square(n_dot_h) * (alpha_sq - 1.0) + 1.0;
    alpha_sq * INV_PI / square(denominator)
}

/// GTR1 normal distribution; narrower tail than GTR2, used for sheen
/// style lobes.
pub fn distribution_gtr1(roughness: Float, h_dot_n: Float) -> Float {
    let alpha = square(roughness);
    let cos = saturate(h_dot_n);
    let numerator = 0.5 as Float * alpha;
    let denominator = square(cos) * (square(alpha) - 1.0) + 1.0;
    square(numerator) / denominator
}

/// Smith G1 with the height-correlated separable form,
/// `2c / (c + sqrt(c^2 (1 - a2) + a2))` for `c = n . w`.
fn shadowing_ggx(alpha_sq: Float, cos: Float) -> Float {
    let numerator = 2.0 as Float * cos;
    let denominator = cos + (square(cos) * (1.0 - alpha_sq) + alpha_sq).sqrt();
    numerator / denominator
}

/// Sample the GGX distribution of visible normals: stretch the view
/// direction, pick a point on the projected disk split at the horizon,
/// and unstretch. Never produces a half vector backfacing the view.
pub fn sample_ggx_vndf(
    wo: &Vector3f,
    alpha_x: Float,
    alpha_y: Float,
    u1: Float,
    u2: Float,
) -> Vector3f {
    // stretch view
    let v = Vector3f::new(alpha_x * wo.x, alpha_y * wo.y, wo.z).normalize();

    // orthonormal basis around the stretched view
    let t1 = if v.z < 0.99999 as Float {
        vec3_cross_vec3(&v, &Vector3f::unit_z()).normalize()
    } else {
        Vector3f::unit_x()
    };
    let t2 = vec3_cross_vec3(&v, &t1);

    // sample point with polar coordinates (r, phi)
    let a = 1.0 as Float / (1.0 as Float + v.z);
    let r = u1.sqrt();
    let phi = if u2 < a {
        u2 / a * std::f64::consts::PI
    } else {
        std::f64::consts::PI + (u2 - a) / (1.0 - a) * std::f64::consts::PI
    };
    let t1_coord = r * phi.cos();
    let t2_coord = r * phi.sin() * if u2 < a { 1.0 as Float } else { v.z };

    // compute normal
    let h = t1 * t1_coord
        + t2 * t2_coord
        + v * (0.0 as Float)
            .max(1.0 - square(t1_coord) - square(t2_coord))
            .sqrt();

    // unstretch
    Vector3f::new(alpha_x * h.x, alpha_y * h.y, (0.0 as Float).max(h.z)).normalize()
}

/// Isotropic GGX with the `alpha = roughness^2` convention.
#[derive(Debug, Copy, Clone)]
pub struct DistributionGgx {
    pub roughness: Float,
    pub alpha: Float,
    pub alpha_sq: Float,
}

impl DistributionGgx {
    pub fn new(roughness: Float) -> Self {
        DistributionGgx {
            roughness,
            alpha: square(roughness),
            alpha_sq: square(square(roughness)),
        }
    }
    pub fn d(&self, n_dot_h: Float) -> Float {
        distribution_gtr2(self.alpha_sq, n_dot_h)
    }
    pub fn g1(&self, cos: Float) -> Float {
        shadowing_ggx(self.alpha_sq, cos)
    }
    pub fn g(&self, n_dot_wo: Float, n_dot_wi: Float) -> Float {
        self.g1(n_dot_wo).min(self.g1(n_dot_wi))
    }
    /// Half-vector sample in the local frame, from the local view
    /// direction.
    pub fn sample_wh(&self, wo_local: &Vector3f, u1: Float, u2: Float) -> Vector3f {
        sample_ggx_vndf(wo_local, self.alpha, self.alpha, u1, u2)
    }
    /// Lobes this tight behave as mirrors for masking purposes.
    pub fn is_near_mirror(&self) -> bool {
        self.alpha <= 0.05
    }
}
