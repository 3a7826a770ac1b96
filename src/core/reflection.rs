//! When light is incident on a surface the surface scatters it,
//! described here by a closed set of BSDF lobes. Every lobe exposes the
//! reflectance `f`, an importance-sampled `sample_wi`, and the matching
//! `pdf`; directions are world-space and callers supply the shading
//! normal and a tangent.

// crate
use crate::core::geometry::{nrm_dot_vec3f, vec3_dot_vec3f, Normal3f, ShadingFrame, Vector3f};
use crate::core::microfacet::DistributionGgx;
use crate::core::pbrt::{pow5, saturate, square, Float, INV_PI, PI};
use crate::core::sampling::{cosine_hemisphere_pdf, cosine_sample_hemisphere};
use crate::core::spectrum::Spectrum;

#[repr(u8)]
pub enum BxdfType {
    Diffuse = 1,
    Specular = 2,
    Reflection = 4,
    Mirror = 8,
}

/// Schlick approximation of the Fresnel reflectance,
/// `R0 + (1 - R0)(1 - c)^5`.
pub fn fr_schlick(r0: &Spectrum, cos_theta: Float) -> Spectrum {
    r0 + (Spectrum::new(1.0) - r0) * pow5(1.0 as Float - cos_theta)
}

/// Reflect *wo* about *n* (both unit length): `2 (wo . n) n - wo`.
pub fn reflect(wo: &Vector3f, n: &Vector3f) -> Vector3f {
    n * (2.0 as Float * vec3_dot_vec3f(wo, n)) - wo
}

/// Index-of-refraction pair deriving the normal-incidence reflectance
/// R0; the conductor form applies as soon as the extinction coefficient
/// is nonzero.
#[derive(Debug, Copy, Clone)]
pub struct RefractionIndex {
    pub nt: Float,
    pub kt: Float,
    pub ni: Float,
    pub r0: Float,
}

pub const AIR_REFRACTIVE_INDEX: Float = 1.0003;

impl RefractionIndex {
    pub fn new(nt: Float, kt: Float, ni: Float) -> Self {
        let r0 = if kt > 0.0 as Float {
            (square(nt - ni) + square(kt)) / (square(nt + ni) + square(kt))
        } else {
            square((nt - ni) / (nt + ni))
        };
        RefractionIndex { nt, kt, ni, r0 }
    }
    /// Dielectric or conductor against air.
    pub fn in_air(nt: Float, kt: Float) -> Self {
        RefractionIndex::new(nt, kt, AIR_REFRACTIVE_INDEX)
    }
    pub fn fresnel(&self, cos_theta: Float) -> Spectrum {
        fr_schlick(&Spectrum::new(self.r0), cos_theta)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct LambertianReflection {
    pub r: Spectrum,
    pub weight: Float,
}

impl LambertianReflection {
    pub fn new(r: Spectrum) -> Self {
        LambertianReflection { r, weight: 1.0 }
    }
    pub fn f(&self, n: &Normal3f, _t: &Vector3f, _wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        if nrm_dot_vec3f(n, wi) >= 0.0 as Float {
            self.r * INV_PI
        } else {
            Spectrum::default()
        }
    }
    pub fn sample_wi(
        &self,
        u: [Float; 3],
        n: &Normal3f,
        t: &Vector3f,
        _wo: &Vector3f,
    ) -> (Vector3f, u8) {
        let wi = cosine_sample_hemisphere(u[1], u[2], n, t);
        (wi, BxdfType::Diffuse as u8)
    }
    pub fn pdf(&self, n: &Normal3f, _t: &Vector3f, _wo: &Vector3f, wi: &Vector3f) -> Float {
        cosine_hemisphere_pdf(nrm_dot_vec3f(n, wi))
    }
    pub fn get_type(&self) -> u8 {
        BxdfType::Diffuse as u8
    }
}

#[derive(Debug, Copy, Clone)]
pub struct OrenNayar {
    pub r: Spectrum,
    pub a: Float,
    pub b: Float,
    pub weight: Float,
}

impl OrenNayar {
    /// *sigma* is the surface roughness in radians.
    pub fn new(r: Spectrum, sigma: Float) -> Self {
        let sigma2 = sigma * sigma;
        OrenNayar {
            r,
            a: 1.0 - 0.5 * sigma2 / (sigma2 + 0.33),
            b: 0.45 * sigma2 / (sigma2 + 0.09),
            weight: 1.0,
        }
    }
    pub fn f(&self, n: &Normal3f, _t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let cos_theta_i = nrm_dot_vec3f(n, wi);
        let cos_theta_o = nrm_dot_vec3f(n, wo);
        if cos_theta_i <= 0.0 as Float || cos_theta_o <= 0.0 as Float {
            return Spectrum::default();
        }
        let sin_theta_i = (1.0 as Float - saturate(square(cos_theta_i))).sqrt();
        let sin_theta_o = (1.0 as Float - saturate(square(cos_theta_o))).sqrt();
        // azimuth difference via cos(phi_i - phi_o) sin_i sin_o
        //                      = wi . wo - cos_i cos_o
        let max_cos = if sin_theta_i > 1e-4 && sin_theta_o > 1e-4 {
            let d_cos = vec3_dot_vec3f(wi, wo) - cos_theta_i * cos_theta_o;
            (d_cos / (sin_theta_i * sin_theta_o)).max(0.0 as Float)
        } else {
            0.0 as Float
        };
        let (sin_alpha, tan_beta) = if cos_theta_i > cos_theta_o {
            (sin_theta_o, sin_theta_i / cos_theta_i)
        } else {
            (sin_theta_i, sin_theta_o / cos_theta_o)
        };
        self.r * (INV_PI * (self.a + self.b * max_cos * sin_alpha * tan_beta))
    }
    pub fn sample_wi(
        &self,
        u: [Float; 3],
        n: &Normal3f,
        t: &Vector3f,
        _wo: &Vector3f,
    ) -> (Vector3f, u8) {
        let wi = cosine_sample_hemisphere(u[1], u[2], n, t);
        (wi, BxdfType::Diffuse as u8)
    }
    pub fn pdf(&self, n: &Normal3f, _t: &Vector3f, _wo: &Vector3f, wi: &Vector3f) -> Float {
        cosine_hemisphere_pdf(nrm_dot_vec3f(n, wi))
    }
    pub fn get_type(&self) -> u8 {
        BxdfType::Diffuse as u8
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TorranceSparrow {
    pub rs: Spectrum,
    pub distribution: DistributionGgx,
    pub weight: Float,
}

impl TorranceSparrow {
    pub fn new(distribution: DistributionGgx, rs: Spectrum) -> Self {
        TorranceSparrow {
            rs,
            distribution,
            weight: 1.0,
        }
    }
    pub fn f(&self, n: &Normal3f, _t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let n_dot_l = saturate(nrm_dot_vec3f(n, wi));
        let n_dot_v = saturate(nrm_dot_vec3f(n, wo));
        if n_dot_l <= 0.0 as Float || n_dot_v <= 0.0 as Float {
            return Spectrum::default();
        }
        let wh = wo + wi;
        if wh.x == 0.0 as Float && wh.y == 0.0 as Float && wh.z == 0.0 as Float {
            return Spectrum::default();
        }
        let wh = wh.normalize();
        let n_dot_h = saturate(nrm_dot_vec3f(n, &wh));
        let h_dot_v = saturate(vec3_dot_vec3f(&wh, wo));
        let d = self.distribution.d(n_dot_h);
        let g = self.distribution.g(n_dot_v, n_dot_l);
        let f = fr_schlick(&self.rs, h_dot_v);
        f * (0.25 as Float * d * g / (n_dot_v * n_dot_l))
    }
    pub fn sample_wi(
        &self,
        u: [Float; 3],
        n: &Normal3f,
        t: &Vector3f,
        wo: &Vector3f,
    ) -> (Vector3f, u8) {
        let frame = ShadingFrame::new(n, t);
        let wo_local = frame.world_to_local(wo);
        let wh = frame.local_to_world(&self.distribution.sample_wh(&wo_local, u[1], u[2]));
        (reflect(wo, &wh), self.get_type())
    }
    pub fn pdf(&self, n: &Normal3f, _t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Float {
        let wh = wo + wi;
        if wh.x == 0.0 as Float && wh.y == 0.0 as Float && wh.z == 0.0 as Float {
            return 0.0 as Float;
        }
        let wh = wh.normalize();
        let n_dot_h = nrm_dot_vec3f(n, &wh);
        let h_dot_v = vec3_dot_vec3f(&wh, wo);
        if n_dot_h <= 0.0 as Float || h_dot_v <= 0.0 as Float {
            return 0.0 as Float;
        }
        self.distribution.d(n_dot_h) * n_dot_h * 0.25 as Float / h_dot_v
    }
    pub fn get_type(&self) -> u8 {
        if self.distribution.is_near_mirror() {
            BxdfType::Specular as u8 | BxdfType::Reflection as u8 | BxdfType::Mirror as u8
        } else {
            BxdfType::Specular as u8 | BxdfType::Reflection as u8
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct AshikhminShirleyDiffuse {
    pub rd: Spectrum,
    diffuse_weight: Spectrum,
    pub weight: Float,
}

impl AshikhminShirleyDiffuse {
    pub fn new(rd: Spectrum, rs: Spectrum) -> Self {
        AshikhminShirleyDiffuse {
            rd,
            diffuse_weight: rd * (Spectrum::new(1.0) - rs) * (28.0 as Float / (23.0 as Float * PI)),
            weight: 1.0,
        }
    }
    pub fn f(&self, n: &Normal3f, _t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let n_dot_l = nrm_dot_vec3f(n, wi);
        let n_dot_v = nrm_dot_vec3f(n, wo);
        if n_dot_l <= 0.0 as Float || n_dot_v <= 0.0 as Float {
            return Spectrum::default();
        }
        self.diffuse_weight
            * (1.0 as Float - pow5(1.0 - 0.5 * n_dot_l))
            * (1.0 as Float - pow5(1.0 - 0.5 * n_dot_v))
    }
    pub fn sample_wi(
        &self,
        u: [Float; 3],
        n: &Normal3f,
        t: &Vector3f,
        _wo: &Vector3f,
    ) -> (Vector3f, u8) {
        let wi = cosine_sample_hemisphere(u[1], u[2], n, t);
        (wi, BxdfType::Diffuse as u8)
    }
    pub fn pdf(&self, n: &Normal3f, _t: &Vector3f, _wo: &Vector3f, wi: &Vector3f) -> Float {
        cosine_hemisphere_pdf(nrm_dot_vec3f(n, wi))
    }
    pub fn get_type(&self) -> u8 {
        BxdfType::Diffuse as u8
    }
}

#[derive(Debug, Copy, Clone)]
pub struct AshikhminShirleySpecular {
    pub rs: Spectrum,
    pub distribution: DistributionGgx,
    pub weight: Float,
}

impl AshikhminShirleySpecular {
    pub fn new(distribution: DistributionGgx, rs: Spectrum) -> Self {
        AshikhminShirleySpecular {
            rs,
            distribution,
            weight: 1.0,
        }
    }
    pub fn f(&self, n: &Normal3f, _t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let n_dot_l = nrm_dot_vec3f(n, wi);
        let n_dot_v = nrm_dot_vec3f(n, wo);
        if n_dot_l <= 0.0 as Float || n_dot_v <= 0.0 as Float {
            return Spectrum::default();
        }
        let wh = wo + wi;
        if wh.x == 0.0 as Float && wh.y == 0.0 as Float && wh.z == 0.0 as Float {
            return Spectrum::default();
        }
        let wh = wh.normalize();
        let h_dot_l = vec3_dot_vec3f(&wh, wi);
        if h_dot_l <= 0.0 as Float {
            return Spectrum::default();
        }
        let d = self.distribution.d(nrm_dot_vec3f(n, &wh));
        let f = fr_schlick(&self.rs, h_dot_l);
        f * (0.25 as Float * d / (h_dot_l * n_dot_l.max(n_dot_v)))
    }
    pub fn sample_wi(
        &self,
        u: [Float; 3],
        n: &Normal3f,
        t: &Vector3f,
        wo: &Vector3f,
    ) -> (Vector3f, u8) {
        let frame = ShadingFrame::new(n, t);
        let wo_local = frame.world_to_local(wo);
        let wh = frame.local_to_world(&self.distribution.sample_wh(&wo_local, u[1], u[2]));
        (reflect(wo, &wh), self.get_type())
    }
    pub fn pdf(&self, n: &Normal3f, _t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Float {
        microfacet_reflection_pdf(&self.distribution, n, wo, wi)
    }
    pub fn get_type(&self) -> u8 {
        if self.distribution.is_near_mirror() {
            BxdfType::Specular as u8 | BxdfType::Reflection as u8 | BxdfType::Mirror as u8
        } else {
            BxdfType::Specular as u8 | BxdfType::Reflection as u8
        }
    }
}

/// Combined Ashikhmin-Shirley lobe: the coupled diffuse and specular
/// terms behind one interface. The unit draw is split at one half
/// between the two sampling strategies, and the pdf is the average of
/// the two.
#[derive(Debug, Copy, Clone)]
pub struct AshikhminShirleyBlend {
    pub diffuse: AshikhminShirleyDiffuse,
    pub specular: AshikhminShirleySpecular,
    pub weight: Float,
}

impl AshikhminShirleyBlend {
    pub fn new(distribution: DistributionGgx, rd: Spectrum, rs: Spectrum) -> Self {
        AshikhminShirleyBlend {
            diffuse: AshikhminShirleyDiffuse::new(rd, rs),
            specular: AshikhminShirleySpecular::new(distribution, rs),
            weight: 1.0,
        }
    }
    pub fn f(&self, n: &Normal3f, t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        self.diffuse.f(n, t, wo, wi) + self.specular.f(n, t, wo, wi)
    }
    pub fn sample_wi(
        &self,
        u: [Float; 3],
        n: &Normal3f,
        t: &Vector3f,
        wo: &Vector3f,
    ) -> (Vector3f, u8) {
        if u[0] < 0.5 as Float {
            self.diffuse.sample_wi(u, n, t, wo)
        } else {
            self.specular.sample_wi(u, n, t, wo)
        }
    }
    pub fn pdf(&self, n: &Normal3f, t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Float {
        0.5 as Float * (self.specular.pdf(n, t, wo, wi) + self.diffuse.pdf(n, t, wo, wi))
    }
    pub fn get_type(&self) -> u8 {
        self.diffuse.get_type() | self.specular.get_type()
    }
}

/// Solid-angle density of a microfacet reflection,
/// `D(n.h) (n.h) / (4 (h.wo))`.
fn microfacet_reflection_pdf(
    distribution: &DistributionGgx,
    n: &Normal3f,
    wo: &Vector3f,
    wi: &Vector3f,
) -> Float {
    let wh = wo + wi;
    if wh.x == 0.0 as Float && wh.y == 0.0 as Float && wh.z == 0.0 as Float {
        return 0.0 as Float;
    }
    let wh = wh.normalize();
    let n_dot_h = nrm_dot_vec3f(n, &wh);
    let h_dot_v = vec3_dot_vec3f(&wh, wo);
    if n_dot_h <= 0.0 as Float || h_dot_v <= 0.0 as Float {
        return 0.0 as Float;
    }
    distribution.d(n_dot_h) * n_dot_h * 0.25 as Float / h_dot_v
}

#[derive(Debug, Copy, Clone)]
pub enum Bxdf {
    LambertianRefl(LambertianReflection),
    OrenNayarRefl(OrenNayar),
    TorranceSparrowRefl(TorranceSparrow),
    AshikhminShirleyBlnd(AshikhminShirleyBlend),
}

impl Bxdf {
    pub fn f(&self, n: &Normal3f, t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        match self {
            Bxdf::LambertianRefl(bxdf) => bxdf.f(n, t, wo, wi),
            Bxdf::OrenNayarRefl(bxdf) => bxdf.f(n, t, wo, wi),
            Bxdf::TorranceSparrowRefl(bxdf) => bxdf.f(n, t, wo, wi),
            Bxdf::AshikhminShirleyBlnd(bxdf) => bxdf.f(n, t, wo, wi),
        }
    }
    /// Importance-sample an incident direction; returns the direction
    /// together with the mask of the lobe that produced it.
    pub fn sample_wi(
        &self,
        u: [Float; 3],
        n: &Normal3f,
        t: &Vector3f,
        wo: &Vector3f,
    ) -> (Vector3f, u8) {
        match self {
            Bxdf::LambertianRefl(bxdf) => bxdf.sample_wi(u, n, t, wo),
            Bxdf::OrenNayarRefl(bxdf) => bxdf.sample_wi(u, n, t, wo),
            Bxdf::TorranceSparrowRefl(bxdf) => bxdf.sample_wi(u, n, t, wo),
            Bxdf::AshikhminShirleyBlnd(bxdf) => bxdf.sample_wi(u, n, t, wo),
        }
    }
    /// Needs to stay consistent with `sample_wi`.
    pub fn pdf(&self, n: &Normal3f, t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Float {
        match self {
            Bxdf::LambertianRefl(bxdf) => bxdf.pdf(n, t, wo, wi),
            Bxdf::OrenNayarRefl(bxdf) => bxdf.pdf(n, t, wo, wi),
            Bxdf::TorranceSparrowRefl(bxdf) => bxdf.pdf(n, t, wo, wi),
            Bxdf::AshikhminShirleyBlnd(bxdf) => bxdf.pdf(n, t, wo, wi),
        }
    }
    pub fn get_type(&self) -> u8 {
        match self {
            Bxdf::LambertianRefl(bxdf) => bxdf.get_type(),
            Bxdf::OrenNayarRefl(bxdf) => bxdf.get_type(),
            Bxdf::TorranceSparrowRefl(bxdf) => bxdf.get_type(),
            Bxdf::AshikhminShirleyBlnd(bxdf) => bxdf.get_type(),
        }
    }
    pub fn matches_flags(&self, t: u8) -> bool {
        self.get_type() & t != 0_u8
    }
    /// Contribution of this component to the enclosing mixture.
    pub fn weight(&self) -> Float {
        match self {
            Bxdf::LambertianRefl(bxdf) => bxdf.weight,
            Bxdf::OrenNayarRefl(bxdf) => bxdf.weight,
            Bxdf::TorranceSparrowRefl(bxdf) => bxdf.weight,
            Bxdf::AshikhminShirleyBlnd(bxdf) => bxdf.weight,
        }
    }
}
