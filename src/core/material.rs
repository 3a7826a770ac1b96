//! A material is an ordered mixture of BSDF components. Evaluation sums
//! the weighted component reflectances; the pdf is the uniform average
//! matching uniform component selection.

// others
use smallvec::SmallVec;
// crate
use crate::core::geometry::{Normal3f, Vector3f};
use crate::core::pbrt::Float;
use crate::core::reflection::Bxdf;
use crate::core::spectrum::Spectrum;

#[derive(Debug, Default, Clone)]
pub struct Material {
    components: SmallVec<[Bxdf; 4]>,
    bsdf_mask: u8,
}

impl Material {
    pub fn new() -> Self {
        Material {
            components: SmallVec::new(),
            bsdf_mask: 0_u8,
        }
    }
    pub fn add_component(&mut self, component: Bxdf) {
        self.bsdf_mask |= component.get_type();
        self.components.push(component);
    }
    pub fn is_valid(&self) -> bool {
        !self.components.is_empty()
    }
    pub fn num_components(&self) -> usize {
        self.components.len()
    }
    pub fn bsdf_mask(&self) -> u8 {
        self.bsdf_mask
    }
    /// Uniform discrete selection by a unit draw.
    pub fn get_component_by_u(&self, u: Float) -> &Bxdf {
        let n = self.components.len();
        let index = ((u * n as Float) as usize).min(n - 1);
        &self.components[index]
    }
    pub fn get_component_by_mask(&self, mask: u8) -> Option<&Bxdf> {
        self.components.iter().find(|c| c.get_type() & mask != 0)
    }
    /// Mixture reflectance: `sum w_k f_k`.
    pub fn sample_f(&self, n: &Normal3f, t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let mut f = Spectrum::default();
        for component in &self.components {
            f += component.f(n, t, wo, wi) * component.weight();
        }
        f
    }
    /// Mixture pdf: `(1/n) sum pdf_k`, matching uniform selection.
    pub fn sample_pdf(&self, n: &Normal3f, t: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> Float {
        let mut pdf = 0.0 as Float;
        for component in &self.components {
            pdf += component.pdf(n, t, wo, wi);
        }
        pdf / self.components.len() as Float
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::vec3_coordinate_system;
    use crate::core::microfacet::DistributionGgx;
    use crate::core::reflection::{
        BxdfType, LambertianReflection, TorranceSparrow,
    };
    use crate::core::sampling::cosine_sample_hemisphere;

    fn plastic_like() -> Material {
        let mut material = Material::new();
        material.add_component(Bxdf::LambertianRefl(LambertianReflection::new(
            Spectrum::new(0.5),
        )));
        material.add_component(Bxdf::TorranceSparrowRefl(TorranceSparrow::new(
            DistributionGgx::new(0.5),
            Spectrum::new(0.9),
        )));
        material
    }

    #[test]
    fn component_selection_is_uniform_and_clamped() {
        let material = plastic_like();
        assert!(material.get_component_by_u(0.0).get_type() & BxdfType::Diffuse as u8 != 0);
        assert!(material.get_component_by_u(0.49).get_type() & BxdfType::Diffuse as u8 != 0);
        assert!(material.get_component_by_u(0.51).get_type() & BxdfType::Specular as u8 != 0);
        assert!(material.get_component_by_u(1.0).get_type() & BxdfType::Specular as u8 != 0);
    }

    #[test]
    fn summary_mask_is_the_union() {
        let material = plastic_like();
        let mask = material.bsdf_mask();
        assert!(mask & BxdfType::Diffuse as u8 != 0);
        assert!(mask & BxdfType::Specular as u8 != 0);
        assert!(mask & BxdfType::Reflection as u8 != 0);
        assert!(material.get_component_by_mask(BxdfType::Specular as u8).is_some());
        assert!(material
            .get_component_by_mask(BxdfType::Mirror as u8)
            .is_none());
    }

    #[test]
    fn mixture_sum_respects_component_weights() {
        let mut material = Material::new();
        material.add_component(Bxdf::LambertianRefl(LambertianReflection::new(
            Spectrum::new(0.5),
        )));
        let mut coat = TorranceSparrow::new(DistributionGgx::new(0.5), Spectrum::new(0.9));
        coat.weight = 0.25;
        material.add_component(Bxdf::TorranceSparrowRefl(coat));

        let n = Normal3f::new(0.0, 0.0, 1.0);
        let mut t = Vector3f::default();
        let mut b = Vector3f::default();
        vec3_coordinate_system(&Vector3f::from(n), &mut t, &mut b);
        let wo = cosine_sample_hemisphere(0.4, 0.1, &n, &t);
        let wi = cosine_sample_hemisphere(0.7, 0.9, &n, &t);

        let lambert_f = material.get_component_by_u(0.0).f(&n, &t, &wo, &wi);
        let coat_f = material.get_component_by_u(0.9).f(&n, &t, &wo, &wi);
        let mixed = material.sample_f(&n, &t, &wo, &wi);
        for c in 0..3 {
            assert!((mixed[c] - (lambert_f[c] + 0.25 * coat_f[c])).abs() < 1e-12);
        }
    }

    #[test]
    fn mixture_pdf_is_the_component_average() {
        let material = plastic_like();
        let n = Normal3f::new(0.0, 0.0, 1.0);
        let mut t = Vector3f::default();
        let mut b = Vector3f::default();
        vec3_coordinate_system(&Vector3f::from(n), &mut t, &mut b);
        let wo = cosine_sample_hemisphere(0.3, 0.8, &n, &t);
        let wi = cosine_sample_hemisphere(0.6, 0.2, &n, &t);
        let expected = (material.get_component_by_u(0.0).pdf(&n, &t, &wo, &wi)
            + material.get_component_by_u(0.9).pdf(&n, &t, &wo, &wi))
            / 2.0;
        assert!((material.sample_pdf(&n, &t, &wo, &wi) - expected).abs() < 1e-12);
    }
}
