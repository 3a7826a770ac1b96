//! Purely diffuse materials.

// crate
use crate::core::material::Material;
use crate::core::pbrt::Float;
use crate::core::reflection::{Bxdf, LambertianReflection, OrenNayar};
use crate::core::spectrum::Spectrum;

pub fn create_matte(albedo: Spectrum) -> Material {
    let mut material = Material::new();
    material.add_component(Bxdf::LambertianRefl(LambertianReflection::new(albedo)));
    material
}

/// Matte with microscopic roughness *sigma* (radians) driving the
/// Oren-Nayar retro term.
pub fn create_matte_rough(albedo: Spectrum, sigma: Float) -> Material {
    let mut material = Material::new();
    material.add_component(Bxdf::OrenNayarRefl(OrenNayar::new(albedo, sigma)));
    material
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reflection::BxdfType;

    #[test]
    fn matte_is_a_single_diffuse_lobe() {
        let material = create_matte(Spectrum::new(0.75));
        assert_eq!(material.num_components(), 1);
        assert_eq!(material.bsdf_mask(), BxdfType::Diffuse as u8);
    }

    #[test]
    fn rough_matte_keeps_the_diffuse_mask() {
        let material = create_matte_rough(Spectrum::new(0.75), 0.3);
        assert_eq!(material.bsdf_mask(), BxdfType::Diffuse as u8);
    }
}
