//! Ashikhmin-Shirley substrate: the combined lobe carrying the coupled
//! diffuse and specular terms as one mixture component.

// crate
use crate::core::material::Material;
use crate::core::microfacet::DistributionGgx;
use crate::core::pbrt::Float;
use crate::core::reflection::{AshikhminShirleyBlend, Bxdf};
use crate::core::spectrum::Spectrum;

pub fn create_ashikhmin_shirley(roughness: Float, rd: Spectrum, rs: Spectrum) -> Material {
    let mut material = Material::new();
    material.add_component(Bxdf::AshikhminShirleyBlnd(AshikhminShirleyBlend::new(
        DistributionGgx::new(roughness),
        rd,
        rs,
    )));
    material
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reflection::BxdfType;

    #[test]
    fn substrate_is_one_combined_lobe() {
        let material = create_ashikhmin_shirley(0.3, Spectrum::new(0.6), Spectrum::new(0.05));
        assert_eq!(material.num_components(), 1);
        let mask = material.bsdf_mask();
        assert!(mask & BxdfType::Diffuse as u8 != 0);
        assert!(mask & BxdfType::Specular as u8 != 0);
        assert!(mask & BxdfType::Reflection as u8 != 0);
        assert!(mask & BxdfType::Mirror as u8 == 0);
    }

    #[test]
    fn near_mirror_substrate_carries_the_mirror_bit() {
        let material = create_ashikhmin_shirley(0.01, Spectrum::new(0.6), Spectrum::new(0.05));
        assert!(material.bsdf_mask() & BxdfType::Mirror as u8 != 0);
    }
}
