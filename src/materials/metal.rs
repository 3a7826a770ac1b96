//! Single-lobe GGX conductor; also handy for isolating the microfacet
//! term when debugging.

// crate
use crate::core::material::Material;
use crate::core::microfacet::DistributionGgx;
use crate::core::pbrt::Float;
use crate::core::reflection::{Bxdf, RefractionIndex, TorranceSparrow};
use crate::core::spectrum::Spectrum;

pub fn create_metal(roughness: Float, rs: Spectrum) -> Material {
    let mut material = Material::new();
    material.add_component(Bxdf::TorranceSparrowRefl(TorranceSparrow::new(
        DistributionGgx::new(roughness),
        rs,
    )));
    material
}

/// Conductor reflectance from its complex refraction index.
pub fn create_metal_from_ior(roughness: Float, ior: RefractionIndex) -> Material {
    create_metal(roughness, Spectrum::new(ior.r0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reflection::BxdfType;

    #[test]
    fn near_mirror_metal_carries_the_mirror_bit() {
        let material = create_metal(0.01, Spectrum::new(0.9));
        let mask = material.bsdf_mask();
        assert!(mask & BxdfType::Mirror as u8 != 0);
        assert!(mask & BxdfType::Reflection as u8 != 0);
        let rough = create_metal(0.5, Spectrum::new(0.9));
        assert!(rough.bsdf_mask() & BxdfType::Mirror as u8 == 0);
    }

    #[test]
    fn conductor_ior_drives_the_reflectance() {
        let gold_ish = RefractionIndex::in_air(0.2, 3.0);
        let material = create_metal_from_ior(0.2, gold_ish);
        assert_eq!(material.num_components(), 1);
    }
}
