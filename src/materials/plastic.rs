//! Plastic: a Lambertian base under a GGX specular coat.

// crate
use crate::core::material::Material;
use crate::core::microfacet::DistributionGgx;
use crate::core::pbrt::Float;
use crate::core::reflection::{Bxdf, LambertianReflection, TorranceSparrow};
use crate::core::spectrum::Spectrum;

pub fn create_plastic(albedo: Spectrum, roughness: Float, rs: Spectrum) -> Material {
    create_coated_plastic(albedo, roughness, rs, 1.0)
}

/// Plastic whose specular coat contributes only *coat_weight* of its
/// full strength to the mixture; the base keeps unit weight.
pub fn create_coated_plastic(
    albedo: Spectrum,
    roughness: Float,
    rs: Spectrum,
    coat_weight: Float,
) -> Material {
    let mut material = Material::new();
    material.add_component(Bxdf::LambertianRefl(LambertianReflection::new(albedo)));
    let mut coat = TorranceSparrow::new(DistributionGgx::new(roughness), rs);
    coat.weight = coat_weight;
    material.add_component(Bxdf::TorranceSparrowRefl(coat));
    material
}
