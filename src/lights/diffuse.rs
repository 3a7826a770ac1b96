//! Diffuse area emitters. An emitter is attached to a scene object and
//! radiates a constant spectrum from the surface the object's shape
//! defines; whether the back side emits is the shape's dual-face
//! business.

// crate
use crate::core::pbrt::Float;
use crate::core::spectrum::Spectrum;

#[derive(Debug, Copy, Clone)]
pub struct DiffuseAreaLight {
    pub l_emit: Spectrum,
}

impl DiffuseAreaLight {
    pub fn new(l_emit: Spectrum) -> Self {
        DiffuseAreaLight { l_emit }
    }
    pub fn white(intensity: Float) -> Self {
        DiffuseAreaLight {
            l_emit: Spectrum::new(intensity),
        }
    }
    /// Emitted radiance; constant over the surface and over directions.
    pub fn le(&self) -> Spectrum {
        self.l_emit
    }
}
