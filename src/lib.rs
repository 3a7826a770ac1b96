//! Offline Monte-Carlo path tracing: an unbiased estimator of the
//! radiance arriving along camera rays, with importance-sampled BSDFs,
//! explicit light sampling, and multiple importance sampling to combine
//! the two.

#[macro_use]
extern crate impl_ops;

pub mod core;
pub mod integrators;
pub mod lights;
pub mod materials;
pub mod shapes;
