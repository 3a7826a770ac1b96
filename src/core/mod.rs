pub mod camera;
pub mod film;
pub mod geometry;
pub mod interaction;
pub mod material;
pub mod microfacet;
pub mod pbrt;
pub mod reflection;
pub mod renderer;
pub mod rng;
pub mod sampling;
pub mod scene;
pub mod spectrum;
pub mod transform;
