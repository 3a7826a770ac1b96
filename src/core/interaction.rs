//! Surface hit records handed between the scene, the shapes, and the
//! integrator.

// crate
use crate::core::geometry::Normal3f;
use crate::core::pbrt::Float;

/// A ray-surface hit. `object` indexes the scene object that was hit;
/// a miss is `None` at the `Scene::intersect` level. The normal is
/// outward-oriented and flipped inward when the ray struck the back or
/// the inside of the surface, in which case `is_on_outer_surface` is
/// false.
#[derive(Debug, Copy, Clone)]
pub struct SurfaceInteraction {
    pub object: usize,
    pub is_on_outer_surface: bool,
    pub n: Normal3f,
    pub t_hit: Float,
}
