//! Uniform random streams. Every worker owns one generator; samplers
//! are never shared across threads.

// others
use rand::rngs::SmallRng;
use rand::{Rng as _, SeedableRng};
// crate
use crate::core::pbrt::{Float, FLOAT_ONE_MINUS_EPSILON};

pub struct Rng {
    rng: SmallRng,
}

impl Rng {
    /// Generator seeded from a non-deterministic source.
    pub fn new() -> Self {
        Rng {
            rng: SmallRng::from_entropy(),
        }
    }
    /// Deterministic generator for tests.
    pub fn from_seed_u64(seed: u64) -> Self {
        Rng {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// Uniform draw from [0, 1).
    pub fn uniform_float(&mut self) -> Float {
        self.rng.gen::<Float>().min(FLOAT_ONE_MINUS_EPSILON)
    }
    /// Uniform draw from [-r, r): `2 * u * r - r`.
    pub fn uniform_in_range(&mut self, r: Float) -> Float {
        2.0 as Float * self.uniform_float() * r - r
    }
}

impl Default for Rng {
    fn default() -> Self {
        Rng::new()
    }
}
