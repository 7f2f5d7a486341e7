//! Deterministic RNG for synthetic input data.
//!
//! The planner itself is deterministic and never draws random numbers.
//! Demo traffic and air-quality generators do, and they take a `SimRng` so a
//! fixed seed reproduces the same inputs, which keeps routes reproducible.
//!
//! Child generators are derived by mixing an offset with the 64-bit
//! fractional part of the golden ratio, so sibling streams do not overlap in
//! practice.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded generator for synthetic data feeds.
///
/// Used only in single-threaded contexts.  Give each generator its own
/// [`child`](Self::child) rather than sharing one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
