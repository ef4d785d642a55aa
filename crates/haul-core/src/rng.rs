//! Deterministic simulation-level RNG wrapper.
//!
//! The controller itself is fully deterministic — randomness exists only in
//! harness-side environmental processes (deposit regeneration).  Wrapping
//! `SmallRng` behind a seed-only constructor keeps every run reproducible:
//! the same seed always produces the same sequence of world events.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for world-level stochastic processes.
///
/// Used only in single-threaded contexts (the sequential tick loop).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
