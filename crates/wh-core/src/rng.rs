//! Deterministic simulation-level RNG.
//!
//! The planner itself is deterministic; randomness only drives synthetic
//! selection streams (demo runs, stress tests).  Seeding from a single `u64`
//! makes every such run reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Coord;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniformly random coordinate inside a `columns × rows` grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn coord(&mut self, columns: usize, rows: usize) -> Coord {
        Coord::new(self.0.gen_range(0..columns), self.0.gen_range(0..rows))
    }

    /// Choose a random element from a slice, or `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
