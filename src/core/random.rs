//! Injectable randomness, so selection can be replayed under a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Integer in `[0, n)`. Callers never pass `n == 0`.
    fn next_in_range(&mut self, n: usize) -> usize;
}

/// Process-wide thread RNG.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, n: usize) -> usize {
        rand::thread_rng().gen_range(0..n)
    }
}

/// Deterministic source for `--seed` and tests.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}
