use crate::domain::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

fn now_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// `RandomSource` backed by a seeded `StdRng`.
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds from the wall clock; runs are not reproducible unless the seed is logged.
    pub fn from_clock() -> Self {
        Self::new(now_nanos())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent stream, e.g. for the driver's fire rolls.
    pub fn fork(&mut self) -> Self {
        Self::new(self.rng.gen_range(0..u64::MAX))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}
