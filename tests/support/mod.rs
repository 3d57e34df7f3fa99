// Shared helpers for integration tests.
#![allow(dead_code)]

use arena_sim::SimulationConfig;
use arena_sim::domain::{Bounds, RandomSource, World};
use std::time::Duration;

// Cycles through a fixed list of unit samples.
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted random needs at least one value");
        Self { values, cursor: 0 }
    }

    // 0.5 means zero acceleration and the centre of the world.
    pub fn centered() -> Self {
        Self::new(vec![0.5])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

pub fn world() -> World {
    World::new(Bounds::new(1000.0, 1000.0))
}

// Fast, seeded config: no pacing between ticks.
pub fn quick_config(players: u64, ticks: u64, seed: u64) -> SimulationConfig {
    SimulationConfig {
        players,
        ticks,
        log_interval: 10,
        tick_interval: Duration::ZERO,
        seed: Some(seed),
        ..SimulationConfig::default()
    }
}
