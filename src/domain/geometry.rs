// 2D vector math and random sampling helpers used by the tick engine.

use super::ports::RandomSource;
use super::tuning::player::PlayerTuning;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// World extent. Valid positions are `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Upper edges are exclusive: a point at exactly `width` is outside.
    pub fn contains(&self, p: Vector2D) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

pub fn distance(a: Vector2D, b: Vector2D) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Samples each axis uniformly from `[-max_accel, max_accel)`.
pub fn random_acceleration(rng: &mut dyn RandomSource) -> Vector2D {
    let max_accel = PlayerTuning::default().max_random_accel;
    let x = (rng.next_unit() - 0.5) * 2.0 * max_accel;
    let y = (rng.next_unit() - 0.5) * 2.0 * max_accel;
    Vector2D::new(x, y)
}

/// Uniform point inside the bounds. X is sampled before Y.
pub fn random_position(rng: &mut dyn RandomSource, bounds: Bounds) -> Vector2D {
    let x = rng.next_unit() * bounds.width;
    let y = rng.next_unit() * bounds.height;
    Vector2D::new(x, y)
}
