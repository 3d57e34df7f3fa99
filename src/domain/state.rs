// Domain-level simulation entities and snapshot types.

use super::geometry::Vector2D;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Player => "player",
            EntityKind::Enemy => "enemy",
            EntityKind::Projectile => "projectile",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: u64,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub health: i32,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u64,
    pub position: Vector2D,
    pub health: i32,
    pub damage: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u64,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub damage: i32,
    // Back-reference only; the owner may have left the world.
    pub owner_id: u64,
}

impl Player {
    /// Semi-implicit Euler: velocity first, then position with the new velocity.
    pub fn accelerate(&mut self, acceleration: Vector2D) {
        self.velocity += acceleration;
        self.position += self.velocity;
    }

    /// Negative amounts are treated as zero so health never rises through damage.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = clamp_health(self.health, amount);
    }

    /// Scores never decrease; negative awards are ignored.
    pub fn add_score(&mut self, points: i32) {
        self.score = self.score.saturating_add(points.max(0));
    }
}

impl Enemy {
    pub fn take_damage(&mut self, amount: i32) {
        self.health = clamp_health(self.health, amount);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

impl Projectile {
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }
}

fn clamp_health(health: i32, amount: i32) -> i32 {
    health.saturating_sub(amount.max(0)).max(0)
}

/// Read-only view of a player published after each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub health: i32,
    pub score: i32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            x: p.position.x,
            y: p.position.y,
            health: p.health,
            score: p.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player {
            id: 1,
            position: Vector2D::ZERO,
            velocity: Vector2D::new(1.0, 0.0),
            health: 100,
            score: 0,
        }
    }

    #[test]
    fn when_accelerating_then_position_uses_updated_velocity() {
        let mut p = player();
        p.accelerate(Vector2D::new(0.5, 1.0));
        assert_eq!(p.velocity, Vector2D::new(1.5, 1.0));
        assert_eq!(p.position, Vector2D::new(1.5, 1.0));
    }

    #[test]
    fn when_damage_exceeds_health_then_health_clamps_to_zero() {
        let mut p = player();
        p.take_damage(250);
        assert_eq!(p.health, 0);
        p.take_damage(i32::MAX);
        assert_eq!(p.health, 0);
    }

    #[test]
    fn when_damage_is_negative_then_health_is_unchanged() {
        let mut p = player();
        p.take_damage(-40);
        assert_eq!(p.health, 100);
    }

    #[test]
    fn when_points_are_negative_then_score_does_not_drop() {
        let mut p = player();
        p.add_score(30);
        p.add_score(-10);
        assert_eq!(p.score, 30);
    }

    #[test]
    fn when_enemy_health_reaches_zero_then_it_is_dead() {
        let mut e = Enemy {
            id: 0,
            position: Vector2D::ZERO,
            health: 10,
            damage: 10,
        };
        assert!(!e.is_dead());
        e.take_damage(10);
        assert!(e.is_dead());
        assert_eq!(e.health, 0);
    }
}
