// Authoritative registry of every live entity plus the world bounds.

use super::geometry::{Bounds, Vector2D};
use super::state::{Enemy, Player, Projectile};
use super::tuning::enemy::EnemyTuning;
use super::tuning::player::PlayerTuning;
use super::tuning::projectile::ProjectileTuning;
use std::collections::BTreeMap;

/// Owns the three per-kind registries.
///
/// Ordered maps keep iteration in ascending id order, which makes every tick
/// phase deterministic for a given random stream. Enemy and projectile ids
/// come from per-kind counters and are never reused after removal.
#[derive(Debug, Clone)]
pub struct World {
    bounds: Bounds,
    pub(crate) players: BTreeMap<u64, Player>,
    pub(crate) enemies: BTreeMap<u64, Enemy>,
    pub(crate) projectiles: BTreeMap<u64, Projectile>,
    next_enemy_id: u64,
    next_projectile_id: u64,
    tick: u64,
}

impl World {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            players: BTreeMap::new(),
            enemies: BTreeMap::new(),
            projectiles: BTreeMap::new(),
            next_enemy_id: 0,
            next_projectile_id: 0,
            tick: 0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub(crate) fn advance_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.values()
    }

    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.values()
    }

    pub fn player(&self, id: u64) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn enemy(&self, id: u64) -> Option<&Enemy> {
        self.enemies.get(&id)
    }

    pub fn projectile(&self, id: u64) -> Option<&Projectile> {
        self.projectiles.get(&id)
    }

    pub fn player_mut(&mut self, id: u64) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    pub fn enemy_mut(&mut self, id: u64) -> Option<&mut Enemy> {
        self.enemies.get_mut(&id)
    }

    pub fn projectile_mut(&mut self, id: u64) -> Option<&mut Projectile> {
        self.projectiles.get_mut(&id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    /// Inserts a fresh player, replacing any player already holding `id`.
    pub fn insert_player(&mut self, id: u64, position: Vector2D) -> &Player {
        let player = Player {
            id,
            position,
            velocity: Vector2D::ZERO,
            health: PlayerTuning::default().starting_health,
            score: 0,
        };
        self.players.insert(id, player);
        &self.players[&id]
    }

    pub fn remove_player(&mut self, id: u64) -> Option<Player> {
        self.players.remove(&id)
    }

    pub fn spawn_enemy(&mut self, position: Vector2D) -> u64 {
        let tuning = EnemyTuning::default();
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        self.enemies.insert(
            id,
            Enemy {
                id,
                position,
                health: tuning.starting_health,
                damage: tuning.damage,
            },
        );
        id
    }

    pub fn remove_enemy(&mut self, id: u64) -> Option<Enemy> {
        self.enemies.remove(&id)
    }

    pub fn spawn_projectile(&mut self, owner_id: u64, position: Vector2D, velocity: Vector2D) -> u64 {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        self.projectiles.insert(
            id,
            Projectile {
                id,
                position,
                velocity,
                damage: ProjectileTuning::default().damage,
                owner_id,
            },
        );
        id
    }

    pub fn remove_projectile(&mut self, id: u64) -> Option<Projectile> {
        self.projectiles.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(Bounds::new(100.0, 100.0))
    }

    #[test]
    fn when_player_is_inserted_then_it_starts_with_full_health_and_no_score() {
        let mut w = world();
        let p = w.insert_player(7, Vector2D::new(1.0, 2.0));
        assert_eq!(p.health, 100);
        assert_eq!(p.score, 0);
        assert_eq!(p.velocity, Vector2D::ZERO);
        assert_eq!(w.player_count(), 1);
    }

    #[test]
    fn when_entities_are_removed_then_new_ids_are_not_reused() {
        let mut w = world();
        let first = w.spawn_enemy(Vector2D::ZERO);
        let second = w.spawn_enemy(Vector2D::ZERO);
        w.remove_enemy(first);
        let third = w.spawn_enemy(Vector2D::ZERO);
        assert_eq!((first, second, third), (0, 1, 2));
        assert_eq!(w.enemy_count(), 2);

        let p0 = w.spawn_projectile(0, Vector2D::ZERO, Vector2D::ZERO);
        w.remove_projectile(p0);
        let p1 = w.spawn_projectile(0, Vector2D::ZERO, Vector2D::ZERO);
        assert_ne!(p0, p1);
    }

    #[test]
    fn when_enemy_spawns_then_it_uses_enemy_tuning() {
        let mut w = world();
        let id = w.spawn_enemy(Vector2D::new(5.0, 5.0));
        let e = w.enemy(id).expect("enemy should exist");
        assert_eq!(e.health, 50);
        assert_eq!(e.damage, 10);
    }

    #[test]
    fn when_player_rejoins_then_state_is_reset() {
        let mut w = world();
        w.insert_player(1, Vector2D::ZERO);
        w.player_mut(1).expect("player").add_score(40);
        w.insert_player(1, Vector2D::new(3.0, 3.0));
        assert_eq!(w.player(1).expect("player").score, 0);
        assert_eq!(w.player_count(), 1);
    }
}
