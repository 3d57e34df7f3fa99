// Tick engine: one full simulation step over the world.

use crate::domain::systems::projectiles::{self, Collision};
use crate::domain::systems::{movement, spawn};
use crate::domain::tuning::projectile::ProjectileTuning;
use crate::domain::{RandomSource, World};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    /// `(projectile_id, collision)` for every projectile removed this tick.
    pub collisions: Vec<(u64, Collision)>,
    pub spawned_enemy: Option<u64>,
}

/// Runs the phases in a fixed order: players, enemies, projectiles, spawn.
///
/// Random samples are drawn in the same order, so a seeded source replays
/// identically.
pub fn run_tick(world: &mut World, rng: &mut dyn RandomSource) -> TickReport {
    movement::integrate_players(world, rng);
    movement::wander_enemies(world, rng);
    let projectile_report = projectiles::tick_projectiles(world, ProjectileTuning::default());
    let spawned_enemy = spawn::maybe_spawn_enemy(world, rng);

    let tick = world.advance_tick();
    trace!(
        tick,
        players = world.player_count(),
        enemies = world.enemy_count(),
        projectiles = world.projectile_count(),
        collisions = projectile_report.collisions.len(),
        "tick complete"
    );

    TickReport {
        tick,
        collisions: projectile_report.collisions,
        spawned_enemy,
    }
}
