use crate::domain::geometry::random_position;
use crate::domain::ports::RandomSource;
use crate::domain::tuning::enemy::EnemyTuning;
use crate::domain::world::World;
use tracing::debug;

/// Spawns at most one enemy when the population is below the per-player cap.
pub fn maybe_spawn_enemy(world: &mut World, rng: &mut dyn RandomSource) -> Option<u64> {
    let cap = world.player_count() * EnemyTuning::default().population_per_player;
    if world.enemy_count() >= cap {
        return None;
    }

    let position = random_position(rng, world.bounds());
    let enemy_id = world.spawn_enemy(position);
    debug!(enemy_id, x = position.x, y = position.y, "enemy spawned");
    Some(enemy_id)
}
