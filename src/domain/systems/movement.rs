use crate::domain::geometry::{random_acceleration, random_position};
use crate::domain::ports::RandomSource;
use crate::domain::world::World;

/// Applies a fresh random acceleration to every player, in id order.
pub fn integrate_players(world: &mut World, rng: &mut dyn RandomSource) {
    for player in world.players.values_mut() {
        // Two samples per player: x then y.
        player.accelerate(random_acceleration(rng));
    }
}

/// Enemies do not steer; each one teleports to a new random spot.
pub fn wander_enemies(world: &mut World, rng: &mut dyn RandomSource) {
    let bounds = world.bounds();
    for enemy in world.enemies.values_mut() {
        enemy.position = random_position(rng, bounds);
    }
}
