// Command interpreter: routes each command to its target and mutates the world.

use super::tick::run_tick;
use super::types::{Command, CommandOutcome};
use crate::domain::geometry::random_position;
use crate::domain::tuning::projectile::ProjectileTuning;
use crate::domain::{CommandError, EntityKind, RandomSource, World};
use tracing::debug;

/// Applies one command to completion.
///
/// A missing target is reported as `EntityNotFound` and leaves the world
/// untouched; nothing here panics on bad ids.
pub fn apply_command(
    world: &mut World,
    rng: &mut dyn RandomSource,
    command: Command,
) -> Result<CommandOutcome, CommandError> {
    match command {
        Command::Join { player_id } => {
            let position = random_position(rng, world.bounds());
            world.insert_player(player_id, position);
            debug!(player_id, x = position.x, y = position.y, "player joined");
            Ok(CommandOutcome::Joined { player_id })
        }
        Command::Leave { player_id } => {
            // Projectiles keep flying after their owner leaves.
            world
                .remove_player(player_id)
                .ok_or(CommandError::not_found(EntityKind::Player, player_id))?;
            debug!(player_id, "player left");
            Ok(CommandOutcome::Left { player_id })
        }
        Command::Fire { player_id } => {
            let player = world
                .player(player_id)
                .ok_or(CommandError::not_found(EntityKind::Player, player_id))?;
            let position = player.position;
            let velocity = player.velocity * ProjectileTuning::default().velocity_multiplier;
            let projectile_id = world.spawn_projectile(player_id, position, velocity);
            debug!(player_id, projectile_id, "projectile fired");
            Ok(CommandOutcome::Fired { projectile_id })
        }
        Command::MovePlayer {
            player_id,
            acceleration,
        } => {
            let player = world
                .player_mut(player_id)
                .ok_or(CommandError::not_found(EntityKind::Player, player_id))?;
            player.accelerate(acceleration);
            Ok(CommandOutcome::Moved {
                position: player.position,
            })
        }
        Command::MoveEnemy { enemy_id, position } => {
            let enemy = world
                .enemy_mut(enemy_id)
                .ok_or(CommandError::not_found(EntityKind::Enemy, enemy_id))?;
            enemy.position = position;
            Ok(CommandOutcome::Moved { position })
        }
        Command::MoveProjectile { projectile_id } => {
            let projectile = world
                .projectile_mut(projectile_id)
                .ok_or(CommandError::not_found(EntityKind::Projectile, projectile_id))?;
            projectile.advance();
            Ok(CommandOutcome::Moved {
                position: projectile.position,
            })
        }
        Command::DamagePlayer { player_id, amount } => {
            let player = world
                .player_mut(player_id)
                .ok_or(CommandError::not_found(EntityKind::Player, player_id))?;
            player.take_damage(amount);
            Ok(CommandOutcome::Damaged {
                health: player.health,
                removed: false,
            })
        }
        Command::DamageEnemy { enemy_id, amount } => {
            let enemy = world
                .enemy_mut(enemy_id)
                .ok_or(CommandError::not_found(EntityKind::Enemy, enemy_id))?;
            enemy.take_damage(amount);
            let health = enemy.health;
            let removed = enemy.is_dead();
            if removed {
                world.remove_enemy(enemy_id);
                debug!(enemy_id, "enemy killed");
            }
            Ok(CommandOutcome::Damaged { health, removed })
        }
        Command::Score { player_id, points } => {
            let player = world
                .player_mut(player_id)
                .ok_or(CommandError::not_found(EntityKind::Player, player_id))?;
            player.add_score(points);
            Ok(CommandOutcome::Scored {
                score: player.score,
            })
        }
        Command::Update => Ok(CommandOutcome::Ticked(run_tick(world, rng))),
    }
}
