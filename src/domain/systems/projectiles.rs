use crate::domain::geometry::distance;
use crate::domain::state::Projectile;
use crate::domain::tuning::projectile::ProjectileTuning;
use crate::domain::world::World;
use tracing::debug;

/// What a single projectile ran into this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Enemy { enemy_id: u64, killed: bool },
    Player { player_id: u64 },
    OutOfBounds,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectileTickReport {
    pub collisions: Vec<(u64, Collision)>,
}

/// Advances every projectile and resolves its collision, in id order.
///
/// Removal is deferred until every projectile has been visited, so the pass
/// neither skips nor revisits entries.
pub fn tick_projectiles(world: &mut World, cfg: ProjectileTuning) -> ProjectileTickReport {
    let ids: Vec<u64> = world.projectiles.keys().copied().collect();
    let mut report = ProjectileTickReport::default();

    for id in ids {
        let Some(projectile) = world.projectiles.get_mut(&id) else {
            continue;
        };
        projectile.advance();
        let projectile = projectile.clone();

        if let Some(collision) = resolve_collision(world, &projectile, cfg) {
            report.collisions.push((id, collision));
        }
    }

    for (id, _) in &report.collisions {
        world.projectiles.remove(id);
    }
    report
}

/// First match wins: enemies, then players other than the owner, then bounds.
///
/// Does not remove the projectile itself; the caller owns that.
pub fn resolve_collision(
    world: &mut World,
    projectile: &Projectile,
    cfg: ProjectileTuning,
) -> Option<Collision> {
    let enemy_hit = world
        .enemies
        .values()
        .find(|e| distance(projectile.position, e.position) < cfg.hit_radius)
        .map(|e| e.id);

    if let Some(enemy_id) = enemy_hit {
        let killed = match world.enemies.get_mut(&enemy_id) {
            Some(enemy) => {
                enemy.take_damage(projectile.damage);
                enemy.is_dead()
            }
            None => false,
        };
        if killed {
            world.enemies.remove(&enemy_id);
        }

        // The owner may have left; the hit still counts for the enemy.
        if let Some(owner) = world.players.get_mut(&projectile.owner_id) {
            owner.add_score(cfg.enemy_hit_score);
        }

        debug!(
            enemy_id,
            shooter_id = projectile.owner_id,
            projectile_id = projectile.id,
            killed,
            "enemy hit"
        );
        return Some(Collision::Enemy { enemy_id, killed });
    }

    let player_hit = world
        .players
        .values_mut()
        .filter(|p| p.id != projectile.owner_id)
        .find(|p| distance(projectile.position, p.position) < cfg.hit_radius);

    if let Some(victim) = player_hit {
        victim.take_damage(projectile.damage);
        debug!(
            victim_id = victim.id,
            shooter_id = projectile.owner_id,
            projectile_id = projectile.id,
            victim_hp = victim.health,
            "player hit"
        );
        return Some(Collision::Player {
            player_id: victim.id,
        });
    }

    if !world.bounds().contains(projectile.position) {
        return Some(Collision::OutOfBounds);
    }

    None
}
