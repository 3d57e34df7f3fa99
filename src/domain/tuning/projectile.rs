/// Gameplay tuning for projectiles.

#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Damage dealt on hit.
    pub damage: i32,

    /// Projectile velocity is the shooter's velocity times this factor.
    pub velocity_multiplier: f64,

    /// Hits register when the distance is strictly below this.
    pub hit_radius: f64,

    /// Points the owner earns for every enemy hit, lethal or not.
    pub enemy_hit_score: i32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            damage: 10,
            velocity_multiplier: 2.0,
            hit_radius: 10.0,
            enemy_hit_score: 10,
        }
    }
}
