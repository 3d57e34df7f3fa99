/// Gameplay tuning for spawned enemies.

#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    /// Health an enemy spawns with.
    pub starting_health: i32,

    /// Contact damage carried by the enemy.
    pub damage: i32,

    /// Population cap is `players * population_per_player`.
    pub population_per_player: usize,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            starting_health: 50,
            damage: 10,
            population_per_player: 2,
        }
    }
}
