/// Gameplay tuning for players.
///
/// Keep this separate from runtime configuration (tick counts, pacing, channel sizes).

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Health a player joins with.
    pub starting_health: i32,

    /// Per-axis bound for the random acceleration applied every tick.
    pub max_random_accel: f64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            starting_health: 100,
            max_random_accel: 0.1,
        }
    }
}
