// Use cases layer: command handling, the tick engine and the world task.

pub mod arena;
pub mod commands;
pub mod game;
pub mod leaderboard;
pub mod simulation;
pub mod tick;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use arena::{ArenaError, ArenaHandle, ArenaSettings, spawn_arena};
pub use commands::apply_command;
pub use leaderboard::{LeaderboardEntry, top_scores};
pub use simulation::{SimulationPlan, SimulationReport, run_simulation};
pub use tick::{TickReport, run_tick};
pub use types::{Command, CommandOutcome, Envelope, WorldUpdate};
