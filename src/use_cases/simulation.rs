// Simulation driver: joins players, issues ticks and random fire orders,
// then collects the final standings.

use super::arena::{ArenaError, ArenaSettings, spawn_arena};
use super::leaderboard::{LeaderboardEntry, top_scores};
use super::types::{Command, WorldUpdate};
use crate::domain::RandomSource;
use std::time::{Duration, Instant};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

/// Sender id stamped on commands the driver issues on its own behalf.
pub const DRIVER_SENDER: u64 = u64::MAX;

#[derive(Debug, Clone)]
pub struct SimulationPlan {
    pub arena: ArenaSettings,
    pub players: u64,
    pub ticks: u64,
    /// Progress is logged on ticks where `tick % log_interval == 0`.
    pub log_interval: u64,
    pub fire_probability: f64,
    /// Pause between ticks; zero runs flat out.
    pub tick_interval: Duration,
    pub leaderboard_size: usize,
}

#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub ticks: u64,
    pub elapsed: Duration,
    pub players: usize,
    pub enemies: usize,
    pub projectiles: usize,
    pub operations_per_second: f64,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Runs the whole plan against a fresh arena.
///
/// `world_rng` is handed to the world task; `driver_rng` only decides who fires.
pub async fn run_simulation<W, D>(
    plan: &SimulationPlan,
    world_rng: W,
    mut driver_rng: D,
) -> Result<SimulationReport, ArenaError>
where
    W: RandomSource + 'static,
    D: RandomSource,
{
    let started = Instant::now();
    let arena = spawn_arena(&plan.arena, world_rng);
    let mut updates = arena.subscribe();

    for player_id in 0..plan.players {
        arena.send(player_id, Command::Join { player_id }).await?;
    }
    info!(players = plan.players, ticks = plan.ticks, "starting simulation");

    let mut pacing = (!plan.tick_interval.is_zero())
        .then(|| tokio::time::interval(plan.tick_interval));
    let log_interval = plan.log_interval.max(1);

    for i in 0..plan.ticks {
        arena.send(DRIVER_SENDER, Command::Update).await?;
        let update = next_update(&mut updates, i + 1).await?;

        for player in &update.players {
            if driver_rng.next_unit() < plan.fire_probability {
                arena
                    .send(player.id, Command::Fire { player_id: player.id })
                    .await?;
            }
        }

        if i % log_interval == 0 {
            info!(
                tick = i,
                total = plan.ticks,
                players = update.players.len(),
                enemies = update.enemy_count,
                projectiles = update.projectile_count,
                "progress"
            );
        }

        if let Some(pacing) = pacing.as_mut() {
            pacing.tick().await;
        }
    }

    let world = arena.shutdown().await?;
    let elapsed = started.elapsed();
    let operations = plan.players.saturating_mul(plan.ticks) as f64;
    let operations_per_second = if elapsed.as_secs_f64() > 0.0 {
        operations / elapsed.as_secs_f64()
    } else {
        0.0
    };

    let report = SimulationReport {
        ticks: world.tick(),
        elapsed,
        players: world.player_count(),
        enemies: world.enemy_count(),
        projectiles: world.projectile_count(),
        operations_per_second,
        leaderboard: top_scores(world.players(), plan.leaderboard_size),
    };
    info!(
        elapsed_ms = elapsed.as_millis() as u64,
        players = report.players,
        enemies = report.enemies,
        projectiles = report.projectiles,
        operations_per_second = report.operations_per_second,
        "simulation completed"
    );
    Ok(report)
}

// Waits for the snapshot of `tick`, skipping anything older.
async fn next_update(
    updates: &mut broadcast::Receiver<WorldUpdate>,
    tick: u64,
) -> Result<WorldUpdate, ArenaError> {
    loop {
        match updates.recv().await {
            Ok(update) if update.tick >= tick => return Ok(update),
            Ok(_) => continue,
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "world updates lagged");
            }
            Err(RecvError::Closed) => return Err(ArenaError::MailboxClosed),
        }
    }
}
