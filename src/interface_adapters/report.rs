// Final report rendering: a human-readable block or a JSON document.

use crate::use_cases::{LeaderboardEntry, SimulationReport};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReportDto {
    pub ticks: u64,
    pub elapsed_ms: f64,
    pub players: usize,
    pub enemies: usize,
    pub projectiles: usize,
    pub operations_per_second: f64,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl From<&SimulationReport> for SimulationReportDto {
    fn from(report: &SimulationReport) -> Self {
        Self {
            ticks: report.ticks,
            elapsed_ms: report.elapsed.as_secs_f64() * 1000.0,
            players: report.players,
            enemies: report.enemies,
            projectiles: report.projectiles,
            operations_per_second: report.operations_per_second,
            leaderboard: report.leaderboard.clone(),
        }
    }
}

pub fn render_text(report: &SimulationReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Simulation completed in {:?}", report.elapsed);
    let _ = writeln!(
        out,
        "Final state: {} players, {} enemies, {} projectiles",
        report.players, report.enemies, report.projectiles
    );
    let _ = writeln!(out, "Updates: {}", report.ticks);
    let _ = writeln!(
        out,
        "Operations per second: {:.2}",
        report.operations_per_second
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Top {} Player Scores:", report.leaderboard.len());
    for entry in &report.leaderboard {
        let _ = writeln!(out, "Player {}: {} points", entry.player_id, entry.score);
    }
    out
}

pub fn render_json(report: &SimulationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SimulationReportDto::from(report))
}
