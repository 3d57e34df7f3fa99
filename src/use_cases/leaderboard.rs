// Final standings.

use crate::domain::Player;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub player_id: u64,
    pub score: i32,
}

/// Top `n` players by score, highest first. Ties keep iteration order.
pub fn top_scores<'a>(players: impl IntoIterator<Item = &'a Player>, n: usize) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = players
        .into_iter()
        .map(|p| LeaderboardEntry {
            player_id: p.id,
            score: p.score,
        })
        .collect();

    // Stable sort so equal scores stay in discovery order.
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(n);
    entries
}
