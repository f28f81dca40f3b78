//! Cross-player leaderboard ranking.
//!
//! Entries are kept sorted at all times: highest score first, and among equal
//! scores the earlier submission ranks higher.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Upper bound on retained entries; the lowest-ranked are dropped past it.
pub const MAX_ENTRIES: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    #[serde(default)]
    pub player_id: String,
    pub name: String,
    pub score: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Game duration in seconds.
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub moves: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardStats {
    pub total_players: usize,
    pub total_games: usize,
    pub highest_score: u64,
    pub average_score: u64,
}

/// Ranking order: score descending, then timestamp ascending.
pub fn rank_order(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.timestamp.cmp(&b.timestamp))
}

#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an unordered set, e.g. entries read back from storage.
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(rank_order);
        entries.truncate(MAX_ENTRIES);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in rank order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Insert at its ranked position; ties with an identical timestamp go after
    /// the existing entries.
    pub fn add(&mut self, entry: LeaderboardEntry) {
        let pos = self
            .entries
            .partition_point(|existing| rank_order(existing, &entry) != Ordering::Greater);
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn top(&self, limit: usize) -> Vec<LeaderboardEntry> {
        self.entries.iter().take(limit).cloned().collect()
    }

    /// 1-based rank of the player's best entry.
    pub fn rank_of(&self, player_id: &str) -> Option<(usize, &LeaderboardEntry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.player_id == player_id)
            .map(|(idx, entry)| (idx + 1, entry))
    }

    pub fn stats(&self) -> LeaderboardStats {
        let Some(best) = self.entries.first() else {
            return LeaderboardStats::default();
        };

        let total_score: u64 = self.entries.iter().map(|e| e.score).sum();
        let players: HashSet<&str> = self.entries.iter().map(|e| e.player_id.as_str()).collect();

        LeaderboardStats {
            total_players: players.len(),
            total_games: self.entries.len(),
            highest_score: best.score,
            average_score: total_score / self.entries.len() as u64,
        }
    }
}
