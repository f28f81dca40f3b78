//! Leaderboard service: validation, ranking queries, and persistence.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::{error, info};

use crate::domain::leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardStats};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::leaderboard::LeaderboardStore;
use crate::utils::ids::new_entry_id;

pub const DEFAULT_TOP_LIMIT: usize = 10;
pub const MAX_TOP_LIMIT: usize = 100;

/// Score submission as received from clients.
///
/// Numbers are signed so that negative values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub moves: i64,
}

pub struct LeaderboardService {
    board: RwLock<Leaderboard>,
    store: Arc<dyn LeaderboardStore>,
    persist_lock: tokio::sync::Mutex<()>,
}

impl LeaderboardService {
    /// Service seeded with whatever the store already holds.
    pub async fn load(store: Arc<dyn LeaderboardStore>) -> Result<Self, DomainError> {
        let entries = store.load().await?;
        let board = Leaderboard::from_entries(entries);
        info!(entries = board.len(), "Leaderboard loaded");
        Ok(Self {
            board: RwLock::new(board),
            store,
            persist_lock: tokio::sync::Mutex::new(()),
        })
    }

    pub async fn submit(&self, submission: ScoreSubmission) -> Result<LeaderboardEntry, DomainError> {
        let entry = validate(submission)?;

        self.board.write().add(entry.clone());
        info!(
            entry_id = %entry.id,
            player_id = %entry.player_id,
            score = entry.score,
            "Score submitted"
        );

        self.persist().await;
        Ok(entry)
    }

    /// Best `limit` entries. `None` or out-of-range values use the default.
    pub fn top(&self, limit: Option<i64>) -> Vec<LeaderboardEntry> {
        self.board.read().top(effective_limit(limit))
    }

    /// 1-based rank of the player's best entry.
    pub fn rank(&self, player_id: &str) -> Result<(usize, LeaderboardEntry), DomainError> {
        let player_id = player_id.trim();
        if player_id.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MissingPlayerId,
                "Player ID required",
            ));
        }

        self.board
            .read()
            .rank_of(player_id)
            .map(|(rank, entry)| (rank, entry.clone()))
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, "Player not found"))
    }

    pub fn stats(&self) -> LeaderboardStats {
        self.board.read().stats()
    }

    /// Saves the current entries. Failures are logged; the in-memory board
    /// stays authoritative.
    async fn persist(&self) {
        let _guard = self.persist_lock.lock().await;
        let snapshot = self.board.read().entries().to_vec();
        if let Err(err) = self.store.save(&snapshot).await {
            error!(error = %err, "Failed to persist leaderboard");
        }
    }
}

fn validate(submission: ScoreSubmission) -> Result<LeaderboardEntry, DomainError> {
    let name = submission.name.trim();
    if name.is_empty() || submission.score <= 0 || submission.duration < 0 || submission.moves < 0
    {
        return Err(DomainError::validation(
            ValidationKind::InvalidSubmission,
            "Invalid submission data",
        ));
    }

    Ok(LeaderboardEntry {
        id: new_entry_id(),
        player_id: submission.player_id.trim().to_string(),
        name: name.to_string(),
        score: submission.score as u64,
        timestamp: OffsetDateTime::now_utc(),
        duration: submission.duration as u64,
        moves: submission.moves as u64,
    })
}

fn effective_limit(limit: Option<i64>) -> usize {
    match limit {
        Some(n) if n > 0 => (n as u64).min(MAX_TOP_LIMIT as u64) as usize,
        _ => DEFAULT_TOP_LIMIT,
    }
}
