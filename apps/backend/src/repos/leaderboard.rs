//! Leaderboard persistence.
//!
//! The in-memory ranking lives in `LeaderboardService`; stores only load the
//! full entry list at startup and save it after each accepted submission.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::leaderboard::LeaderboardEntry;
use crate::errors::domain::{DomainError, InfraErrorKind};

#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    async fn load(&self) -> Result<Vec<LeaderboardEntry>, DomainError>;
    async fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), DomainError>;
}

/// Keeps the last saved snapshot in memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryLeaderboardStore {
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl MemoryLeaderboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    pub fn snapshot(&self) -> Vec<LeaderboardEntry> {
        self.entries.lock().clone()
    }
}

#[async_trait]
impl LeaderboardStore for MemoryLeaderboardStore {
    async fn load(&self) -> Result<Vec<LeaderboardEntry>, DomainError> {
        Ok(self.snapshot())
    }

    async fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), DomainError> {
        *self.entries.lock() = entries.to_vec();
        Ok(())
    }
}

/// JSON array on disk, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct JsonFileLeaderboardStore {
    path: PathBuf,
}

impl JsonFileLeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "leaderboard.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn storage_error(action: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::infra(
        InfraErrorKind::Storage,
        format!("Failed to {action} {}: {err}", path.display()),
    )
}

#[async_trait]
impl LeaderboardStore for JsonFileLeaderboardStore {
    async fn load(&self) -> Result<Vec<LeaderboardEntry>, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No leaderboard file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(storage_error("read", &self.path, err)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|err| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Leaderboard file {} is not valid: {err}", self.path.display()),
            )
        })
    }

    async fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), DomainError> {
        let json = serde_json::to_vec_pretty(entries).map_err(|err| {
            DomainError::infra(
                InfraErrorKind::Storage,
                format!("Failed to encode leaderboard: {err}"),
            )
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| storage_error("create directory for", &self.path, err))?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|err| storage_error("write", &temp, err))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|err| storage_error("replace", &self.path, err))?;

        debug!(path = %self.path.display(), entries = entries.len(), "Leaderboard saved");
        Ok(())
    }
}
