//! Game session storage with time-based expiry.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::engine::GameState;
use crate::errors::domain::DomainError;

/// Keyed storage for in-progress games.
///
/// Implementations must be safe for concurrent use; per-game write ordering
/// is enforced one layer up by `GameService`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns `None` for unknown or expired ids.
    async fn get(&self, id: &str) -> Result<Option<GameState>, DomainError>;

    /// Inserts or replaces a game and refreshes its expiry.
    async fn put(&self, state: &GameState) -> Result<(), DomainError>;

    /// Drops expired entries, returning how many were removed.
    async fn purge_expired(&self) -> Result<usize, DomainError>;
}

#[derive(Debug, Clone)]
struct StoredSession {
    state: GameState,
    expires_at: Instant,
}

impl StoredSession {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Process-local session store backed by a `DashMap`.
#[derive(Debug)]
pub struct MemorySessionStore {
    sessions: DashMap<String, StoredSession>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored sessions, expired or not.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &str) -> Result<Option<GameState>, DomainError> {
        let now = Instant::now();
        let found = self
            .sessions
            .get(id)
            .map(|entry| (entry.is_expired(now), entry.state.clone()));

        match found {
            Some((false, state)) => Ok(Some(state)),
            Some((true, _)) => {
                // Recheck under the shard lock so a concurrent put is not lost
                self.sessions.remove_if(id, |_, s| s.is_expired(now));
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(&self, state: &GameState) -> Result<(), DomainError> {
        let stored = StoredSession {
            state: state.clone(),
            expires_at: Instant::now() + self.ttl,
        };
        self.sessions.insert(state.id.clone(), stored);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, s| !s.is_expired(now));
        Ok(before.saturating_sub(self.sessions.len()))
    }
}
