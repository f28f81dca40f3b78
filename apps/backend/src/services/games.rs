//! Game orchestration: loads a session, drives the engine, persists the result.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::direction::Direction;
use crate::domain::engine::{self, GameState};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::repos::sessions::SessionStore;
use crate::utils::ids::new_game_id;

/// Tiles placed on a fresh board.
const OPENING_TILES: usize = 2;

pub struct GameService {
    sessions: Arc<dyn SessionStore>,
    rng: Mutex<ChaCha8Rng>,
    locks: DashMap<String, Arc<tokio::sync::Mutex<()>>>,
}

impl GameService {
    /// A `seed` makes tile placement reproducible; otherwise the OS seeds it.
    pub fn new(sessions: Arc<dyn SessionStore>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            sessions,
            rng: Mutex::new(rng),
            locks: DashMap::new(),
        }
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    pub async fn new_game(&self) -> Result<GameState, DomainError> {
        let mut state = GameState::new(new_game_id(), OffsetDateTime::now_utc());
        {
            let mut rng = self.rng.lock();
            for _ in 0..OPENING_TILES {
                engine::spawn_tile(&mut state, &mut *rng);
            }
        }

        self.sessions.put(&state).await?;
        info!(game_id = %state.id, "Game created");
        Ok(state)
    }

    /// Load a game by id.
    pub async fn get_state(&self, id: &str) -> Result<GameState, DomainError> {
        let id = require_game_id(id)?;
        self.load(id).await
    }

    /// Apply one move and return the resulting state.
    ///
    /// The state is persisted even when nothing moved. Moves on the same
    /// game are serialized.
    pub async fn apply_move(&self, id: &str, direction: Direction) -> Result<GameState, DomainError> {
        let id = require_game_id(id)?;

        let lock = self
            .locks
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone();

        let result = {
            let _guard = lock.lock().await;
            self.move_locked(id, direction).await
        };

        drop(lock);
        self.locks
            .remove_if(id, |_, l| Arc::strong_count(l) == 1);

        result
    }

    async fn move_locked(&self, id: &str, direction: Direction) -> Result<GameState, DomainError> {
        let mut state = self.load(id).await?;

        if state.game_over {
            return Err(DomainError::validation(ValidationKind::GameOver, "Game over"));
        }

        let moved = engine::apply_move(&mut state, direction);
        if moved {
            {
                let mut rng = self.rng.lock();
                engine::spawn_tile(&mut state, &mut *rng);
            }
            engine::check_win(&mut state);
            if !engine::can_move(&state) {
                state.game_over = true;
            }
        }

        self.sessions.put(&state).await?;

        debug!(
            game_id = %state.id,
            direction = %direction,
            moved,
            score = state.score,
            "Move applied"
        );
        if state.game_over {
            info!(game_id = %state.id, score = state.score, won = state.won, "Game finished");
        }

        Ok(state)
    }

    async fn load(&self, id: &str) -> Result<GameState, DomainError> {
        let state = self
            .sessions
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, "Game not found"))?;

        if state.id != id || !state.board.is_well_formed() {
            warn!(game_id = %id, "Stored game failed integrity check");
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Stored game {id} is corrupted"),
            ));
        }

        Ok(state)
    }
}

fn require_game_id(id: &str) -> Result<&str, DomainError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingGameId,
            "Game ID required",
        ));
    }
    Ok(id)
}

/// Periodically purge expired sessions until the handle is aborted.
pub fn spawn_session_sweeper(sessions: Arc<dyn SessionStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match sessions.purge_expired().await {
                Ok(0) => {}
                Ok(removed) => debug!(removed, "Expired game sessions purged"),
                Err(err) => warn!(error = %err, "Session sweep failed"),
            }
        }
    })
}
