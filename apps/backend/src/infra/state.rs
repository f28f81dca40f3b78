use std::sync::Arc;

use tracing::info;

use crate::config::{Config, Environment};
use crate::error::AppError;
use crate::repos::leaderboard::{JsonFileLeaderboardStore, LeaderboardStore, MemoryLeaderboardStore};
use crate::repos::sessions::{MemorySessionStore, SessionStore};
use crate::services::games::GameService;
use crate::services::leaderboard::LeaderboardService;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: Config,
    session_store: Option<Arc<dyn SessionStore>>,
    leaderboard_store: Option<Arc<dyn LeaderboardStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            session_store: None,
            leaderboard_store: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = Some(seed);
        self
    }

    /// Overrides the store derived from the config.
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Overrides the store derived from `leaderboard_file`.
    pub fn with_leaderboard_store(mut self, store: Arc<dyn LeaderboardStore>) -> Self {
        self.leaderboard_store = Some(store);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let config = self.config;

        let sessions = self
            .session_store
            .unwrap_or_else(|| Arc::new(MemorySessionStore::new(config.session_ttl)));

        let leaderboard_store = match (self.leaderboard_store, &config.leaderboard_file) {
            (Some(store), _) => store,
            (None, Some(path)) => {
                info!(path = %path.display(), "Using JSON file leaderboard store");
                Arc::new(JsonFileLeaderboardStore::new(path.clone()))
            }
            (None, None) => Arc::new(MemoryLeaderboardStore::new()),
        };

        let leaderboard = LeaderboardService::load(leaderboard_store).await?;
        let games = GameService::new(sessions, config.rng_seed);

        Ok(AppState::new(
            Arc::new(games),
            Arc::new(leaderboard),
            config.environment,
        ))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
