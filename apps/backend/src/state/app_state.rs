use std::sync::Arc;

use crate::config::Environment;
use crate::services::games::GameService;
use crate::services::leaderboard::LeaderboardService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<GameService>,
    pub leaderboard: Arc<LeaderboardService>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(
        games: Arc<GameService>,
        leaderboard: Arc<LeaderboardService>,
        environment: Environment,
    ) -> Self {
        Self {
            games,
            leaderboard,
            environment,
        }
    }
}
