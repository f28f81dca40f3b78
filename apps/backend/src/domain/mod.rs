//! Domain layer: pure game logic types and helpers.

pub mod board;
pub mod direction;
pub mod engine;
pub mod leaderboard;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_board;
#[cfg(test)]
mod tests_engine;

// Re-exports for ergonomics
pub use board::{Board, SlideOutcome, BOARD_SIZE, WINNING_TILE};
pub use direction::Direction;
pub use engine::{apply_move, can_move, check_win, spawn_tile, GameState, SpawnedTile};
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardStats};
