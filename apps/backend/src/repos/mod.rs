//! Storage seams for game sessions and the leaderboard.

pub mod leaderboard;
pub mod sessions;

pub use leaderboard::{JsonFileLeaderboardStore, LeaderboardStore, MemoryLeaderboardStore};
pub use sessions::{MemorySessionStore, SessionStore};
