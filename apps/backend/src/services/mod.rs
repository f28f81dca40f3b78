pub mod games;
pub mod leaderboard;
