//! Error codes for the game backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the game backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Malformed request body
    BadRequest,
    /// Direction is not one of up/down/left/right
    InvalidDirection,
    /// Game id query parameter missing or empty
    MissingGameId,
    /// Player id query parameter missing or empty
    MissingPlayerId,
    /// Move requested on a finished game
    GameOver,
    /// Leaderboard submission failed validation
    InvalidSubmission,

    // Resource Not Found
    /// Game not found (unknown or expired)
    GameNotFound,
    /// Player has no leaderboard entry
    PlayerNotFound,

    // System Errors
    /// Session or leaderboard storage failure
    StorageError,
    /// Stored data could not be decoded
    DataCorruption,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidDirection => "INVALID_DIRECTION",
            Self::MissingGameId => "MISSING_GAME_ID",
            Self::MissingPlayerId => "MISSING_PLAYER_ID",
            Self::GameOver => "GAME_OVER",
            Self::InvalidSubmission => "INVALID_SUBMISSION",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::StorageError => "STORAGE_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
