//! Game-state transitions: tile spawning, moves, win and loss detection.
//!
//! These functions are pure apart from the caller-supplied random source and
//! the `GameState` they mutate. They cannot fail; validating input (direction
//! strings, finished games) is the orchestration layer's job.

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::board::{Board, Cell, WINNING_TILE};
use crate::domain::direction::Direction;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_TILE_PROBABILITY: f64 = 0.1;

/// Persisted unit of a single game. This is also the HTTP wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub id: String,
    pub board: Board,
    pub score: u64,
    pub game_over: bool,
    pub won: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl GameState {
    /// Empty board, zero score. Callers spawn the two opening tiles.
    pub fn new(id: impl Into<String>, created_at: OffsetDateTime) -> Self {
        Self {
            id: id.into(),
            board: Board::empty(),
            score: 0,
            game_over: false,
            won: false,
            created_at,
        }
    }
}

/// A tile placed by [`spawn_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    pub cell: Cell,
    pub value: u32,
}

/// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
///
/// A full board is left untouched and `None` is returned.
pub fn spawn_tile<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Option<SpawnedTile> {
    let empty = state.board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let cell = empty[rng.random_range(0..empty.len())];
    let value = if rng.random::<f64>() < FOUR_TILE_PROBABILITY {
        4
    } else {
        2
    };
    state.board.set(cell, value);

    Some(SpawnedTile { cell, value })
}

/// Slide the board and credit merged tiles to the score.
///
/// Returns `true` iff at least one cell changed. When nothing moves the state
/// is left exactly as it was.
pub fn apply_move(state: &mut GameState, direction: Direction) -> bool {
    let outcome = state.board.slide(direction);
    if !outcome.moved {
        return false;
    }

    state.board = outcome.board;
    state.score += outcome.score_delta;
    true
}

/// True while an empty cell or an adjacent equal pair exists.
pub fn can_move(state: &GameState) -> bool {
    !state.board.is_full() || state.board.has_adjacent_pair()
}

/// Set the sticky `won` flag once a 2048 tile appears.
pub fn check_win(state: &mut GameState) {
    if state.won {
        return;
    }
    if state.board.contains(WINNING_TILE) {
        state.won = true;
    }
}
