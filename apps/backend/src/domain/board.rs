//! 4x4 board representation and the pure slide/merge pipeline.
//!
//! Every direction is handled by the same left-compaction routine: the board
//! is rotated so the requested direction points left, each row is compacted,
//! and the inverse rotation restores the original orientation.

use serde::{Deserialize, Serialize};

use crate::domain::direction::Direction;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 4;

/// Tile value that sets the `won` flag.
pub const WINNING_TILE: u32 = 2048;

/// A single board line; `0` is an empty cell.
pub type Row = [u32; BOARD_SIZE];

/// Row/column position on the board.
pub type Cell = (usize, usize);

/// Fixed 4x4 grid of tiles. Serializes as a nested `[[u32; 4]; 4]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([Row; BOARD_SIZE]);

/// Result of sliding a board in one direction.
///
/// Nothing is committed here; the caller decides whether to keep `board` and
/// credit `score_delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOutcome {
    pub board: Board,
    pub score_delta: u64,
    pub moved: bool,
}

impl Board {
    pub const fn empty() -> Self {
        Self([[0; BOARD_SIZE]; BOARD_SIZE])
    }

    pub const fn from_rows(rows: [Row; BOARD_SIZE]) -> Self {
        Self(rows)
    }

    pub const fn rows(&self) -> &[Row; BOARD_SIZE] {
        &self.0
    }

    pub fn get(&self, (row, col): Cell) -> u32 {
        self.0[row][col]
    }

    pub fn set(&mut self, (row, col): Cell, value: u32) {
        self.0[row][col] = value;
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells().filter(|&(_, value)| value == 0).map(|(cell, _)| cell).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, value)| value != 0)
    }

    pub fn contains(&self, tile: u32) -> bool {
        self.cells().any(|(_, value)| value == tile)
    }

    pub fn max_tile(&self) -> u32 {
        self.cells().map(|(_, value)| value).max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells().map(|(_, value)| u64::from(value)).sum()
    }

    /// True when every non-zero cell is a power of two no smaller than 2.
    pub fn is_well_formed(&self) -> bool {
        self.cells()
            .all(|(_, value)| value == 0 || (value >= 2 && value.is_power_of_two()))
    }

    /// True when two horizontally or vertically adjacent cells hold the same
    /// non-zero value.
    pub fn has_adjacent_pair(&self) -> bool {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let value = self.0[r][c];
                if value == 0 {
                    continue;
                }
                if r + 1 < BOARD_SIZE && self.0[r + 1][c] == value {
                    return true;
                }
                if c + 1 < BOARD_SIZE && self.0[r][c + 1] == value {
                    return true;
                }
            }
        }
        false
    }

    /// Quarter turn clockwise: the left column becomes the top row.
    pub fn rotate_cw(&self) -> Self {
        let mut out = Self::empty();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                out.0[c][BOARD_SIZE - 1 - r] = self.0[r][c];
            }
        }
        out
    }

    /// Quarter turn counter-clockwise: the top row becomes the left column.
    pub fn rotate_ccw(&self) -> Self {
        let mut out = Self::empty();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                out.0[BOARD_SIZE - 1 - c][r] = self.0[r][c];
            }
        }
        out
    }

    pub fn rotate_180(&self) -> Self {
        self.rotate_cw().rotate_cw()
    }

    /// Slide every line toward `direction`, merging equal neighbours once.
    pub fn slide(&self, direction: Direction) -> SlideOutcome {
        let oriented = match direction {
            Direction::Left => *self,
            Direction::Up => self.rotate_ccw(),
            Direction::Down => self.rotate_cw(),
            Direction::Right => self.rotate_180(),
        };

        let compacted = oriented.compact_left();

        let board = match direction {
            Direction::Left => compacted.board,
            Direction::Up => compacted.board.rotate_cw(),
            Direction::Down => compacted.board.rotate_ccw(),
            Direction::Right => compacted.board.rotate_180(),
        };

        SlideOutcome { board, ..compacted }
    }

    fn compact_left(&self) -> SlideOutcome {
        let mut board = *self;
        let mut score_delta = 0;
        let mut moved = false;

        for row in board.0.iter_mut() {
            let (compacted, gained) = compact_row(*row);
            if compacted != *row {
                moved = true;
            }
            score_delta += gained;
            *row = compacted;
        }

        SlideOutcome {
            board,
            score_delta,
            moved,
        }
    }

    fn cells(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.0.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &value)| ((r, c), value))
        })
    }
}

/// Compact one row toward index 0.
///
/// Adjacent equal tiles merge into one tile of double value; a merged tile is
/// never merged again in the same pass, so `[2, 2, 2, 0]` becomes
/// `[4, 2, 0, 0]`. Returns the new row and the sum of the merged tiles.
pub fn compact_row(row: Row) -> (Row, u64) {
    let mut out = [0; BOARD_SIZE];
    let mut write = 0;
    let mut gained = 0;
    let mut pending: Option<u32> = None;

    for value in row.into_iter().filter(|&v| v != 0) {
        match pending {
            Some(prev) if prev == value => {
                let merged = prev.saturating_mul(2);
                out[write] = merged;
                write += 1;
                gained += u64::from(merged);
                pending = None;
            }
            Some(prev) => {
                out[write] = prev;
                write += 1;
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }

    if let Some(prev) = pending {
        out[write] = prev;
    }

    (out, gained)
}
