// Proptest generators for board states.

use proptest::prelude::*;

use crate::domain::board::{Board, BOARD_SIZE};
use crate::domain::direction::Direction;

/// Empty or a power of two from 2 to 2048, weighted toward empty and small tiles.
pub fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        4 => Just(0u32),
        3 => (1u32..=3).prop_map(|exp| 1 << exp),
        1 => (4u32..=11).prop_map(|exp| 1 << exp),
    ]
}

/// Non-empty tile only.
pub fn nonzero_tile() -> impl Strategy<Value = u32> {
    (1u32..=11).prop_map(|exp| 1 << exp)
}

pub fn row() -> impl Strategy<Value = [u32; BOARD_SIZE]> {
    prop::array::uniform4(tile())
}

pub fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform4(row()).prop_map(Board::from_rows)
}

pub fn full_board() -> impl Strategy<Value = Board> {
    prop::array::uniform4(prop::array::uniform4(nonzero_tile())).prop_map(Board::from_rows)
}

pub fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}
