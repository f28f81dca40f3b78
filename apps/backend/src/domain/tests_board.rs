use crate::domain::board::{compact_row, Board};
use crate::domain::direction::Direction;

fn single_row(row: [u32; 4]) -> Board {
    Board::from_rows([row, [0; 4], [0; 4], [0; 4]])
}

#[test]
fn compact_row_merges_a_pair() {
    assert_eq!(compact_row([2, 2, 0, 0]), ([4, 0, 0, 0], 4));
}

#[test]
fn compact_row_merges_two_independent_pairs() {
    assert_eq!(compact_row([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
}

#[test]
fn compact_row_three_in_a_row_merges_leftmost_pair_only() {
    assert_eq!(compact_row([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
    assert_eq!(compact_row([0, 2, 2, 2]), ([4, 2, 0, 0], 4));
}

#[test]
fn compact_row_does_not_remerge_a_merged_tile() {
    assert_eq!(compact_row([2, 2, 4, 0]), ([4, 4, 0, 0], 4));
    assert_eq!(compact_row([4, 4, 8, 8]), ([8, 16, 0, 0], 24));
}

#[test]
fn compact_row_slides_across_gaps() {
    assert_eq!(compact_row([0, 0, 0, 2]), ([2, 0, 0, 0], 0));
    assert_eq!(compact_row([2, 0, 2, 0]), ([4, 0, 0, 0], 4));
    assert_eq!(compact_row([2, 0, 0, 4]), ([2, 4, 0, 0], 0));
}

#[test]
fn compact_row_leaves_packed_distinct_row_alone() {
    assert_eq!(compact_row([2, 4, 8, 16]), ([2, 4, 8, 16], 0));
    assert_eq!(compact_row([0; 4]), ([0; 4], 0));
}

#[test]
fn slide_left_reports_delta_and_moved() {
    let outcome = single_row([2, 2, 0, 0]).slide(Direction::Left);
    assert!(outcome.moved);
    assert_eq!(outcome.score_delta, 4);
    assert_eq!(outcome.board, single_row([4, 0, 0, 0]));
}

#[test]
fn slide_right_compacts_toward_the_right_edge() {
    let outcome = single_row([2, 2, 2, 0]).slide(Direction::Right);
    assert_eq!(outcome.board, single_row([0, 0, 2, 4]));
    assert_eq!(outcome.score_delta, 4);
}

#[test]
fn slide_up_and_down_work_on_columns() {
    let board = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 8]]);

    let up = board.slide(Direction::Up);
    assert_eq!(
        up.board,
        Board::from_rows([[4, 0, 0, 8], [4, 0, 0, 0], [0; 4], [0; 4]])
    );
    assert_eq!(up.score_delta, 4);

    let down = board.slide(Direction::Down);
    assert_eq!(
        down.board,
        Board::from_rows([[0; 4], [0; 4], [4, 0, 0, 0], [4, 0, 0, 8]])
    );
    assert_eq!(down.score_delta, 4);
}

#[test]
fn slide_that_changes_nothing_is_not_a_move() {
    let board = Board::from_rows([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
    let outcome = board.slide(Direction::Left);
    assert!(!outcome.moved);
    assert_eq!(outcome.score_delta, 0);
    assert_eq!(outcome.board, board);

    assert!(!Board::empty().slide(Direction::Up).moved);
}

#[test]
fn rotations_match_grid_geometry() {
    let board = Board::from_rows([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]]);

    assert_eq!(
        board.rotate_cw(),
        Board::from_rows([[13, 9, 5, 1], [14, 10, 6, 2], [15, 11, 7, 3], [16, 12, 8, 4]])
    );
    assert_eq!(
        board.rotate_ccw(),
        Board::from_rows([[4, 8, 12, 16], [3, 7, 11, 15], [2, 6, 10, 14], [1, 5, 9, 13]])
    );
    assert_eq!(
        board.rotate_180(),
        Board::from_rows([[16, 15, 14, 13], [12, 11, 10, 9], [8, 7, 6, 5], [4, 3, 2, 1]])
    );
    assert_eq!(board.rotate_cw().rotate_ccw(), board);
}

#[test]
fn adjacency_checks_rows_and_columns() {
    let vertical = Board::from_rows([[2, 4, 2, 4], [2, 8, 16, 32], [4, 2, 4, 2], [8, 4, 8, 4]]);
    assert!(vertical.has_adjacent_pair());

    let horizontal = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 8, 8], [4, 2, 4, 2]]);
    assert!(horizontal.has_adjacent_pair());

    let none = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(!none.has_adjacent_pair());
    assert!(none.is_full());
}

#[test]
fn zero_pairs_are_not_adjacent_matches() {
    let board = Board::from_rows([[0, 0, 2, 4], [8, 16, 32, 64], [2, 4, 8, 16], [32, 64, 128, 256]]);
    assert!(!board.has_adjacent_pair());
}

#[test]
fn well_formedness() {
    assert!(Board::empty().is_well_formed());
    assert!(single_row([2, 4, 2048, 65536]).is_well_formed());
    assert!(!single_row([1, 0, 0, 0]).is_well_formed());
    assert!(!single_row([6, 0, 0, 0]).is_well_formed());
}

#[test]
fn empty_cells_are_row_major() {
    let board = Board::from_rows([[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0], [2, 2, 2, 2]]);
    assert_eq!(board.empty_cells(), vec![(0, 1), (2, 3)]);
    assert_eq!(board.max_tile(), 2);
    assert_eq!(board.tile_sum(), 28);
}

#[test]
fn board_serializes_as_nested_arrays() {
    let board = single_row([2, 0, 0, 4]);
    let json = serde_json::to_value(board).unwrap();
    assert_eq!(
        json,
        serde_json::json!([[2, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
    );
    let back: Board = serde_json::from_value(json).unwrap();
    assert_eq!(back, board);
}
