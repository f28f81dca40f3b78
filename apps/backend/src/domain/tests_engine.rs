use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::macros::datetime;

use crate::domain::board::Board;
use crate::domain::direction::Direction;
use crate::domain::engine::{apply_move, can_move, check_win, spawn_tile, GameState};

fn state_with(rows: [[u32; 4]; 4]) -> GameState {
    let mut state = GameState::new("test-game", datetime!(2024-01-01 00:00 UTC));
    state.board = Board::from_rows(rows);
    state
}

#[test]
fn new_game_gets_two_small_tiles() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut state = GameState::new("g", datetime!(2024-01-01 00:00 UTC));
    spawn_tile(&mut state, &mut rng).unwrap();
    spawn_tile(&mut state, &mut rng).unwrap();

    let tiles: Vec<u32> = state
        .board
        .rows()
        .iter()
        .flatten()
        .copied()
        .filter(|&v| v != 0)
        .collect();
    assert_eq!(tiles.len(), 2);
    assert!(tiles.iter().all(|&v| v == 2 || v == 4));
    assert_eq!(state.score, 0);
    assert!(!state.game_over);
    assert!(!state.won);
}

#[test]
fn spawn_is_deterministic_for_a_seed() {
    let run = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new("g", datetime!(2024-01-01 00:00 UTC));
        (0..6)
            .map(|_| spawn_tile(&mut state, &mut rng))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn spawn_fills_the_only_empty_cell() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut state = state_with([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);

    let spawned = spawn_tile(&mut state, &mut rng).unwrap();
    assert_eq!(spawned.cell, (2, 2));
    assert!(spawned.value == 2 || spawned.value == 4);
    assert!(state.board.is_full());
}

#[test]
fn spawn_on_full_board_is_a_no_op() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let mut state = state_with(rows);

    assert!(spawn_tile(&mut state, &mut rng).is_none());
    assert_eq!(state.board, Board::from_rows(rows));
}

#[test]
fn four_tiles_are_roughly_one_in_ten() {
    let mut rng = ChaCha8Rng::seed_from_u64(2048);
    let mut fours = 0;
    let draws = 4000;
    for _ in 0..draws {
        let mut state = GameState::new("g", datetime!(2024-01-01 00:00 UTC));
        if spawn_tile(&mut state, &mut rng).unwrap().value == 4 {
            fours += 1;
        }
    }
    let ratio = f64::from(fours) / f64::from(draws);
    assert!((0.06..0.14).contains(&ratio), "ratio was {ratio}");
}

#[test]
fn move_commits_board_and_score() {
    let mut state = state_with([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    assert!(apply_move(&mut state, Direction::Left));
    assert_eq!(state.board.rows()[0], [4, 4, 0, 0]);
    assert_eq!(state.score, 8);
}

#[test]
fn no_op_move_leaves_state_untouched() {
    let mut state = state_with([[2, 0, 0, 0], [4, 0, 0, 0], [0; 4], [0; 4]]);
    state.score = 100;
    let before = state.clone();

    assert!(!apply_move(&mut state, Direction::Left));
    assert_eq!(state, before);
}

#[test]
fn locked_board_cannot_move() {
    let state = state_with([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(!can_move(&state));

    let with_gap = state_with([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]);
    assert!(can_move(&with_gap));

    let with_pair = state_with([[2, 2, 8, 4], [4, 8, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(can_move(&with_pair));
}

#[test]
fn win_is_flagged_and_sticky() {
    let mut state = state_with([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
    check_win(&mut state);
    assert!(!state.won);

    assert!(apply_move(&mut state, Direction::Left));
    check_win(&mut state);
    assert!(state.won);
    assert!(!state.game_over);

    // Merge the 2048 away into 4096; the flag stays set
    state.board = Board::from_rows([[2048, 2048, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert!(apply_move(&mut state, Direction::Left));
    assert!(!state.board.contains(2048));
    check_win(&mut state);
    assert!(state.won);
}

#[test]
fn game_state_wire_shape() {
    let state = state_with([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]);
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["id"], "test-game");
    assert_eq!(json["board"][3][3], 4);
    assert_eq!(json["score"], 0);
    assert_eq!(json["gameOver"], false);
    assert_eq!(json["won"], false);
    assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");

    let back: GameState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}
