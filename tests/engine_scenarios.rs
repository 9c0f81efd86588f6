//! End-to-end engine scenarios through the public API

use gomoku::{is_winning_move, AIEngine, Board, EngineConfig, Pos, SearchType, Stone};

fn engine(seed: u64) -> AIEngine {
    AIEngine::with_config(EngineConfig::deterministic(seed)).unwrap()
}

fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
    let mut board = Board::new();
    for &(r, c) in black {
        board.place(Pos::new(r, c), Stone::Black).unwrap();
    }
    for &(r, c) in white {
        board.place(Pos::new(r, c), Stone::White).unwrap();
    }
    board
}

#[test]
fn empty_board_plays_center() {
    for seed in 0..5 {
        assert_eq!(engine(seed).next_move(&Board::new()), Some(Pos::new(7, 7)));
    }
}

#[test]
fn reply_to_center_is_adjacent() {
    let board = board_with(&[(7, 7)], &[]);
    for seed in 0..10 {
        let pos = engine(seed).next_move(&board).unwrap();
        assert!(board.is_empty(pos));
        assert_eq!(pos.chebyshev(Pos::new(7, 7)), 1, "seed {seed} gave {pos}");
    }
}

#[test]
fn completes_own_four() {
    let board = board_with(&[(9, 9), (10, 10), (11, 12)], &[(5, 5), (5, 6), (5, 7), (5, 8)]);
    let mut engine = engine(7);
    let result = engine.get_move_with_stats(&board);
    let pos = result.best_move.unwrap();
    assert!(pos == Pos::new(5, 4) || pos == Pos::new(5, 9), "got {pos}");
    assert_eq!(result.search_type, SearchType::AlphaBeta);

    let mut after = board.clone();
    after.place(pos, Stone::White).unwrap();
    assert!(is_winning_move(&after, pos, Stone::White));
}

#[test]
fn win_is_found_with_tie_break_enabled() {
    let board = board_with(&[(9, 9), (10, 10), (11, 12)], &[(5, 5), (5, 6), (5, 7), (5, 8)]);
    for seed in 0..4 {
        let config = EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        };
        let pos = AIEngine::with_config(config).unwrap().next_move(&board).unwrap();
        assert!(pos == Pos::new(5, 4) || pos == Pos::new(5, 9), "seed {seed} gave {pos}");
    }
}

#[test]
fn blocks_opponent_four() {
    let board = board_with(&[(9, 0), (9, 1), (9, 2), (9, 3)], &[(10, 1), (10, 2)]);
    assert_eq!(engine(1).next_move(&board), Some(Pos::new(9, 4)));
}

#[test]
fn full_board_has_no_move() {
    let mut board = Board::new();
    for (i, pos) in Pos::all().enumerate() {
        board.place_stone(pos, if i % 2 == 0 { Stone::Black } else { Stone::White });
    }
    assert!(board.is_full());
    assert_eq!(engine(2).next_move(&board), None);
}

#[test]
fn board_is_unchanged_by_search() {
    let board = board_with(&[(7, 7), (8, 8), (6, 9)], &[(7, 8), (8, 7)]);
    let before = board.clone();
    let _ = engine(3).get_move_with_stats(&board);
    assert_eq!(board, before);
}

#[test]
fn winning_move_detection() {
    let mut board = board_with(&[(3, 3), (4, 4), (5, 5), (6, 6)], &[]);
    board.place(Pos::new(7, 7), Stone::Black).unwrap();
    assert!(is_winning_move(&board, Pos::new(7, 7), Stone::Black));
    assert!(!is_winning_move(&board, Pos::new(7, 7), Stone::White));

    let mut board = board_with(&[(3, 3), (4, 4), (6, 6)], &[(5, 5)]);
    board.place(Pos::new(7, 7), Stone::Black).unwrap();
    assert!(!is_winning_move(&board, Pos::new(7, 7), Stone::Black));
}

#[test]
fn game_alternates_until_a_result() {
    let mut board = Board::new();
    let mut black = AIEngine::with_config(EngineConfig {
        computer: Stone::Black,
        max_depth: 1,
        ..EngineConfig::deterministic(10)
    })
    .unwrap();
    let mut white = AIEngine::with_config(EngineConfig {
        max_depth: 1,
        ..EngineConfig::deterministic(20)
    })
    .unwrap();

    for turn in 0..40 {
        let (engine, stone) = if turn % 2 == 0 {
            (&mut black, Stone::Black)
        } else {
            (&mut white, Stone::White)
        };
        let pos = engine.next_move(&board).unwrap();
        board.place(pos, stone).unwrap();
        if is_winning_move(&board, pos, stone) {
            return;
        }
    }
    assert_eq!(board.stone_count(), 40);
}
