use super::*;
use crate::error::GameError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);
    assert_eq!(Pos::from_index(112), pos);
    assert_eq!(Pos::center(), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::try_new(3, 4), Some(Pos::new(3, 4)));
    assert_eq!(Pos::try_new(3, 15), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering_is_row_major() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
}

#[test]
fn test_pos_offset_and_distance() {
    let p = Pos::new(0, 0);
    assert_eq!(p.offset(1, 1, 2), Some(Pos::new(2, 2)));
    assert_eq!(p.offset(-1, 0, 1), None);
    assert_eq!(Pos::new(3, 3).chebyshev(Pos::new(5, 4)), 2);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    assert!(board.is_board_empty());
    board.place(Pos::new(7, 7), Stone::Black).unwrap();
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);
    assert_eq!(board.get(Pos::new(7, 8)), Stone::Empty);
    assert_eq!(board.stone_count(), 1);
    assert!(!board.is_board_empty());
}

#[test]
fn test_place_occupied_is_invalid() {
    let mut board = Board::new();
    board.place(Pos::new(2, 3), Stone::Black).unwrap();
    let err = board.place(Pos::new(2, 3), Stone::White).unwrap_err();
    assert!(matches!(err, GameError::InvalidMove { row: 2, col: 3, .. }));
    assert_eq!(board.get(Pos::new(2, 3)), Stone::Black);
}

#[test]
fn test_place_out_of_bounds_is_invalid() {
    let mut board = Board::new();
    let off_board = Pos { row: 15, col: 0 };
    assert!(matches!(
        board.place(off_board, Stone::Black),
        Err(GameError::InvalidMove { row: 15, col: 0, .. })
    ));
    assert!(board.is_board_empty());
}

#[test]
fn test_remove_restores_board() {
    let mut board = Board::new();
    board.place(Pos::new(1, 1), Stone::White).unwrap();
    let before = board.clone();
    board.place_stone(Pos::new(4, 4), Stone::Black);
    board.remove_stone(Pos::new(4, 4));
    assert_eq!(board, before);
}

#[test]
fn test_is_full_and_reset() {
    let mut board = Board::new();
    for (i, pos) in Pos::all().enumerate() {
        assert!(!board.is_full());
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place(pos, stone).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);

    board.reset();
    assert!(board.is_board_empty());
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS);
}

#[test]
fn test_occupied_iterates_row_major() {
    let mut board = Board::new();
    board.place(Pos::new(9, 2), Stone::White).unwrap();
    board.place(Pos::new(0, 14), Stone::Black).unwrap();
    board.place(Pos::new(14, 14), Stone::Black).unwrap();
    let cells: Vec<Pos> = board.occupied().iter_ones().collect();
    assert_eq!(
        cells,
        vec![Pos::new(0, 14), Pos::new(9, 2), Pos::new(14, 14)]
    );
}
