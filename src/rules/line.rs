//! Line scanning along the four board axes

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking, one per axis.
/// Callers scan each axis in both its forward and reverse sense.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `stone`s starting at `pos` and walking along `(dr, dc)`.
///
/// `pos` itself must hold `stone` and is included in the count.
#[inline]
pub fn count_consecutive(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> u32 {
    debug_assert_eq!(board.get(pos), stone);
    let mut count = 1;
    let mut cur = pos;
    while let Some(next) = cur.offset(dr, dc, 1) {
        if board.get(next) != stone {
            break;
        }
        count += 1;
        cur = next;
    }
    count
}

/// Length of the run through `pos` on one axis, extending both ways.
/// The stone at `pos` is counted once.
#[inline]
pub fn count_through(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> u32 {
    count_consecutive(board, pos, dr, dc, stone) + count_consecutive(board, pos, -dr, -dc, stone)
        - 1
}

/// Longest run `stone` would own through the empty cell `pos` if it played
/// there, over all four axes.
pub fn run_if_placed(board: &Board, pos: Pos, stone: Stone) -> u32 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            1 + stones_beyond(board, pos, dr, dc, stone)
                + stones_beyond(board, pos, -dr, -dc, stone)
        })
        .max()
        .unwrap_or(1)
}

/// Consecutive `stone`s strictly after `pos` along `(dr, dc)`.
#[inline]
fn stones_beyond(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> u32 {
    (1..)
        .map_while(|i| pos.offset(dr, dc, i))
        .take_while(|&p| board.get(p) == stone)
        .count() as u32
}

/// True iff `(row, col)` is on the board and empty.
#[inline]
pub fn is_open(board: &Board, row: i32, col: i32) -> bool {
    Pos::try_new(row, col).is_some_and(|p| board.is_empty(p))
}
