//! Win condition checking
//!
//! Five or more stones in a row on any axis wins; overlines count.

use crate::board::{Board, Pos, Stone};

use super::line::{count_consecutive, count_through, DIRECTIONS};

/// Stones in a row needed to win
pub const WIN_LENGTH: u32 = 5;

/// Whether the stone of `stone` just placed at `pos` completes five in a row.
///
/// Only the four lines through `pos` are examined, so this must be called
/// right after the placement. This is the single check the session uses
/// to end a game.
#[inline]
pub fn is_winning_move(board: &Board, pos: Pos, stone: Stone) -> bool {
    if stone == Stone::Empty || board.get(pos) != stone {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| count_through(board, pos, dr, dc, stone) >= WIN_LENGTH)
}

/// Positions of the completed run through `pos`, ordered along the axis.
///
/// Returns `None` when the placement at `pos` does not win.
pub fn winning_line(board: &Board, pos: Pos, stone: Stone) -> Option<Vec<Pos>> {
    if stone == Stone::Empty || board.get(pos) != stone {
        return None;
    }
    for &(dr, dc) in &DIRECTIONS {
        let back = count_consecutive(board, pos, -dr, -dc, stone) as i32;
        let total = count_through(board, pos, dr, dc, stone) as i32;
        if total as u32 >= WIN_LENGTH {
            let start = pos.offset(-dr, -dc, back - 1)?;
            return (0..total).map(|i| start.offset(dr, dc, i)).collect();
        }
    }
    None
}

/// Full-board scan: does `stone` have five in a row anywhere?
pub fn has_five(board: &Board, stone: Stone) -> bool {
    let Some(stones) = board.stones(stone) else {
        return false;
    };
    stones.iter_ones().any(|pos| {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| count_consecutive(board, pos, dr, dc, stone) >= WIN_LENGTH)
    })
}
