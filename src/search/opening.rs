//! Opening policy for the first few plies
//!
//! Skips the full search while the board is nearly empty.

use rand::Rng;

use crate::board::{Board, Pos, Stone};

/// The opening policy applies up to and including this many stones
pub const OPENING_MAX_STONES: u32 = 2;

/// Jitter around the center when the opponent has no stone yet
const CENTER_JITTER: i32 = 1;

/// Radius of the fallback scan around the jittered point
const FALLBACK_RADIUS: i32 = 2;

/// Scan order for cells adjacent to an opponent stone
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Pick an opening move for `computer`.
///
/// - Empty board: the exact center.
/// - Any opponent stone: the first empty cell adjacent to an opponent
///   stone (stones row-major, neighbors in a fixed order).
/// - Otherwise: a cell within one step of the center, else the first empty
///   cell in the 5x5 square around it, else the first empty cell on the
///   board.
///
/// Returns `None` only on a full board.
pub fn opening_move<R: Rng + ?Sized>(board: &Board, computer: Stone, rng: &mut R) -> Option<Pos> {
    if board.is_board_empty() {
        return Some(Pos::center());
    }

    if let Some(opponent_stones) = board.stones(computer.opponent()) {
        for stone in opponent_stones.iter_ones() {
            let adjacent = NEIGHBORS
                .iter()
                .filter_map(|&(dr, dc)| stone.offset(dr, dc, 1))
                .find(|&p| board.is_empty(p));
            if adjacent.is_some() {
                return adjacent;
            }
        }
    }

    let center = Pos::center();
    let col_offset = rng.gen_range(-CENTER_JITTER..=CENTER_JITTER);
    let row_offset = rng.gen_range(-CENTER_JITTER..=CENTER_JITTER);
    let target = Pos::new(
        (i32::from(center.row) + row_offset) as u8,
        (i32::from(center.col) + col_offset) as u8,
    );

    if board.is_empty(target) {
        return Some(target);
    }

    for dr in -FALLBACK_RADIUS..=FALLBACK_RADIUS {
        for dc in -FALLBACK_RADIUS..=FALLBACK_RADIUS {
            if let Some(p) = target.offset(dr, dc, 1) {
                if board.is_empty(p) {
                    return Some(p);
                }
            }
        }
    }

    board.empty_cells().next()
}
