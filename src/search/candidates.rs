//! Candidate move generation
//!
//! Restricts the search to empty cells near existing stones instead of
//! enumerating the whole board.

use crate::board::{Board, Pos, BOARD_SIZE};

/// Chebyshev radius around each stone (a 5x5 neighborhood)
pub const CANDIDATE_RADIUS: i32 = 2;

/// Generate candidate moves near existing stones.
///
/// Stones are visited in row-major order and each neighborhood is scanned
/// row-major, so the output order is deterministic. Every cell appears at
/// most once. An empty board yields no candidates (the opening policy
/// handles it); a board with stones but no empty neighbor falls back to
/// every empty cell.
#[must_use]
pub fn generate(board: &Board) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(64);
    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];

    for pos in board.occupied().iter_ones() {
        for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                let Some(cand) = pos.offset(dr, dc, 1) else {
                    continue;
                };
                let (r, c) = (cand.row as usize, cand.col as usize);
                if seen[r][c] {
                    continue;
                }
                seen[r][c] = true;

                if board.is_empty(cand) {
                    moves.push(cand);
                }
            }
        }
    }

    if moves.is_empty() && !board.is_board_empty() {
        moves.extend(board.empty_cells());
    }

    moves
}
