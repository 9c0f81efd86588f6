//! Heuristic evaluation function for Gomoku board positions
//!
//! This module provides the static evaluation used at the leaves of the
//! minimax search. It evaluates board positions based on:
//! - Win/loss detection (full-board scan)
//! - Run scoring in all eight directional senses
//! - Positional bonuses (center control)

use crate::board::{Board, Pos, Stone};
use crate::rules::{count_consecutive, has_five, is_open, DIRECTIONS};

use super::patterns::{run_score, PatternScore, Score, CENTER_BONUS, CENTER_RADIUS, WIN_SCORE};

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate advantage for its opponent
/// - `WIN_SCORE` / `-WIN_SCORE` mean one side already has five in a row
///
/// The board is only read. The result is antisymmetric:
/// `evaluate(board, Black) == -evaluate(board, White)` whenever at most
/// one side has a completed five.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> Score {
    let opponent = color.opponent();

    // Any position can reach here from the search, so scan every stone
    // rather than only the last move.
    if has_five(board, color) {
        return WIN_SCORE;
    }
    if has_five(board, opponent) {
        return -WIN_SCORE;
    }

    let pattern_score = evaluate_runs(board, color) - evaluate_runs(board, opponent);
    let position_score = center_control(board, color) - center_control(board, opponent);

    pattern_score + position_score
}

/// Sum of run scores for every stone of `color` in all eight senses.
///
/// Runs are measured from every stone, not only from run starts, so a
/// longer run is counted once per stone it contains in each sense.
fn evaluate_runs(board: &Board, color: Stone) -> Score {
    let Some(stones) = board.stones(color) else {
        return 0;
    };

    let mut score = 0;
    for pos in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            score += evaluate_direction(board, pos, dr, dc, color);
            score += evaluate_direction(board, pos, -dr, -dc, color);
        }
    }
    score
}

/// Score the run that starts at `pos` and extends along `(dr, dc)`.
fn evaluate_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> Score {
    let count = count_consecutive(board, pos, dr, dc, color);
    let base = run_score(count);

    let row = i32::from(pos.row);
    let col = i32::from(pos.col);
    let n = count as i32;
    let start_open = is_open(board, row - dr, col - dc);
    let end_open = is_open(board, row + n * dr, col + n * dc);

    if start_open && end_open {
        base * PatternScore::OPEN_BOTH_ENDS
    } else {
        base
    }
}

/// Flat bonus for stones of `color` within `CENTER_RADIUS` of the center.
fn center_control(board: &Board, color: Stone) -> Score {
    let Some(stones) = board.stones(color) else {
        return 0;
    };
    let center = Pos::center();
    stones
        .iter_ones()
        .filter(|p| p.chebyshev(center) <= CENTER_RADIUS)
        .count() as Score
        * CENTER_BONUS
}
