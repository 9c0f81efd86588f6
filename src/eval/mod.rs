//! Evaluation module for Gomoku positions
//!
//! The evaluation considers:
//! - Completed fives anywhere on the board
//! - Runs of one to four stones, doubled when both ends are open
//! - Positional bonus for stones near the center

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{run_score, PatternScore, Score, CENTER_BONUS, CENTER_RADIUS, WIN_SCORE};
