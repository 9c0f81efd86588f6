//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation around existing stones
//! - Opening policy for the first plies
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;
pub mod opening;

pub use alphabeta::{SearchResult, Searcher, MAX_DEPTH};
pub use candidates::{generate, CANDIDATE_RADIUS};
pub use opening::{opening_move, OPENING_MAX_STONES};
