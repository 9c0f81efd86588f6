//! Error types for the board, the game session and engine configuration

use thiserror::Error;

/// Errors raised by board placement and the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Placement onto an out-of-bounds or already occupied cell.
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: u8,
        col: u8,
        reason: &'static str,
    },
    #[error("the game is already over")]
    GameOver,
    #[error("it is not the human player's turn")]
    NotYourTurn,
    /// Every cell is occupied; the game ends in a draw.
    #[error("no legal move left, the board is full")]
    NoLegalMove,
}

/// Rejected engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    ZeroDepth,
    #[error("tie-break chance must be within 0..=100, got {0}")]
    TieBreakOutOfRange(u8),
    #[error("thread count must be at least 1")]
    ZeroThreads,
    #[error("computer side must be Black or White")]
    EmptySide,
}
