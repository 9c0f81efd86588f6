//! Gomoku on a 15x15 board, human against computer
//!
//! Standard free-style rules:
//! - 15x15 board, Black moves first
//! - Five or more in a row on any axis wins (overlines count)
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line scanning and win detection
//! - [`eval`]: Static position evaluation
//! - [`search`]: Candidate generation, opening policy and alpha-beta search
//! - [`engine`]: Computer player tying the search components together
//! - [`config`]: Engine settings
//! - [`ui`]: Game session and egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig::deterministic(42)).unwrap();
//!
//! // Human plays Black in the center
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! // Computer answers as White
//! if let Some(pos) = engine.next_move(&board) {
//!     board.place(pos, Stone::White).unwrap();
//!     println!("AI plays at {pos}");
//! }
//! ```
//!
//! # Move Selection
//!
//! The engine picks its move in this order:
//! 1. Empty board: the center point
//! 2. Two stones or fewer: a cell adjacent to an opponent stone
//! 3. Otherwise: depth-limited minimax with alpha-beta pruning over cells
//!    within two of an existing stone

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{is_winning_move, AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, GameError};
