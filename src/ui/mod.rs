//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. The game
//! session itself lives in [`GameState`] and has no egui dependency.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{AiState, GameOutcome, GameResult, GameState, AI_MOVE_DELAY};
