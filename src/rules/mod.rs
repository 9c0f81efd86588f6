//! Game rules for free-style Gomoku
//!
//! - Line scanning shared by win detection and evaluation
//! - Win condition (five or more in a row)

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{count_consecutive, count_through, is_open, run_if_placed, DIRECTIONS};
pub use win::{has_five, is_winning_move, winning_line, WIN_LENGTH};
