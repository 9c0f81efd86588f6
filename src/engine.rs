//! AI engine tying the opening policy and the minimax search together
//!
//! The engine decides which phase answers a position:
//!
//! 1. **Center**: empty board, play the middle intersection
//! 2. **Opening**: at most two stones down, play next to an opponent stone
//! 3. **Alpha-Beta**: everything else goes through the minimax search
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut engine = AIEngine::with_config(EngineConfig::deterministic(1)).unwrap();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::eval::Score;
use crate::search::{opening_move, SearchResult, Searcher, OPENING_MAX_STONES};

pub use crate::rules::is_winning_move;

/// Which phase produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board, center point
    Center,
    /// Early game, adjacent to an opponent stone
    Opening,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Minimax score of the move (0 for center and opening moves)
    pub score: Score,
    /// Phase that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn center(time_ms: u64) -> Self {
        Self {
            best_move: Some(Pos::center()),
            score: 0,
            search_type: SearchType::Center,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Computer player.
///
/// Owns its configuration and random source, so two engines built from
/// the same seeded config answer the same positions identically.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, Pos, Stone};
///
/// let mut engine = AIEngine::new();
/// let mut board = Board::new();
/// board.place_stone(Pos::new(7, 7), Stone::Black);
/// if let Some(best_move) = engine.next_move(&board) {
///     println!("Play at {best_move}");
/// }
/// ```
#[derive(Debug)]
pub struct AIEngine {
    config: EngineConfig,
    rng: StdRng,
    searcher: Searcher,
}

impl AIEngine {
    /// Engine with the default configuration: plays White, depth 3,
    /// 30% tie-break, seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Create an engine from a validated configuration.
    ///
    /// ```
    /// use gomoku::{AIEngine, EngineConfig};
    ///
    /// let config = EngineConfig { max_depth: 0, ..EngineConfig::default() };
    /// assert!(AIEngine::with_config(config).is_err());
    /// ```
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let searcher = Searcher::new(config.computer, config.max_depth);
        Self {
            config,
            rng,
            searcher,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Side the engine plays
    #[must_use]
    pub fn computer(&self) -> Stone {
        self.config.computer
    }

    /// Total minimax nodes visited over the engine's lifetime
    #[must_use]
    pub fn total_nodes(&self) -> u64 {
        self.searcher.nodes()
    }

    /// Best move for the computer, or `None` when the board is full.
    ///
    /// The caller's board is never modified.
    pub fn next_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Best move together with the phase, score, timing and node count.
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let elapsed = |start: Instant| start.elapsed().as_millis() as u64;

        if board.is_board_empty() {
            log::debug!("empty board, playing center");
            return MoveResult::center(elapsed(start));
        }

        if board.stone_count() <= OPENING_MAX_STONES {
            if let Some(pos) = opening_move(board, self.config.computer, &mut self.rng) {
                log::debug!("opening move {pos}");
                return MoveResult::opening(pos, elapsed(start));
            }
        }

        let result = if self.config.threads > 1 {
            self.searcher.search_parallel(
                board,
                self.config.threads,
                self.config.tie_break_percent,
                &mut self.rng,
            )
        } else {
            let mut work_board = board.clone();
            self.searcher
                .search(&mut work_board, self.config.tie_break_percent, &mut self.rng)
        };

        let time_ms = elapsed(start);
        match result.best_move {
            Some(pos) => log::debug!(
                "alpha-beta picked {pos}: score {}, {} candidates, {} nodes, {time_ms}ms",
                result.score,
                result.candidates,
                result.nodes,
            ),
            None => log::debug!("no legal move, board is full"),
        }
        MoveResult::from_alphabeta(result, time_ms)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
