//! Depth-limited minimax with alpha-beta pruning
//!
//! The searcher works on one mutable board. Every speculative stone is
//! removed again before the call that placed it returns, including when a
//! branch is pruned, so the caller always gets its board back unchanged.
//!
//! Terminal scores are shifted by the remaining depth so that a win found
//! sooner outranks one found later, and a loss found later outranks one
//! found sooner. Root candidates keep their generation order for the
//! tie-break; only interior nodes are reordered, which never changes a
//! root score because every root move is searched with a full window.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut board = Board::new();
//! for col in 5..9 {
//!     board.place_stone(Pos::new(5, col), Stone::White);
//! }
//! board.place_stone(Pos::new(9, 9), Stone::Black);
//!
//! let mut searcher = Searcher::new(Stone::White, 3);
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = searcher.search(&mut board, 0, &mut rng);
//! assert!(matches!(result.best_move, Some(p) if p == Pos::new(5, 4) || p == Pos::new(5, 9)));
//! ```

use std::cmp::Reverse;
use std::thread;

use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, Score, WIN_SCORE};
use crate::rules::run_if_placed;

use super::candidates::generate;

/// Default search horizon in plies below the root move
pub const MAX_DEPTH: u8 = 3;

/// Outcome of a root search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Minimax score of the best move
    pub score: Score,
    /// Number of root candidates considered
    pub candidates: usize,
    /// Total minimax nodes visited
    pub nodes: u64,
}

/// Minimax searcher playing `computer` as the maximizing side.
#[derive(Debug, Clone)]
pub struct Searcher {
    computer: Stone,
    max_depth: u8,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(computer: Stone, max_depth: u8) -> Self {
        Self {
            computer,
            max_depth,
            nodes: 0,
        }
    }

    /// Nodes visited since construction
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// Returns the static evaluation once a five exists, `depth` reaches
    /// the horizon, or the board is full. Otherwise the side to move tries
    /// every candidate; the computer maximizes and the opponent minimizes.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes += 1;

        let score = evaluate(board, self.computer);
        if score.abs() >= WIN_SCORE {
            let remaining = Score::from(self.max_depth.saturating_sub(depth));
            return score + score.signum() * remaining;
        }
        if depth >= self.max_depth || board.is_full() {
            return score;
        }

        let to_move = if maximizing {
            self.computer
        } else {
            self.computer.opponent()
        };
        let moves = ordered_moves(board, to_move);

        if maximizing {
            let mut max_score = Score::MIN;
            for mov in moves {
                board.place_stone(mov, self.computer);
                let current = self.minimax(board, depth + 1, false, alpha, beta);
                board.remove_stone(mov);

                max_score = max_score.max(current);
                alpha = alpha.max(current);
                if beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let opponent = self.computer.opponent();
            let mut min_score = Score::MAX;
            for mov in moves {
                board.place_stone(mov, opponent);
                let current = self.minimax(board, depth + 1, true, alpha, beta);
                board.remove_stone(mov);

                min_score = min_score.min(current);
                beta = beta.min(current);
                if beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }

    /// Score one root move: play it for the computer, search the reply
    /// tree with a fresh full window, then take it back.
    pub fn score_root_move(&mut self, board: &mut Board, mov: Pos) -> Score {
        board.place_stone(mov, self.computer);
        let score = self.minimax(board, 0, false, Score::MIN, Score::MAX);
        board.remove_stone(mov);
        score
    }

    /// Pick the best move for the computer on `board`.
    ///
    /// Equal scores switch to the later candidate with probability
    /// `tie_break_percent`/100. Returns no move only on a full board.
    pub fn search<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        tie_break_percent: u8,
        rng: &mut R,
    ) -> SearchResult {
        let start_nodes = self.nodes;
        let candidates = generate(board);
        let scores: Vec<Score> = candidates
            .iter()
            .map(|&mov| self.score_root_move(board, mov))
            .collect();

        let (best_move, score) = select_move(&candidates, &scores, tie_break_percent, rng);
        SearchResult {
            best_move,
            score,
            candidates: candidates.len(),
            nodes: self.nodes - start_nodes,
        }
    }

    /// Like [`Searcher::search`], scoring root candidates on up to `threads`
    /// scoped threads. Each thread works on its own board copy. The
    /// tie-break runs afterwards in candidate order, so a given seed picks
    /// the same move as the sequential search.
    pub fn search_parallel<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        threads: usize,
        tie_break_percent: u8,
        rng: &mut R,
    ) -> SearchResult {
        let candidates = generate(board);
        let chunk_size = candidates.len().div_ceil(threads.max(1)).max(1);

        let (scores, nodes) = thread::scope(|scope| {
            let handles: Vec<_> = candidates
                .chunks(chunk_size)
                .map(|chunk| {
                    let mut worker = Searcher::new(self.computer, self.max_depth);
                    let mut work_board = board.clone();
                    scope.spawn(move || {
                        let scores: Vec<Score> = chunk
                            .iter()
                            .map(|&mov| worker.score_root_move(&mut work_board, mov))
                            .collect();
                        (scores, worker.nodes)
                    })
                })
                .collect();

            let mut scores = Vec::with_capacity(candidates.len());
            let mut nodes = 0;
            for handle in handles {
                match handle.join() {
                    Ok((chunk_scores, chunk_nodes)) => {
                        scores.extend(chunk_scores);
                        nodes += chunk_nodes;
                    }
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            (scores, nodes)
        });

        self.nodes += nodes;
        let (best_move, score) = select_move(&candidates, &scores, tie_break_percent, rng);
        SearchResult {
            best_move,
            score,
            candidates: candidates.len(),
            nodes,
        }
    }
}

/// Candidates sorted so that completing or blocking long runs comes first.
///
/// A move scores by the longest run it would make for `to_move`, or the
/// longest enemy run it would cut; at equal length, attacking goes first.
/// The sort is stable, so equal keys keep generation order.
fn ordered_moves(board: &Board, to_move: Stone) -> Vec<Pos> {
    let mut moves: Vec<(Pos, u32)> = generate(board)
        .into_iter()
        .map(|mov| {
            let own = run_if_placed(board, mov, to_move);
            let theirs = run_if_placed(board, mov, to_move.opponent());
            (mov, (own * 2 + 1).max(theirs * 2))
        })
        .collect();
    moves.sort_by_key(|&(_, key)| Reverse(key));
    moves.into_iter().map(|(mov, _)| mov).collect()
}

/// Keep the highest score; on an exact tie, move to the later candidate
/// when a uniform draw in 0..100 falls below `tie_break_percent`.
fn select_move<R: Rng + ?Sized>(
    candidates: &[Pos],
    scores: &[Score],
    tie_break_percent: u8,
    rng: &mut R,
) -> (Option<Pos>, Score) {
    let mut best_move = None;
    let mut best_score = Score::MIN;

    for (&mov, &score) in candidates.iter().zip(scores) {
        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(mov);
        } else if score == best_score && rng.gen_range(0..100u8) < tie_break_percent {
            best_move = Some(mov);
        }
    }

    (best_move, best_score)
}
