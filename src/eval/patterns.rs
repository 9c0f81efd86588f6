//! Pattern scores for Gomoku evaluation
//!
//! Fixed, hand-tuned weights. Scores are signed from the perspective of
//! the evaluating side.

/// Score type shared by evaluation and search
pub type Score = i32;

/// Magnitude signalling a completed five (forced win or loss)
pub const WIN_SCORE: Score = 100_000;

/// Pattern scores for runs of consecutive stones
pub struct PatternScore;

impl PatternScore {
    pub const ONE: Score = 1;
    pub const TWO: Score = 10;
    pub const THREE: Score = 100;
    /// Also used for longer runs, which only exist without a completed five
    /// when the evaluator is fed an unusual position.
    pub const FOUR: Score = 1_000;

    /// Multiplier when both ends of a run are empty cells
    pub const OPEN_BOTH_ENDS: Score = 2;
}

/// Chebyshev radius around the exact center that earns the bonus
pub const CENTER_RADIUS: u8 = 2;

/// Flat bonus per stone inside the center square
pub const CENTER_BONUS: Score = 5;

/// Base score for a run of `len` consecutive stones.
#[inline]
pub fn run_score(len: u32) -> Score {
    match len {
        0 => 0,
        1 => PatternScore::ONE,
        2 => PatternScore::TWO,
        3 => PatternScore::THREE,
        _ => PatternScore::FOUR,
    }
}
