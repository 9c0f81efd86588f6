//! Engine configuration

use crate::board::Stone;
use crate::error::ConfigError;
use crate::search::MAX_DEPTH;

/// Default chance, in percent, of switching to an equally scored later move
pub const DEFAULT_TIE_BREAK_PERCENT: u8 = 30;

/// Settings for [`crate::AIEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Side the engine plays
    pub computer: Stone,
    /// Search horizon in plies below the root move
    pub max_depth: u8,
    /// Chance (0..=100) of preferring a later move on an exact score tie
    pub tie_break_percent: u8,
    /// Seed for the random source; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Threads used to score root candidates
    pub threads: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            computer: Stone::White,
            max_depth: MAX_DEPTH,
            tie_break_percent: DEFAULT_TIE_BREAK_PERCENT,
            seed: None,
            threads: 1,
        }
    }
}

impl EngineConfig {
    /// Deterministic configuration: fixed seed, no tie-break randomness.
    #[must_use]
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            tie_break_percent: 0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.computer == Stone::Empty {
            return Err(ConfigError::EmptySide);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.tie_break_percent > 100 {
            return Err(ConfigError::TieBreakOutOfRange(self.tie_break_percent));
        }
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.tie_break_percent, 30);
        assert_eq!(config.computer, Stone::White);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deterministic_config() {
        let config = EngineConfig::deterministic(9);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.tie_break_percent, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let base = EngineConfig::default();
        let cases = [
            (EngineConfig { max_depth: 0, ..base.clone() }, ConfigError::ZeroDepth),
            (
                EngineConfig { tie_break_percent: 101, ..base.clone() },
                ConfigError::TieBreakOutOfRange(101),
            ),
            (EngineConfig { threads: 0, ..base.clone() }, ConfigError::ZeroThreads),
            (EngineConfig { computer: Stone::Empty, ..base }, ConfigError::EmptySide),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }
}
