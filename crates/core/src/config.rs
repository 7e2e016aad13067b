//! Session configuration and its validation errors.

use std::time::Duration;

use thiserror::Error;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS, SCORE_MULTIPLIER};

/// Narrowest board on which every shape can spawn.
pub const MIN_BOARD_WIDTH: usize = 4;

/// Shortest board on which every shape can spawn and rotate.
pub const MIN_BOARD_HEIGHT: usize = 4;

/// Upper bound on either dimension.
pub const MAX_BOARD_DIMENSION: usize = 1024;

/// Rules parameters for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Time between automatic falls
    pub fall_interval: Duration,
    /// Points per destroyed row
    pub score_multiplier: u32,
    /// Shape RNG seed; `None` seeds from the wall clock
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            fall_interval: Duration::from_millis(FALL_INTERVAL_MS as u64),
            score_multiplier: SCORE_MULTIPLIER,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {0} is outside {min}..={max}", min = MIN_BOARD_WIDTH, max = MAX_BOARD_DIMENSION)]
    Width(usize),
    #[error("board height {0} is outside {min}..={max}", min = MIN_BOARD_HEIGHT, max = MAX_BOARD_DIMENSION)]
    Height(usize),
    #[error("fall interval must be greater than zero")]
    ZeroFallInterval,
    #[error("score multiplier must be greater than zero")]
    ZeroScoreMultiplier,
}

impl GameConfig {
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fall_interval(mut self, fall_interval: Duration) -> Self {
        self.fall_interval = fall_interval;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_WIDTH..=MAX_BOARD_DIMENSION).contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !(MIN_BOARD_HEIGHT..=MAX_BOARD_DIMENSION).contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        if self.fall_interval.is_zero() {
            return Err(ConfigError::ZeroFallInterval);
        }
        if self.score_multiplier == 0 {
            return Err(ConfigError::ZeroScoreMultiplier);
        }
        Ok(())
    }

    /// Score awarded for destroying `rows` rows at once
    pub fn score_for(&self, rows: usize) -> u32 {
        (rows as u32).saturating_mul(self.score_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.fall_interval, Duration::from_secs(1));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_tiny_boards() {
        let config = GameConfig::default().with_dimensions(3, 20);
        assert_eq!(config.validate(), Err(ConfigError::Width(3)));

        let config = GameConfig::default().with_dimensions(10, 2);
        assert_eq!(config.validate(), Err(ConfigError::Height(2)));

        let config = GameConfig::default().with_dimensions(4, 4);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_rates() {
        let config = GameConfig::default().with_fall_interval(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroFallInterval));

        let config = GameConfig {
            score_multiplier: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroScoreMultiplier));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::Width(2).to_string(),
            "board width 2 is outside 4..=1024"
        );
    }

    #[test]
    fn test_score_for_rows() {
        let config = GameConfig::default();
        assert_eq!(config.score_for(0), 0);
        assert_eq!(config.score_for(1), 20);
        assert_eq!(config.score_for(4), 80);
    }
}
