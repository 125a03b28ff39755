// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game settings chosen before play starts

use crate::engine::{Difficulty, DEFAULT_MAX_ATTEMPTS};
use crate::{BoardSize, GameState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub board_size: BoardSize,
    /// Strength requested from the move suggester
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Suggestions tried per turn before a pass is forced
    #[serde(default = "default_max_suggestion_attempts")]
    pub max_suggestion_attempts: u8,
}

fn default_max_suggestion_attempts() -> u8 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            difficulty: Difficulty::default(),
            max_suggestion_attempts: default_max_suggestion_attempts(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_suggestion_attempts must be between 1 and {max}, got {got}")]
    AttemptsOutOfRange { got: u8, max: u8 },
}

impl GameConfig {
    /// Largest accepted `max_suggestion_attempts`
    pub const MAX_ATTEMPTS_LIMIT: u8 = 10;

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_suggestion_attempts == 0
            || self.max_suggestion_attempts > Self::MAX_ATTEMPTS_LIMIT
        {
            return Err(ConfigError::AttemptsOutOfRange {
                got: self.max_suggestion_attempts,
                max: Self::MAX_ATTEMPTS_LIMIT,
            });
        }
        Ok(())
    }

    /// Start a fresh session with these settings
    pub fn new_game(&self) -> GameState {
        GameState::new(self.board_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, BoardSize::Nine);
        assert_eq!(config.difficulty, Difficulty::Skilled);
        assert_eq!(config.max_suggestion_attempts, 3);
        assert!(config.validate().is_ok());
        assert_eq!(config.new_game().board().size(), 9);
    }

    #[test]
    fn deserialize_partial() {
        let config: GameConfig =
            serde_json::from_str(r#"{"board_size": 19, "difficulty": "pro"}"#).unwrap();
        assert_eq!(config.board_size, BoardSize::Nineteen);
        assert_eq!(config.difficulty, Difficulty::Pro);
        assert_eq!(config.max_suggestion_attempts, 3);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(serde_json::from_str::<GameConfig>(r#"{"board_size": 15}"#).is_err());

        let config = GameConfig {
            max_suggestion_attempts: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::AttemptsOutOfRange { got: 0, max: 10 })
        );
    }
}
