// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings file for the terminal game.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use weiqi_core::GameConfig;

/// Contents of the `--config` TOML file.
///
/// ```toml
/// seed = 7
/// human_white = false
///
/// [game]
/// board_size = 13
/// difficulty = "pro"
/// max_suggestion_attempts = 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub game: GameConfig,
    /// Seed for the bot; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Let a second human play White instead of the bot
    #[serde(default)]
    pub human_white: bool,
}

/// Load settings from `path`, or defaults when no path is given
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let settings = toml::from_str::<Settings>(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    settings
        .game
        .validate()
        .with_context(|| format!("Invalid settings in {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?settings, "Loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use weiqi_core::{BoardSize, Difficulty};

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.game.board_size, BoardSize::Nine);
        assert!(!settings.human_white);
    }

    #[test]
    fn test_load_from_toml() {
        let file = write_config(
            "seed = 7\n\n[game]\nboard_size = 13\ndifficulty = \"pro\"\n",
        );
        let settings = load_settings(Some(file.path())).unwrap();

        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.game.board_size, BoardSize::Thirteen);
        assert_eq!(settings.game.difficulty, Difficulty::Pro);
        assert_eq!(settings.game.max_suggestion_attempts, 3);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let settings = Settings {
            seed: Some(11),
            human_white: true,
            ..Settings::default()
        };
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let deserialized: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_bad_files_are_reported() {
        let missing = Path::new("/nonexistent/weiqi.toml");
        let err = load_settings(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));

        let file = write_config("[game]\nboard_size = 15\n");
        let err = load_settings(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        let file = write_config("[game]\nmax_suggestion_attempts = 0\n");
        let err = load_settings(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }
}
