//! Configuration file loading for the prompt loop.
//!
//! Settings are read from `shobu.toml` in the current directory unless
//! another path is given. Every field is optional.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Who makes the decisions for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves are typed at the prompt.
    #[default]
    Human,
    /// Uniformly random legal turns.
    Random,
    /// The first legal turn in generation order.
    First,
}

/// Player assignment for both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct PlayersConfig {
    #[serde(default)]
    pub black: PlayerKind,
    #[serde(default)]
    pub white: PlayerKind,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShobuConfig {
    #[serde(default)]
    pub players: PlayersConfig,
    /// Seed for computer players. Unset means seeded from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Print the board before every turn. Defaults to true.
    #[serde(default = "default_show_board")]
    pub show_board: bool,
    /// Filter directive for log output. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_show_board() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ShobuConfig {
    fn default() -> Self {
        ShobuConfig {
            players: PlayersConfig::default(),
            seed: None,
            show_board: default_show_board(),
            log_level: default_log_level(),
        }
    }
}

impl ShobuConfig {
    /// Returns the default configuration file path, `shobu.toml` in the
    /// working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("shobu.toml")
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::ReadError(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
seed = 42
show_board = false
log_level = "debug"

[players]
black = "human"
white = "random"
"#;

        let config: ShobuConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.players.black, PlayerKind::Human);
        assert_eq!(config.players.white, PlayerKind::Random);
        assert_eq!(config.seed, Some(42));
        assert!(!config.show_board);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: ShobuConfig = toml::from_str("").unwrap();

        assert_eq!(config, ShobuConfig::default());
        assert_eq!(config.players.black, PlayerKind::Human);
        assert_eq!(config.players.white, PlayerKind::Human);
        assert_eq!(config.seed, None);
        assert!(config.show_board);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_partial_players_table() {
        let config: ShobuConfig = toml::from_str("[players]\nwhite = \"first\"\n").unwrap();

        assert_eq!(config.players.black, PlayerKind::Human);
        assert_eq!(config.players.white, PlayerKind::First);
    }

    #[test]
    fn test_unknown_player_kind_is_rejected() {
        let result: Result<ShobuConfig, _> = toml::from_str("[players]\nblack = \"minimax\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("shobu-config-test-does-not-exist.toml");
        let config = ShobuConfig::load(&path).unwrap();
        assert_eq!(config, ShobuConfig::default());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("shobu-config-test-{}.toml", std::process::id()));
        std::fs::write(&path, "seed = \"not a number\"").unwrap();
        let result = ShobuConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_directory_is_a_read_error() {
        let result = ShobuConfig::load(&std::env::temp_dir());
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_load_reads_existing_file() {
        let path = std::env::temp_dir().join(format!("shobu-config-read-{}.toml", std::process::id()));
        std::fs::write(&path, "seed = 5\n[players]\nblack = \"random\"\n").unwrap();
        let result = ShobuConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        let config = result.unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.players.black, PlayerKind::Random);
    }

    #[test]
    fn test_default_path() {
        assert_eq!(ShobuConfig::default_path(), PathBuf::from("shobu.toml"));
    }
}
