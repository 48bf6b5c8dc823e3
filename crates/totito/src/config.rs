//! Configuration for the Totito application.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use totito_core::BoardSize;
use tracing::{debug, info, instrument};

/// Application settings, read from a TOML file.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TotitoConfig {
    /// Board size preselected on the start screen.
    board_size: BoardSize,

    /// Name shown for player one (X).
    player_one: String,

    /// Name shown for player two (O).
    player_two: String,

    /// File the terminal UI writes its logs to.
    log_file: PathBuf,
}

impl Default for TotitoConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            player_one: default_player_one(),
            player_two: default_player_two(),
            log_file: PathBuf::from("totito.log"),
        }
    }
}

fn default_player_one() -> String {
    "Player 1".to_string()
}

fn default_player_two() -> String {
    "Player 2".to_string()
}

impl TotitoConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = %config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or falls back to defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    ///
    /// Blank names are ignored so the configured ones stay in place.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<BoardSize>,
        player_one: Option<String>,
        player_two: Option<String>,
    ) -> Self {
        if let Some(size) = board_size {
            self.board_size = size;
        }
        if let Some(name) = player_one.filter(|n| !n.trim().is_empty()) {
            self.player_one = name;
        }
        if let Some(name) = player_two.filter(|n| !n.trim().is_empty()) {
            self.player_two = name;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TotitoConfig::default();
        assert_eq!(config.board_size(), &BoardSize::Three);
        assert_eq!(config.player_one(), "Player 1");
        assert_eq!(config.player_two(), "Player 2");
        assert_eq!(config.log_file(), &PathBuf::from("totito.log"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TotitoConfig = toml::from_str("player_two = \"Lucia\"").unwrap();
        assert_eq!(config.player_two(), "Lucia");
        assert_eq!(config.player_one(), "Player 1");
        assert_eq!(config.board_size(), &BoardSize::Three);
    }

    #[test]
    fn test_board_size_from_toml() {
        let config: TotitoConfig = toml::from_str("board_size = 5").unwrap();
        assert_eq!(config.board_size(), &BoardSize::Five);
        assert!(toml::from_str::<TotitoConfig>("board_size = 6").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = TotitoConfig::default().with_overrides(
            Some(BoardSize::Four),
            Some("Ana".to_string()),
            Some("   ".to_string()),
        );
        assert_eq!(config.board_size(), &BoardSize::Four);
        assert_eq!(config.player_one(), "Ana");
        assert_eq!(config.player_two(), "Player 2");
    }

    #[test]
    fn test_error_tracks_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
