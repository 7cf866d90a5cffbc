//! Front-end settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe::TieRule;
use tracing::{debug, info, instrument};

/// Config file read when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Whether a full board with no winner ends the game.
    tie_rule: TieRule,

    /// File the interactive front end writes its trace output to.
    log_file: PathBuf,

    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tie_rule: TieRule::default(),
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(tie_rule = %settings.tie_rule, "Config loaded successfully");
        Ok(settings)
    }

    /// Resolves settings for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`]
    /// is read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies a command-line override of the tie rule.
    #[instrument(skip(self))]
    pub fn with_tie_rule(mut self, tie_rule: Option<TieRule>) -> Self {
        if let Some(rule) = tie_rule {
            self.tie_rule = rule;
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
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(*settings.tie_rule(), TieRule::Detect);
        assert_eq!(settings.log_file(), &PathBuf::from("tictactoe.log"));
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("tie_rule = \"never\"\n");
        let settings = Settings::from_file(file.path()).expect("valid config");
        assert_eq!(*settings.tie_rule(), TieRule::Never);
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_config("board_size = 4\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_bad_tie_rule_rejected() {
        let file = write_config("tie_rule = \"sometimes\"\n");
        assert!(Settings::from_file(file.path()).is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.toml");
        let err = Settings::load(Some(missing.as_path())).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_cli_override_wins() {
        let file = write_config("tie_rule = \"detect\"\n");
        let settings = Settings::from_file(file.path())
            .expect("valid config")
            .with_tie_rule(Some(TieRule::Never));
        assert_eq!(*settings.tie_rule(), TieRule::Never);

        let unchanged = Settings::default().with_tie_rule(None);
        assert_eq!(*unchanged.tie_rule(), TieRule::Detect);
    }
}
