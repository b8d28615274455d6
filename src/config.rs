//! Game configuration loaded from TOML and command-line overrides.

use crate::cli::{Cli, DEFAULT_CONFIG};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Mark;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark that opens every game.
    #[serde(default = "default_first_mover")]
    first_mover: Mark,

    /// Clear the terminal before drawing each turn.
    #[serde(default = "default_true")]
    clear_screen: bool,

    /// Print the running score after each game.
    #[serde(default = "default_true")]
    show_scores: bool,
}

fn default_first_mover() -> Mark {
    Mark::Cross
}

fn default_true() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_mover: default_first_mover(),
            clear_screen: true,
            show_scores: true,
        }
    }
}

impl GameConfig {
    /// Creates a configuration with explicit values.
    pub fn new(first_mover: Mark, clear_screen: bool, show_scores: bool) -> Self {
        Self {
            first_mover,
            clear_screen,
            show_scores,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_mover = %config.first_mover, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit `--config` path must exist. The default file is optional
    /// and silently skipped when absent. Flags override file values.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve_with_default(cli, Path::new(DEFAULT_CONFIG))
    }

    /// Like [`GameConfig::resolve`], reading `default_path` when no
    /// `--config` flag is given.
    #[instrument(skip(cli), fields(default_path = %default_path.display()))]
    pub fn resolve_with_default(cli: &Cli, default_path: &Path) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if default_path.exists() => Self::from_file(default_path)?,
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        Ok(base.with_overrides(cli))
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(first) = cli.first {
            self.first_mover = first;
        }
        if cli.no_clear {
            self.clear_screen = false;
        }
        if cli.no_scores {
            self.show_scores = false;
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
