//! Match configuration loaded from TOML.

use crate::agents::Strategy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which agents play a self-play match.
///
/// ```toml
/// name = "baseline"
/// x = "minimax"
/// o = "first-available"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Match name, used in logs.
    #[serde(default = "default_name")]
    name: String,

    /// Agent playing X.
    #[serde(default)]
    x: Strategy,

    /// Agent playing O.
    #[serde(default)]
    o: Strategy,
}

#[instrument]
fn default_name() -> String {
    "minimax-match".to_string()
}

impl MatchConfig {
    /// Creates a configuration with both sides played by `x` and `o`.
    pub fn new(name: impl Into<String>, x: Strategy, o: Strategy) -> Self {
        Self {
            name: name.into(),
            x,
            o,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(name = %config.name, x = %config.x, o = %config.o, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the X agent when `strategy` is given.
    pub fn with_x(mut self, strategy: Option<Strategy>) -> Self {
        if let Some(strategy) = strategy {
            self.x = strategy;
        }
        self
    }

    /// Replaces the O agent when `strategy` is given.
    pub fn with_o(mut self, strategy: Option<Strategy>) -> Self {
        if let Some(strategy) = strategy {
            self.o = strategy;
        }
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(default_name(), Strategy::Minimax, Strategy::Minimax)
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
