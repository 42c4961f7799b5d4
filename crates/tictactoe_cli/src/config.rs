//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{GameMode, Player as Mark};
use tracing::{debug, info, instrument};

/// Settings for a game on this terminal.
///
/// ```toml
/// mode = "single-player"
/// local_player = "X"
/// first_player = "O"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Game mode.
    #[serde(default)]
    mode: GameMode,

    /// Mark of the person at this terminal.
    #[serde(default = "default_local_player")]
    local_player: Mark,

    /// Mark that moves first.
    #[serde(default = "default_first_player")]
    first_player: Mark,

    /// Seed for the computer's random moves. Fresh entropy when unset.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_local_player() -> Mark {
    Mark::X
}

fn default_first_player() -> Mark {
    Mark::X
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            local_player: default_local_player(),
            first_player: default_first_player(),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces any setting given on the command line.
    #[instrument(skip(self))]
    pub fn apply_overrides(
        &mut self,
        mode: Option<GameMode>,
        local_player: Option<Mark>,
        first_player: Option<Mark>,
        seed: Option<u64>,
    ) {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(local_player) = local_player {
            self.local_player = local_player;
        }
        if let Some(first_player) = first_player {
            self.first_player = first_player;
        }
        if seed.is_some() {
            self.seed = seed;
        }
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
