//! Game configuration.
//!
//! Settings are resolved with the following priority (highest to lowest):
//! 1. Command line flags (applied by the binary)
//! 2. Environment variables (`GO_RULES_BOARD_SIZE`, `GO_RULES_KOMI`)
//! 3. A TOML file
//! 4. Built-in defaults
//!
//! ```toml
//! board_size = 9
//! komi = 5.5
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::constants::{DEFAULT_BOARD_SIZE, DEFAULT_KOMI, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::position::{GameState, new_game};

pub const ENV_BOARD_SIZE: &str = "GO_RULES_BOARD_SIZE";
pub const ENV_KOMI: &str = "GO_RULES_KOMI";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value {value:?} for {key}")]
    Env { key: &'static str, value: String },
    #[error("board size {0} outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    BoardSize(usize),
    #[error("komi must be finite, got {0}")]
    Komi(f64),
}

fn d_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}
fn d_komi() -> f64 {
    DEFAULT_KOMI
}

/// Parameters fixed at the start of a game.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GameConfig {
    #[serde(default = "d_board_size")]
    pub board_size: usize,
    #[serde(default = "d_komi")]
    pub komi: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            komi: DEFAULT_KOMI,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if !self.komi.is_finite() {
            return Err(ConfigError::Komi(self.komi));
        }
        Ok(())
    }

    /// Apply command line overrides, then validate the final settings.
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        komi: Option<f64>,
    ) -> Result<GameConfig, ConfigError> {
        if let Some(size) = board_size {
            self.board_size = size;
        }
        if let Some(komi) = komi {
            self.komi = komi;
        }
        self.validate()?;
        Ok(self)
    }

    /// A fresh game with these settings.
    pub fn new_game(&self) -> GameState {
        new_game(self.board_size, self.komi)
    }
}

/// Load a config file, or defaults when `path` is `None`, then apply
/// environment overrides.
///
/// The result is not validated yet: command line flags still take
/// priority. Finish with [`GameConfig::with_overrides`] or
/// [`GameConfig::validate`].
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            load_from_path(path)?
        }
        None => {
            debug!("No config file given, using built-in defaults");
            GameConfig::default()
        }
    };
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Parse a TOML config file. Missing keys take their defaults.
pub fn load_from_path(path: &Path) -> Result<GameConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply overrides looked up through `lookup` (normally the process
/// environment).
pub fn apply_env_overrides<F>(mut config: GameConfig, lookup: F) -> Result<GameConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_BOARD_SIZE) {
        config.board_size = v.trim().parse().map_err(|_| ConfigError::Env {
            key: ENV_BOARD_SIZE,
            value: v.clone(),
        })?;
    }
    if let Some(v) = lookup(ENV_KOMI) {
        config.komi = v.trim().parse().map_err(|_| ConfigError::Env {
            key: ENV_KOMI,
            value: v.clone(),
        })?;
    }
    Ok(config)
}
