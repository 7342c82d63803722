//! Runtime configuration.
//!
//! Values come from an optional TOML file, then `TETROMINO_*` environment
//! variables override individual fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameOptions, ScriptedShapes};
use crate::input::KeyBindings;
use crate::core::shapes::MAX_FRAME_SIZE;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_TICK_MS, SPAWN_X, SPAWN_Y};

pub const ENV_CONFIG: &str = "TETROMINO_CONFIG";
pub const ENV_TICK_MS: &str = "TETROMINO_TICK_MS";
pub const ENV_SEED: &str = "TETROMINO_SEED";
pub const ENV_LOG_PATH: &str = "TETROMINO_LOG_PATH";
pub const ENV_CLEAR_ROWS: &str = "TETROMINO_CLEAR_ROWS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{var}={value:?} is not a valid {expected}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{field} = {value} is outside {min}..={max}")]
    SpawnOutOfRange {
        field: &'static str,
        value: i8,
        min: i8,
        max: i8,
    },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid piece sequence: {0}")]
    Pieces(#[from] crate::core::CoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gravity interval in milliseconds
    pub tick_ms: u32,
    /// Seed for the uniform shape source; 0 picks one from the clock.
    pub seed: u32,
    pub spawn_x: i8,
    pub spawn_y: i8,
    /// Remove full rows after each lock.
    pub clear_full_rows: bool,
    /// Fixed cyclic piece order such as `"IOTSZJL"`, replacing random picks.
    pub pieces: Option<String>,
    pub log_path: Option<PathBuf>,
    pub keys: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            seed: 0,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            clear_full_rows: false,
            pieces: None,
            log_path: None,
            keys: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Parse TOML text. Missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The spawn anchor must leave at least one frame column on the board and
    /// start no lower than the last row.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_x = 1 - MAX_FRAME_SIZE as i8;
        check_range("spawn_x", self.spawn_x, min_x, BOARD_WIDTH as i8 - 1)?;
        let min_y = -(MAX_FRAME_SIZE as i8);
        check_range("spawn_y", self.spawn_y, min_y, BOARD_HEIGHT as i8 - 1)
    }

    /// File named by `TETROMINO_CONFIG` (if any) plus environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match non_empty(lookup(ENV_CONFIG)) {
            Some(path) => Self::load(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(value) = non_empty(lookup(ENV_TICK_MS)) {
            self.tick_ms = parse_env(ENV_TICK_MS, value, "interval in milliseconds")?;
        }
        if let Some(value) = non_empty(lookup(ENV_SEED)) {
            self.seed = parse_env(ENV_SEED, value, "u32 seed")?;
        }
        if let Some(value) = non_empty(lookup(ENV_LOG_PATH)) {
            self.log_path = Some(PathBuf::from(value));
        }
        if let Some(value) = non_empty(lookup(ENV_CLEAR_ROWS)) {
            self.clear_full_rows = match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        var: ENV_CLEAR_ROWS,
                        value,
                        expected: "boolean",
                    })
                }
            };
        }
        Ok(())
    }

    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            spawn_x: self.spawn_x,
            spawn_y: self.spawn_y,
            clear_full_rows: self.clear_full_rows,
        }
    }

    /// Scripted shape source when `pieces` is set.
    pub fn scripted_shapes(&self) -> Result<Option<ScriptedShapes>, ConfigError> {
        match self.pieces.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(Some(ScriptedShapes::parse(text)?)),
            _ => Ok(None),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn check_range(field: &'static str, value: i8, min: i8, max: i8) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::SpawnOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_env<T: std::str::FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value, expected })
}
