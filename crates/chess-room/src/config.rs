//! Configuration file loading for the room service.

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

/// Settings for hosting rooms.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RoomConfig {
    /// Maximum number of rooms that may exist at once. Defaults to 64.
    #[serde(default = "default_max_rooms")]
    pub max_rooms: usize,
    /// Maximum length of a room name, in characters. Defaults to 20.
    #[serde(default = "default_max_room_name_length")]
    pub max_room_name_length: usize,
    /// Default log filter directive, used when `RUST_LOG` is unset.
    /// Defaults to "info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_rooms() -> usize {
    64
}

fn default_max_room_name_length() -> usize {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RoomConfig {
    fn default() -> Self {
        RoomConfig {
            max_rooms: default_max_rooms(),
            max_room_name_length: default_max_room_name_length(),
            log_level: default_log_level(),
        }
    }
}

impl RoomConfig {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `chess-room.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess-room.toml")
    }
}
