//! Window configuration loaded from TOML
//!
//! Hosts usually hard-code a window name and size; this module lets them
//! keep those in a small TOML file instead and hand the parsed result to
//! [`crate::scene2d::Scenegraph2D::from_config`] or
//! [`crate::scene3d::Scenegraph3D::from_config`].

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading or parsing a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file '{path}'")]
    Io {
        /// Path that failed to read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid TOML for this schema
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

/// Window settings for a scenegraph's backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Scene".to_owned(),
            width: 800,
            height: 600,
        }
    }
}

impl WindowConfig {
    /// Parse a configuration from TOML text. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML for
    /// this schema.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents do not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(
            "loaded window config '{}' ({}x{})",
            config.title, config.width, config.height
        );
        Ok(config)
    }
}

/// Engine-level settings: the window plus behavior knobs the host reads
/// at startup.
///
/// The scenegraphs only need the nested [`WindowConfig`]
/// (`Scenegraph2D::from_config(&config.window)`); the remaining fields
/// are for the host's own loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window settings handed to the scenegraph's backend
    pub window: WindowConfig,
    /// Log level filter the host applies when initializing logging
    pub log_level: String,
    /// Target FPS for frame-rate limiting; `None` renders unthrottled
    pub target_fps: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_level: "info".to_owned(),
            target_fps: None,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML text. Missing fields and sections
    /// take their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML for
    /// this schema.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents do not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(
            "loaded engine config (window '{}', log level '{}')",
            config.window.title, config.log_level
        );
        Ok(config)
    }
}
