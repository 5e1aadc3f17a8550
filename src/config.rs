//! Configuration file handling for camera-lister.
//!
//! Loads configuration from `~/.config/camera-lister/config.toml` or a custom path.

use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::camera::Backend;
use crate::output::OutputFormat;

/// Configuration file structure for camera-lister.
/// Loaded from ~/.config/camera-lister/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct CameraConfig {
    #[serde(default)]
    pub backend: Backend,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# camera-lister configuration

[camera]
# Camera API: auto, avfoundation, video4linux, media-foundation
backend = "auto"

[output]
# Output format for `list`: text, json
format = "text"
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Write [`DEFAULT_CONFIG`] to `path`, creating parent directories.
    /// Refuses to overwrite an existing file or follow a dangling link.
    pub fn init(path: &Path) -> Result<(), ConfigError> {
        let io_err = |e: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => ConfigError::AlreadyExists {
                    path: path.to_path_buf(),
                },
                _ => io_err(e),
            })?;
        file.write_all(DEFAULT_CONFIG.as_bytes()).map_err(io_err)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("camera-lister").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/camera-lister/config.toml")
        })
}
