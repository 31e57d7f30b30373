#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration for the filebay serving core
//!
//! The download root and streaming chunk size are explicit configuration
//! values handed to the core at construction. Creating the root directory
//! is a one-time startup step owned by the caller (`ensure_layout`), never
//! a side effect of serving a request.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use filebay_errors::{ConfigError, Error};

/// Default chunk size for streaming reads (80 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 80 * 1024;

/// Serving configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Directory that requested file names are resolved against
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Buffer size for each streamed chunk, in bytes
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl ServeConfig {
    /// Create a configuration rooted at `root` with default chunk size
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or fails validation.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file if it exists, else use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_or_default(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::load_from_file(path).await
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size` is zero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid {
                message: "chunk_size must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Create the download root directory if it does not exist yet.
    ///
    /// Intended to run once at startup, before any request is served.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn ensure_layout(&self) -> Result<(), Error> {
        if !self.root.exists() {
            tracing::info!(root = %self.root.display(), "creating download root");
            fs::create_dir_all(&self.root)
                .await
                .map_err(|e| ConfigError::Invalid {
                    message: format!("cannot create root {}: {e}", self.root.display()),
                })?;
        }
        Ok(())
    }
}
