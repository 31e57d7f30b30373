#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for the filebay file-serving core
//!
//! This crate provides fine-grained error types organized by domain.
//! All error types implement Clone for easier handling at the transport
//! boundary.

use thiserror::Error;

pub mod config;
pub mod range;
pub mod storage;
pub mod stream;

// Re-export all error types at the root
pub use config::ConfigError;
pub use range::RangeError;
pub use storage::StorageError;
pub use stream::StreamError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("range error: {0}")]
    Range(#[from] RangeError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Conceptual HTTP status for resolution-time failures.
    ///
    /// Returns `Some(404)` for missing files, `Some(416)` for unsatisfiable
    /// ranges, and `None` for errors that occur after headers were committed
    /// (the transport must abort the connection instead of responding).
    #[must_use]
    pub fn status_hint(&self) -> Option<u16> {
        match self {
            Self::Storage(StorageError::FileNotFound { .. }) => Some(404),
            Self::Range(RangeError::NotSatisfiable { .. }) => Some(416),
            Self::Stream(_) => None,
            _ => Some(500),
        }
    }
}
