//! Resolved per-request file metadata
//!
//! [`PartialFileInfo`] is the single source of truth for one download
//! request: the target file, its length at resolution time, and the byte
//! window to serve. It is built fresh per request and never shared.

use std::path::{Path, PathBuf};

use filebay_errors::{Error, StorageError};
use tokio::fs;

use crate::range::{self, ByteWindow};

/// Resolved download target
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    path: PathBuf,
    display_name: String,
    total_len: u64,
}

impl FileDescriptor {
    /// Path of the file on disk
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name presented to the client, which may differ from the storage path
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Total file length in bytes at resolution time
    #[must_use]
    pub fn total_len(&self) -> u64 {
        self.total_len
    }
}

/// File descriptor plus the resolved byte window
#[derive(Debug, Clone)]
pub struct PartialFileInfo {
    file: FileDescriptor,
    window: ByteWindow,
}

impl PartialFileInfo {
    /// Resolve a file and an optional range header into serving metadata.
    ///
    /// All resolution-time failures happen here, before any header value is
    /// produced or byte read, so the caller can still emit a clean error
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::FileNotFound`] if `path` does not exist or is
    /// not a regular file, and propagates range resolution failures
    /// unchanged.
    pub async fn build(
        path: impl Into<PathBuf>,
        display_name: impl Into<String>,
        range_spec: Option<&str>,
    ) -> Result<Self, Error> {
        let path = path.into();
        let metadata = fs::metadata(&path)
            .await
            .map_err(|e| StorageError::from_io_with_path(&e, &path))?;

        if !metadata.is_file() {
            return Err(StorageError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let total_len = metadata.len();
        let window = range::resolve_range(range_spec, total_len)?;
        tracing::debug!(
            path = %path.display(),
            total_len,
            start = window.start(),
            len = window.len(),
            partial = window.is_partial(),
            "resolved byte window"
        );

        Ok(Self {
            file: FileDescriptor {
                path,
                display_name: display_name.into(),
                total_len,
            },
            window,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.file.display_name()
    }

    #[must_use]
    pub fn total_len(&self) -> u64 {
        self.file.total_len()
    }

    /// First byte offset to serve
    #[must_use]
    pub fn start(&self) -> u64 {
        self.window.start()
    }

    /// Last byte offset to serve, inclusive
    #[must_use]
    pub fn end(&self) -> u64 {
        self.window.end()
    }

    /// Number of bytes to transmit
    #[must_use]
    pub fn len(&self) -> u64 {
        self.window.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Whether the response is 206 partial content
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.window.is_partial()
    }
}
