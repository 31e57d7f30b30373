//! Errors raised while a response body stream is being drained
//!
//! By the time these fire, headers have already been committed; the
//! transport can only abort the connection.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum StreamError {
    #[error("read failed after {bytes_sent} bytes: {message}")]
    ReadFailed { message: String, bytes_sent: u64 },

    /// The file shrank underneath an open stream.
    #[error("file truncated: expected {expected} more bytes, got end of file")]
    Truncated { expected: u64 },
}

impl StreamError {
    #[must_use]
    pub fn read_failed(err: &std::io::Error, bytes_sent: u64) -> Self {
        Self::ReadFailed {
            message: err.to_string(),
            bytes_sent,
        }
    }
}
