//! Range-resolution error types

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum RangeError {
    /// The range was well-formed but lies outside `[0, total_len - 1]`.
    ///
    /// Surfaced as a 416-equivalent by the transport layer. A malformed
    /// range header is not an error at all; the resolver falls back to the
    /// full file in that case.
    #[error("range {spec:?} not satisfiable for length {total_len}")]
    NotSatisfiable { spec: String, total_len: u64 },
}

impl RangeError {
    #[must_use]
    pub fn not_satisfiable(spec: impl Into<String>, total_len: u64) -> Self {
        Self::NotSatisfiable {
            spec: spec.into(),
            total_len,
        }
    }
}
