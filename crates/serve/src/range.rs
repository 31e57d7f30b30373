//! Byte-range resolution against a known total length
//!
//! Implements the single-range subset of `Range: bytes=<from>-<to>`.
//! A header that does not parse at all is not an error: resumable-download
//! clients expect the server to fall back to the full file in that case.
//! A header that parses but cannot be satisfied is a hard rejection.

use filebay_errors::RangeError;

/// Resolved inclusive byte window within a file
///
/// Stored as `(start, len)` so the degenerate window of an empty file
/// (`len == 0`) stays representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteWindow {
    start: u64,
    len: u64,
    partial: bool,
}

impl ByteWindow {
    fn full(total_len: u64) -> Self {
        Self {
            start: 0,
            len: total_len,
            partial: false,
        }
    }

    fn slice(start: u64, len: u64) -> Self {
        Self {
            start,
            len,
            partial: true,
        }
    }

    /// First byte offset to serve
    #[must_use]
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last byte offset to serve, inclusive.
    ///
    /// Degenerate for the empty window (`len() == 0`), where it equals
    /// `start()`.
    #[must_use]
    pub fn end(&self) -> u64 {
        self.start + self.len.saturating_sub(1)
    }

    /// Number of bytes to serve
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether this window triggers a 206 response
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.partial
    }
}

/// Resolve an optional `Range` header value into a byte window.
///
/// Only the first range of a comma-separated list is honored.
///
/// # Errors
///
/// Returns [`RangeError::NotSatisfiable`] when the header parses but the
/// requested window lies outside `[0, total_len - 1]`, when a suffix range
/// requests zero bytes, or when the bounds are inverted.
pub fn resolve_range(spec: Option<&str>, total_len: u64) -> Result<ByteWindow, RangeError> {
    let Some(raw) = spec else {
        return Ok(ByteWindow::full(total_len));
    };

    let Some((from, to)) = parse_spec(raw) else {
        tracing::warn!(spec = raw, "ignoring malformed range header");
        return Ok(ByteWindow::full(total_len));
    };

    match (from, to) {
        (Some(from), to) => {
            if from >= total_len {
                return Err(RangeError::not_satisfiable(raw, total_len));
            }
            // Overshooting end bounds are clamped, not rejected
            let end = to.map_or(total_len - 1, |t| t.min(total_len - 1));
            if end < from {
                return Err(RangeError::not_satisfiable(raw, total_len));
            }
            Ok(ByteWindow::slice(from, end - from + 1))
        }
        (None, Some(suffix)) => {
            // Last-N-bytes form. N == 0 is rejected outright while an
            // oversized N is tolerated and serves the whole file; this
            // asymmetry is intentional and matches deployed client
            // expectations.
            if suffix == 0 || total_len == 0 {
                return Err(RangeError::not_satisfiable(raw, total_len));
            }
            let len = suffix.min(total_len);
            Ok(ByteWindow::slice(total_len - len, len))
        }
        (None, None) => unreachable!("parse_spec rejects bound-less ranges"),
    }
}

/// Parse `bytes=<from>-<to>` into its optional bounds.
///
/// Returns `None` for anything that is not a well-formed single byte-range
/// expression with at least one bound.
fn parse_spec(raw: &str) -> Option<(Option<u64>, Option<u64>)> {
    let ranges = raw.trim().strip_prefix("bytes=")?;
    let first = ranges.split(',').next()?;
    let (from_str, to_str) = first.split_once('-')?;

    let from = parse_bound(from_str)?;
    let to = parse_bound(to_str)?;
    if from.is_none() && to.is_none() {
        return None;
    }
    Some((from, to))
}

fn parse_bound(s: &str) -> Option<Option<u64>> {
    let s = s.trim();
    if s.is_empty() {
        return Some(None);
    }
    s.parse::<u64>().ok().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn resolve(spec: &str, total_len: u64) -> Result<ByteWindow, RangeError> {
        resolve_range(Some(spec), total_len)
    }

    #[test]
    fn no_header_serves_full_file() {
        let window = resolve_range(None, 1000).unwrap();
        assert_eq!(window.start(), 0);
        assert_eq!(window.end(), 999);
        assert_eq!(window.len(), 1000);
        assert!(!window.is_partial());
    }

    #[test]
    fn bounded_range() {
        let window = resolve("bytes=0-99", 1000).unwrap();
        assert_eq!((window.start(), window.end()), (0, 99));
        assert_eq!(window.len(), 100);
        assert!(window.is_partial());
    }

    #[test]
    fn open_ended_range_runs_to_eof() {
        let window = resolve("bytes=500-", 1000).unwrap();
        assert_eq!((window.start(), window.end()), (500, 999));
        assert_eq!(window.len(), 500);
        assert!(window.is_partial());
    }

    #[test]
    fn overshooting_end_is_clamped() {
        let window = resolve("bytes=0-1999", 1000).unwrap();
        assert_eq!((window.start(), window.end()), (0, 999));

        let window = resolve("bytes=990-5000", 1000).unwrap();
        assert_eq!((window.start(), window.end()), (990, 999));
    }

    #[test]
    fn start_past_eof_is_unsatisfiable() {
        assert!(resolve("bytes=2000-", 1000).is_err());
        assert!(resolve("bytes=1000-", 1000).is_err());
        assert!(resolve("bytes=1000-1500", 1000).is_err());
    }

    #[test]
    fn suffix_range() {
        let window = resolve("bytes=-50", 1000).unwrap();
        assert_eq!((window.start(), window.end()), (950, 999));
        assert_eq!(window.len(), 50);
        assert!(window.is_partial());
    }

    #[test]
    fn oversized_suffix_serves_whole_file() {
        let window = resolve("bytes=-5000", 1000).unwrap();
        assert_eq!((window.start(), window.end()), (0, 999));
        assert!(window.is_partial());
    }

    #[test]
    fn zero_suffix_is_unsatisfiable() {
        assert!(resolve("bytes=-0", 1000).is_err());
    }

    #[test]
    fn inverted_bounds_are_unsatisfiable() {
        assert!(resolve("bytes=500-100", 1000).is_err());
    }

    #[test]
    fn malformed_headers_fall_back_to_full_file() {
        for spec in [
            "bytes=",
            "bytes=-",
            "bytes=abc-def",
            "bytes=1.5-2",
            "bites=0-99",
            "0-99",
            "bytes 0-99",
            "bytes=-5-10",
        ] {
            let window = resolve(spec, 1000).unwrap();
            assert!(!window.is_partial(), "spec {spec:?} should be ignored");
            assert_eq!(window.len(), 1000);
        }
    }

    #[test]
    fn only_first_range_of_a_list_is_honored() {
        let window = resolve("bytes=0-9,100-199", 1000).unwrap();
        assert_eq!((window.start(), window.end()), (0, 9));
        assert!(window.is_partial());
    }

    #[test]
    fn bounds_tolerate_whitespace() {
        let window = resolve("bytes=0 - 99", 1000).unwrap();
        assert_eq!((window.start(), window.end()), (0, 99));
    }

    #[test]
    fn empty_file() {
        let window = resolve_range(None, 0).unwrap();
        assert_eq!(window.len(), 0);
        assert!(window.is_empty());
        assert!(!window.is_partial());

        assert!(resolve("bytes=0-", 0).is_err());
        assert!(resolve("bytes=-5", 0).is_err());
        assert!(resolve("bytes=0-10", 0).is_err());
    }

    proptest! {
        // The `prop_assume!` below rejects ~5/6 of drawn cases, so the
        // default global reject cap (1024) aborts before 256 successes.
        #![proptest_config(ProptestConfig {
            max_global_rejects: 65536,
            ..ProptestConfig::default()
        })]

        #[test]
        fn valid_bounded_ranges_resolve_exactly(
            total_len in 1u64..1_000_000,
            from in 0u64..1_000_000,
            to in 0u64..1_000_000,
        ) {
            prop_assume!(from <= to && to < total_len);
            let window = resolve(&format!("bytes={from}-{to}"), total_len).unwrap();
            prop_assert_eq!(window.start(), from);
            prop_assert_eq!(window.end(), to);
            prop_assert_eq!(window.len(), to - from + 1);
            prop_assert!(window.is_partial());
        }

        #[test]
        fn resolved_windows_stay_inside_the_file(
            total_len in 1u64..1_000_000,
            spec in "bytes=[0-9]{0,7}-[0-9]{0,7}",
        ) {
            if let Ok(window) = resolve(&spec, total_len) {
                prop_assert!(window.len() >= 1);
                prop_assert!(window.start() <= window.end());
                prop_assert!(window.end() < total_len);
            }
        }
    }
}
