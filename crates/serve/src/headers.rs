//! Response header derivation
//!
//! Produces plain `(name, value)` pairs so any transport can adapt them to
//! its native response type. No caching or checksum headers are emitted;
//! content type is always `application/octet-stream` and never inferred
//! from the file.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::info::PartialFileInfo;

/// Everything except RFC 5987 attr-char gets percent-encoded in the
/// `filename*` parameter.
const DISPOSITION_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Header set for one download response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeaders {
    status: u16,
    content_disposition: String,
    content_length: u64,
    content_range: Option<String>,
}

impl ResponseHeaders {
    /// Derive the header set from resolved file info
    #[must_use]
    pub fn for_info(info: &PartialFileInfo) -> Self {
        let content_range = info.is_partial().then(|| {
            format!(
                "bytes {}-{}/{}",
                info.start(),
                info.end(),
                info.total_len()
            )
        });

        Self {
            status: if info.is_partial() { 206 } else { 200 },
            content_disposition: content_disposition(info.display_name()),
            content_length: info.len(),
            content_range,
        }
    }

    /// HTTP status code: 206 for partial content, 200 otherwise
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    #[must_use]
    pub fn content_range(&self) -> Option<&str> {
        self.content_range.as_deref()
    }

    /// Flatten into `(name, value)` pairs for the transport adapter
    #[must_use]
    pub fn to_vec(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Accept-Ranges", "bytes".to_string()),
            ("Content-Type", "application/octet-stream".to_string()),
            ("Content-Disposition", self.content_disposition.clone()),
            ("Content-Length", self.content_length.to_string()),
        ];
        if let Some(range) = &self.content_range {
            headers.push(("Content-Range", range.clone()));
        }
        headers
    }
}

/// Build an attachment disposition, escaping the file name when needed.
///
/// Plain ASCII names go out as a quoted `filename`; anything else also gets
/// an RFC 5987 `filename*` parameter alongside an ASCII fallback.
fn content_disposition(name: &str) -> String {
    let needs_escaping = !name.is_ascii()
        || name
            .bytes()
            .any(|b| b < 0x20 || b == b'"' || b == b'\\');

    if !needs_escaping {
        return format!("attachment; filename=\"{name}\"");
    }

    let fallback: String = name
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let encoded = utf8_percent_encode(name, DISPOSITION_ESCAPE);
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
