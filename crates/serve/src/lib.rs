#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Byte-range-aware file serving for filebay
//!
//! Given a file name under a configured root and an optional `Range` header
//! value, this crate resolves the exact byte window to deliver, derives the
//! response headers, and produces a bounded chunked stream over that window.
//! Single contiguous ranges only; multipart/byteranges is out of scope.
//!
//! The crate has no transport dependency. Callers adapt their framework's
//! request and response types to the plain structs here at the boundary,
//! and are responsible for sanitizing requested names before resolution.

mod headers;
mod info;
mod range;
mod stream;

pub use headers::ResponseHeaders;
pub use info::{FileDescriptor, PartialFileInfo};
pub use range::{resolve_range, ByteWindow};
pub use stream::FileStream;

use filebay_config::ServeConfig;
use filebay_errors::Error;

/// Resolve a download request into response headers and a bounded stream.
///
/// `file_name` is joined against `config.root` and doubles as the
/// `Content-Disposition` display name. All resolution-time failures are
/// returned before any header value exists or byte is read, so the caller
/// can still produce a clean 404 or 416 response; once streaming has begun,
/// failures surface through the stream and require a connection abort.
///
/// Runs identically inline or on a spawned task; the caller decides whether
/// its thread blocks on file IO.
///
/// # Errors
///
/// Returns [`filebay_errors::StorageError::FileNotFound`] for a missing or
/// non-regular file and [`filebay_errors::RangeError::NotSatisfiable`] for a
/// well-formed but unservable range.
pub async fn open_download(
    config: &ServeConfig,
    file_name: &str,
    range_header: Option<&str>,
) -> Result<(ResponseHeaders, FileStream), Error> {
    let path = config.root.join(file_name);
    let info = PartialFileInfo::build(path, file_name, range_header).await?;
    let headers = ResponseHeaders::for_info(&info);
    let stream = FileStream::open(&info, config.chunk_size).await?;
    Ok((headers, stream))
}
