//! Bounded, chunked file streaming
//!
//! [`FileStream`] reads exactly the resolved window and nothing more. The
//! file handle is owned by the stream and released when it is dropped, so
//! cancellation is simply dropping the stream between chunk reads.

use bytes::Bytes;
use filebay_errors::{Error, StorageError, StreamError};
use futures::Stream;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, SeekFrom};

use crate::info::PartialFileInfo;

/// Forward-only byte stream over a resolved window
///
/// Single-consumer; restart by opening a new stream. Each stream holds its
/// own read-only file handle, so concurrent requests for the same file need
/// no coordination.
#[derive(Debug)]
pub struct FileStream {
    file: File,
    remaining: u64,
    sent: u64,
    chunk_size: usize,
}

impl FileStream {
    /// Open the file and position the cursor at the window start.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::FileNotFound`] if the file vanished between
    /// resolution and open, or an IO error from the initial seek.
    pub async fn open(info: &PartialFileInfo, chunk_size: usize) -> Result<Self, Error> {
        let mut file = File::open(info.path())
            .await
            .map_err(|e| StorageError::from_io_with_path(&e, info.path()))?;

        if info.start() > 0 {
            file.seek(SeekFrom::Start(info.start()))
                .await
                .map_err(|e| StorageError::from_io_with_path(&e, info.path()))?;
        }

        Ok(Self {
            file,
            remaining: info.len(),
            sent: 0,
            chunk_size: chunk_size.max(1),
        })
    }

    /// Read the next chunk, or `None` once the window is exhausted.
    ///
    /// Chunks are at most `chunk_size` bytes; the final chunk is truncated
    /// to the remaining byte count.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::ReadFailed`] on IO failure and
    /// [`StreamError::Truncated`] if the file hits end-of-file before the
    /// window is satisfied (shrunk by an external writer).
    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>, Error> {
        if self.remaining == 0 {
            return Ok(None);
        }

        let want = usize::try_from(self.remaining.min(self.chunk_size as u64))
            .unwrap_or(self.chunk_size);
        let mut buf = vec![0u8; want];
        let mut filled = 0;

        while filled < want {
            let n = self.file.read(&mut buf[filled..]).await.map_err(|e| {
                tracing::error!(
                    bytes_sent = self.sent,
                    error = %e,
                    "read failed mid-stream"
                );
                StreamError::read_failed(&e, self.sent)
            })?;

            if n == 0 {
                return Err(StreamError::Truncated {
                    expected: self.remaining - filled as u64,
                }
                .into());
            }
            filled += n;
        }

        self.remaining -= want as u64;
        self.sent += want as u64;
        Ok(Some(Bytes::from(buf)))
    }

    /// Bytes not yet produced from the window
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Adapt into a [`futures::Stream`] for response body writers.
    ///
    /// The underlying handle travels with the stream and is closed when the
    /// stream is dropped, exhausted, or errors.
    #[must_use]
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes, Error>> + Send {
        futures::stream::try_unfold(self, |mut stream| async move {
            Ok(stream.next_chunk().await?.map(|chunk| (chunk, stream)))
        })
    }
}
