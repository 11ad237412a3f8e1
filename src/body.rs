//! Body seams for the two transports.
//!
//! The http-library transport hands over its body through [`Content`], a
//! text source that completes asynchronously. The raw web transport hands
//! over a blocking, possibly-seekable byte stream through [`BodyStream`].
//! [`duplicate_stream`] is the copy step that lets the normalizer read a raw
//! body without consuming the transport's one-shot stream.

use std::io::{self, Cursor, Read, Seek};

use bytes::BytesMut;
use futures::future::BoxFuture;

const READ_BUFFER_SIZE: usize = 16 * 1024;

/// Content source attached to an http-library response.
///
/// The transport produces the text asynchronously; the normalizer blocks
/// until the read completes, so callers always observe fully materialized
/// text.
pub trait Content: Send {
    /// Reads the full body text.
    fn text(&mut self) -> BoxFuture<'_, crate::Result<String>>;
}

/// Content that is already buffered in memory.
///
/// Yields the same text on every read, so repeated extraction from the same
/// response stays deterministic.
#[derive(Clone, Debug)]
pub struct BufferedContent {
    text: String,
}

impl BufferedContent {
    /// Wraps the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Content for BufferedContent {
    fn text(&mut self) -> BoxFuture<'_, crate::Result<String>> {
        let text = self.text.clone();
        Box::pin(async move { Ok(text) })
    }
}

/// Blocking body stream attached to a raw web response.
///
/// Matches the surface low-level web responses actually expose: reads may
/// hand back partial data, the stream may refuse reads entirely, and
/// repositioning is optional.
pub trait BodyStream: Read + Send {
    /// Whether the stream can currently serve reads.
    fn is_readable(&self) -> bool;

    /// Whether the stream supports repositioning.
    fn is_seekable(&self) -> bool;

    /// Resets the read position to the start of the stream.
    ///
    /// Only meaningful when [`is_seekable`](Self::is_seekable) returns true.
    fn rewind(&mut self) -> io::Result<()>;
}

impl<T: AsRef<[u8]> + Send> BodyStream for Cursor<T> {
    fn is_readable(&self) -> bool {
        true
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn rewind(&mut self) -> io::Result<()> {
        Seek::rewind(self)
    }
}

/// Copies `origin` into a fresh, independently seekable buffer.
///
/// The copy proceeds in bounded chunks until the origin reports end of data,
/// so sources that hand back partial reads are drained correctly. A seekable
/// origin is rewound afterwards: any later consumer of the same response must
/// observe the stream exactly as the transport left it. The returned cursor
/// is positioned at the start; its ownership passes to the caller, while the
/// origin stays open and owned by whoever owns the failure.
pub(crate) fn duplicate_stream(origin: &mut dyn BodyStream) -> io::Result<Cursor<Vec<u8>>> {
    let mut chunks = vec![];
    loop {
        let mut chunk = BytesMut::zeroed(READ_BUFFER_SIZE);
        let read = origin.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        chunk.truncate(read);
        chunks.push(chunk.freeze());
    }
    if origin.is_seekable() {
        origin.rewind()?;
    }
    Ok(Cursor::new(chunks.concat()))
}
