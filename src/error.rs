//! Error types for fault normalization.

use thiserror::Error;

/// The errors produced while normalizing a failure.
///
/// Classification itself never fails: an unrecognized failure shape or a
/// missing response degrades to empty fields on the returned fault. The one
/// thing that escapes is a genuine I/O fault raised while copying or reading
/// a response body, which would hide a transport-level problem if swallowed.
#[derive(Debug, Error)]
pub enum Error {
    /// An underlying I/O error occurred while materializing a response body.
    #[error("IO Error")]
    Io(#[from] std::io::Error),
}

/// A `Result` alias where the `Err` case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
