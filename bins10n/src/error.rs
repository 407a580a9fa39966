//! Error types for encoding and decoding operations.

use std::{io, string::FromUtf8Error};

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = WireError> = core::result::Result<T, E>;

/// Errors that can occur while reading or writing wire values.
#[derive(Debug, Error)]
pub enum WireError {
    /// The source ran out of bytes before the requested width could be read.
    #[error("unexpected end of data: expected {needed} more bytes")]
    UnexpectedEof { needed: usize },
    /// A string payload was not valid UTF-8.
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
    /// A value to be written falls outside the legal range of its wire type.
    #[error("value {value} is outside of the range [{min}, {max}]")]
    OutOfRange { value: i128, min: i128, max: i128 },
    /// The underlying source or sink failed.
    #[error(transparent)]
    Io(io::Error),
}

impl WireError {
    /// Maps a failed `read_exact` of `needed` bytes into a [WireError].
    ///
    /// `UnexpectedEof` is singled out so that short reads are distinguishable from transport
    /// failures; every other I/O error is passed through unchanged.
    pub(crate) fn from_read(err: io::Error, needed: usize) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::UnexpectedEof { needed },
            _ => Self::Io(err),
        }
    }
}

impl From<io::Error> for WireError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
