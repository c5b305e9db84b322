//! Error types for cuestream-format.

use std::ffi::NulError;
use thiserror::Error;

/// Result type for cuestream-format operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cuestream-format operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer too small for the field being read.
    #[error("Buffer underflow: need {need} bytes, have {have}")]
    BufferUnderflow { need: usize, have: usize },

    /// A NUL-terminated string runs past the end of the buffer.
    #[error("Unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// Type tag that does not name any known action class.
    #[error("Unknown action type tag: {0}")]
    UnknownType(u16),

    /// Known action class that this crate does not decode.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// A string destined for a NUL-terminated field contains a NUL byte.
    #[error("Invalid string: {0}")]
    InteriorNul(#[from] NulError),

    /// Extra data longer than its 16-bit length prefix can describe.
    #[error("Extra data too long: {0} bytes (max {max})", max = u16::MAX)]
    ExtraDataTooLong(usize),
}

impl Error {
    /// Create an unsupported error.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Whether the error means the input ended before the record did.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            Self::BufferUnderflow { .. } | Self::UnterminatedString { .. }
        )
    }
}
