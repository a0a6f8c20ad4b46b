//! Error types for front-coded lists.

use thiserror::Error;

/// Error variants for front-coded list operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An index was provided that is out of the list's bounds.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// An offset/cap pair does not fit in the destination slice.
    #[error("invalid range: offset {offset} + cap {cap} exceeds destination length {len}")]
    InvalidRange {
        /// Offset into the destination slice.
        offset: usize,
        /// Maximum number of elements to write.
        cap: usize,
        /// Length of the destination slice.
        len: usize,
    },

    /// A block ratio smaller than 1 was requested at construction.
    #[error("ratio must be >= 1, got {0}")]
    InvalidRatio(usize),

    /// A serialized buffer failed structural validation.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// An I/O error occurred during serialization or deserialization.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for front-coded list operations.
pub type Result<T> = std::result::Result<T, Error>;
