//! Error types for bit array operations.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side
//! is [`BitArrayError`]. Errors are raised before any storage is touched, so a
//! failed call never leaves a partial write behind.

use thiserror::Error;

/// The error type for `BitArray` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitArrayError {
    /// A logical bit index fell outside `[0, size)`
    #[error("Index {index} out of bounds for size {size}")]
    IndexOutOfRange {
        /// The index that was accessed
        index: usize,
        /// The configured number of bits
        size: usize,
    },

    /// A bit array was requested with no addressable bits
    #[error("Invalid size: {0} (size must be greater than 0)")]
    InvalidSize(usize),
}

/// A specialized `Result` type for bit array operations.
pub type Result<T> = std::result::Result<T, BitArrayError>;
