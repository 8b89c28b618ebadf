//! BitIntArray - Fixed-size bit arrays packed into 32-bit words
//!
//! `bitintarray` stores N individually addressable bits in a compact vector of
//! 32-bit words and exposes operations to set, clear, flip, and query single
//! bits, aggregate queries over all bits, and a human-readable rendering.
//!
//! # Key Characteristics
//!
//! - Most-significant-bit-first packing, so a word's binary rendering reads in
//!   logical index order
//! - Bounds-checked operations returning [`Result`] instead of panicking
//! - Fixed size chosen at construction; no resizing
//! - Plain owned value with no internal synchronization
//!
//! # Examples
//!
//! ```
//! use bitintarray::BitArray;
//!
//! let mut ba = BitArray::new(40)?;
//! ba.set(3)?;
//! ba.set(39)?;
//!
//! assert_eq!(ba.count_set(), 2);
//! assert_eq!(ba.set_indices(), vec![3, 39]);
//! assert!(!ba.flip(39)?);
//!
//! // Out-of-range indices are reported, never written
//! assert!(ba.set(40).is_err());
//! # Ok::<(), bitintarray::BitArrayError>(())
//! ```
//!
//! ## Rendering
//!
//! ```
//! use bitintarray::BitArray;
//!
//! let mut ba = BitArray::new(8)?;
//! ba.set(2)?;
//! ba.set(5)?;
//! assert_eq!(ba.render(true), "00100100\n  ^  ^  ");
//! # Ok::<(), bitintarray::BitArrayError>(())
//! ```

pub mod bitarray;
pub mod error;

pub use bitarray::{BitArray, Word, BITS_PER_WORD};
pub use error::{BitArrayError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "BitIntArray";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
