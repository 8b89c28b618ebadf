//! BitArray - Fixed-size bit array packed into 32-bit words.
//!
//! This module provides a bit array whose bits are stored most-significant-bit
//! first, so that the binary rendering of the storage words reads left to right
//! in logical index order.
//!
//! # Design
//!
//! - Uses `Vec<u32>` for storage (32-bit words)
//! - Storage holds `size / 32 + 1` words, one more than strictly needed when
//!   `size` is a multiple of 32
//! - Bit indexing: word_idx = bit_idx / 32, shift = 32 - (bit_idx % 32) - 1
//! - Every index-taking operation is bounds-checked and returns
//!   [`BitArrayError::IndexOutOfRange`] before touching storage
//!
//! # Examples
//!
//! ```
//! use bitintarray::BitArray;
//!
//! let mut ba = BitArray::new(8)?;
//! ba.set(7)?;
//! assert!(ba.is_set(7)?);
//! assert_eq!(ba.render(false), "00000001");
//!
//! assert!(!ba.flip(7)?);
//! assert_eq!(ba.render(false), "00000000");
//! # Ok::<(), bitintarray::BitArrayError>(())
//! ```

use crate::error::{BitArrayError, Result};
use itertools::Itertools;
use std::fmt;

/// Word type for bit storage (32-bit unsigned integer)
pub type Word = u32;

/// Number of bits per word
pub const BITS_PER_WORD: usize = Word::BITS as usize;

/// Get word index from bit position
#[inline(always)]
const fn get_word_idx(bit_pos: usize) -> usize {
    bit_pos / BITS_PER_WORD
}

/// Get shift of a bit position within its word, counted from the LSB.
///
/// Position 0 of a word lands on the MSB.
#[inline(always)]
const fn get_bit_shift(bit_pos: usize) -> usize {
    BITS_PER_WORD - (bit_pos % BITS_PER_WORD) - 1
}

#[inline(always)]
const fn bit_mask(bit_pos: usize) -> Word {
    1 << get_bit_shift(bit_pos)
}

/// Number of storage words backing `size` bits.
#[inline(always)]
const fn num_words_for(size: usize) -> usize {
    size / BITS_PER_WORD + 1
}

/// Fixed-size bit array using 32-bit word storage.
///
/// All bit indices are 0-based. Index 0 is the highest bit of the first word.
///
/// `BitArray` does no internal locking. Mutation takes `&mut self`, so sharing
/// one instance between threads requires the caller's own synchronization.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitArray {
    /// Storage words (32-bit, MSB-first)
    words: Vec<Word>,
    /// Total number of addressable bits
    size: usize,
}

impl BitArray {
    /// Create a new BitArray with `size` bits, all initialized to 0.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidSize`] if `size` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitintarray::BitArray;
    ///
    /// let ba = BitArray::new(40).unwrap();
    /// assert_eq!(ba.size(), 40);
    /// assert_eq!(ba.num_words(), 2);
    /// assert!(ba.none_set());
    ///
    /// assert!(BitArray::new(0).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            log::warn!("rejected bit array of size 0");
            return Err(BitArrayError::InvalidSize(size));
        }
        let ba = Self::zeroed(size);
        log::debug!(
            "created bit array: size={}, words={}",
            ba.size,
            ba.words.len()
        );
        Ok(ba)
    }

    fn zeroed(size: usize) -> Self {
        Self {
            words: vec![0; num_words_for(size)],
            size,
        }
    }

    /// Get total number of addressable bits.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get number of storage words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Get read-only access to word storage.
    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(BitArrayError::IndexOutOfRange {
                index,
                size: self.size,
            })
        }
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Check whether the bit at `index` is 1.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `index >= size`.
    #[inline]
    pub fn is_set(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.words[get_word_idx(index)] & bit_mask(index) != 0)
    }

    /// Assign the bit at `index` to `value`.
    ///
    /// The bounds check happens before the word is modified.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `index >= size`.
    #[inline]
    pub fn assign(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        let word = &mut self.words[get_word_idx(index)];
        if value {
            *word |= bit_mask(index);
        } else {
            *word &= !bit_mask(index);
        }
        Ok(())
    }

    /// Set the bit at `index` to 1.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `index >= size`.
    #[inline]
    pub fn set(&mut self, index: usize) -> Result<()> {
        self.assign(index, true)
    }

    /// Clear the bit at `index` to 0.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `index >= size`.
    #[inline]
    pub fn unset(&mut self, index: usize) -> Result<()> {
        self.assign(index, false)
    }

    /// Toggle the bit at `index` and return its new value.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `index >= size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitintarray::BitArray;
    ///
    /// let mut ba = BitArray::default();
    /// assert!(ba.flip(3).unwrap());
    /// assert!(!ba.flip(3).unwrap());
    /// ```
    #[inline]
    pub fn flip(&mut self, index: usize) -> Result<bool> {
        let value = !self.is_set(index)?;
        self.assign(index, value)?;
        Ok(value)
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits.
    ///
    /// Bits past `size` are never written, so a popcount over the whole
    /// storage counts exactly the logical positions.
    #[inline]
    pub fn count_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True if at least one bit is set.
    #[inline]
    pub fn any_set(&self) -> bool {
        self.count_set() > 0
    }

    /// True if no bit is set.
    #[inline]
    pub fn none_set(&self) -> bool {
        self.count_set() == 0
    }

    /// True if every one of the `size` bits is set.
    #[inline]
    pub fn all_set(&self) -> bool {
        self.count_set() == self.size
    }

    /// Get indices of all set bits, in ascending order.
    pub fn set_indices(&self) -> Vec<usize> {
        let mut acts = Vec::with_capacity(self.count_set());

        for (word_idx, &word) in self.words.iter().enumerate() {
            let base = word_idx * BITS_PER_WORD;
            let mut remaining = word;
            while remaining != 0 {
                let offset = remaining.leading_zeros() as usize;
                acts.push(base + offset);
                remaining &= !bit_mask(offset);
            }
        }

        acts
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render all storage words as binary digit groups separated by spaces.
    ///
    /// Every word but the last renders all 32 digits; the last renders
    /// `size % 32` digits, which is none when `size` is a multiple of 32.
    /// With `indicate`, a second line marks each set bit with `^` beneath it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitintarray::BitArray;
    ///
    /// let mut ba = BitArray::new(4).unwrap();
    /// ba.set(1).unwrap();
    /// assert_eq!(ba.render(true), "0100\n ^  ");
    /// ```
    pub fn render(&self, indicate: bool) -> String {
        let last = self.words.len() - 1;
        let bits = self
            .words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let width = if i == last {
                    self.size % BITS_PER_WORD
                } else {
                    BITS_PER_WORD
                };
                let mut digits = format!("{:0w$b}", word, w = BITS_PER_WORD);
                digits.truncate(width);
                digits
            })
            .join(" ");

        if !indicate {
            return bits;
        }

        let marks: String = bits
            .chars()
            .map(|c| match c {
                '1' => '^',
                _ => ' ',
            })
            .collect();
        format!("{}\n{}", bits, marks)
    }
}

impl Default for BitArray {
    /// One word's worth of bits.
    fn default() -> Self {
        Self::zeroed(BITS_PER_WORD)
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
