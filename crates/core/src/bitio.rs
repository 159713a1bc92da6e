//! Bit-level I/O over fixed-width 32-bit words.
//!
//! `BitWriter` and `BitReader` move single bits in and out of a `u32` word
//! buffer. Logical bit `i` lives at bit `i % 32` of word `i / 32`, so the
//! first bit of the stream is the least significant bit of the first word.
//!
//! The word width is fixed at 32 regardless of the host, which keeps packed
//! buffers identical across platforms.
//!
//! # Padding Rules
//! - BitWriter: unused bits of the last word, and any spare words from
//!   capacity doubling, are zero
//! - BitReader: cannot tell padding from data (caller must know when to stop)
//!
//! # Example
//! ```
//! use huffpack_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bit(true);
//! writer.write_bit(false);
//! writer.write_bit(true);
//!
//! let words = writer.finish();
//! assert_eq!(words, vec![0b101]);
//!
//! let mut reader = BitReader::new(&words);
//! assert!(reader.read_bit().unwrap());
//! assert!(!reader.read_bit().unwrap());
//! ```

use crate::error::{BitIoError, Result};

/// Width of one packed word in bits.
pub const WORD_BITS: usize = 32;

/// Writes bits LSB-first into a growable word buffer.
///
/// # Invariants
/// - `words.len()` is a power of two, at least 1
/// - `bit_count <= words.len() * WORD_BITS`
#[derive(Debug, Clone)]
pub struct BitWriter {
    /// Word storage, zero-filled beyond `bit_count`
    words: Vec<u32>,
    /// Number of bits written so far
    bit_count: usize,
}

impl BitWriter {
    /// Create a writer with capacity for one word.
    pub fn new() -> Self {
        Self {
            words: vec![0],
            bit_count: 0,
        }
    }

    /// Append one bit, doubling the word capacity when full.
    pub fn write_bit(&mut self, bit: bool) {
        let word_idx = self.bit_count / WORD_BITS;
        if word_idx >= self.words.len() {
            let doubled = self.words.len() * 2;
            self.words.resize(doubled, 0);
        }

        if bit {
            self.words[word_idx] |= 1 << (self.bit_count % WORD_BITS);
        }
        self.bit_count += 1;
    }

    /// Append a run of bits in order.
    pub fn write_bits<I: IntoIterator<Item = bool>>(&mut self, bits: I) {
        for bit in bits {
            self.write_bit(bit);
        }
    }

    /// Finish writing and return every allocated word, spare capacity
    /// included.
    pub fn finish(self) -> Vec<u32> {
        self.words
    }

    /// Return the number of words currently allocated.
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Return the total number of bits written.
    pub fn bit_len(&self) -> usize {
        self.bit_count
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads bits LSB-first from a word buffer.
///
/// # Invariants
/// - `bit_position` never exceeds `words.len() * WORD_BITS`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source words
    words: &'a [u32],
    /// Current bit position (0 = LSB of first word)
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new BitReader for the given words.
    pub fn new(words: &'a [u32]) -> Self {
        Self {
            words,
            bit_position: 0,
        }
    }

    /// Read a single bit.
    ///
    /// # Errors
    /// `BitIoError::UnexpectedEof` once every word has been consumed.
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.is_empty() {
            return Err(BitIoError::UnexpectedEof {
                position: self.bit_position,
            }
            .into());
        }

        let word = self.words[self.bit_position / WORD_BITS];
        let bit = (word >> (self.bit_position % WORD_BITS)) & 1 == 1;
        self.bit_position += 1;
        Ok(bit)
    }

    /// Return the number of bits remaining in the buffer.
    pub fn bits_remaining(&self) -> usize {
        self.words.len() * WORD_BITS - self.bit_position
    }

    /// Return the current bit position.
    pub fn position(&self) -> usize {
        self.bit_position
    }

    /// Check if we're at the end of the buffer.
    pub fn is_empty(&self) -> bool {
        self.bit_position >= self.words.len() * WORD_BITS
    }
}
