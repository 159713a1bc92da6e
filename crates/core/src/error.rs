//! Error types for huffpack.
//!
//! Library operations return structured errors rather than panicking.
//! Lookups that can legitimately miss (a symbol with no leaf, a path that
//! leaves the tree) return `Option` instead and never reach this module.

use thiserror::Error;

/// Top-level error type for all fallible operations.
///
/// Each variant corresponds to a failure domain:
/// - Bit I/O: reading bits from a packed word buffer
/// - Huffman: encode/decode failures against a coding tree
/// - I/O: reading input text from disk
/// - Config: command-line configuration problems
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Codec error (e.g., symbol missing from the tree, truncated payload)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Bit-level I/O errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitIoError {
    /// Attempted to read past the last word
    #[error("unexpected end of bit stream at bit {position}")]
    UnexpectedEof { position: usize },

    /// Byte input does not hold a whole number of words
    #[error("insufficient bits: requested {requested}, available {available}")]
    InsufficientBits { requested: usize, available: usize },
}

/// Encode/decode errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// Nothing to encode
    #[error("empty input: nothing to encode")]
    EmptyInput,

    /// A byte of the input has no leaf in the tree; the encode is aborted
    #[error("symbol {symbol:#04x} at position {position} has no code in the tree")]
    SymbolNotFound { symbol: u8, position: usize },

    /// The packed words ran out before the declared character count was decoded
    #[error("packed buffer truncated: decoded {decoded} of {expected} characters")]
    Truncated { decoded: usize, expected: usize },

    /// A decode walk needed a child the tree does not have
    #[error("invalid path at bit position {position}")]
    InvalidPath { position: usize },

    /// The length header of a packed buffer is not a valid character count
    #[error("invalid length header {0}")]
    InvalidHeader(i64),

    /// The packed buffer has no length header at all
    #[error("packed buffer has no length header")]
    MissingHeader,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
