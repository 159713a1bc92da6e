//! Bit packer and unpacker.
//!
//! Encoding concatenates the path of every input byte into one bit stream
//! and packs it into 32-bit words (see [`crate::bitio`]). The buffer is
//! prefixed by the number of characters encoded, not the number of bits.
//!
//! Decoding walks the tree one bit at a time from the root, emitting a byte
//! at every leaf and restarting at the root, until the declared number of
//! characters has been produced.
//!
//! # Packed Format
//!
//! ```text
//! +----------------------+
//! | char_count           |  header, non-negative 32-bit integer
//! +----------------------+
//! | word 0               |  bits 0..32 of the stream, bit 0 = LSB
//! +----------------------+
//! | word 1 ...           |  capacity doubles; spare words are zero
//! +----------------------+
//! ```
//!
//! A one-symbol tree encodes every character with the empty path, so its
//! payload is a single zero word and decoding consumes no bits at all.

use crate::bitio::{BitReader, BitWriter, WORD_BITS};
use crate::error::{BitIoError, HuffmanError, Result};
use crate::path::CodeTable;
use crate::tree::{CodingTree, Node};

/// Largest character count the 32-bit signed header can carry.
pub const MAX_CHARS: usize = i32::MAX as usize;

/// Size of one serialized word in bytes.
const WORD_BYTES: usize = WORD_BITS / 8;

/// Length-prefixed packed bit stream.
///
/// # Invariants
/// - `char_count <= MAX_CHARS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    char_count: usize,
    words: Vec<u32>,
}

impl PackedBuffer {
    /// Assemble a buffer from a header value and payload words.
    ///
    /// # Errors
    /// `HuffmanError::InvalidHeader` if `char_count` exceeds `MAX_CHARS`.
    pub fn new(char_count: usize, words: Vec<u32>) -> Result<Self> {
        if char_count > MAX_CHARS {
            return Err(HuffmanError::InvalidHeader(char_count as i64).into());
        }
        Ok(Self { char_count, words })
    }

    /// Number of characters the payload decodes to.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Header followed by payload, as signed 32-bit integers.
    pub fn to_words(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(1 + self.words.len());
        out.push(self.char_count as i32);
        out.extend(self.words.iter().map(|&w| w as i32));
        out
    }

    /// Parse the signed-integer form produced by [`PackedBuffer::to_words`].
    ///
    /// # Errors
    /// - `HuffmanError::MissingHeader` for an empty slice
    /// - `HuffmanError::InvalidHeader` for a negative header
    pub fn from_words(ints: &[i32]) -> Result<Self> {
        let (&header, payload) = ints.split_first().ok_or(HuffmanError::MissingHeader)?;
        if header < 0 {
            return Err(HuffmanError::InvalidHeader(header as i64).into());
        }
        Ok(Self {
            char_count: header as usize,
            words: payload.iter().map(|&w| w as u32).collect(),
        })
    }

    /// Header and words as little-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(WORD_BYTES * (1 + self.words.len()));
        out.extend_from_slice(&(self.char_count as u32).to_le_bytes());
        for word in &self.words {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Parse the byte form produced by [`PackedBuffer::to_bytes`].
    ///
    /// # Errors
    /// - `HuffmanError::MissingHeader` if fewer than 4 bytes are given
    /// - `HuffmanError::InvalidHeader` if the header exceeds `MAX_CHARS`
    /// - `BitIoError::InsufficientBits` if the payload ends mid-word
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < WORD_BYTES {
            return Err(HuffmanError::MissingHeader.into());
        }
        let (header, payload) = bytes.split_at(WORD_BYTES);

        let remainder = payload.len() % WORD_BYTES;
        if remainder != 0 {
            return Err(BitIoError::InsufficientBits {
                requested: (payload.len() - remainder + WORD_BYTES) * 8,
                available: payload.len() * 8,
            }
            .into());
        }

        let char_count = u32::from_le_bytes(read_word(header)) as usize;
        let words = payload
            .chunks_exact(WORD_BYTES)
            .map(|chunk| u32::from_le_bytes(read_word(chunk)))
            .collect();

        Self::new(char_count, words)
    }
}

fn read_word(chunk: &[u8]) -> [u8; WORD_BYTES] {
    let mut word = [0u8; WORD_BYTES];
    word.copy_from_slice(chunk);
    word
}

/// A coding tree paired with its precomputed code table.
///
/// Encoding through a `Codec` resolves each symbol's path once, instead of
/// searching the tree for every input byte.
#[derive(Debug, Clone)]
pub struct Codec {
    tree: CodingTree,
    codes: CodeTable,
}

impl Codec {
    pub fn new(tree: CodingTree) -> Self {
        let codes = tree.code_table();
        Self { tree, codes }
    }

    /// Build a codec whose alphabet and weights come from `sample`.
    ///
    /// # Errors
    /// `HuffmanError::EmptyInput` if `sample` is empty.
    pub fn from_sample(sample: &[u8]) -> Result<Self> {
        let tree = CodingTree::from_bytes(sample).ok_or(HuffmanError::EmptyInput)?;
        Ok(Self::new(tree))
    }

    pub fn tree(&self) -> &CodingTree {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn into_tree(self) -> CodingTree {
        self.tree
    }

    /// Encode `text` into a packed buffer.
    ///
    /// # Errors
    /// - `HuffmanError::EmptyInput` if `text` is empty
    /// - `HuffmanError::InvalidHeader` if `text` is longer than `MAX_CHARS`
    /// - `HuffmanError::SymbolNotFound` for the first byte without a code;
    ///   nothing is returned for the bytes before it
    pub fn encode(&self, text: &[u8]) -> Result<PackedBuffer> {
        encode_with(&self.codes, text)
    }

    /// Decode a packed buffer back into bytes.
    ///
    /// # Errors
    /// - `HuffmanError::Truncated` if the words run out before
    ///   `char_count` characters have been decoded
    pub fn decode(&self, packed: &PackedBuffer) -> Result<Vec<u8>> {
        decode_with(&self.tree, packed)
    }
}

/// Encode `text` with `tree`. See [`Codec::encode`].
pub fn encode(tree: &CodingTree, text: &[u8]) -> Result<PackedBuffer> {
    encode_with(&tree.code_table(), text)
}

/// Decode `packed` with `tree`. See [`Codec::decode`].
pub fn decode(tree: &CodingTree, packed: &PackedBuffer) -> Result<Vec<u8>> {
    decode_with(tree, packed)
}

fn encode_with(codes: &CodeTable, text: &[u8]) -> Result<PackedBuffer> {
    if text.is_empty() {
        return Err(HuffmanError::EmptyInput.into());
    }
    if text.len() > MAX_CHARS {
        return Err(HuffmanError::InvalidHeader(text.len() as i64).into());
    }

    let mut writer = BitWriter::new();
    for (position, &symbol) in text.iter().enumerate() {
        let Some(path) = codes.get(symbol) else {
            tracing::debug!(symbol, position, "encode aborted: symbol not in tree");
            return Err(HuffmanError::SymbolNotFound { symbol, position }.into());
        };
        writer.write_bits(path.iter());
    }

    tracing::trace!(
        chars = text.len(),
        bits = writer.bit_len(),
        words = writer.word_len(),
        "encoded"
    );
    PackedBuffer::new(text.len(), writer.finish())
}

fn decode_with(tree: &CodingTree, packed: &PackedBuffer) -> Result<Vec<u8>> {
    let expected = packed.char_count();
    let root = tree.root();

    // one-symbol alphabet: zero bits per character
    if let Node::Leaf { symbol, .. } = root {
        return Ok(vec![*symbol; expected]);
    }

    // every character costs at least one bit
    let mut out = Vec::with_capacity(expected.min(packed.words().len() * WORD_BITS));
    let mut reader = BitReader::new(packed.words());
    let mut node = root;

    while out.len() < expected {
        let bit = match reader.read_bit() {
            Ok(bit) => bit,
            Err(_) => {
                tracing::debug!(
                    decoded = out.len(),
                    expected,
                    "decode ran out of packed words"
                );
                return Err(HuffmanError::Truncated {
                    decoded: out.len(),
                    expected,
                }
                .into());
            }
        };

        node = node.child(bit).ok_or(HuffmanError::InvalidPath {
            position: reader.position(),
        })?;

        if let Some(symbol) = node.symbol() {
            out.push(symbol);
            node = root;
        }
    }

    Ok(out)
}
