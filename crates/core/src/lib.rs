//! huffpack-core: deterministic Huffman-style coding over bytes
//!
//! This library builds a prefix-free binary code for the byte values of a
//! text and uses it to pack text into 32-bit words and back:
//! - Counts byte occurrences
//! - Seeds an ordered worklist of weighted leaves
//! - Merges the worklist into a coding tree with a fixed tie-break rule
//! - Encodes/decodes bytes as root-to-leaf bit paths packed into words
//!
//! # Architecture
//!
//! Data flows strictly forward, one module per stage:
//! - `frequency`: Byte occurrence counts
//! - `worklist`: Weighted leaves and the merge loop
//! - `tree`: The coding tree itself
//! - `path`: Symbol <-> bit path lookups
//! - `bitio`: Bit reading/writing over 32-bit words
//! - `codec`: Packed buffer format, encode and decode
//! - `render`: Sideways tree diagram for debugging
//! - `stats`: Observable run statistics
//!
//! # Example
//! ```
//! use huffpack_core::{codec, CodingTree};
//!
//! let tree = CodingTree::from_bytes(b"abracadabra").unwrap();
//! let packed = codec::encode(&tree, b"cadabra").unwrap();
//! assert_eq!(codec::decode(&tree, &packed).unwrap(), b"cadabra");
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: Misses are `Option`, failures are structured errors
//! - **Deterministic**: Same input, same tree, same packed words
//! - **Portable**: Word width is 32 bits on every platform

pub mod bitio;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod path;
pub mod render;
pub mod stats;
pub mod tree;
pub mod worklist;

// Re-export commonly used types
pub use codec::{decode, encode, Codec, PackedBuffer};
pub use error::{Error, Result};
pub use frequency::{build_frequency_table, count_used_symbols, total_count, FrequencyTable};
pub use path::{lookup_path, lookup_value, BitPath, CodeTable};
pub use render::render;
pub use tree::{tree_height, CodingTree, Node};
pub use worklist::{build_leaf_worklist, build_tree, WeightedLeaf, Worklist};
