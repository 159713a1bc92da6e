//! Path codec: symbol <-> root-to-leaf bit path.
//!
//! A path is a sequence of directions from the root, `false` for left and
//! `true` for right. Its length is the depth of the leaf; the root of a
//! one-symbol tree has the empty path.
//!
//! Both directions are tree walks:
//! - `lookup_path` is a depth-first search, left subtree before right,
//!   stopping at the first leaf holding the symbol
//! - `lookup_value` follows the path and succeeds only if it ends exactly
//!   on a leaf
//!
//! Misses are `None`. There is no sentinel byte: a leaf for byte `0` is an
//! ordinary symbol.

use std::fmt;

use crate::frequency::ALPHABET_SIZE;
use crate::tree::{CodingTree, Node};

/// Owned root-to-leaf directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitPath(Vec<bool>);

impl BitPath {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.0
    }
}

impl From<Vec<bool>> for BitPath {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl FromIterator<bool> for BitPath {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[bool]> for BitPath {
    fn as_ref(&self) -> &[bool] {
        &self.0
    }
}

impl fmt::Display for BitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl CodingTree {
    /// Path from the root to the leaf holding `symbol`, or `None` if no leaf
    /// holds it.
    pub fn lookup_path(&self, symbol: u8) -> Option<BitPath> {
        let mut path = Vec::new();
        search(self.root(), symbol, &mut path).then(|| BitPath(path))
    }

    /// Symbol at the end of `path`, or `None` if the path needs a missing
    /// child, stops on an internal node, or runs past a leaf.
    pub fn lookup_value(&self, path: &[bool]) -> Option<u8> {
        self.node_at(path).and_then(Node::symbol)
    }

    /// Every leaf's path, computed in one traversal.
    pub fn code_table(&self) -> CodeTable {
        CodeTable::new(self)
    }
}

fn search(node: &Node, symbol: u8, path: &mut Vec<bool>) -> bool {
    match node {
        Node::Leaf { symbol: held, .. } => *held == symbol,
        Node::Internal { left, right, .. } => {
            path.push(false);
            if search(left, symbol, path) {
                return true;
            }
            path.pop();

            path.push(true);
            if search(right, symbol, path) {
                return true;
            }
            path.pop();

            false
        }
    }
}

/// Path lookup that tolerates an absent tree.
pub fn lookup_path(tree: Option<&CodingTree>, symbol: u8) -> Option<BitPath> {
    tree?.lookup_path(symbol)
}

/// Value lookup that tolerates an absent tree.
pub fn lookup_value(tree: Option<&CodingTree>, path: &[bool]) -> Option<u8> {
    tree?.lookup_value(path)
}

/// Paths for every symbol of a tree, indexed by byte value.
///
/// Equivalent to calling `lookup_path` per symbol; a tree never holds the
/// same symbol twice, so the first-match rule of the search is moot.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<BitPath>>,
}

impl CodeTable {
    pub fn new(tree: &CodingTree) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        let mut stack = vec![(tree.root(), Vec::new())];
        while let Some((node, prefix)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    let slot = &mut codes[*symbol as usize];
                    if slot.is_none() {
                        *slot = Some(BitPath(prefix));
                    }
                }
                Node::Internal { left, right, .. } => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push(true);
                    let mut left_prefix = prefix;
                    left_prefix.push(false);
                    stack.push((right.as_ref(), right_prefix));
                    stack.push((left.as_ref(), left_prefix));
                }
            }
        }
        Self { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&BitPath> {
        self.codes[symbol as usize].as_ref()
    }

    /// `(symbol, path)` ascending by byte value.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitPath)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|path| (symbol as u8, path)))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_code_length(&self) -> usize {
        self.iter().map(|(_, path)| path.len()).max().unwrap_or(0)
    }

    /// Payload bits needed to encode `text`, or `None` if some byte has no
    /// code.
    pub fn encoded_bits(&self, text: &[u8]) -> Option<usize> {
        text.iter()
            .try_fold(0usize, |bits, &byte| Some(bits + self.get(byte)?.len()))
    }
}
