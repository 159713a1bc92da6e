//! The coding tree.
//!
//! Leaves carry a byte value and its weight; internal nodes carry only the
//! aggregated weight of their two children. Every internal node owns its
//! children through a `Box`, so the tree is strict (no sharing, no cycles)
//! and dropping the root releases the whole structure.
//!
//! # Shape
//!
//! A tree built from `n` distinct symbols has `n` leaves and `n - 1`
//! internal nodes. A one-symbol alphabet is a single leaf with no internal
//! node above it; its height is 1 and its code is the empty path.

use crate::frequency::FrequencyTable;
use crate::worklist::{build_leaf_worklist, build_tree, WeightedLeaf};

/// A node of the coding tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: f64,
    },
    Internal {
        weight: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf.
    pub fn leaf(symbol: u8, weight: f64) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Join two subtrees. `left` is the lighter (earlier) one; the new
    /// weight is `left + right`, in that order.
    pub fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// The byte value of a leaf; internal nodes have none.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { right, .. } => Some(right),
        }
    }

    /// Follow one edge: `true` goes right, `false` goes left.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        if bit {
            self.right()
        } else {
            self.left()
        }
    }

    /// Number of nodes on the longest path from this node down to a leaf,
    /// counting both ends. A leaf has height 1.
    pub fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.height().max(right.height()) + 1,
        }
    }
}

/// A complete coding tree. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct CodingTree {
    root: Node,
}

impl CodingTree {
    /// Wrap an already assembled root.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Run the whole construction pipeline over `bytes`.
    ///
    /// Returns `None` for empty input: there is no tree without symbols.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        Self::from_frequencies(&FrequencyTable::from_bytes(bytes))
    }

    /// Build from counts gathered elsewhere.
    pub fn from_frequencies(table: &FrequencyTable) -> Option<Self> {
        build_tree(build_leaf_worklist(table))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Weight of the root; 1.0 (within floating tolerance) for any tree
    /// built from frequencies.
    pub fn weight(&self) -> f64 {
        self.root.weight()
    }

    /// True when the root is itself a leaf (one-symbol alphabet).
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// All leaves, left to right.
    pub fn leaves(&self) -> Vec<WeightedLeaf> {
        let mut out = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { symbol, weight } => out.push(WeightedLeaf {
                    symbol: *symbol,
                    weight: *weight,
                }),
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    /// The node reached by walking `path` from the root, or `None` when
    /// the walk needs a child that does not exist.
    pub fn node_at(&self, path: &[bool]) -> Option<&Node> {
        path.iter()
            .try_fold(&self.root, |node, &bit| node.child(bit))
    }
}

/// Height of an optional tree: 0 when absent.
pub fn tree_height(tree: Option<&CodingTree>) -> usize {
    tree.map_or(0, CodingTree::height)
}
