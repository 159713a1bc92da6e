//! Weighted leaves and the ordered worklist the tree builder consumes.
//!
//! # Ordering
//!
//! The worklist is seeded with one leaf per used byte value, ascending by
//! weight and, among equal weights, ascending by byte value. The builder
//! then repeatedly removes the two front nodes, joins them, and reinserts
//! the joined node in front of the first node whose weight is greater than
//! or equal to its own. A newly joined node therefore always precedes older
//! nodes of the same weight.
//!
//! This tie rule fixes the shape of the tree, and with it every code length.
//! Changing it changes the packed output for any alphabet with tied weights.

use std::collections::VecDeque;

use crate::frequency::FrequencyTable;
use crate::tree::{CodingTree, Node};

/// A symbol with its normalized occurrence probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedLeaf {
    pub symbol: u8,
    /// `count / total`, in (0, 1]
    pub weight: f64,
}

impl From<WeightedLeaf> for Node {
    fn from(leaf: WeightedLeaf) -> Self {
        Node::leaf(leaf.symbol, leaf.weight)
    }
}

/// Nodes awaiting a merge, kept ascending by weight.
#[derive(Debug, Clone, Default)]
pub struct Worklist {
    nodes: VecDeque<Node>,
}

impl Worklist {
    /// Seed the worklist from a frequency table.
    pub fn from_frequencies(table: &FrequencyTable) -> Self {
        let total = table.total();
        if total == 0 {
            return Self::default();
        }

        let mut leaves: Vec<WeightedLeaf> = table
            .iter_used()
            .map(|(symbol, count)| WeightedLeaf {
                symbol,
                weight: count as f64 / total as f64,
            })
            .collect();
        leaves.sort_by(|a, b| {
            a.weight
                .total_cmp(&b.weight)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        Self {
            nodes: leaves.into_iter().map(Node::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn front(&self) -> Option<&Node> {
        self.nodes.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// The leaves currently queued, front to back. Internal nodes are
    /// skipped, so on a fresh worklist this is the complete seed order.
    pub fn leaves(&self) -> Vec<WeightedLeaf> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Leaf { symbol, weight } => Some(WeightedLeaf {
                    symbol: *symbol,
                    weight: *weight,
                }),
                Node::Internal { .. } => None,
            })
            .collect()
    }

    fn pop_front(&mut self) -> Option<Node> {
        self.nodes.pop_front()
    }

    /// Reinsert a joined node ahead of the first queued node that is at
    /// least as heavy.
    pub fn insert_merged(&mut self, node: Node) {
        let weight = node.weight();
        let at = self
            .nodes
            .iter()
            .position(|queued| weight <= queued.weight())
            .unwrap_or(self.nodes.len());
        self.nodes.insert(at, node);
    }
}

/// Build the ordered leaf worklist for `table`.
pub fn build_leaf_worklist(table: &FrequencyTable) -> Worklist {
    Worklist::from_frequencies(table)
}

/// Merge the worklist down to a single root.
///
/// Returns `None` for an empty worklist. A single queued leaf becomes the
/// root as-is.
pub fn build_tree(mut worklist: Worklist) -> Option<CodingTree> {
    while worklist.len() > 1 {
        let (Some(first), Some(second)) = (worklist.pop_front(), worklist.pop_front()) else {
            break;
        };
        worklist.insert_merged(Node::merge(first, second));
    }

    let root = worklist.pop_front()?;
    tracing::debug!(
        height = root.height(),
        weight = root.weight(),
        "coding tree built"
    );
    Some(CodingTree::new(root))
}
