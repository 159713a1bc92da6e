//! Horizontal ASCII rendering of a coding tree, for debugging.
//!
//! The tree is printed on its side: the right subtree above its parent, the
//! left subtree below, each level indented by [`TREE_SPACING`] columns.
//!
//! ```text
//!           0.67 (a)
//! 1.00
//!           0.33 (b)
//! ```

use std::fmt::{self, Write};

use crate::tree::{CodingTree, Node};

/// Columns of indentation per tree level.
pub const TREE_SPACING: usize = 10;

/// Render `tree`, one node per line.
pub fn render(tree: &CodingTree) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = render_node(&mut out, tree.root(), 0);
    out
}

/// Render an optional tree; an absent tree renders as nothing.
pub fn render_optional(tree: Option<&CodingTree>) -> String {
    tree.map(render).unwrap_or_default()
}

fn render_node(out: &mut impl Write, node: &Node, indent: usize) -> fmt::Result {
    match node {
        Node::Leaf { symbol, weight } => {
            writeln!(out, "{:indent$}{:.2} ({})", "", weight, display_symbol(*symbol))
        }
        Node::Internal { weight, left, right } => {
            render_node(out, right, indent + TREE_SPACING)?;
            writeln!(out, "{:indent$}{:.2}", "", weight)?;
            render_node(out, left, indent + TREE_SPACING)
        }
    }
}

/// Printable ASCII as itself, everything else as an escape.
fn display_symbol(symbol: u8) -> String {
    if symbol.is_ascii_graphic() || symbol == b' ' {
        (symbol as char).to_string()
    } else {
        symbol.escape_ascii().to_string()
    }
}

impl fmt::Display for CodingTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_node(f, self.root(), 0)
    }
}
