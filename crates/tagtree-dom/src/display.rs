//! Indented text rendering of a node tree.
//!
//! Text nodes print their content alone. Elements print their name followed
//! by a parenthesized `name: value` list when they carry attributes. Each
//! nesting level indents by [`INDENT_STEP`] columns.

use core::fmt;

use crate::{ElementNode, Node};

/// Columns added per nesting level.
pub const INDENT_STEP: usize = 4;

/// Render a tree to a string, one node per line.
#[must_use]
pub fn render_tree(node: &Node) -> String {
    node.to_string()
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(self, 0)];
        while let Some((node, indent)) = pending.pop() {
            match node {
                Self::Text(content) => writeln!(f, "{:indent$}{content}", "")?,
                Self::Element(element) => {
                    write!(f, "{:indent$}{}", "", element.name)?;
                    if !element.attributes.is_empty() {
                        write!(f, " ({})", attribute_list(element))?;
                    }
                    writeln!(f)?;
                    let depth = indent + INDENT_STEP;
                    pending.extend(element.children.iter().rev().map(|child| (child, depth)));
                }
            }
        }
        Ok(())
    }
}

/// Sorted by name so output does not depend on map iteration order.
fn attribute_list(element: &ElementNode) -> String {
    let mut pairs: Vec<(&String, &String)> = element.attributes.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
    pairs
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
