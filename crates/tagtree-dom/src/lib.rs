//! Node tree for the tagtree markup parser.
//!
//! The parser hands back a single owned tree. Every element owns its
//! children by value, so the tree is acyclic by construction and is
//! released when the root goes out of scope.
//!
//! # Design
//!
//! [`Node`] is a sum type over text runs and elements. The root returned by
//! a parse is always an element named [`ROOT_NAME`] that wraps the top-level
//! forest; see [`ElementNode::root`].
//!
//! Traversal, rendering and dropping walk the tree with an explicit stack,
//! so arbitrarily deep trees do not exhaust the thread's call stack.

use std::collections::HashMap;
use std::mem;

use serde::Serialize;

/// Tree display.
pub mod display;

pub use display::render_tree;

/// Map of attribute names to values for an element.
///
/// Names are unique. Iteration order is unspecified.
pub type AttributesMap = HashMap<String, String>;

/// Name of the synthetic element that wraps the top-level forest.
pub const ROOT_NAME: &str = "$";

/// A node in the parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// A run of character data.
    Text(String),
    /// An element with its attributes and children.
    Element(ElementNode),
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementNode {
    /// The tag name.
    pub name: String,
    /// Attributes decoded from the opening tag.
    pub attributes: AttributesMap,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl ElementNode {
    /// Create an element with the given name, attributes and children.
    #[must_use]
    pub const fn new(name: String, attributes: AttributesMap, children: Vec<Node>) -> Self {
        Self {
            name,
            attributes,
            children,
        }
    }

    /// Create the sentinel root element wrapping a top-level forest.
    #[must_use]
    pub fn root(children: Vec<Node>) -> Self {
        Self::new(ROOT_NAME.to_string(), AttributesMap::new(), children)
    }

    /// Returns true if this element carries the sentinel root name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.name == ROOT_NAME
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterate over the child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }
}

impl Node {
    /// Wrap a string as a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Returns the element data if this is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Returns the text content if this is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            Self::Element(_) => None,
        }
    }

    /// Returns true if this is the sentinel root element.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.as_element().is_some_and(ElementNode::is_root)
    }

    /// Child nodes of an element. Text nodes have none.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(element) => &element.children,
            Self::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and all of its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(Self::as_text)
            .collect()
    }

    /// First element named `name`, depth-first, including this node.
    #[must_use]
    pub fn find_element(&self, name: &str) -> Option<&ElementNode> {
        self.descendants()
            .filter_map(Self::as_element)
            .find(|element| element.name == name)
    }

    /// All elements named `name` in document order, including this node.
    #[must_use]
    pub fn elements_by_name(&self, name: &str) -> Vec<&ElementNode> {
        self.descendants()
            .filter_map(Self::as_element)
            .filter(|element| element.name == name)
            .collect()
    }

    /// This node and every node below it, in document order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator over a subtree. See [`Node::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl Drop for ElementNode {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Self::Element(element)
    }
}
