//! Markup parser for tagtree.
//!
//! # Scope
//!
//! This crate implements a two-stage, whole-buffer parse:
//! - **Lexer** - a single scan that splits the input into text runs and tag
//!   occurrences, honoring double-quoted strings inside tags
//! - **Attribute decoding** - `name={value}` pairs; quoted values lose their
//!   quotes, anything else is kept verbatim
//! - **Tree builder** - reconstructs nesting by counting same-name open tags
//!
//! The result is always a [`Node`] rooted at the sentinel element
//! ([`tagtree_dom::ROOT_NAME`]).
//!
//! # Not Implemented
//!
//! - Streaming or incremental input
//! - Entity and escape decoding
//! - Namespaces and schema validation
//! - Detection of mismatched tags with different names
//!
//! # Example
//!
//! ```
//! let root = tagtree_markup::parse(r#"<div id={"main"}>hello</div>"#);
//! let div = root.find_element("div").unwrap();
//! assert_eq!(div.get_attribute("id"), Some("main"));
//! assert_eq!(root.text_content(), "hello");
//! ```

/// Strict-mode errors.
pub mod error;
/// Issues recorded while parsing malformed input.
pub mod issue;
/// Tree construction.
pub mod parser;
mod tokenizer;

pub use error::{ParseError, ensure_no_errors};
pub use issue::{IssueKind, ParseIssue};
pub use parser::MarkupParser;
pub use tagtree_dom::{AttributesMap, ElementNode, Node, ROOT_NAME};

/// Parse a complete document.
///
/// Never fails: unterminated elements are dropped and malformed attributes
/// are skipped.
#[must_use]
pub fn parse(input: &str) -> Node {
    MarkupParser::new(input).run_with_issues().0
}

/// Parse a complete document and return the issues recorded along the way.
///
/// The tree is identical to what [`parse`] returns.
#[must_use]
pub fn parse_with_issues(input: &str) -> (Node, Vec<ParseIssue>) {
    MarkupParser::new(input).run_with_issues()
}

/// Parse a complete document, failing if anything had to be dropped.
///
/// # Errors
///
/// Returns [`ParseError::Issues`] if the input contains an unterminated
/// element, tag or quoted string. Attribute warnings do not fail the parse.
pub fn parse_strict(input: &str) -> Result<Node, ParseError> {
    MarkupParser::new(input).with_strict_mode().run()
}
