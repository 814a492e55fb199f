use tagtree_dom::{ElementNode, Node};

use super::tree_builder::TreeBuilder;
use crate::error::{ParseError, ensure_no_errors};
use crate::issue::ParseIssue;
use crate::tokenizer::Lexer;

/// Parses a complete markup document into a tree rooted at the sentinel
/// element.
///
/// By default parsing is lenient: malformed regions are skipped and the
/// result is always a tree. [`MarkupParser::with_strict_mode`] turns
/// error-severity issues into a [`ParseError`] instead.
#[derive(Debug, Clone, Copy)]
pub struct MarkupParser<'a> {
    input: &'a str,
    strict_mode: bool,
}

impl<'a> MarkupParser<'a> {
    /// Create a parser over the whole input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            strict_mode: false,
        }
    }

    /// Enable strict mode - fail on error-severity issues.
    #[must_use]
    pub const fn with_strict_mode(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    /// Run the parser and return the root node.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`ParseError::Issues`] carrying every
    /// error-severity issue if there was at least one. In lenient mode this
    /// never fails.
    pub fn run(self) -> Result<Node, ParseError> {
        let strict = self.strict_mode;
        let (root, issues) = self.run_with_issues();
        if strict {
            ensure_no_errors(&issues)?;
        }
        Ok(root)
    }

    /// Run the parser and return both the tree and every recorded issue.
    ///
    /// The tree is the same one lenient [`run`](Self::run) returns; strict
    /// mode has no effect here.
    #[must_use]
    pub fn run_with_issues(self) -> (Node, Vec<ParseIssue>) {
        let (tokens, mut issues) = Lexer::new(self.input).run();
        tracing::debug!(
            target: "tagtree::parser",
            bytes = self.input.len(),
            tokens = tokens.len(),
            "lexed input"
        );
        let (children, builder_issues) = TreeBuilder::new(&tokens).run();
        issues.extend(builder_issues);
        (Node::Element(ElementNode::root(children)), issues)
    }
}
