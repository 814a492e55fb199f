//! Parse issues recorded while lexing and building the tree.
//!
//! Parsing never fails on malformed markup. Instead the lexer and tree
//! builder note what they had to skip or reinterpret, and callers that care
//! can inspect the list (see [`crate::parse_with_issues`]).

use core::fmt;

use strum_macros::{Display, EnumIter};

/// What kind of malformed input was encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum IssueKind {
    /// An opening tag had no matching same-name closing tag before the end
    /// of its enclosing range. The element and everything scanned after it
    /// were dropped.
    UnterminatedElement,
    /// A closing tag appeared where an element was expected to start. It is
    /// treated as an opener and matched against later same-name closing tags.
    StrayClosingTag,
    /// An attribute segment could not be read as `name={value}`.
    MalformedAttribute,
    /// An attribute name appeared twice on one tag; the later one was ignored.
    DuplicateAttribute,
    /// Input ended inside a `<...` span. The span was kept as text.
    UnterminatedTag,
    /// Input ended inside a double-quoted string.
    UnterminatedQuote,
}

impl IssueKind {
    /// Whether this issue loses or reinterprets content. Strict parsing
    /// fails on errors and tolerates the rest.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            Self::UnterminatedElement | Self::UnterminatedTag | Self::UnterminatedQuote
        )
    }
}

/// A single recorded issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// The kind of issue.
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
    /// Index into the flat token stream of the token this issue concerns.
    pub token_index: usize,
}

impl ParseIssue {
    /// Create a new issue.
    #[must_use]
    pub fn new(kind: IssueKind, message: impl Into<String>, token_index: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            token_index,
        }
    }

    /// Shorthand for `self.kind.is_error()`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.kind.is_error()
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at token {}: {}",
            self.kind, self.token_index, self.message
        )
    }
}

/// Log an issue and append it to `issues`.
pub(crate) fn record(
    issues: &mut Vec<ParseIssue>,
    kind: IssueKind,
    message: String,
    token_index: usize,
) {
    tracing::warn!(target: "tagtree::issues", %kind, token_index, "{message}");
    issues.push(ParseIssue::new(kind, message, token_index));
}
