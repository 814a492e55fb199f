//! Tree construction from the flat token stream.

/// Parser entry point tying the lexer and tree builder together.
pub mod markup;
/// Depth-matching tree builder.
pub(crate) mod tree_builder;

pub use markup::MarkupParser;
