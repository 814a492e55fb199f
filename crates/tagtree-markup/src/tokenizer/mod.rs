//! Markup tokenizer.
//!
//! Turns the input into a flat, ordered sequence of text runs and tag
//! occurrences. Tags carry their decoded attributes and a closing flag but
//! no nesting information.

/// Attribute decoding for `name={value}` pairs.
pub(crate) mod attributes;
/// Single-pass lexer.
pub(crate) mod lexer;
/// Flat token types shared with the tree builder.
pub(crate) mod token;

pub(crate) use lexer::Lexer;
pub(crate) use token::FlatToken;
