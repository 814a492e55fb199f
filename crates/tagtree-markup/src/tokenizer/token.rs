use core::fmt;
use std::collections::HashMap;

use tagtree_dom::AttributesMap;

/// A tag occurrence, opening or closing.
///
/// Names and attribute values borrow from the input buffer; no escape
/// processing happens, so every decoded piece is a plain slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TagToken<'a> {
    pub(crate) name: &'a str,
    pub(crate) attributes: HashMap<&'a str, &'a str>,
    pub(crate) is_closing: bool,
}

impl TagToken<'_> {
    /// Copy the attributes out of the input buffer.
    pub(crate) fn owned_attributes(&self) -> AttributesMap {
        self.attributes
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }
}

/// One lexical unit. Nesting is not represented; the tree builder recovers
/// it from token order alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FlatToken<'a> {
    Text(&'a str),
    Tag(TagToken<'a>),
}

impl fmt::Display for FlatToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(content) => write!(f, "Text({content:?})"),
            Self::Tag(tag) => {
                let slash = if tag.is_closing { "/" } else { "" };
                write!(f, "<{slash}{}", tag.name)?;
                let mut pairs: Vec<_> = tag.attributes.iter().collect();
                pairs.sort_unstable();
                for (name, value) in pairs {
                    write!(f, " {name}={{{value}}}")?;
                }
                write!(f, ">")
            }
        }
    }
}
