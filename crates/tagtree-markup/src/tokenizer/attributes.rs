//! Attribute decoding for the text that follows a tag name.
//!
//! Attributes are written `name={value}`. The name is everything before the
//! first `=` with leading spaces removed; trailing characters are kept, so
//! `id ={1}` names its attribute `id `. A value that starts with a double
//! quote is a string and has its quotes removed; anything else (an
//! identifier, a number) is kept verbatim. Braces inside a quoted string do
//! not end the value.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::issue::IssueKind;

/// Attributes decoded from one tag, plus anything that had to be skipped.
#[derive(Debug, Default)]
pub(crate) struct DecodedAttributes<'a> {
    pub(crate) attributes: HashMap<&'a str, &'a str>,
    pub(crate) problems: Vec<(IssueKind, String)>,
}

/// Decode every `name={value}` pair in `raw`.
///
/// Malformed input never aborts decoding:
/// - a `{...}` segment with no `=` before the brace is stored under the
///   empty name;
/// - text that never opens a brace, or a brace that is never closed, is
///   dropped;
/// - a repeated name keeps its first value.
pub(crate) fn decode_attributes(raw: &str) -> DecodedAttributes<'_> {
    let mut decoded = DecodedAttributes::default();
    let mut in_string = false;
    let mut open_brace: Option<usize> = None;
    let mut segment_start = 0;

    for (pos, c) in raw.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '{' if !in_string && open_brace.is_none() => open_brace = Some(pos),
            '}' if !in_string => {
                if let Some(open) = open_brace.take() {
                    decoded.add_segment(&raw[segment_start..open], &raw[open + 1..pos]);
                    segment_start = pos + 1;
                }
            }
            _ => {}
        }
    }

    let rest = &raw[segment_start..];
    if open_brace.is_some() {
        decoded.problems.push((
            IssueKind::MalformedAttribute,
            format!("unterminated attribute value `{}`", rest.trim()),
        ));
    } else if !rest.trim().is_empty() {
        decoded.problems.push((
            IssueKind::MalformedAttribute,
            format!("ignored text `{}` without a braced value", rest.trim()),
        ));
    }

    decoded
}

impl<'a> DecodedAttributes<'a> {
    /// `head` is everything between the previous segment and `{`; `inner` is
    /// the text between the braces.
    fn add_segment(&mut self, head: &'a str, inner: &'a str) {
        let name = if let Some((name, _)) = head.split_once('=') {
            name.trim_start_matches(' ')
        } else {
            self.problems.push((
                IssueKind::MalformedAttribute,
                format!("value `{{{inner}}}` has no `name=` before it"),
            ));
            ""
        };

        match self.attributes.entry(name) {
            Entry::Vacant(slot) => {
                let _ = slot.insert(unwrap_value(inner));
            }
            Entry::Occupied(_) => self.problems.push((
                IssueKind::DuplicateAttribute,
                format!("attribute `{name}` repeated; keeping the first value"),
            )),
        }
    }
}

/// Strip the quotes from a string value. Anything after the closing quote is
/// dropped; an unclosed string runs to the end of the value.
fn unwrap_value(inner: &str) -> &str {
    match inner.strip_prefix('"') {
        Some(quoted) => quoted.split_once('"').map_or(quoted, |(value, _)| value),
        None => inner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> HashMap<&str, &str> {
        decode_attributes(raw).attributes
    }

    #[test]
    fn test_empty_input() {
        let decoded = decode_attributes("");
        assert!(decoded.attributes.is_empty());
        assert!(decoded.problems.is_empty());
    }

    #[test]
    fn test_quoted_value_is_unwrapped() {
        assert_eq!(decode(r#" id={"myDiv"}"#), HashMap::from([("id", "myDiv")]));
    }

    #[test]
    fn test_raw_value_is_verbatim() {
        assert_eq!(decode(" key={0}"), HashMap::from([("key", "0")]));
        assert_eq!(
            decode(" onClick={doStuff}"),
            HashMap::from([("onClick", "doStuff")])
        );
    }

    #[test]
    fn test_multiple_pairs_with_spaces() {
        let attrs = decode(" class={\"myClass\"}   onClick={doStuff}  ");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["class"], "myClass");
        assert_eq!(attrs["onClick"], "doStuff");
    }

    #[test]
    fn test_brace_inside_string_does_not_close() {
        assert_eq!(
            decode(r#" text={"a}b{c"}"#),
            HashMap::from([("text", "a}b{c")])
        );
    }

    #[test]
    fn test_name_keeps_trailing_characters() {
        assert_eq!(decode(" id ={1}"), HashMap::from([("id ", "1")]));
        assert_eq!(decode("\n  id={1}"), HashMap::from([("\n  id", "1")]));
    }

    #[test]
    fn test_nested_open_brace_is_literal() {
        assert_eq!(decode(" v={{x}"), HashMap::from([("v", "{x")]));
    }

    #[test]
    fn test_missing_equals_uses_empty_name() {
        let decoded = decode_attributes(r#" orphan{"value"}"#);
        assert_eq!(decoded.attributes, HashMap::from([("", "value")]));
        assert_eq!(decoded.problems.len(), 1);
        assert_eq!(decoded.problems[0].0, IssueKind::MalformedAttribute);
    }

    #[test]
    fn test_unterminated_brace_is_dropped() {
        let decoded = decode_attributes(" a={1} b={2");
        assert_eq!(decoded.attributes, HashMap::from([("a", "1")]));
        assert_eq!(decoded.problems.len(), 1);
        assert_eq!(decoded.problems[0].0, IssueKind::MalformedAttribute);
    }

    #[test]
    fn test_bare_word_is_dropped() {
        let decoded = decode_attributes(" a={1} disabled");
        assert_eq!(decoded.attributes, HashMap::from([("a", "1")]));
        assert_eq!(decoded.problems[0].0, IssueKind::MalformedAttribute);
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let decoded = decode_attributes(" k={1} k={2}");
        assert_eq!(decoded.attributes, HashMap::from([("k", "1")]));
        assert_eq!(decoded.problems, vec![(
            IssueKind::DuplicateAttribute,
            "attribute `k` repeated; keeping the first value".to_string()
        )]);
    }

    #[test]
    fn test_text_after_closing_quote_is_dropped() {
        assert_eq!(decode(r#" a={"x" y}"#), HashMap::from([("a", "x")]));
    }

    #[test]
    fn test_quote_not_at_start_is_verbatim() {
        assert_eq!(decode(r#" a={ "x" }"#), HashMap::from([("a", r#" "x" "#)]));
    }
}
