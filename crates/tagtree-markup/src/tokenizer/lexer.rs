use strum_macros::Display;

use super::attributes::decode_attributes;
use super::token::{FlatToken, TagToken};
use crate::issue::{IssueKind, ParseIssue, record};

/// What the lexer is accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum LexerState {
    /// Nothing buffered. Whitespace is skipped here and only here.
    Idle,
    /// A plain-text run. Only `<` ends it.
    Text,
    /// A `<...>` span. `>` ends it unless inside a double-quoted string.
    Tag,
}

/// Single-pass scanner producing flat tokens in input order.
///
/// The input is never copied or truncated. The lexer tracks where the current
/// run started and slices tokens out of the original buffer.
pub(crate) struct Lexer<'a> {
    input: &'a str,
    state: LexerState,
    run_start: usize,
    in_string: bool,
    tokens: Vec<FlatToken<'a>>,
    issues: Vec<ParseIssue>,
}

impl<'a> Lexer<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self {
            input,
            state: LexerState::Idle,
            run_start: 0,
            in_string: false,
            tokens: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Scan the whole input and return the token stream with any issues.
    pub(crate) fn run(mut self) -> (Vec<FlatToken<'a>>, Vec<ParseIssue>) {
        let input = self.input;
        for (pos, c) in input.char_indices() {
            self.step(pos, c);
        }
        self.finish();
        (self.tokens, self.issues)
    }

    fn step(&mut self, pos: usize, c: char) {
        match self.state {
            LexerState::Idle => {
                if c.is_whitespace() {
                    return;
                }
                self.run_start = pos;
                if c == '<' {
                    self.switch_to(LexerState::Tag);
                } else {
                    self.switch_to(LexerState::Text);
                }
            }
            LexerState::Text => {
                if c == '<' {
                    self.emit_text(pos);
                    self.run_start = pos;
                    self.switch_to(LexerState::Tag);
                }
            }
            LexerState::Tag => match c {
                '"' => self.in_string = !self.in_string,
                '>' if !self.in_string => {
                    self.emit_tag(pos + 1);
                    self.switch_to(LexerState::Idle);
                }
                _ => {}
            },
        }
    }

    fn switch_to(&mut self, state: LexerState) {
        if state == LexerState::Tag {
            self.in_string = false;
        }
        self.state = state;
    }

    /// Flush whatever run is still open when input runs out.
    fn finish(&mut self) {
        let end = self.input.len();
        match self.state {
            LexerState::Idle => {}
            LexerState::Text => self.emit_text(end),
            LexerState::Tag => {
                let index = self.tokens.len();
                if self.in_string {
                    record(
                        &mut self.issues,
                        IssueKind::UnterminatedQuote,
                        "input ended inside a quoted string".to_string(),
                        index,
                    );
                }
                record(
                    &mut self.issues,
                    IssueKind::UnterminatedTag,
                    "input ended before `>`; keeping the tag as text".to_string(),
                    index,
                );
                self.emit_text(end);
            }
        }
        self.state = LexerState::Idle;
    }

    fn emit_text(&mut self, end: usize) {
        let input = self.input;
        self.push(FlatToken::Text(&input[self.run_start..end]));
    }

    fn emit_tag(&mut self, end: usize) {
        let input = self.input;
        let span = &input[self.run_start..end];
        let index = self.tokens.len();
        let (tag, problems) = parse_tag(span);
        for (kind, message) in problems {
            record(&mut self.issues, kind, format!("in {span}: {message}"), index);
        }
        self.push(FlatToken::Tag(tag));
    }

    fn push(&mut self, token: FlatToken<'a>) {
        tracing::trace!(target: "tagtree::lexer", state = %self.state, "emit token: {token}");
        self.tokens.push(token);
    }
}

/// Split a complete `<...>` span into name, closing flag and attributes.
///
/// Only spaces separate the parts: the name runs to the first space, so a
/// newline or tab directly after it becomes part of the name.
fn parse_tag(span: &str) -> (TagToken<'_>, Vec<(IssueKind, String)>) {
    let inner = &span[1..span.len() - 1];
    let inner = inner.trim_start_matches(' ');
    let (is_closing, inner) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    let (name, rest) = inner.split_at(inner.find(' ').unwrap_or(inner.len()));
    let decoded = decode_attributes(rest);
    let tag = TagToken {
        name,
        attributes: decoded.attributes,
        is_closing,
    };
    (tag, decoded.problems)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lex(input: &str) -> Vec<FlatToken<'_>> {
        Lexer::new(input).run().0
    }

    fn open(name: &str) -> FlatToken<'_> {
        FlatToken::Tag(TagToken {
            name,
            attributes: HashMap::new(),
            is_closing: false,
        })
    }

    fn close(name: &str) -> FlatToken<'_> {
        FlatToken::Tag(TagToken {
            name,
            attributes: HashMap::new(),
            is_closing: true,
        })
    }

    #[test]
    fn test_empty_input() {
        let (tokens, issues) = Lexer::new("").run();
        assert!(tokens.is_empty());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(lex("  \n\t ").is_empty());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(lex("hello world"), vec![FlatToken::Text("hello world")]);
    }

    #[test]
    fn test_simple_element() {
        assert_eq!(
            lex("<a>hello</a>"),
            vec![open("a"), FlatToken::Text("hello"), close("a")]
        );
    }

    #[test]
    fn test_leading_whitespace_skipped_trailing_kept() {
        assert_eq!(
            lex("<a>  hello  </a>"),
            vec![open("a"), FlatToken::Text("hello  "), close("a")]
        );
    }

    #[test]
    fn test_whitespace_between_tags_is_skipped() {
        assert_eq!(lex("<a> </a>"), vec![open("a"), close("a")]);
    }

    #[test]
    fn test_space_inside_tag_brackets() {
        assert_eq!(lex("< a></ a>"), vec![open("a"), close("")]);
        assert_eq!(lex("< /a>"), vec![close("a")]);
    }

    #[test]
    fn test_gt_in_text_is_literal() {
        assert_eq!(lex("1 > 0"), vec![FlatToken::Text("1 > 0")]);
    }

    #[test]
    fn test_quoted_gt_does_not_close_tag() {
        let tokens = lex(r#"<a t={"x>y"}>z</a>"#);
        assert_eq!(tokens.len(), 3);
        match &tokens[0] {
            FlatToken::Tag(tag) => {
                assert_eq!(tag.name, "a");
                assert_eq!(tag.attributes["t"], "x>y");
            }
            FlatToken::Text(_) => panic!("Expected Tag token"),
        }
    }

    #[test]
    fn test_attributes_and_closing_flag() {
        let tokens = lex(r#"<h1 class={"c"} onClick={go}>Hi</h1>"#);
        let FlatToken::Tag(tag) = &tokens[0] else {
            panic!("Expected Tag token");
        };
        assert!(!tag.is_closing);
        assert_eq!(tag.name, "h1");
        assert_eq!(tag.attributes.len(), 2);
        assert_eq!(tokens[2], close("h1"));
    }

    #[test]
    fn test_unterminated_tag_flushed_as_text() {
        let (tokens, issues) = Lexer::new("<a>x</a").run();
        assert_eq!(tokens, vec![open("a"), FlatToken::Text("x"), FlatToken::Text("</a")]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UnterminatedTag);
        assert_eq!(issues[0].token_index, 2);
    }

    #[test]
    fn test_unbalanced_quote_absorbs_rest() {
        let (tokens, issues) = Lexer::new(r#"<a t={"oops}>text</a>"#).run();
        assert_eq!(tokens, vec![FlatToken::Text(r#"<a t={"oops}>text</a>"#)]);
        let kinds: Vec<_> = issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::UnterminatedQuote, IssueKind::UnterminatedTag]);
    }

    #[test]
    fn test_tag_name_ends_at_space_only() {
        let tokens = lex("<a\tb={1}>x</a\tb={1}>");
        let FlatToken::Tag(tag) = &tokens[0] else {
            panic!("Expected Tag token");
        };
        assert_eq!(tag.name, "a\tb={1}");
        assert!(tag.attributes.is_empty());
        assert_eq!(tokens[2], close("a\tb={1}"));
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            lex("<p>héllo wörld</p>"),
            vec![open("p"), FlatToken::Text("héllo wörld"), close("p")]
        );
    }

    #[test]
    fn test_malformed_attribute_records_issue_on_tag_index() {
        let (_, issues) = Lexer::new("x<a b>y</a>").run();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MalformedAttribute);
        assert_eq!(issues[0].token_index, 1);
    }
}
