use std::collections::HashMap;

use tagtree_dom::{AttributesMap, ElementNode, Node};

use crate::issue::{IssueKind, ParseIssue, record};
use crate::tokenizer::FlatToken;

/// Rebuilds nesting from a flat token stream.
///
/// An element spans from its opening tag to the first closing tag of the same
/// name at which the count of open same-name tags returns to zero. Tags with
/// other names never affect the count, so a stray `<b>` inside `<a>...</a>`
/// is ordinary child content and cross-tag mismatches go undetected.
///
/// Children come from the contiguous token range between the opening tag and
/// its match. Open elements live on an explicit stack rather than the call
/// stack, so nesting depth is bounded only by memory.
pub(crate) struct TreeBuilder<'t, 'a> {
    tokens: &'t [FlatToken<'a>],
    matches: Vec<Option<usize>>,
    issues: Vec<ParseIssue>,
}

/// An element whose children are still being built.
struct OpenElement<'a> {
    name: &'a str,
    attributes: AttributesMap,
    children: Vec<Node>,
    open: usize,
    close: usize,
}

impl<'t, 'a> TreeBuilder<'t, 'a> {
    pub(crate) fn new(tokens: &'t [FlatToken<'a>]) -> Self {
        Self {
            tokens,
            matches: match_closing_tags(tokens),
            issues: Vec::new(),
        }
    }

    /// Build the top-level forest from the whole stream.
    pub(crate) fn run(mut self) -> (Vec<Node>, Vec<ParseIssue>) {
        let tokens = self.tokens;
        let mut top: Vec<Node> = Vec::new();
        let mut stack: Vec<OpenElement<'a>> = Vec::new();
        let mut index = 0;

        loop {
            let end = stack.last().map_or(tokens.len(), |open| open.close);
            if index == end {
                let Some(done) = stack.pop() else {
                    break;
                };
                tracing::trace!(
                    target: "tagtree::tree_builder",
                    name = done.name,
                    open = done.open,
                    close = done.close,
                    "closed element"
                );
                let node = Node::Element(ElementNode::new(
                    done.name.to_string(),
                    done.attributes,
                    done.children,
                ));
                stack.last_mut().map_or(&mut top, |parent| &mut parent.children).push(node);
                index = done.close + 1;
                continue;
            }

            let tag = match &tokens[index] {
                FlatToken::Text(content) => {
                    let node = Node::text(*content);
                    stack.last_mut().map_or(&mut top, |parent| &mut parent.children).push(node);
                    index += 1;
                    continue;
                }
                FlatToken::Tag(tag) => tag,
            };

            if tag.is_closing {
                record(
                    &mut self.issues,
                    IssueKind::StrayClosingTag,
                    format!("`</{}>` has no opening tag; treating it as one", tag.name),
                    index,
                );
            }

            match self.matches[index].filter(|&close| close < end) {
                Some(close) => {
                    stack.push(OpenElement {
                        name: tag.name,
                        attributes: tag.owned_attributes(),
                        children: Vec::new(),
                        open: index,
                        close,
                    });
                    index += 1;
                }
                None => {
                    // Nothing up to the end of the enclosing range closes this
                    // tag; the tag and everything after it in the range go.
                    tracing::debug!(
                        target: "tagtree::tree_builder",
                        name = tag.name,
                        open = index,
                        dropped = end - index,
                        "dropping unterminated element"
                    );
                    record(
                        &mut self.issues,
                        IssueKind::UnterminatedElement,
                        format!(
                            "`<{}>` is never closed; dropped it and {} following token(s)",
                            tag.name,
                            end - index - 1
                        ),
                        index,
                    );
                    index = end;
                }
            }
        }

        (top, self.issues)
    }
}

/// For every tag, the index of the first later closing tag at which the
/// same-name depth started by that tag returns to zero.
///
/// Counting forward from tag `i`, depth reaches zero exactly where the
/// running per-name balance (openers minus closers) first drops one below
/// its value just after `i`. Walking backwards while remembering the nearest
/// closing tag at each balance level answers every tag in one pass. A
/// stray closing tag is handled the same way, so it behaves as an opener.
fn match_closing_tags(tokens: &[FlatToken<'_>]) -> Vec<Option<usize>> {
    let mut balance: HashMap<&str, i64> = HashMap::new();
    let mut after: Vec<i64> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let level = match token {
            FlatToken::Tag(tag) => {
                let level = balance.entry(tag.name).or_insert(0);
                *level += if tag.is_closing { -1 } else { 1 };
                *level
            }
            FlatToken::Text(_) => 0,
        };
        after.push(level);
    }

    let mut nearest_close: HashMap<(&str, i64), usize> = HashMap::new();
    let mut matches = vec![None; tokens.len()];
    for (index, token) in tokens.iter().enumerate().rev() {
        let FlatToken::Tag(tag) = token else {
            continue;
        };
        let level = after[index];
        matches[index] = nearest_close.get(&(tag.name, level - 1)).copied();
        if tag.is_closing {
            let _ = nearest_close.insert((tag.name, level), index);
        }
    }
    matches
}
