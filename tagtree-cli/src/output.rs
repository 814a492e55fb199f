//! Terminal output for trees and parse issues.

use std::io::{self, Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tagtree_markup::{Node, ParseIssue};

/// Write the tree as indented text or pretty JSON.
pub fn write_tree(out: &mut impl Write, root: &Node, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(root).context("failed to serialize tree")?;
        writeln!(out, "{rendered}")?;
    } else {
        write!(out, "{}", tagtree_dom::render_tree(root))?;
    }
    Ok(())
}

/// Print issues to stderr, errors in red and warnings in yellow.
pub fn report_issues(issues: &[ParseIssue]) -> io::Result<()> {
    let mut err = io::stderr().lock();
    if issues.is_empty() {
        writeln!(err, "{}", "no parse issues".green())?;
        return Ok(());
    }
    for issue in issues {
        if issue.is_error() {
            writeln!(err, "{} {issue}", "error:".red().bold())?;
        } else {
            writeln!(err, "{} {issue}", "warning:".yellow().bold())?;
        }
    }
    Ok(())
}
