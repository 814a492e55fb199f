//! tagtree CLI
//!
//! Usage:
//!   tagtree <file>              Parse a file and print the tree
//!   tagtree --markup '<a>x</a>' Parse a string
//!   tagtree                     Parse the built-in sample document
//!
//! Flags:
//!   --json      Print the tree as JSON
//!   --issues    Report parse issues on stderr
//!   --strict    Exit with an error if anything was left unterminated
//!   -v/-vv/-vvv Log at warn/debug/trace (overrides `RUST_LOG`)

mod args;
mod output;

use std::fs;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tagtree_markup::{MarkupParser, ensure_no_errors};
use tracing_subscriber::EnvFilter;

use args::Cli;

/// Parsed when no input is given.
const SAMPLE: &str = concat!(
    "<html><head><title>My Project</title></head><body>",
    r#"<h1 class={"myClass"} onClick={doStuff}>Hello World</h1>"#,
    r#"<div id={"myDiv"}><div class={"emptyDiv"}></div>"#,
    "<p key={0}>as easy as</p><p key={1}>123abc</p></div></body></html>",
);

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let source = read_input(&cli)?;
    let (root, issues) = MarkupParser::new(&source).run_with_issues();

    if cli.issues {
        output::report_issues(&issues)?;
    }
    if cli.strict {
        ensure_no_errors(&issues).context("strict parse failed")?;
    }

    let mut stdout = io::stdout().lock();
    output::write_tree(&mut stdout, &root, cli.json)
}

/// `--markup`, then the file argument, then the built-in sample.
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(markup) = &cli.markup {
        return Ok(markup.clone());
    }
    match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => {
            tracing::info!("no input given; parsing the built-in sample");
            Ok(SAMPLE.to_string())
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        1 => EnvFilter::new("warn"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}
