//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Parse brace-attribute markup and print the resulting tree.
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Markup file to parse. Without a file or `--markup`, a built-in sample is used.
    #[arg(env = "TAGTREE_FILE", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Parse this markup string. Takes precedence over FILE.
    #[arg(short, long)]
    pub markup: Option<String>,

    /// Print the tree as JSON.
    #[arg(short, long)]
    pub json: bool,

    /// Fail if any element, tag or quoted string is left unterminated.
    #[arg(short, long)]
    pub strict: bool,

    /// Report parse issues on stderr.
    #[arg(short, long)]
    pub issues: bool,

    /// Increase log verbosity (-v warn, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
