//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::check;

/// Validate commit messages against configurable rules.
///
/// With `--head-ref` the commits between the two refs are checked. Without
/// ref flags, git pre-push hook input is read from stdin.
#[derive(Debug, Parser)]
#[command(name = "commit-msg-lint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base ref or SHA to compare from (default: the configured main ref)
    #[arg(long, value_name = "REF", requires = "head_ref")]
    pub base_ref: Option<String>,

    /// Head ref or SHA to compare to
    #[arg(long, value_name = "REF")]
    pub head_ref: Option<String>,

    /// Configuration file (default: searched from the repository directory upwards)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Repository directory
    #[arg(short = 'C', long = "repo", value_name = "PATH", default_value = ".")]
    pub repo: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs the check.
    pub fn run(self) -> Result<()> {
        check::run(&self)
    }
}
