//! commit-msg-lint - Validate commit messages before they are pushed or merged.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod check;
mod cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Logs go to stderr; a passing run prints nothing.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            for cause in err.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}
