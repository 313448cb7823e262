//! Check command.

use std::io;

use anyhow::{Context, Result};
use msglint_config::{LintConfig, find_and_load_config_from, load_config};
use msglint_core::{Validator, read_ref_updates};
use msglint_git::{CommitGraph, Repository};
use tracing::info;

use crate::cli::Cli;

/// Runs a validation in range mode or push-hook mode, depending on flags.
pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path),
        None => find_and_load_config_from(&cli.repo),
    }
    .context("failed to load config")?;

    let repo = Repository::discover(&cli.repo).context("failed to open git repository")?;

    // clap guarantees `--base-ref` only comes with `--head-ref`.
    match cli.head_ref.as_deref() {
        Some(head) => {
            let base = cli
                .base_ref
                .as_deref()
                .unwrap_or(&config.settings().main_ref);
            check_range(&repo, &config, base, head)
        }
        None => check_push(&repo, &config),
    }
}

fn check_range(repo: &Repository, config: &LintConfig, base: &str, head: &str) -> Result<()> {
    info!(base, head, "checking commit range");

    if base == config.settings().main_ref {
        repo.resolve(base).with_context(|| {
            format!("main ref '{base}' not found (hint: use --base-ref to specify a different base)")
        })?;
    }

    Validator::new(repo, config).validate_range(base, head)?;
    Ok(())
}

fn check_push(repo: &Repository, config: &LintConfig) -> Result<()> {
    let updates = read_ref_updates(io::stdin().lock())?;
    info!(refs = updates.len(), "checking pushed refs");

    Validator::new(repo, config).validate_push(&updates)?;
    Ok(())
}
