//! setup-sync CLI
//!
//! Publishes the curated subset of the private agent configuration tree
//! into the public agent-setup repository, sanitizing on the way out.

mod cli;
mod error;
mod report;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sync_core::defaults::default_mapping;
use sync_core::{RunReport, SyncEngine, SyncOptions};
use sync_fs::NormalizedPath;
use sync_policy::defaults::{default_classifier, default_exclusions, default_rewriter};

use cli::Cli;
use error::{CliError, Result};

/// Default destination repository, relative to the home directory.
const DEFAULT_TARGET: &str = "code/agent-setup";

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            1
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
        tracing::debug!("Verbose mode enabled");
    }

    let (source_root, target_root) = resolve_roots(&cli)?;

    let mapping = default_mapping();
    let engine = SyncEngine::new(
        NormalizedPath::new(&source_root),
        NormalizedPath::new(&target_root),
        mapping,
        default_exclusions(),
        default_classifier()?,
        default_rewriter()?,
    );

    report::print_header(
        engine.source_root().as_str(),
        engine.target_root().as_str(),
        engine.mapping(),
        cli.dry_run,
    );

    let options = SyncOptions {
        dry_run: cli.dry_run,
    };
    let mut stats = engine.sync(options)?;

    report::print_generator_header();
    engine.generate_examples(&mut stats, cli.dry_run);

    let run_report = RunReport::new(stats, cli.dry_run);
    report::print_results(&run_report);

    Ok(run_report.exit_code())
}

/// Resolve the source and target roots from flags and the environment.
///
/// Overrides are canonicalized when they exist; a missing target is left
/// as-is so the engine reports it as the fatal pre-work check.
fn resolve_roots(cli: &Cli) -> Result<(PathBuf, PathBuf)> {
    let home =
        dirs::home_dir().ok_or_else(|| CliError::user("Could not determine home directory"))?;

    let source_root = match &cli.source {
        Some(path) => canonical_if_present(path)?,
        None => home.clone(),
    };
    let target_root = match &cli.target {
        Some(path) => canonical_if_present(path)?,
        None => home.join(DEFAULT_TARGET),
    };

    Ok((source_root, target_root))
}

fn canonical_if_present(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        Ok(dunce::canonicalize(path)?)
    } else {
        Ok(path.to_path_buf())
    }
}
