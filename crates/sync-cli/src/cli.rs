//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Sync agent setup to the public repo, sanitizing on the way out.
#[derive(Parser, Debug)]
#[command(name = "setup-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Preview only; compute every decision but write nothing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Override the source root (defaults to the home directory)
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Override the destination repository root
    #[arg(long, value_name = "DIR")]
    pub target: Option<PathBuf>,
}
