//! Human-readable run summary
//!
//! Renders the banner and results block to standard output. There is no
//! machine-readable report; the summary is the whole interface.

use colored::Colorize;

use sync_core::{RunReport, SyncMapping};

const BANNER: &str = "============================================================";

/// Change entries printed before the list is elided
const MAX_CHANGES: usize = 50;
/// Warnings printed before the list is elided
const MAX_WARNINGS: usize = 20;

/// Print the run header: roots, mode, and the mapping about to be synced.
pub fn print_header(source: &str, target: &str, mapping: &SyncMapping, dry_run: bool) {
    println!("\n{}", BANNER);
    println!("{}", "AGENT SETUP SYNC".bold());
    println!("{}", BANNER);
    println!("Source: {}", source);
    println!("Target: {}", target);
    let mode = if dry_run { "DRY RUN".yellow() } else { "LIVE".green() };
    println!("Mode:   {}", mode);
    println!("{}\n", BANNER);

    println!("Syncing files...");
    for entry in mapping.entries() {
        println!("  {} -> {}", entry.source, entry.dest.cyan());
    }
}

/// Print the results block and completion banner.
pub fn print_results(report: &RunReport) {
    let stats = &report.stats;

    println!("\n{}", BANNER);
    println!("{}", "SYNC RESULTS".bold());
    println!("{}", BANNER);
    println!("Files copied/updated: {}", stats.files_copied);
    println!("Files unchanged:      {}", stats.files_unchanged);
    println!("Files skipped:        {}", stats.files_skipped);

    if !stats.changes.is_empty() {
        println!("\nChanges:");
        for change in stats.changes.iter().take(MAX_CHANGES) {
            println!("{}", change);
        }
        if stats.changes.len() > MAX_CHANGES {
            println!("  ... and {} more", stats.changes.len() - MAX_CHANGES);
        }
    }

    if !stats.warnings.is_empty() {
        println!("\nWarnings ({}):", stats.warnings.len());
        for warning in stats.warnings.iter().take(MAX_WARNINGS) {
            let line = format!("  - {}", warning.message);
            if warning.kind.escalates() {
                println!("{}", line.red());
            } else {
                println!("{}", line.yellow());
            }
        }
        if stats.warnings.len() > MAX_WARNINGS {
            println!("  ... and {} more", stats.warnings.len() - MAX_WARNINGS);
        }
    }

    println!("\n{}", BANNER);
    if report.dry_run {
        println!("{}", "DRY RUN COMPLETE - No files were modified".yellow());
    } else {
        println!("{}", "SYNC COMPLETE".green());
    }
    println!("{}\n", BANNER);
}

/// Marker printed between the main sweep and the example generators.
pub fn print_generator_header() {
    println!("\nGenerating example configs...");
}
