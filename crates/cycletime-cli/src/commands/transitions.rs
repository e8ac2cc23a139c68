// Rust guideline compliant 2026-10-16

//! Implementation of the `cycletime transitions` command.
//!
//! Exports every status change with the time spent in that status.

use anyhow::Result;
use cycletime_core::{write_atomic, Config};

/// Writes the per-transition CSV to the configured transitions file.
///
/// # Errors
///
/// Returns an error if the issues cannot be loaded, a timestamp is
/// malformed, or the file cannot be written.
pub fn execute(config: &Config, remote: bool) -> Result<()> {
    let report = super::load_report(config, remote)?;

    write_atomic(&config.transitions_file, &report.transitions_csv())?;

    let count: usize = report.timelines().iter().map(|t| t.events().len()).sum();
    println!(
        "Status changes exported to '{}' ({} changes)",
        config.transitions_file.display(),
        count
    );

    Ok(())
}
