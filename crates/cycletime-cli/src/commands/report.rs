// Rust guideline compliant 2026-10-16

//! Implementation of the `cycletime report` command.
//!
//! Builds the per-issue status summary and writes it as CSV.

use anyhow::Result;
use cycletime_core::{write_atomic, Config};

/// Writes the summary CSV to the configured output file.
///
/// # Arguments
///
/// * `config` - Run configuration
/// * `remote` - Fetch issues from Jira instead of the export file
///
/// # Errors
///
/// Returns an error if:
/// - The export file is missing or not valid JSON
/// - The remote fetch fails
/// - Any status change carries a malformed timestamp
/// - The output file cannot be written
pub fn execute(config: &Config, remote: bool) -> Result<()> {
    let report = super::load_report(config, remote)?;

    write_atomic(&config.output_file, &report.to_csv())?;

    println!(
        "Status report exported to '{}' ({} issues)",
        config.output_file.display(),
        report.summaries().len()
    );

    Ok(())
}
