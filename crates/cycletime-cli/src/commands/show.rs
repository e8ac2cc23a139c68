// Rust guideline compliant 2026-10-16

//! Implementation of the `cycletime show` command.

use crate::OutputFormatter;
use anyhow::Result;
use cycletime_core::Config;

/// Prints the issue summaries to stdout without writing any file.
///
/// # Errors
///
/// Returns an error if the issues cannot be loaded or a timestamp is
/// malformed.
pub fn execute(config: &Config, remote: bool, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = super::load_report(config, remote)?;
    println!(
        "{}",
        formatter.format_summaries(report.columns(), report.summaries())
    );
    Ok(())
}
