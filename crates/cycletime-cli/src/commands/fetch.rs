// Rust guideline compliant 2026-10-16

//! Implementation of the `cycletime fetch` command.
//!
//! Downloads every board issue with its changelog and stores the result as
//! the export file later runs read from.

use anyhow::Result;
use cycletime_core::{write_atomic, Config};
use cycletime_jira::JiraClient;

/// Fetches all issues from Jira and writes them to the configured input file.
///
/// # Errors
///
/// Returns an error if:
/// - Any page request fails or returns a non-success status
/// - A page is not valid JSON
/// - The export file cannot be written
pub fn execute(config: &Config) -> Result<()> {
    if config.jira.api_token.is_empty() {
        tracing::warn!("jira.api_token is empty; the request will likely be rejected");
    }

    let client = JiraClient::new(config.jira.clone())?;
    let document = client.fetch_document()?;
    let total = document["total"].as_u64().unwrap_or_default();

    let content = serde_json::to_string_pretty(&document)?;
    write_atomic(&config.input_file, &content)?;

    println!(
        "Fetched {} issues into '{}'",
        total,
        config.input_file.display()
    );

    Ok(())
}
