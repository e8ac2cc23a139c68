// Rust guideline compliant 2026-10-16

//! Output formatting module for the cycletime CLI.
//!
//! This module formats issue summaries for printing in various output
//! formats (JSON, table, plain text).

use cycletime_core::{IssueSummary, OutputFormat};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting report data in different output formats.
pub trait OutputFormatter {
    /// Formats issue summaries for display.
    ///
    /// # Arguments
    /// * `columns` - Report column names, leading columns first
    /// * `summaries` - One summary per reported issue
    ///
    /// # Returns
    /// A formatted string representation of the summaries
    fn format_summaries(&self, columns: &[String], summaries: &[IssueSummary]) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats summaries as valid JSON for machine consumption. Unreached
/// statuses are `null`.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_summaries(&self, columns: &[String], summaries: &[IssueSummary]) -> String {
        let output = json!({
            "columns": columns,
            "issues": summaries,
            "total": summaries.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize summaries" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats summaries as a human-readable table.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_summaries(&self, columns: &[String], summaries: &[IssueSummary]) -> String {
        if summaries.is_empty() {
            return "No issues with status changes found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(columns.iter().map(String::as_str));

        for summary in summaries {
            builder.push_record(summary.fields());
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// Prints the same comma-joined lines as the CSV report.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_summaries(&self, columns: &[String], summaries: &[IssueSummary]) -> String {
        let mut output = columns.join(",");
        output.push('\n');
        for summary in summaries {
            output.push_str(&summary.to_row());
            output.push('\n');
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
