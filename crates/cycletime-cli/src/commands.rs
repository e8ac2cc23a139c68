// Rust guideline compliant 2026-10-16

//! Command implementations for the cycletime CLI.

pub mod fetch;
pub mod init;
pub mod report;
pub mod show;
pub mod transitions;

use crate::progress::ProgressReporter;
use anyhow::Result;
use cycletime_core::{build_report_with_progress, Config, FileSource, IssueSource, Report};
use cycletime_jira::JiraClient;

/// Opens the issue source for this run: the Jira board when `remote` is
/// set, the configured export file otherwise.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn open_source(config: &Config, remote: bool) -> Result<Box<dyn IssueSource>> {
    if remote {
        Ok(Box::new(JiraClient::new(config.jira.clone())?))
    } else {
        Ok(Box::new(FileSource::new(&config.input_file)))
    }
}

/// Loads all issues and builds the report, printing progress to stderr.
///
/// # Errors
///
/// Returns an error if the source cannot be loaded or a timestamp is
/// malformed. Nothing is written in either case.
pub fn load_report(config: &Config, remote: bool) -> Result<Report> {
    let source = open_source(config, remote)?;
    tracing::info!(source = %source.describe(), "loading issues");
    let document = source.load()?;

    let progress = ProgressReporter::new("Summarized issues", config.progress_interval);
    let report = build_report_with_progress(&document, config, |done, total, _| {
        progress.report(done, total);
    })?;

    Ok(report)
}
