// Rust guideline compliant 2026-10-16

//! Report assembly, CSV rendering and atomic file output.
//!
//! A report is computed completely in memory before anything touches the
//! filesystem, so a failing run never leaves a partial file behind.

use crate::config::Config;
use crate::models::IssueDocument;
use crate::summary::{header_columns, IssueSummary};
use crate::timeline::{build_timelines, FinalizedTimeline};
use crate::timestamp::format_timestamp;
use crate::Result;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header of the per-transition export.
pub const TRANSITIONS_HEADER: &str = "Issue-id,new status,date,time spent";

/// A fully computed status report.
#[derive(Debug, Clone)]
pub struct Report {
    columns: Vec<String>,
    summaries: Vec<IssueSummary>,
    timelines: Vec<FinalizedTimeline>,
}

impl Report {
    /// Returns the report column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns one summary per issue with at least one status change, in
    /// first-seen order.
    pub fn summaries(&self) -> &[IssueSummary] {
        &self.summaries
    }

    /// Returns the finalized timelines backing the summaries.
    pub fn timelines(&self) -> &[FinalizedTimeline] {
        &self.timelines
    }

    /// Renders the summary CSV.
    ///
    /// Header line, then one line per summary, joined by `\n` without a
    /// trailing newline. Fields are not quoted.
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.summaries.len() + 1);
        lines.push(self.columns.join(","));
        lines.extend(self.summaries.iter().map(IssueSummary::to_row));
        lines.join("\n")
    }

    /// Renders the per-transition CSV with the seconds spent in each status.
    pub fn transitions_csv(&self) -> String {
        let mut lines = vec![TRANSITIONS_HEADER.to_string()];
        for timeline in &self.timelines {
            for event in timeline.events() {
                lines.push(format!(
                    "{},{},{},{}",
                    timeline.issue_id(),
                    event.status(),
                    format_timestamp(event.timestamp()),
                    event.duration_secs()
                ));
            }
        }
        lines.join("\n")
    }
}

/// Builds the report for a document.
///
/// # Errors
///
/// Returns a timestamp error if any status change is malformed.
pub fn build_report(document: &IssueDocument, config: &Config) -> Result<Report> {
    build_report_with_progress(document, config, |_, _, _| {})
}

/// Builds the report, calling `on_summary(done, total, summary)` after each
/// issue is summarized.
///
/// Issues without any status change get no summary.
///
/// # Errors
///
/// Returns a timestamp error if any status change is malformed. All
/// timelines are finalized before the first summary is produced.
pub fn build_report_with_progress<F>(
    document: &IssueDocument,
    config: &Config,
    mut on_summary: F,
) -> Result<Report>
where
    F: FnMut(usize, usize, &IssueSummary),
{
    let timelines: Vec<FinalizedTimeline> = build_timelines(&document.issues)
        .finalize_all()?
        .into_iter()
        .filter(|timeline| !timeline.is_empty())
        .collect();

    let total = timelines.len();
    let mut summaries = Vec::with_capacity(total);
    for (idx, timeline) in timelines.iter().enumerate() {
        tracing::debug!("Issue ID: {}", timeline.issue_id());
        let summary = IssueSummary::from_timeline(timeline, config);
        on_summary(idx + 1, total, &summary);
        summaries.push(summary);
    }

    Ok(Report {
        columns: header_columns(config),
        summaries,
        timelines,
    })
}

/// Writes `content` to `path` atomically (temp file + rename).
///
/// # Errors
///
/// Returns an IO error if the temp file cannot be written or renamed.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(path);

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e.into());
    }

    tracing::info!(path = %path.display(), bytes = content.len(), "wrote report file");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
