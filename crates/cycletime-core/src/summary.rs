// Rust guideline compliant 2026-10-16

//! Per-issue summaries: first time each status was reached and first time
//! the issue reached a terminal status.

use crate::config::Config;
use crate::timeline::FinalizedTimeline;
use crate::timestamp::{format_optional, format_timestamp};
use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};

/// Fixed leading report columns.
pub const LEADING_COLUMNS: [&str; 3] = ["Issue-id", "Issue-type", "First final state"];

/// First time a vocabulary status was reached.
///
/// Serializes the timestamp in report format, `null` if never reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusFirstSeen {
    /// Status name from the vocabulary.
    pub status: String,
    /// Earliest timestamp, `None` if never reached.
    #[serde(serialize_with = "serialize_report_timestamp")]
    pub first_seen: Option<DateTime<FixedOffset>>,
}

/// Summary of one issue's timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueSummary {
    issue_id: String,
    issue_type: String,
    #[serde(serialize_with = "serialize_report_timestamp")]
    first_final_state: Option<DateTime<FixedOffset>>,
    statuses: Vec<StatusFirstSeen>,
}

impl IssueSummary {
    /// Builds the summary of a finalized timeline.
    ///
    /// One entry per vocabulary status, in vocabulary order. Statuses outside
    /// the vocabulary get no column.
    pub fn from_timeline(timeline: &FinalizedTimeline, config: &Config) -> Self {
        let events = timeline.events();

        let statuses = config
            .statuses
            .iter()
            .map(|status| StatusFirstSeen {
                status: status.clone(),
                first_seen: events
                    .iter()
                    .find(|event| event.status() == status)
                    .map(|event| *event.timestamp()),
            })
            .collect();

        let first_final_state = events
            .iter()
            .filter(|event| config.is_terminal(event.status()))
            .map(|event| *event.timestamp())
            .min();

        for event in events {
            if !config.statuses.iter().any(|s| s == event.status()) {
                tracing::warn!(
                    issue = %timeline.issue_id(),
                    status = %event.status(),
                    "status not in vocabulary"
                );
            }
        }

        Self {
            issue_id: timeline.issue_id().to_string(),
            issue_type: timeline.issue_type().to_string(),
            first_final_state,
            statuses,
        }
    }

    /// Returns the issue identifier.
    pub fn issue_id(&self) -> &str {
        &self.issue_id
    }

    /// Returns the issue type.
    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    /// Returns the earliest terminal timestamp.
    pub fn first_final_state(&self) -> Option<&DateTime<FixedOffset>> {
        self.first_final_state.as_ref()
    }

    /// Returns first-seen timestamps in vocabulary order.
    pub fn statuses(&self) -> &[StatusFirstSeen] {
        &self.statuses
    }

    /// Returns when `status` was first reached, if it is in the vocabulary
    /// and was reached.
    pub fn first_seen(&self, status: &str) -> Option<&DateTime<FixedOffset>> {
        self.statuses
            .iter()
            .find(|entry| entry.status == status)
            .and_then(|entry| entry.first_seen.as_ref())
    }

    /// Returns the formatted report fields of this summary.
    pub fn fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(LEADING_COLUMNS.len() + self.statuses.len());
        fields.push(self.issue_id.clone());
        fields.push(self.issue_type.clone());
        fields.push(format_optional(self.first_final_state.as_ref()));
        fields.extend(
            self.statuses
                .iter()
                .map(|entry| format_optional(entry.first_seen.as_ref())),
        );
        fields
    }

    /// Renders the summary as a comma-joined row.
    ///
    /// Fields are not quoted; an embedded comma shifts the columns.
    pub fn to_row(&self) -> String {
        self.fields().join(",")
    }
}

/// Returns the report column names for a vocabulary.
pub fn header_columns(config: &Config) -> Vec<String> {
    LEADING_COLUMNS
        .iter()
        .map(|column| column.to_string())
        .chain(config.statuses.iter().cloned())
        .collect()
}

/// Renders the comma-joined report header.
pub fn header_row(config: &Config) -> String {
    header_columns(config).join(",")
}

fn serialize_report_timestamp<S>(
    timestamp: &Option<DateTime<FixedOffset>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match timestamp {
        Some(timestamp) => serializer.serialize_some(&format_timestamp(timestamp)),
        None => serializer.serialize_none(),
    }
}
