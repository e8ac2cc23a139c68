// Rust guideline compliant 2026-10-16

//! Status timelines: collection of status changes per issue and span
//! computation.
//!
//! A timeline is built in two phases. While walking the source, raw changes
//! are appended to an [`IssueTimeline`] in discovery order. Once every
//! issue has been walked, each timeline is finalized exactly once into a
//! [`FinalizedTimeline`]: timestamps are parsed, events are stably sorted
//! and the time spent in each status is computed.

use crate::models::Issue;
use crate::timestamp::parse_timestamp;
use crate::Result;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

/// A status change as discovered in the source, not yet parsed or ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStatusChange {
    /// Status the issue moved into.
    pub status: String,
    /// Raw history timestamp.
    pub created: String,
}

/// Unfinalized status changes of one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTimeline {
    issue_id: String,
    issue_type: String,
    changes: Vec<RawStatusChange>,
}

impl IssueTimeline {
    /// Creates an empty timeline for an issue.
    pub fn new(issue_id: impl Into<String>, issue_type: impl Into<String>) -> Self {
        Self {
            issue_id: issue_id.into(),
            issue_type: issue_type.into(),
            changes: Vec::new(),
        }
    }

    /// Appends a status change in discovery order.
    pub fn push(&mut self, status: impl Into<String>, created: impl Into<String>) {
        self.changes.push(RawStatusChange {
            status: status.into(),
            created: created.into(),
        });
    }

    /// Returns the issue identifier.
    pub fn issue_id(&self) -> &str {
        &self.issue_id
    }

    /// Returns the issue type.
    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    /// Returns the raw changes in discovery order.
    pub fn changes(&self) -> &[RawStatusChange] {
        &self.changes
    }

    /// Returns the number of recorded changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns true if no status change was recorded.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Parses, orders and spans the recorded changes.
    ///
    /// # Errors
    ///
    /// Returns `Error::TimestampParse` if any change carries a malformed
    /// timestamp. No partial timeline is produced.
    pub fn finalize(self) -> Result<FinalizedTimeline> {
        let events = compute_spans(&self.changes)?;
        Ok(FinalizedTimeline {
            issue_id: self.issue_id,
            issue_type: self.issue_type,
            events,
        })
    }
}

/// A status change with its parsed timestamp and time spent in the status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChangeEvent {
    status: String,
    timestamp: DateTime<FixedOffset>,
    duration_secs: f64,
}

impl StatusChangeEvent {
    /// Returns the status the issue moved into.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns when the change happened.
    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.timestamp
    }

    /// Returns the seconds spent in this status before the next change.
    ///
    /// Zero for the last observed change.
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }
}

/// Chronologically ordered status changes of one issue, with spans.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedTimeline {
    issue_id: String,
    issue_type: String,
    events: Vec<StatusChangeEvent>,
}

impl FinalizedTimeline {
    /// Returns the issue identifier.
    pub fn issue_id(&self) -> &str {
        &self.issue_id
    }

    /// Returns the issue type.
    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    /// Returns the events, ascending by timestamp.
    pub fn events(&self) -> &[StatusChangeEvent] {
        &self.events
    }

    /// Returns true if the issue never changed status.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Seconds between the first and the last change.
    pub fn total_span_secs(&self) -> f64 {
        match (self.events.first(), self.events.last()) {
            (Some(first), Some(last)) => seconds_between(&first.timestamp, &last.timestamp),
            _ => 0.0,
        }
    }
}

/// Parses, stably sorts and spans a sequence of raw changes.
///
/// Ties keep discovery order. Each event's duration is the time until the
/// next event; the last event gets zero.
///
/// # Errors
///
/// Returns `Error::TimestampParse` on the first malformed timestamp.
pub fn compute_spans(changes: &[RawStatusChange]) -> Result<Vec<StatusChangeEvent>> {
    let mut parsed = changes
        .iter()
        .map(|change| {
            parse_timestamp(&change.created).map(|timestamp| (change.status.clone(), timestamp))
        })
        .collect::<Result<Vec<_>>>()?;

    // sort_by_key is stable
    parsed.sort_by_key(|(_, timestamp)| *timestamp);

    let next_timestamps: Vec<Option<DateTime<FixedOffset>>> = parsed
        .iter()
        .skip(1)
        .map(|(_, timestamp)| Some(*timestamp))
        .chain(std::iter::once(None))
        .collect();

    Ok(parsed
        .into_iter()
        .zip(next_timestamps)
        .map(|((status, timestamp), next)| StatusChangeEvent {
            duration_secs: next
                .map(|next| seconds_between(&timestamp, &next))
                .unwrap_or(0.0),
            status,
            timestamp,
        })
        .collect())
}

fn seconds_between(from: &DateTime<FixedOffset>, to: &DateTime<FixedOffset>) -> f64 {
    (*to - *from).num_milliseconds() as f64 / 1000.0
}

/// Timelines keyed by issue identifier, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct TimelineSet {
    timelines: Vec<IssueTimeline>,
    /// Position of each issue identifier in `timelines`.
    index: HashMap<String, usize>,
}

impl TimelineSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the timeline for `issue_id`, creating it on first sight.
    ///
    /// The issue type recorded on first sight is kept.
    pub fn entry(&mut self, issue_id: &str, issue_type: &str) -> &mut IssueTimeline {
        let position = match self.index.get(issue_id) {
            Some(&position) => position,
            None => {
                let position = self.timelines.len();
                self.timelines.push(IssueTimeline::new(issue_id, issue_type));
                self.index.insert(issue_id.to_string(), position);
                position
            }
        };
        &mut self.timelines[position]
    }

    /// Looks up a timeline by issue identifier.
    pub fn get(&self, issue_id: &str) -> Option<&IssueTimeline> {
        self.index.get(issue_id).map(|&position| &self.timelines[position])
    }

    /// Returns the number of issues seen.
    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    /// Returns true if no issue was seen.
    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }

    /// Iterates timelines in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &IssueTimeline> {
        self.timelines.iter()
    }

    /// Finalizes every timeline, preserving first-seen order.
    ///
    /// # Errors
    ///
    /// Returns the first timestamp error; nothing is returned on failure.
    pub fn finalize_all(self) -> Result<Vec<FinalizedTimeline>> {
        self.timelines
            .into_iter()
            .map(IssueTimeline::finalize)
            .collect()
    }
}

impl IntoIterator for TimelineSet {
    type Item = IssueTimeline;
    type IntoIter = std::vec::IntoIter<IssueTimeline>;

    fn into_iter(self) -> Self::IntoIter {
        self.timelines.into_iter()
    }
}

/// Groups status changes by issue.
///
/// Every issue in `issues` gets an entry, even one without any status
/// change. A missing `toString` on a status item is passed through as an
/// empty status.
pub fn build_timelines(issues: &[Issue]) -> TimelineSet {
    let mut set = TimelineSet::new();

    for issue in issues {
        let timeline = set.entry(&issue.key, issue.issue_type());

        for history in issue.histories() {
            for item in history.items.iter().filter(|item| item.is_status_change()) {
                timeline.push(
                    item.to_value.clone().unwrap_or_default(),
                    history.created.clone(),
                );
            }
        }

        tracing::debug!(
            issue = %issue.key,
            changes = timeline.len(),
            "collected status changes"
        );
    }

    set
}
