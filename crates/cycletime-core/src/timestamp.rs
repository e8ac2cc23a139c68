// Rust guideline compliant 2026-10-16

//! Timestamp parsing and report formatting.
//!
//! Change timestamps arrive as `2024-01-15T10:30:00.000+0100`: exactly three
//! fractional digits and a numeric offset. Anything else is rejected.

use crate::{Error, Result};
use chrono::{DateTime, FixedOffset};

/// Exact input format of change timestamps.
pub const SOURCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3f%z";

/// Output format used in report columns.
pub const REPORT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a change timestamp, keeping its offset.
///
/// # Errors
///
/// Returns `Error::TimestampParse` if `value` does not match [`SOURCE_FORMAT`].
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, SOURCE_FORMAT).map_err(|source| Error::TimestampParse {
        value: value.to_string(),
        source,
    })
}

/// Formats a timestamp as wall-clock time in its own offset.
///
/// The offset is dropped, not converted to UTC or to the local zone.
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(REPORT_FORMAT).to_string()
}

/// Formats an optional timestamp; `None` renders as an empty field.
pub fn format_optional(timestamp: Option<&DateTime<FixedOffset>>) -> String {
    timestamp.map(format_timestamp).unwrap_or_default()
}
