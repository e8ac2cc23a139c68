// Rust guideline compliant 2026-10-16

//! Cycletime Core Library
//!
//! This crate provides the foundational components for status cycle-time
//! reports:
//! - Raw issue models (issue, changelog, change items)
//! - Issue sources (trait plus JSON file source)
//! - Timeline building and span computation
//! - Per-issue summaries and report rendering
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod source;
pub mod summary;
pub mod timeline;
pub mod timestamp;

pub use config::{Config, JiraConfig, OutputFormat};
pub use error::{Error, ErrorKind, Result};
pub use models::{ChangeItem, Changelog, History, Issue, IssueDocument, IssueFields, IssueType};
pub use report::{build_report, build_report_with_progress, write_atomic, Report};
pub use source::{FileSource, IssueSource};
pub use summary::{IssueSummary, StatusFirstSeen};
pub use timeline::{
    build_timelines, compute_spans, FinalizedTimeline, IssueTimeline, RawStatusChange,
    StatusChangeEvent, TimelineSet,
};
