// Rust guideline compliant 2026-10-16

//! Unit tests for per-issue summaries and row rendering.

use cycletime_core::summary::header_row;
use cycletime_core::{Config, FinalizedTimeline, IssueSummary, IssueTimeline};

const T0: &str = "2024-01-10T09:00:00.000+0100";
const T1: &str = "2024-01-11T10:30:00.000+0100";
const T2: &str = "2024-01-15T17:45:30.500+0100";

/// Helper to finalize a timeline from `(status, created)` pairs.
fn finalized(issue_id: &str, issue_type: &str, changes: &[(&str, &str)]) -> FinalizedTimeline {
    let mut timeline = IssueTimeline::new(issue_id, issue_type);
    for (status, created) in changes {
        timeline.push(*status, *created);
    }
    timeline.finalize().expect("valid timestamps")
}

#[test]
fn test_header_row_default_vocabulary() {
    let config = Config::default();
    assert_eq!(
        header_row(&config),
        "Issue-id,Issue-type,First final state,Neu,Specification,Ready for development,\
         In Progress,Re-Work,In Code Review,Approval,Done,Closed"
    );
}

#[test]
fn test_summary_basic_progression() {
    let config = Config::default();
    let timeline = finalized(
        "PROJ-1",
        "Story",
        &[("Done", T2), ("Neu", T0), ("In Progress", T1)],
    );

    let summary = IssueSummary::from_timeline(&timeline, &config);

    assert_eq!(
        summary.to_row(),
        "PROJ-1,Story,2024-01-15 17:45:30,2024-01-10 09:00:00,,,2024-01-11 10:30:00,,,,\
         2024-01-15 17:45:30,"
    );
    let durations: Vec<f64> = timeline.events().iter().map(|e| e.duration_secs()).collect();
    assert_eq!(durations, vec![91_800.0, 371_730.5, 0.0]);
}

#[test]
fn test_summary_unreached_statuses_empty() {
    let config = Config::default();
    let timeline = finalized("PROJ-2", "Bug", &[("In Progress", T1)]);

    let summary = IssueSummary::from_timeline(&timeline, &config);

    for entry in summary.statuses() {
        if entry.status == "In Progress" {
            assert!(entry.first_seen.is_some());
        } else {
            assert!(entry.first_seen.is_none(), "{} should be empty", entry.status);
        }
    }
    assert!(summary.first_final_state().is_none());
    assert_eq!(summary.fields()[2], "");
}

#[test]
fn test_summary_first_occurrence_wins() {
    let config = Config::default();
    let timeline = finalized(
        "PROJ-3",
        "Story",
        &[("In Progress", T2), ("In Progress", T0), ("Re-Work", T1)],
    );

    let summary = IssueSummary::from_timeline(&timeline, &config);

    assert_eq!(
        summary
            .first_seen("In Progress")
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string()),
        Some("2024-01-10 09:00:00".to_string())
    );
}

#[test]
fn test_first_final_state_is_earliest_terminal() {
    let config = Config::default();
    let timeline = finalized(
        "PROJ-4",
        "Story",
        &[("Closed", T2), ("Done", T1), ("Neu", T0)],
    );

    let summary = IssueSummary::from_timeline(&timeline, &config);

    assert_eq!(summary.fields()[2], "2024-01-11 10:30:00");
}

#[test]
fn test_first_final_state_after_reopen() {
    let config = Config::default();
    let timeline = finalized(
        "PROJ-5",
        "Story",
        &[("Done", T0), ("In Progress", T1), ("Done", T2)],
    );

    let summary = IssueSummary::from_timeline(&timeline, &config);

    assert_eq!(summary.fields()[2], "2024-01-10 09:00:00");
    assert_eq!(summary.fields()[3 + 7], "2024-01-10 09:00:00");
}

#[test]
fn test_identical_timestamps_recorded_independently() {
    let config = Config::default();
    let timeline = finalized(
        "PROJ-6",
        "Task",
        &[("In Code Review", T1), ("Approval", T1)],
    );

    let summary = IssueSummary::from_timeline(&timeline, &config);

    assert_eq!(summary.first_seen("In Code Review"), summary.first_seen("Approval"));
    assert!(summary.first_seen("Approval").is_some());
}

#[test]
fn test_unknown_status_has_no_column() {
    let config = Config::default();
    let timeline = finalized("PROJ-7", "Task", &[("Blocked", T0), ("Neu", T1)]);

    let summary = IssueSummary::from_timeline(&timeline, &config);

    assert_eq!(summary.fields().len(), 3 + config.statuses.len());
    assert!(summary.first_seen("Blocked").is_none());
    assert_eq!(summary.fields()[3], "2024-01-11 10:30:00");
}

#[test]
fn test_custom_vocabulary_drives_columns() {
    let config = Config {
        statuses: vec!["Open".to_string(), "Shipped".to_string()],
        terminal_statuses: vec!["Shipped".to_string()],
        ..Config::default()
    };
    let timeline = finalized("PROJ-8", "Story", &[("Open", T0), ("Shipped", T1)]);

    let summary = IssueSummary::from_timeline(&timeline, &config);

    assert_eq!(header_row(&config), "Issue-id,Issue-type,First final state,Open,Shipped");
    assert_eq!(
        summary.to_row(),
        "PROJ-8,Story,2024-01-11 10:30:00,2024-01-10 09:00:00,2024-01-11 10:30:00"
    );
}

#[test]
fn test_offset_dropped_not_converted() {
    let config = Config::default();
    let timeline = finalized("PROJ-9", "Story", &[("Neu", "2024-06-01T23:15:00.000-0700")]);

    let summary = IssueSummary::from_timeline(&timeline, &config);

    assert_eq!(summary.fields()[3], "2024-06-01 23:15:00");
}

#[test]
fn test_summary_serializes_report_timestamps() {
    let config = Config::default();
    let timeline = finalized("PROJ-7", "Task", &[("In Progress", T1), ("Done", T2)]);
    let summary = IssueSummary::from_timeline(&timeline, &config);

    let value = serde_json::to_value(&summary).expect("summary serializes");

    assert_eq!(value["issue_id"], "PROJ-7");
    assert_eq!(value["issue_type"], "Task");
    assert_eq!(value["first_final_state"], "2024-01-15 17:45:30");
    assert_eq!(value["statuses"][0]["status"], "Neu");
    assert!(value["statuses"][0]["first_seen"].is_null());
    assert_eq!(value["statuses"][3]["status"], "In Progress");
    assert_eq!(value["statuses"][3]["first_seen"], "2024-01-11 10:30:00");
}
