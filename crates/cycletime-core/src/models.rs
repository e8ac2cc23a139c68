// Rust guideline compliant 2026-10-16

//! Raw issue records as exported by the tracker.
//!
//! These types mirror the subset of the Jira agile issue payload the
//! report needs: issue key, issue type, and the expanded changelog.

use serde::{Deserialize, Serialize};

/// Name of the changelog field that carries workflow status changes.
pub const STATUS_FIELD: &str = "status";

/// Issue type used when the payload does not carry one.
pub const UNKNOWN_ISSUE_TYPE: &str = "Unknown";

/// A document holding a collection of issues.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueDocument {
    /// Issues in source order.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// A single tracked issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique issue key (e.g. `PROJ-123`).
    pub key: String,
    /// Selected issue fields.
    #[serde(default)]
    pub fields: Option<IssueFields>,
    /// Expanded change history.
    #[serde(default)]
    pub changelog: Option<Changelog>,
}

/// Issue fields the report reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    /// Issue type descriptor.
    #[serde(default)]
    pub issuetype: Option<IssueType>,
}

/// Issue type descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueType {
    /// Display name of the type (e.g. `Story`, `Bug`).
    #[serde(default)]
    pub name: Option<String>,
}

/// Change history of an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Changelog {
    /// History entries, in whatever order the source returned them.
    #[serde(default)]
    pub histories: Vec<History>,
}

/// One history entry: a set of field changes made at the same time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Creation time, ISO 8601 with milliseconds and offset.
    pub created: String,
    /// Field changes recorded in this entry.
    #[serde(default)]
    pub items: Vec<ChangeItem>,
}

/// A single field change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeItem {
    /// Name of the changed field.
    pub field: String,
    /// Display value before the change.
    #[serde(rename = "fromString", default)]
    pub from_value: Option<String>,
    /// Display value after the change.
    #[serde(rename = "toString", default)]
    pub to_value: Option<String>,
}

impl Issue {
    /// Returns the issue type name, or `Unknown` when absent.
    pub fn issue_type(&self) -> &str {
        self.fields
            .as_ref()
            .and_then(|fields| fields.issuetype.as_ref())
            .and_then(|issuetype| issuetype.name.as_deref())
            .unwrap_or(UNKNOWN_ISSUE_TYPE)
    }

    /// Returns the change history entries, empty when no changelog was expanded.
    pub fn histories(&self) -> &[History] {
        self.changelog
            .as_ref()
            .map(|changelog| changelog.histories.as_slice())
            .unwrap_or(&[])
    }
}

impl ChangeItem {
    /// Returns true if this item records a workflow status change.
    pub fn is_status_change(&self) -> bool {
        self.field == STATUS_FIELD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_issue() {
        let issue: Issue = serde_json::from_str(r#"{"key": "PROJ-1"}"#).unwrap();
        assert_eq!(issue.key, "PROJ-1");
        assert_eq!(issue.issue_type(), UNKNOWN_ISSUE_TYPE);
        assert!(issue.histories().is_empty());
    }

    #[test]
    fn test_parse_full_issue() {
        let json = r#"{
            "key": "PROJ-2",
            "fields": {"issuetype": {"name": "Bug"}, "summary": "ignored"},
            "changelog": {
                "startAt": 0,
                "histories": [{
                    "id": "100",
                    "created": "2024-01-15T10:30:00.000+0100",
                    "items": [
                        {"field": "status", "fromString": "Neu", "toString": "In Progress"},
                        {"field": "assignee", "fromString": null, "toString": "Jane"}
                    ]
                }]
            }
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.issue_type(), "Bug");
        assert_eq!(issue.histories().len(), 1);

        let items = &issue.histories()[0].items;
        assert!(items[0].is_status_change());
        assert_eq!(items[0].to_value.as_deref(), Some("In Progress"));
        assert!(!items[1].is_status_change());
        assert_eq!(items[1].from_value, None);
    }

    #[test]
    fn test_document_without_issues_is_empty() {
        let doc: IssueDocument = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(doc.issues.is_empty());
    }

    #[test]
    fn test_issue_without_type_name_fields() {
        let issue: Issue =
            serde_json::from_str(r#"{"key": "PROJ-3", "fields": {}}"#).unwrap();
        assert_eq!(issue.issue_type(), "Unknown");
    }

    #[test]
    fn test_issue_type_without_name() {
        let issue: Issue =
            serde_json::from_str(r#"{"key": "PROJ-4", "fields": {"issuetype": {}}}"#).unwrap();
        assert_eq!(issue.issue_type(), UNKNOWN_ISSUE_TYPE);
    }

    #[test]
    fn test_issue_type_with_null_name() {
        let doc: IssueDocument = serde_json::from_str(
            r#"{"issues": [{"key": "PROJ-5", "fields": {"issuetype": {"name": null}}}]}"#,
        )
        .unwrap();
        assert_eq!(doc.issues[0].issue_type(), UNKNOWN_ISSUE_TYPE);
    }
}
