// Rust guideline compliant 2026-10-16

//! Offset pagination over the board issue endpoint.

use cycletime_core::Result;
use serde::Deserialize;

/// One page of the board issue listing.
///
/// Issues are kept as raw JSON so a fetched export preserves every field
/// the tracker returned.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    /// Offset of the first issue in this page.
    #[serde(rename = "startAt", default)]
    pub start_at: usize,
    /// Total number of issues matching the query, if the tracker sent one.
    #[serde(default)]
    pub total: Option<usize>,
    /// Issues in this page; `None` if the response carried no `issues` array.
    #[serde(default)]
    pub issues: Option<Vec<serde_json::Value>>,
}

/// Collects every issue by calling `fetch(start_at)` until the listing is
/// exhausted.
///
/// Stops when a page has no `issues` array, an empty one, or when the
/// running offset reaches `total`. A page without `total` is logged and
/// paging continues until an empty page.
///
/// # Errors
///
/// Returns the first error produced by `fetch`; no partial result is kept.
pub fn collect_pages<F>(mut fetch: F) -> Result<Vec<serde_json::Value>>
where
    F: FnMut(usize) -> Result<Page>,
{
    let mut start_at = 0usize;
    let mut all = Vec::new();

    loop {
        tracing::info!(start_at, "Fetching issues starting from {}", start_at);
        let page = fetch(start_at)?;

        let issues = match page.issues {
            Some(issues) if !issues.is_empty() => issues,
            _ => break,
        };

        start_at += issues.len();
        all.extend(issues);

        match page.total {
            Some(total) if start_at >= total => break,
            Some(_) => {}
            None => tracing::warn!(start_at, "page carried no total; paging until an empty page"),
        }
    }

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cycletime_core::Error;
    use serde_json::json;

    fn page(start_at: usize, total: usize, keys: &[&str]) -> Page {
        Page {
            start_at,
            total: Some(total),
            issues: Some(keys.iter().map(|key| json!({ "key": key })).collect()),
        }
    }

    #[test]
    fn test_single_page() {
        let mut calls = Vec::new();
        let issues = collect_pages(|start| {
            calls.push(start);
            Ok(page(start, 2, &["A-1", "A-2"]))
        })
        .unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(calls, vec![0]);
    }

    #[test]
    fn test_advances_by_returned_count() {
        let pages = vec![
            page(0, 5, &["A-1", "A-2"]),
            page(2, 5, &["A-3", "A-4"]),
            page(4, 5, &["A-5"]),
        ];
        let mut calls = Vec::new();
        let issues = collect_pages(|start| {
            calls.push(start);
            Ok(pages[calls.len() - 1].clone())
        })
        .unwrap();

        assert_eq!(calls, vec![0, 2, 4]);
        let keys: Vec<&str> = issues.iter().filter_map(|i| i["key"].as_str()).collect();
        assert_eq!(keys, vec!["A-1", "A-2", "A-3", "A-4", "A-5"]);
    }

    #[test]
    fn test_stops_on_empty_page() {
        let mut calls = 0;
        let issues = collect_pages(|start| {
            calls += 1;
            if start == 0 {
                Ok(page(0, 10, &["A-1"]))
            } else {
                Ok(page(start, 10, &[]))
            }
        })
        .unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_stops_when_issues_missing() {
        let issues = collect_pages(|_| {
            Ok(Page {
                start_at: 0,
                total: Some(10),
                issues: None,
            })
        })
        .unwrap();

        assert!(issues.is_empty());
    }

    #[test]
    fn test_error_aborts_without_partial_result() {
        let result = collect_pages(|start| {
            if start == 0 {
                Ok(page(0, 4, &["A-1", "A-2"]))
            } else {
                Err(Error::HttpStatus {
                    status: 500,
                    body: "boom".to_string(),
                })
            }
        });

        assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
    }

    #[test]
    fn test_missing_total_pages_until_empty() {
        let mut calls = Vec::new();
        let issues = collect_pages(|start| {
            calls.push(start);
            let page: Page = match start {
                0 => serde_json::from_str(r#"{"startAt": 0, "issues": [{"key": "A-1"}, {"key": "A-2"}]}"#),
                2 => serde_json::from_str(r#"{"startAt": 2, "issues": [{"key": "A-3"}]}"#),
                _ => serde_json::from_str(r#"{"startAt": 3, "issues": []}"#),
            }?;
            Ok(page)
        })
        .unwrap();

        assert_eq!(calls, vec![0, 2, 3]);
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_page_deserializes_tracker_payload() {
        let page: Page = serde_json::from_str(
            r#"{"expand": "schema,names", "startAt": 100, "maxResults": 100, "total": 130, "issues": [{"key": "A-1"}]}"#,
        )
        .unwrap();

        assert_eq!(page.start_at, 100);
        assert_eq!(page.total, Some(130));
        assert_eq!(page.issues.map(|i| i.len()), Some(1));
    }
}
