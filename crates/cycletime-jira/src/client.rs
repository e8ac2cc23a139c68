// Rust guideline compliant 2026-10-16

//! Blocking client for the Jira agile board issue endpoint.

use crate::pagination::{collect_pages, Page};
use cycletime_core::{Error, IssueDocument, IssueSource, JiraConfig, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// Issue source backed by a Jira agile board.
///
/// Requests ask for the expanded changelog, authenticate with the account
/// name and API token, and page through the whole result set.
#[derive(Debug, Clone)]
pub struct JiraClient {
    config: JiraConfig,
    http: Client,
}

impl JiraClient {
    /// Creates a client for the given board settings.
    ///
    /// # Errors
    ///
    /// Returns `Error::Network` if the HTTP client cannot be built.
    pub fn new(config: JiraConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(network_error)?;
        Ok(Self { config, http })
    }

    /// Returns the board settings.
    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    /// Query parameters for the page starting at `start_at`.
    fn query(&self, start_at: usize) -> Vec<(&'static str, String)> {
        vec![
            ("jql", self.config.jql.clone()),
            ("expand", "changelog".to_string()),
            ("startAt", start_at.to_string()),
            ("maxResults", self.config.page_size.to_string()),
        ]
    }

    /// Fetches a single page of issues.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `Error::Network` on transport failure
    /// - `Error::HttpStatus` on a non-success response
    /// - `Error::Json` if the body is not a valid page
    pub fn fetch_page(&self, start_at: usize) -> Result<Page> {
        let url = self.config.issues_url();
        tracing::debug!(%url, start_at, "requesting issue page");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .basic_auth(&self.config.username, Some(&self.config.api_token))
            .query(&self.query(start_at))
            .send()
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().map_err(network_error)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches every issue of the board as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns the first page error; nothing is returned on failure.
    pub fn fetch_all(&self) -> Result<Vec<serde_json::Value>> {
        let issues = collect_pages(|start_at| self.fetch_page(start_at))?;
        tracing::info!(issues = issues.len(), "fetched all issues");
        Ok(issues)
    }

    /// Fetches every issue and wraps them in an export document.
    ///
    /// The document has the same shape as the file export (`issues` array
    /// plus `total`), so it can be stored and read back by the file source.
    ///
    /// # Errors
    ///
    /// Returns the first page error.
    pub fn fetch_document(&self) -> Result<serde_json::Value> {
        let issues = self.fetch_all()?;
        Ok(serde_json::json!({
            "total": issues.len(),
            "issues": issues,
        }))
    }
}

impl IssueSource for JiraClient {
    fn describe(&self) -> String {
        format!(
            "Jira board {} at {}",
            self.config.board_id, self.config.base_url
        )
    }

    fn load(&self) -> Result<IssueDocument> {
        let document = self.fetch_document()?;
        Ok(serde_json::from_value(document)?)
    }
}

fn network_error(err: reqwest::Error) -> Error {
    Error::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> JiraClient {
        let config = JiraConfig {
            base_url: "https://example.atlassian.net".to_string(),
            board_id: "28".to_string(),
            page_size: 50,
            ..JiraConfig::default()
        };
        JiraClient::new(config).unwrap()
    }

    #[test]
    fn test_query_parameters() {
        let query = client().query(100);
        assert_eq!(
            query,
            vec![
                ("jql", "updated>=-26w".to_string()),
                ("expand", "changelog".to_string()),
                ("startAt", "100".to_string()),
                ("maxResults", "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_describe_names_board() {
        let description = client().describe();
        assert_eq!(description, "Jira board 28 at https://example.atlassian.net");
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        let config = JiraConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            board_id: "1".to_string(),
            timeout_secs: 2,
            ..JiraConfig::default()
        };
        let client = JiraClient::new(config).unwrap();

        let err = client.load().unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
