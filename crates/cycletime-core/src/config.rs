// Rust guideline compliant 2026-10-16

//! Configuration management for cycletime.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cycletime.toml";

/// Output format for printed summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Connection settings for the remote Jira agile board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Base URL of the Jira instance.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Agile board identifier.
    #[serde(default = "default_board_id")]
    pub board_id: String,

    /// Account used for basic authentication.
    #[serde(default = "default_username")]
    pub username: String,

    /// API token used as the basic authentication password.
    #[serde(default)]
    pub api_token: String,

    /// JQL filter; the default covers the last 26 weeks.
    #[serde(default = "default_jql")]
    pub jql: String,

    /// Number of issues requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://your-jira-instance.atlassian.net".to_string()
}

fn default_board_id() -> String {
    "your-board-id".to_string()
}

fn default_username() -> String {
    "your-email@example.com".to_string()
}

fn default_jql() -> String {
    "updated>=-26w".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            board_id: default_board_id(),
            username: default_username(),
            api_token: String::new(),
            jql: default_jql(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl JiraConfig {
    /// Returns the board issue endpoint.
    pub fn issues_url(&self) -> String {
        format!(
            "{}/rest/agile/1.0/board/{}/issue",
            self.base_url.trim_end_matches('/'),
            self.board_id
        )
    }
}

/// Configuration for a report run.
///
/// Passed explicitly into every stage of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON export read by the file source and written by `fetch`.
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    /// Summary CSV destination.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Per-transition CSV destination.
    #[serde(default = "default_transitions_file")]
    pub transitions_file: PathBuf,

    /// Default output format for printed summaries.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Emit a progress line every N summarized issues.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,

    /// Ordered status vocabulary; also the report column order.
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,

    /// Statuses that count as an end state of the workflow.
    #[serde(default = "default_terminal_statuses")]
    pub terminal_statuses: Vec<String>,

    /// Remote tracker settings.
    #[serde(default)]
    pub jira: JiraConfig,
}

fn default_input_file() -> PathBuf {
    PathBuf::from("issues.json")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("status_report.csv")
}

fn default_transitions_file() -> PathBuf {
    PathBuf::from("status_transitions.csv")
}

fn default_progress_interval() -> usize {
    25
}

/// Default status vocabulary in workflow order.
fn default_statuses() -> Vec<String> {
    [
        "Neu",
        "Specification",
        "Ready for development",
        "In Progress",
        "Re-Work",
        "In Code Review",
        "Approval",
        "Done",
        "Closed",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_terminal_statuses() -> Vec<String> {
    vec!["Done".to_string(), "Closed".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_file: default_output_file(),
            transitions_file: default_transitions_file(),
            output_format: OutputFormat::default(),
            progress_interval: default_progress_interval(),
            statuses: default_statuses(),
            terminal_statuses: default_terminal_statuses(),
            jira: JiraConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file (`path`, or `cycletime.toml` in the working directory)
    /// 3. Environment variables with `CYCLETIME_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Explicit configuration file; must exist when given
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit configuration file does not exist
    /// - The configuration file cannot be read or is invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)?
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// Applies `CYCLETIME_*` environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides resolved through `lookup`.
    ///
    /// Supported keys:
    /// - `CYCLETIME_INPUT_FILE`, `CYCLETIME_OUTPUT_FILE`, `CYCLETIME_TRANSITIONS_FILE`
    /// - `CYCLETIME_OUTPUT_FORMAT` (json/table/plain)
    /// - `CYCLETIME_JIRA_BASE_URL`, `CYCLETIME_JIRA_BOARD_ID`, `CYCLETIME_JIRA_USERNAME`,
    ///   `CYCLETIME_JIRA_API_TOKEN`, `CYCLETIME_JIRA_JQL`, `CYCLETIME_JIRA_PAGE_SIZE`
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CYCLETIME_INPUT_FILE") {
            self.input_file = PathBuf::from(val);
        }

        if let Some(val) = lookup("CYCLETIME_OUTPUT_FILE") {
            self.output_file = PathBuf::from(val);
        }

        if let Some(val) = lookup("CYCLETIME_TRANSITIONS_FILE") {
            self.transitions_file = PathBuf::from(val);
        }

        if let Some(val) = lookup("CYCLETIME_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "CYCLETIME_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = lookup("CYCLETIME_JIRA_BASE_URL") {
            self.jira.base_url = val;
        }

        if let Some(val) = lookup("CYCLETIME_JIRA_BOARD_ID") {
            self.jira.board_id = val;
        }

        if let Some(val) = lookup("CYCLETIME_JIRA_USERNAME") {
            self.jira.username = val;
        }

        if let Some(val) = lookup("CYCLETIME_JIRA_API_TOKEN") {
            self.jira.api_token = val;
        }

        if let Some(val) = lookup("CYCLETIME_JIRA_JQL") {
            self.jira.jql = val;
        }

        if let Some(val) = lookup("CYCLETIME_JIRA_PAGE_SIZE") {
            self.jira.page_size = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "CYCLETIME_JIRA_PAGE_SIZE must be a positive number".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The status vocabulary is empty, has blank or duplicate names
    /// - A terminal status is not part of the vocabulary
    /// - `page_size`, `timeout_secs` or `progress_interval` is zero
    pub fn validate(&self) -> Result<()> {
        if self.statuses.is_empty() {
            return Err(Error::InvalidConfig(
                "statuses must contain at least one status".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for status in &self.statuses {
            if status.trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "statuses cannot contain empty names".to_string(),
                ));
            }
            if !seen.insert(status.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate status '{}'",
                    status
                )));
            }
        }

        for terminal in &self.terminal_statuses {
            if !seen.contains(terminal.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "terminal status '{}' is not in statuses",
                    terminal
                )));
            }
        }

        if self.jira.page_size == 0 {
            return Err(Error::InvalidConfig(
                "jira.page_size must be greater than 0".to_string(),
            ));
        }

        if self.jira.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "jira.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.progress_interval == 0 {
            return Err(Error::InvalidConfig(
                "progress_interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns true if `status` is one of the terminal statuses.
    pub fn is_terminal(&self, status: &str) -> bool {
        self.terminal_statuses.iter().any(|s| s == status)
    }
}
