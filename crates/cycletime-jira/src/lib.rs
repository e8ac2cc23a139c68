// Rust guideline compliant 2026-10-16

//! Remote issue source for cycletime.
//!
//! Fetches board issues with their changelog from the Jira agile REST API,
//! following offset pagination until the result set is exhausted.

pub mod client;
pub mod pagination;

pub use client::JiraClient;
pub use pagination::{collect_pages, Page};
