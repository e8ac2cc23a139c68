// Rust guideline compliant 2026-10-16

//! Error types for the cycletime core library.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cycletime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error categories, one per failure class of a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The input file or resource is missing.
    NotFound,
    /// The payload or a timestamp is malformed.
    Parse,
    /// A remote fetch failed or returned a non-success status.
    Network,
    /// Configuration values are invalid.
    Config,
    /// IO failure while reading or writing files.
    Io,
}

/// Error types for cycletime operations.
///
/// Every variant is fatal to a run; nothing is retried and no partial
/// output is written.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing input resource does not exist.
    #[error("Input not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A change timestamp did not match the expected exact format.
    #[error("Invalid timestamp '{value}': {source}")]
    TimestampParse {
        /// The raw timestamp text.
        value: String,
        /// Underlying parser error.
        source: chrono::ParseError,
    },

    /// Transport-level failure talking to the remote tracker.
    #[error("Network error: {0}")]
    Network(String),

    /// The remote tracker answered with a non-success status.
    #[error("Remote request failed with status {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns the stable category of the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::Json(_) | Error::TimestampParse { .. } => ErrorKind::Parse,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Network(_) | Error::HttpStatus { .. } => ErrorKind::Network,
            Error::InvalidConfig(_) => ErrorKind::Config,
        }
    }
}
