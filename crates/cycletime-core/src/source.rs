// Rust guideline compliant 2026-10-16

//! Issue sources.
//!
//! An [`IssueSource`] supplies the raw issue document a report is built
//! from. The file source lives here; the remote tracker source lives in
//! the `cycletime-jira` crate.

use crate::models::IssueDocument;
use crate::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Supplier of raw issue data.
pub trait IssueSource {
    /// Short human-readable description of where issues come from.
    fn describe(&self) -> String;

    /// Loads the complete issue document.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, a parse error, or a network error. Callers abort
    /// the run on any error.
    fn load(&self) -> Result<IssueDocument>;
}

/// Reads issues from a JSON export on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the given export file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the export file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IssueSource for FileSource {
    fn describe(&self) -> String {
        format!("file '{}'", self.path.display())
    }

    fn load(&self) -> Result<IssueDocument> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(self.path.clone()),
            _ => Error::Io(e),
        })?;
        let document: IssueDocument = serde_json::from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %self.path.display(),
            issues = document.issues.len(),
            "loaded issues from file"
        );
        Ok(document)
    }
}
