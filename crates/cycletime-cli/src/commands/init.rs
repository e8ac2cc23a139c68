// Rust guideline compliant 2026-10-16

//! Implementation of the `cycletime init` command.
//!
//! Writes a configuration file holding the default status vocabulary,
//! file names and Jira settings.

use anyhow::Result;
use cycletime_core::config::DEFAULT_CONFIG_FILE;
use cycletime_core::Config;
use std::path::{Path, PathBuf};

/// Writes a default configuration file.
///
/// # Arguments
///
/// * `path` - Destination, `cycletime.toml` in the working directory if `None`
///
/// # Errors
///
/// Returns an error if the file already exists or cannot be written.
pub fn execute(path: Option<&Path>) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if path.exists() {
        anyhow::bail!(
            "Configuration file already exists: {}",
            path.display()
        );
    }

    Config::default().save(&path)?;

    println!("Created {}", path.display());
    println!("  - Set jira.base_url, jira.board_id, jira.username and jira.api_token");
    println!("    (or CYCLETIME_JIRA_* environment variables) before using --remote");

    Ok(())
}
