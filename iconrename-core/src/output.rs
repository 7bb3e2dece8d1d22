use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engine::RunReport;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// A single rename that was actually applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedEntry {
    pub from: String,
    pub to: String,
}

/// Result of one scan-and-rename run over a directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameRunResult {
    pub directory: String,
    pub renames: usize,
    pub skipped: usize,
    pub renamed: Vec<RenamedEntry>,
}

impl RenameRunResult {
    pub fn new(directory: &Path, report: RunReport) -> Self {
        Self {
            directory: directory.display().to_string(),
            renames: report.renamed.len(),
            skipped: report.skipped,
            renamed: report.renamed,
        }
    }
}
