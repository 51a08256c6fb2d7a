//! Validation report types.

use serde::Serialize;

use crate::error::{Issue, SkippedFile};

/// Result of a validation run.
///
/// `ok` depends on `issues` alone. Skipped files are informational.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of files read and validated.
    pub scanned_files: usize,
    /// Number of files (or walk entries) that could not be read.
    pub skipped_files: usize,
    /// `true` when no issue was found.
    pub ok: bool,
    /// Attribute values with malformed tokens, grouped by file in path order.
    pub issues: Vec<Issue>,
    /// Details for every skipped entry.
    pub skipped: Vec<SkippedFile>,
}

impl ValidationReport {
    pub(crate) fn new(scanned_files: usize, issues: Vec<Issue>, skipped: Vec<SkippedFile>) -> Self {
        Self {
            scanned_files,
            skipped_files: skipped.len(),
            ok: issues.is_empty(),
            issues,
            skipped,
        }
    }

    /// Total number of files attempted (scanned + skipped).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.skipped_files
    }

    /// Number of issues found.
    #[must_use]
    pub fn issues_count(&self) -> usize {
        self.issues.len()
    }

    /// Number of offending tokens across all issues.
    #[must_use]
    pub fn offending_tokens_count(&self) -> usize {
        self.issues.iter().map(|i| i.offending.len()).sum()
    }
}
