//! Error and finding types for class token validation.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::extract::AttributeKind;

/// Configuration problems detected before any file is read.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// `FsSourceConfig::paths` was empty.
    #[error("No paths provided for validation")]
    NoPaths,

    /// An exclude glob could not be parsed.
    #[error("Invalid exclude glob pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// The pattern as given.
        pattern: String,
        /// Parser error from `glob`.
        source: glob::PatternError,
    },

    /// An extra dynamic-region regex could not be compiled.
    #[error("Invalid dynamic-region pattern '{pattern}': {source}")]
    InvalidDynamicPattern {
        /// The pattern as given.
        pattern: String,
        /// Compile error from `regex`.
        source: regex::Error,
    },
}

/// Why a file contributed nothing to the scan.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum SkipReason {
    /// An I/O error occurred while opening or reading the file.
    IoError,
    /// The file exceeded the configured maximum size.
    FileTooLarge,
    /// The file content is not valid UTF-8. The whole file is skipped; no
    /// lossy decode is attempted, so none of its attributes are checked.
    InvalidEncoding,
    /// The resolved path lies outside the scan root (symlink escape).
    OutsideRoot,
    /// A directory traversal error (permission denied, loop detected, etc.).
    WalkError,
    /// `max_files` or `max_total_bytes` was reached; the scan stopped here.
    LimitExceeded,
}

/// A file the scanner could not read.
///
/// Skips are recorded for diagnostics only. They never fail a run: one
/// unreadable file must not block CI.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct SkippedFile {
    /// The file (or directory, for walk errors) that was skipped.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: SkipReason,
    /// Human-readable description of the failure.
    pub message: String,
}

impl SkippedFile {
    pub(crate) fn new(file: PathBuf, kind: SkipReason, message: String) -> Self {
        Self {
            file,
            kind,
            message,
        }
    }

    /// Format the skip for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [skipped] {}", self.file.display(), self.message)
    }
}

/// One malformed token inside an attribute value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OffendingToken {
    /// The token text as it appeared after dynamic regions were removed.
    pub token: String,
    /// Why the token fails the grammar.
    pub reason: String,
}

/// A class attribute value containing at least one malformed token.
///
/// Never constructed with an empty `offending` list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Issue {
    /// File path where the attribute was found
    pub file: PathBuf,
    /// Line number (1-indexed) of the start of the attribute value
    pub line: usize,
    /// Column number (1-indexed, in characters) of the start of the value
    pub column: usize,
    /// Which attribute syntax carried the value
    pub attribute: AttributeKind,
    /// The raw value exactly as written, before stripping dynamic regions
    pub raw_value: String,
    /// Offending tokens in source order
    pub offending: Vec<OffendingToken>,
}

impl Issue {
    /// The offending token strings, in source order.
    pub fn offending_tokens(&self) -> impl Iterator<Item = &str> {
        self.offending.iter().map(|t| t.token.as_str())
    }

    /// Format the issue for human-readable output.
    ///
    /// `{file}:{line}:{column}: [{tok1}, {tok2}] in "{raw_value}"`
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        let tokens = self.offending_tokens().collect::<Vec<_>>().join(", ");
        format!(
            "{}:{}:{}: [{}] in \"{}\"",
            self.file.display(),
            self.line,
            self.column,
            tokens,
            self.raw_value
        )
    }
}
