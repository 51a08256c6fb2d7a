//! Configuration types for class token validation.
//!
//! Split into core validation config (how attribute values are checked) and
//! source-specific config (how files are discovered). The core API never sees
//! filesystem concerns.

use std::path::PathBuf;

/// Extensions scanned when none are configured: markup templates, scripts
/// and stylesheets.
pub const DEFAULT_EXTENSIONS: &[&str] = &["php", "js", "css"];

/// Order in which attribute matches of one file are validated and reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttributeOrder {
    /// All `class` matches first, then all `className` matches (default).
    #[default]
    PerAttribute,
    /// Both attribute kinds merged by their position in the file.
    Document,
}

/// Core validation config, independent of where content comes from.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Reporting order for matches within a single file.
    pub attribute_order: AttributeOrder,
    /// Additional regexes for dynamic regions to blank out before
    /// tokenizing. Applied after the built-in embedded-tag and
    /// interpolation rules, in the order given.
    pub extra_dynamic_patterns: Vec<String>,
}

/// Filesystem-specific source options.
///
/// Default scan roots (`templates`, `public/assets/...`) are a CLI concern and
/// are not baked into the library.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Root directories (or single files) to scan. Roots that do not exist
    /// are skipped.
    pub paths: Vec<PathBuf>,
    /// File extensions to scan, without the leading dot.
    pub extensions: Vec<String>,
    /// Exclude patterns (glob format), matched against the full path and the
    /// file name.
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links (default: `false`).
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
    /// Maximum number of files to scan (default: `100_000`).
    pub max_files: usize,
    /// Maximum total bytes read across all files (default: 512 MB).
    pub max_total_bytes: u64,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|&e| e.to_owned()).collect(),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
            max_files: 100_000,
            max_total_bytes: 536_870_912,
        }
    }
}
