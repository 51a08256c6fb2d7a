//! # class-lint
//!
//! Static validator for CSS class attribute values in templates, scripts and
//! stylesheets.
//!
//! Every `class="..."` and `className="..."` value is located, dynamic regions
//! (`<?php ... ?>`, `<?= ... ?>`, `${...}`) are blanked out, and the remaining
//! whitespace-separated tokens are checked against the grammar in
//! [`class_token`]. Values built by string concatenation are skipped.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use class_lint::{validate_fs, FsSourceConfig, ValidationConfig};
//!
//! let mut fs_config = FsSourceConfig::default();
//! fs_config.paths = vec![PathBuf::from("templates"), PathBuf::from("public/assets/js")];
//! fs_config.exclude = vec!["*.min.js".to_owned()];
//!
//! let report = validate_fs(&fs_config, &ValidationConfig::default()).unwrap();
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Issues: {}", report.issues_count());
//! println!("OK: {}", report.ok);
//! ```

mod concat;
mod config;
mod error;
mod extract;
mod normalize;
pub mod output;
mod report;
mod strategy;
mod validator;

pub use class_token::{TokenError, classify_token, is_valid_token};
pub use concat::has_concatenation;
pub use config::{AttributeOrder, DEFAULT_EXTENSIONS, FsSourceConfig, ValidationConfig};
pub use error::{ConfigError, Issue, OffendingToken, SkipReason, SkippedFile};
pub use extract::{AttributeKind, AttributeMatch, extract_class_attributes, extract_ordered};
pub use normalize::{StripRule, Stripper, strip_dynamic_regions};
pub use report::ValidationReport;
pub use validator::{Pipeline, tokenize, validate_file};

use tracing::{debug, info};

use strategy::fs::{find_files, read_file_bounded};

/// Validate class attribute tokens in files on disk.
///
/// This is the primary public API.
///
/// # Arguments
///
/// * `fs_config` - Filesystem source options (roots, extensions, exclude, limits)
/// * `validation_config` - Core validation config (attribute order, extra dynamic patterns)
///
/// # Errors
///
/// Returns an error if `fs_config.paths` is empty, an exclude glob is invalid,
/// or an extra dynamic pattern does not compile. Missing roots and unreadable
/// files are not errors: they yield `Ok` with fewer scanned files.
pub fn validate_fs(
    fs_config: &FsSourceConfig,
    validation_config: &ValidationConfig,
) -> anyhow::Result<ValidationReport> {
    if fs_config.paths.is_empty() {
        return Err(ConfigError::NoPaths.into());
    }

    let pipeline = Pipeline::new(validation_config)?;
    let (files, mut skipped) = find_files(fs_config)?;

    let mut issues = Vec::new();
    let mut scanned_files: usize = 0;
    let mut total_bytes: u64 = 0;

    for (idx, file_path) in files.iter().enumerate() {
        if idx >= fs_config.max_files {
            skipped.push(SkippedFile::new(
                file_path.clone(),
                SkipReason::LimitExceeded,
                format!(
                    "Scan stopped: max_files limit ({}) reached; remaining files not scanned",
                    fs_config.max_files
                ),
            ));
            break;
        }

        let content = match read_file_bounded(file_path, fs_config.max_file_size) {
            Ok(c) => c,
            Err(skip) => {
                debug!(file = %skip.file.display(), reason = %skip.message, "skipping file");
                skipped.push(skip);
                continue;
            }
        };

        let file_bytes = content.len() as u64;
        if total_bytes.saturating_add(file_bytes) > fs_config.max_total_bytes {
            skipped.push(SkippedFile::new(
                file_path.clone(),
                SkipReason::LimitExceeded,
                format!(
                    "Scan stopped: max_total_bytes limit ({}) reached; remaining files not scanned",
                    fs_config.max_total_bytes
                ),
            ));
            break;
        }
        total_bytes = total_bytes.saturating_add(file_bytes);

        scanned_files += 1;
        issues.extend(pipeline.validate_file(file_path, &content));
    }

    let report = ValidationReport::new(scanned_files, issues, skipped);
    if report.skipped_files > 0 {
        debug!(count = report.skipped_files, "files skipped during scan");
    }
    info!(
        scanned = report.scanned_files,
        skipped = report.skipped_files,
        issues = report.issues_count(),
        "class token scan finished"
    );
    Ok(report)
}
