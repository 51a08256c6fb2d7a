//! Filesystem validation source.
//!
//! Walks the configured roots and reads candidate files for the pipeline.
//! Every directory below a root is descended into; use `exclude` globs to
//! leave vendored or generated trees out.
//! - Roots that do not exist are skipped, not reported
//! - Symlinks are not followed by default (`follow_links: false`)
//! - Resolved paths must stay within their root
//! - Device files, pipes, and sockets are skipped
//! - Reads are bounded by `max_file_size`
//!
//! Nothing in here fails a run: unreadable entries become [`SkippedFile`]s.

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::FsSourceConfig;
use crate::error::{ConfigError, SkipReason, SkippedFile};

fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|pat_str| {
            Pattern::new(pat_str).map_err(|source| ConfigError::InvalidExcludePattern {
                pattern: pat_str.clone(),
                source,
            })
        })
        .collect()
}

/// Check if a path matches any of the exclude patterns
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    exclude_patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

fn has_wanted_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

#[cfg(unix)]
fn is_special_file(entry: &walkdir::DirEntry) -> bool {
    use std::os::unix::fs::FileTypeExt;
    entry.metadata().map(|m| m.file_type()).is_ok_and(|ft| {
        ft.is_block_device() || ft.is_char_device() || ft.is_fifo() || ft.is_socket()
    })
}

#[cfg(not(unix))]
fn is_special_file(_entry: &walkdir::DirEntry) -> bool {
    false
}

/// Find all files to scan under the configured roots.
///
/// Returns `(files, skipped)`: `files` are sorted and deduplicated; `skipped`
/// holds walk errors and root-boundary violations.
///
/// # Errors
/// Returns [`ConfigError::InvalidExcludePattern`] if an exclude glob does not parse.
pub fn find_files(
    config: &FsSourceConfig,
) -> Result<(Vec<PathBuf>, Vec<SkippedFile>), ConfigError> {
    let exclude_patterns = compile_excludes(&config.exclude)?;
    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for root in &config.paths {
        if !root.exists() {
            debug!(root = %root.display(), "scan root does not exist, skipping");
            continue;
        }

        if root.is_file() {
            if has_wanted_extension(root, &config.extensions)
                && !matches_exclude(root, &exclude_patterns)
            {
                files.push(root.clone());
            }
            continue;
        }

        // Canonicalize the root once so the boundary can be enforced per entry.
        let canonical_root = match root.canonicalize() {
            Ok(r) => r,
            Err(e) => {
                skipped.push(SkippedFile::new(
                    root.clone(),
                    SkipReason::IoError,
                    format!("Failed to canonicalize root path: {e}"),
                ));
                continue;
            }
        };

        for entry_result in WalkDir::new(root)
            .follow_links(config.follow_links)
            .max_depth(config.max_depth)
        {
            let entry = match entry_result {
                Ok(e) => e,
                Err(walk_err) => {
                    let path = walk_err
                        .path()
                        .map_or_else(|| root.clone(), Path::to_path_buf);
                    skipped.push(SkippedFile::new(
                        path,
                        SkipReason::WalkError,
                        format!("Directory traversal error: {walk_err}"),
                    ));
                    continue;
                }
            };

            let file_path = entry.path();
            if !file_path.is_file()
                || is_special_file(&entry)
                || !has_wanted_extension(file_path, &config.extensions)
                || matches_exclude(file_path, &exclude_patterns)
            {
                continue;
            }

            match file_path.canonicalize() {
                Ok(canonical_path) if !canonical_path.starts_with(&canonical_root) => {
                    skipped.push(SkippedFile::new(
                        file_path.to_path_buf(),
                        SkipReason::OutsideRoot,
                        format!(
                            "Path resolves outside scan root: {} -> {}",
                            file_path.display(),
                            canonical_path.display()
                        ),
                    ));
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    skipped.push(SkippedFile::new(
                        file_path.to_path_buf(),
                        SkipReason::IoError,
                        format!("Failed to canonicalize path: {e}"),
                    ));
                    continue;
                }
            }

            files.push(file_path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();
    Ok((files, skipped))
}

/// Read a file using a bounded streaming read, enforcing `max_file_size`.
///
/// Reads at most `max_file_size + 1` bytes so an oversized file is detected
/// without loading it whole.
///
/// # Errors
/// Returns a [`SkippedFile`] if the file cannot be opened or read, is larger
/// than `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, SkippedFile> {
    let skip = |kind, message| SkippedFile::new(path.to_owned(), kind, message);

    let file = std::fs::File::open(path)
        .map_err(|e| skip(SkipReason::IoError, format!("Failed to open file: {e}")))?;

    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| skip(SkipReason::IoError, format!("Failed to read file: {e}")))?;

    if buffer.len() as u64 > max_file_size {
        return Err(skip(
            SkipReason::FileTooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    String::from_utf8(buffer)
        .map_err(|_| skip(SkipReason::InvalidEncoding, "File is not valid UTF-8".to_owned()))
}
