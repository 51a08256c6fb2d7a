//! Output formatting for validation reports.
//!
//! Plain text and JSON only. Terminal colors, if any, belong to the caller.

use std::io::Write;

use crate::report::ValidationReport;

/// Header line written before the list of issues.
pub const FAILURE_HEADER: &str = "Invalid class tokens found:";

/// Single line written when no issue was found.
pub const SUCCESS_LINE: &str = "Class token check passed.";

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// Failure: [`FAILURE_HEADER`] followed by `- {issue}` per issue.
/// Success: [`SUCCESS_LINE`]. Either way a count of skipped files follows
/// when there were any.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.ok {
        writeln!(writer, "{SUCCESS_LINE}")?;
    } else {
        writeln!(writer, "{FAILURE_HEADER}")?;
        for issue in &report.issues {
            writeln!(writer, "- {}", issue.format_human_readable())?;
        }
    }

    if report.skipped_files > 0 {
        writeln!(writer, "({} file(s) skipped)", report.skipped_files)?;
    }

    Ok(())
}
