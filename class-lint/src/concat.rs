//! Detection of string concatenation inside attribute values.
//!
//! `class="btn-' . $variant . '"` is assembled by PHP at render time; the
//! literal text between the attribute quotes is not what the browser sees.
//! Such values are skipped rather than tokenized.

use std::sync::LazyLock;

use regex::Regex;

/// A quote followed by `.`, or `.` followed by a quote, optional whitespace
/// in between.
static CONCATENATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r#"['"]\s*\.\s*|\.\s*['"]"#) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid concatenation regex: {err}"),
    }
});

/// Whether `raw` looks like it is built by joining string literals.
#[must_use]
pub fn has_concatenation(raw: &str) -> bool {
    CONCATENATION_PATTERN.is_match(raw)
}
