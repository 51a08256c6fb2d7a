//! The per-file validation pipeline.
//!
//! For every extracted attribute value: skip it if it is built by
//! concatenation, blank out dynamic regions, split on whitespace, and collect
//! the tokens that fail the grammar. An [`Issue`] carries the original raw
//! value, not the cleaned one.

use std::path::Path;

use class_token::classify_token;

use crate::concat::has_concatenation;
use crate::config::{AttributeOrder, ValidationConfig};
use crate::error::{ConfigError, Issue, OffendingToken};
use crate::extract::extract_ordered;
use crate::normalize::Stripper;

/// Unicode whitespace plus the ASCII information separators (U+001C..=U+001F).
fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split a cleaned value into tokens. Never yields an empty token.
pub fn tokenize(cleaned: &str) -> impl Iterator<Item = &str> {
    cleaned
        .split(is_token_separator)
        .filter(|token| !token.is_empty())
}

/// Compiled validation settings, built once per run.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stripper: Stripper,
    order: AttributeOrder,
}

impl Pipeline {
    /// Compile a pipeline from the validation config.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDynamicPattern`] if an extra pattern
    /// does not compile.
    pub fn new(config: &ValidationConfig) -> Result<Self, ConfigError> {
        let mut stripper = Stripper::default();
        for (idx, pattern) in config.extra_dynamic_patterns.iter().enumerate() {
            stripper = stripper.with_pattern(&format!("custom-{}", idx + 1), pattern)?;
        }
        Ok(Self {
            stripper,
            order: config.attribute_order,
        })
    }

    /// Offending tokens of a single raw attribute value, in source order.
    ///
    /// Returns `None` when the value is skipped because of concatenation.
    #[must_use]
    pub fn check_value(&self, raw: &str) -> Option<Vec<OffendingToken>> {
        if has_concatenation(raw) {
            return None;
        }
        let cleaned = self.stripper.strip(raw);
        let offending = tokenize(&cleaned)
            .filter_map(|token| {
                classify_token(token).err().map(|reason| OffendingToken {
                    token: token.to_owned(),
                    reason: reason.to_string(),
                })
            })
            .collect();
        Some(offending)
    }

    /// Validate the full text of one file.
    #[must_use]
    pub fn validate_file(&self, path: &Path, content: &str) -> Vec<Issue> {
        extract_ordered(content, self.order)
            .into_iter()
            .filter_map(|attr| {
                let offending = self.check_value(attr.value)?;
                if offending.is_empty() {
                    return None;
                }
                Some(Issue {
                    file: path.to_owned(),
                    line: attr.line,
                    column: attr.column,
                    attribute: attr.kind,
                    raw_value: attr.value.to_owned(),
                    offending,
                })
            })
            .collect()
    }
}

/// Validate one file's text with the default pipeline.
#[must_use]
pub fn validate_file(path: &Path, content: &str) -> Vec<Issue> {
    Pipeline::default().validate_file(path, content)
}
