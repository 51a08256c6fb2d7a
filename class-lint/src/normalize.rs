//! Dynamic-region stripping.
//!
//! Attribute values in templates carry embedded PHP tags and `${...}`
//! interpolations whose rendered text is unknown. Each region is blanked to a
//! single space before tokenizing so it cannot be read as a class token.
//!
//! Rules run once each, in order. Nested or unbalanced delimiters are not
//! handled: whatever residue is left goes through the token grammar and
//! usually surfaces as an issue.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;

/// `<?php ... ?>` and `<?= ... ?>`, shortest match, across lines.
static EMBEDDED_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"<\?(?:php|=)[\s\S]*?\?>") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid embedded tag regex: {err}"),
    }
});

/// `${ ... }` up to the first closing brace, across lines.
static INTERPOLATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\$\{[\s\S]*?\}") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid interpolation regex: {err}"),
    }
});

/// A named pattern whose every match is replaced by one space.
#[derive(Debug, Clone)]
pub struct StripRule {
    pub name: String,
    pub pattern: Regex,
}

/// Ordered list of strip rules.
#[derive(Debug, Clone)]
pub struct Stripper {
    rules: Vec<StripRule>,
}

impl Default for Stripper {
    fn default() -> Self {
        Self {
            rules: vec![
                StripRule {
                    name: "embedded-tag".to_owned(),
                    pattern: EMBEDDED_TAG_PATTERN.clone(),
                },
                StripRule {
                    name: "interpolation".to_owned(),
                    pattern: INTERPOLATION_PATTERN.clone(),
                },
            ],
        }
    }
}

impl Stripper {
    /// Append a user rule after the existing ones.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDynamicPattern`] if `pattern` does not compile.
    pub fn with_pattern(mut self, name: &str, pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidDynamicPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        self.rules.push(StripRule {
            name: name.to_owned(),
            pattern: regex,
        });
        Ok(self)
    }

    #[must_use]
    pub fn rules(&self) -> &[StripRule] {
        &self.rules
    }

    /// Apply every rule once, in order.
    #[must_use]
    pub fn strip(&self, raw: &str) -> String {
        let mut cleaned = raw.to_owned();
        for rule in &self.rules {
            cleaned = rule.pattern.replace_all(&cleaned, " ").into_owned();
        }
        cleaned
    }
}

/// Strip embedded tags and interpolations with the built-in rules.
#[must_use]
pub fn strip_dynamic_regions(raw: &str) -> String {
    static DEFAULT: LazyLock<Stripper> = LazyLock::new(Stripper::default);
    DEFAULT.strip(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_dynamic_regions_unchanged() {
        assert_eq!(strip_dynamic_regions("btn btn-primary"), "btn btn-primary");
        assert_eq!(strip_dynamic_regions(""), "");
    }

    #[test]
    fn test_php_tags_replaced_by_space() {
        assert_eq!(
            strip_dynamic_regions("<?php if ($x): ?>active<?php endif; ?> base"),
            " active  base"
        );
        assert_eq!(strip_dynamic_regions("card<?= $mod ?>"), "card ");
    }

    #[test]
    fn test_php_tag_across_lines() {
        assert_eq!(
            strip_dynamic_regions("a <?php\n  echo $cls;\n?> b"),
            "a   b"
        );
    }

    #[test]
    fn test_short_open_tag_is_not_stripped() {
        // Only `<?php` and `<?=` open an embedded region.
        assert_eq!(strip_dynamic_regions("<? $x ?>"), "<? $x ?>");
    }

    #[test]
    fn test_interpolation_replaced_by_space() {
        assert_eq!(
            strip_dynamic_regions("wrap ${dynamicClass} extra"),
            "wrap   extra"
        );
        assert_eq!(strip_dynamic_regions("item${\n  cls\n}"), "item ");
    }

    #[test]
    fn test_tags_stripped_before_interpolation() {
        // The tag swallows the `${` so no interpolation rule fires afterwards.
        assert_eq!(strip_dynamic_regions("<?= '${' ?>x}"), " x}");
    }

    #[test]
    fn test_nested_interpolation_leaves_residue() {
        assert_eq!(strip_dynamic_regions("a ${b ? `${c}` : d} e"), "a  ` : d} e");
    }

    #[test]
    fn test_idempotent_for_well_formed_input() {
        for raw in [
            "wrap ${x} extra",
            "<?php if ($a): ?>on<?php endif; ?> base",
            "plain tokens only",
        ] {
            let once = strip_dynamic_regions(raw);
            assert_eq!(strip_dynamic_regions(&once), once);
        }
    }

    #[test]
    fn test_extra_rule_runs_after_builtins() {
        let stripper = Stripper::default()
            .with_pattern("handlebars", r"\{\{[\s\S]*?\}\}")
            .unwrap();
        assert_eq!(stripper.rules().len(), 3);
        assert_eq!(stripper.rules()[2].name, "handlebars");
        assert_eq!(stripper.strip("btn {{variant}} ${x}"), "btn    ");
    }

    #[test]
    fn test_invalid_extra_rule() {
        let err = Stripper::default().with_pattern("bad", "(").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDynamicPattern { .. }));
    }
}
