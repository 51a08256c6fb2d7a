//! Class attribute extraction.
//!
//! Two independent regex passes, one per attribute syntax. Values are
//! captured between matching single or double quotes and may span lines.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::AttributeOrder;

/// `class="..."` / `class='...'`. Not word-bounded, so `data-class="..."`
/// is scanned as well.
static CLASS_ATTR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r#"class\s*=\s*(?:"([^"]*)"|'([^']*)')"#) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid class attribute regex: {err}"),
    }
});

/// `className="..."` / `className='...'` (JSX and DOM property assignment).
static CLASS_NAME_ATTR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r#"className\s*=\s*(?:"([^"]*)"|'([^']*)')"#) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid className attribute regex: {err}"),
    }
});

/// Which attribute syntax a value was found in.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AttributeKind {
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "className")]
    ClassName,
}

/// A raw attribute value located in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeMatch<'a> {
    pub kind: AttributeKind,
    /// The text between the quotes, untouched.
    pub value: &'a str,
    /// Byte offset of `value` within the file.
    pub offset: usize,
    /// 1-indexed line of `offset`.
    pub line: usize,
    /// 1-indexed column of `offset`, counted in characters.
    pub column: usize,
}

/// Tracks line and column while moving forward through a file.
///
/// Matches of one regex pass arrive in ascending offset order, so each pass
/// walks the text once.
struct Cursor<'a> {
    content: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Move to `offset` (not behind the current position) and return its
    /// 1-indexed `(line, column)`.
    fn advance_to(&mut self, offset: usize) -> (usize, usize) {
        for c in self.content[self.offset..offset].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = offset;
        (self.line, self.column)
    }
}

fn scan_attribute<'a>(
    pattern: &'static Regex,
    kind: AttributeKind,
    content: &'a str,
) -> impl Iterator<Item = AttributeMatch<'a>> {
    let mut cursor = Cursor::new(content);
    pattern.captures_iter(content).filter_map(move |caps| {
        let value = caps.get(1).or_else(|| caps.get(2))?;
        let (line, column) = cursor.advance_to(value.start());
        Some(AttributeMatch {
            kind,
            value: value.as_str(),
            offset: value.start(),
            line,
            column,
        })
    })
}

/// Lazily yield every `class` value, then every `className` value.
///
/// Within each kind matches are in file order; across kinds they are not.
/// Use [`extract_ordered`] with [`AttributeOrder::Document`] for a merged
/// order.
pub fn extract_class_attributes(content: &str) -> impl Iterator<Item = AttributeMatch<'_>> {
    scan_attribute(&CLASS_ATTR_PATTERN, AttributeKind::Class, content).chain(scan_attribute(
        &CLASS_NAME_ATTR_PATTERN,
        AttributeKind::ClassName,
        content,
    ))
}

/// Collect all attribute values of a file in the requested order.
#[must_use]
pub fn extract_ordered(content: &str, order: AttributeOrder) -> Vec<AttributeMatch<'_>> {
    let mut matches: Vec<_> = extract_class_attributes(content).collect();
    if order == AttributeOrder::Document {
        matches.sort_by_key(|m| m.offset);
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(content: &str) -> Vec<&str> {
        extract_class_attributes(content).map(|m| m.value).collect()
    }

    #[test]
    fn test_double_and_single_quotes() {
        let content = r#"<div class="a b"></div><span class='c d'></span>"#;
        assert_eq!(values(content), vec!["a b", "c d"]);
    }

    #[test]
    fn test_quotes_must_match() {
        // The inner single quotes belong to the PHP expression, not the attribute.
        let content = r#"<li class="<?= $on ? 'active' : '' ?> item">"#;
        assert_eq!(values(content), vec!["<?= $on ? 'active' : '' ?> item"]);
    }

    #[test]
    fn test_whitespace_around_equals() {
        let content = "<p class = \"x\"></p>\nel.className ='y';";
        assert_eq!(values(content), vec!["x", "y"]);
    }

    #[test]
    fn test_value_spans_lines() {
        let content = "<div class=\"one\n    two\">";
        let found: Vec<_> = extract_class_attributes(content).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "one\n    two");
        assert_eq!(found[0].line, 1);
    }

    #[test]
    fn test_class_name_is_not_matched_by_class_pattern() {
        let content = r#"<Button className="primary" />"#;
        let found: Vec<_> = extract_class_attributes(content).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, AttributeKind::ClassName);
    }

    #[test]
    fn test_positions() {
        let content = "<html>\n  <div class=\"btn\">\n";
        let found: Vec<_> = extract_class_attributes(content).collect();
        assert_eq!(found[0].line, 2);
        assert_eq!(found[0].column, 15);
        assert_eq!(&content[found[0].offset..found[0].offset + 3], "btn");
    }

    #[test]
    fn test_positions_across_passes() {
        let content = "<b class=\"a\">\n  x.className = 'b';\n<i class=\"c\">";
        let found: Vec<_> = extract_class_attributes(content)
            .map(|m| (m.value, m.line, m.column))
            .collect();
        assert_eq!(found, vec![("a", 1, 11), ("c", 3, 11), ("b", 2, 18)]);
    }

    #[test]
    fn test_many_matches_scale_linearly() {
        // One long minified line plus many short lines.
        let mut content = "x.className='a';".repeat(50_000);
        for _ in 0..50_000 {
            content.push_str("\n<p class=\"b\"></p>");
        }

        let start = std::time::Instant::now();
        let found: Vec<_> = extract_class_attributes(&content).collect();
        let elapsed = start.elapsed();

        assert_eq!(found.len(), 100_000);
        let last_class = found.iter().rfind(|m| m.kind == AttributeKind::Class).unwrap();
        assert_eq!((last_class.line, last_class.column), (50_001, 11));
        let last_class_name = found.last().unwrap();
        assert_eq!(last_class_name.line, 1);
        assert_eq!(last_class_name.column, 16 * 49_999 + 14);
        assert!(
            elapsed < std::time::Duration::from_secs(10),
            "extraction took {elapsed:?}"
        );
    }

    #[test]
    fn test_no_matches() {
        assert!(values(".btn { color: red; }").is_empty());
        assert!(values("<div class=\"unterminated>").is_empty());
    }

    #[test]
    fn test_two_pass_order_versus_document_order() {
        let content = r#"a.className = "late"; <b class="first"></b> x.className = "third";"#;

        let per_attribute: Vec<_> = extract_ordered(content, AttributeOrder::PerAttribute)
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(per_attribute, vec!["first", "late", "third"]);

        let document: Vec<_> = extract_ordered(content, AttributeOrder::Document)
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(document, vec!["late", "first", "third"]);
    }
}
