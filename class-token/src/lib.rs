//! Class token grammar primitives.
//!
//! A class token is one whitespace-delimited name inside a `class` or
//! `className` attribute value. This crate is the single source of truth for
//! what counts as a well-formed token, used by the `class-lint` scanner.
//!
//! Grammar: `[A-Za-z_][A-Za-z0-9_-]*`. A leading `-` is always rejected,
//! even though a hyphen is fine anywhere after the first character.

use thiserror::Error;

/// Reasons a class token fails the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token starts with `-`.
    #[error("token must not start with '-'")]
    LeadingHyphen,

    /// The first character is not an ASCII letter or underscore.
    #[error("token must start with an ASCII letter or '_', found {ch:?}")]
    InvalidStart {
        /// The offending first character.
        ch: char,
    },

    /// A character after the first is outside `[A-Za-z0-9_-]`.
    #[error("invalid character {ch:?} at byte {offset}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character within the token.
        offset: usize,
    },
}

#[inline]
fn is_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_body_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Classify a single token, reporting why it is malformed.
///
/// The empty string is accepted: it stands for a collapsed whitespace run
/// and is never reported.
///
/// # Errors
/// Returns the first grammar violation found, scanning left to right.
pub fn classify_token(token: &str) -> Result<(), TokenError> {
    let mut chars = token.char_indices();
    match chars.next() {
        None => return Ok(()),
        Some((_, '-')) => return Err(TokenError::LeadingHyphen),
        Some((_, c)) if !is_start_char(c) => return Err(TokenError::InvalidStart { ch: c }),
        Some(_) => {}
    }
    match chars.find(|&(_, c)| !is_body_char(c)) {
        Some((offset, ch)) => Err(TokenError::InvalidChar { ch, offset }),
        None => Ok(()),
    }
}

/// Validates a class token without regex.
///
/// Equivalent to `classify_token(token).is_ok()`.
#[inline]
#[must_use]
pub fn is_valid_token(token: &str) -> bool {
    classify_token(token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tokens() {
        assert!(is_valid_token("btn"));
        assert!(is_valid_token("btn-primary"));
        assert!(is_valid_token("_private"));
        assert!(is_valid_token("Col12"));
        assert!(is_valid_token("a_b-c"));
        assert!(is_valid_token("trailing-"));
        assert!(is_valid_token("x"));
    }

    #[test]
    fn test_empty_token_is_valid() {
        assert!(is_valid_token(""));
        assert_eq!(classify_token(""), Ok(()));
    }

    #[test]
    fn test_leading_hyphen_always_rejected() {
        assert!(!is_valid_token("-"));
        assert!(!is_valid_token("-oops"));
        assert!(!is_valid_token("--custom"));
        assert_eq!(classify_token("-btn"), Err(TokenError::LeadingHyphen));
    }

    #[test]
    fn test_invalid_start() {
        assert_eq!(
            classify_token("1col"),
            Err(TokenError::InvalidStart { ch: '1' })
        );
        assert_eq!(
            classify_token("$var"),
            Err(TokenError::InvalidStart { ch: '$' })
        );
        assert!(!is_valid_token("?>"));
    }

    #[test]
    fn test_invalid_body_char_reports_offset() {
        assert_eq!(
            classify_token("foo!bar"),
            Err(TokenError::InvalidChar { ch: '!', offset: 3 })
        );
        assert_eq!(
            classify_token("a.b"),
            Err(TokenError::InvalidChar { ch: '.', offset: 1 })
        );
        assert!(!is_valid_token("btn:hover"));
        assert!(!is_valid_token("w-1/2"));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_valid_token("caf\u{e9}"));
        assert!(!is_valid_token("\u{e9}t\u{e9}"));
        assert_eq!(
            classify_token("ab\u{e9}"),
            Err(TokenError::InvalidChar {
                ch: '\u{e9}',
                offset: 2
            })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TokenError::LeadingHyphen.to_string(),
            "token must not start with '-'"
        );
        assert_eq!(
            TokenError::InvalidChar { ch: '!', offset: 3 }.to_string(),
            "invalid character '!' at byte 3"
        );
    }

    #[test]
    fn test_predicate_agrees_with_classifier() {
        for token in ["", "a", "-a", "a-", "9", "_9", "a b", "a\tb", "{x}", "A_Z-09"] {
            assert_eq!(is_valid_token(token), classify_token(token).is_ok(), "{token:?}");
        }
    }
}
