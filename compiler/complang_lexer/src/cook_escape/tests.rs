#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(cook_string("b a r", 0).unwrap(), "b a r");
}

#[test]
fn every_escape_is_cooked() {
    assert_eq!(
        cook_string(r#"\"\\\b\f\n\r\t"#, 0).unwrap(),
        "\"\\\u{8}\u{c}\n\r\t"
    );
}

#[test]
fn invalid_escape_is_located() {
    let err = cook_string(r"ab\q", 10).unwrap_err();
    assert_eq!(
        err,
        LexError::InvalidEscape {
            escape: 'q',
            span: Span::new(12, 14),
        }
    );
}

#[test]
fn trailing_backslash_is_dropped() {
    assert_eq!(cook_string("ab\\", 0).unwrap(), "ab");
}
