//! Lexer errors.

use complang_ir::Span;
use thiserror::Error;

/// A lexical error. Lexing stops at the first one; it aborts only the
/// current line.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexError {
    /// Input ended before the closing `"`.
    #[error("unterminated string starting at offset {}", .span.start)]
    UnterminatedString { span: Span },
    /// Backslash followed by a character with no escape meaning.
    #[error("invalid escape `\\{escape}` at offset {}", .span.start)]
    InvalidEscape { escape: char, span: Span },
    /// A character that cannot start any token.
    #[error("unexpected character {ch:?} at offset {}", .span.start)]
    UnexpectedChar { ch: char, span: Span },
    /// Integer literal outside the `i64` range.
    #[error("integer literal `{text}` is out of range")]
    IntOutOfRange { text: String, span: Span },
}

impl LexError {
    /// Where the error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::InvalidEscape { span, .. }
            | LexError::UnexpectedChar { span, .. }
            | LexError::IntOutOfRange { span, .. } => *span,
        }
    }
}
