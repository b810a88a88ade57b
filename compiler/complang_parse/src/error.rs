//! Parse error types.

use complang_ir::{Span, TokenKind};
use complang_lexer::LexError;
use thiserror::Error;

/// A syntax error. Parsing never yields a partial tree.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A simple expression was required but `found` sits there instead.
    #[error("expected expression, found {found} at offset {}", .span.start)]
    ExpectedExpression { found: &'static str, span: Span },

    #[error("expected {expected}, found {found} at offset {}", .span.start)]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
        span: Span,
    },

    /// Input ended inside `(` or `[`; `span` points at the opener.
    #[error("unclosed `{delimiter}` opened at offset {}", .span.start)]
    Unclosed { delimiter: char, span: Span },

    /// Tokens left over after a complete statement.
    #[error("unexpected {found} after end of expression at offset {}", .span.start)]
    TrailingInput { found: &'static str, span: Span },

    /// The text before the cursor is neither a symbol nor a reference query.
    #[error("nothing to complete")]
    NotCompletable,
}

impl ParseError {
    pub(crate) fn unexpected(expected: &'static str, found: TokenKind, span: Span) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: found.describe(),
            span,
        }
    }

    /// Where the error occurred, if it has a location.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lex(err) => Some(err.span()),
            ParseError::ExpectedExpression { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::Unclosed { span, .. }
            | ParseError::TrailingInput { span, .. } => Some(*span),
            ParseError::NotCompletable => None,
        }
    }
}
