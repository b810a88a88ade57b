//! Recursive descent parser for complang.
//!
//! ```text
//! expr        := simpleExpr simpleExpr*
//! simpleExpr  := '(' expr ')' | lambdaBlock | literal | reference | symbol
//! lambdaBlock := '[' symbol* '|' expr ']' | '[' expr ']'
//! stmt        := reference '=' expr | expr
//! ```
//!
//! Message chains are left-associative: `$a b c` is `($a b) c`.

mod cursor;
mod error;
mod grammar;
mod query;

pub use cursor::Cursor;
pub use error::ParseError;
pub use query::parse_query;

use complang_ir::{Expr, Stmt, StringInterner, TokenKind, TokenList};
use complang_lexer::tokenize;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Accept a `(` left open at end of input. Used for completion prefixes.
    lenient: bool,
}

impl<'a> Parser<'a> {
    /// Create a strict parser over `tokens`.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            lenient: false,
        }
    }

    /// Create a parser that tolerates unclosed parentheses at end of input.
    pub fn lenient(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            lenient: true,
        }
    }

    /// Parse a whole line as a statement. `Ok(None)` for a blank line.
    pub fn parse_stmt(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.cursor.is_at_end() {
            return Ok(None);
        }

        let stmt = match (self.cursor.current_kind(), self.cursor.peek_next_kind()) {
            (TokenKind::Ref(name), TokenKind::Eq) => {
                let span = self.cursor.current_span();
                self.cursor.advance();
                self.cursor.advance();
                let value = self.parse_expr()?;
                Stmt::Assign { name, span, value }
            }
            _ => Stmt::Expr(self.parse_expr()?),
        };

        self.expect_end()?;
        Ok(Some(stmt))
    }

    /// Parse a whole line as a single expression.
    pub fn parse_whole_expr(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        self.expect_end()?;
        Ok(expr)
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        if self.cursor.is_at_end() {
            Ok(())
        } else {
            Err(ParseError::TrailingInput {
                found: self.cursor.current_kind().describe(),
                span: self.cursor.current_span(),
            })
        }
    }
}

/// Lex and parse one line as a statement.
#[tracing::instrument(level = "trace", skip(interner))]
pub fn parse_stmt(source: &str, interner: &StringInterner) -> Result<Option<Stmt>, ParseError> {
    let tokens = tokenize(source, interner)?;
    Parser::new(&tokens).parse_stmt()
}

/// Lex and parse one line as an expression.
pub fn parse_expr(source: &str, interner: &StringInterner) -> Result<Expr, ParseError> {
    let tokens = tokenize(source, interner)?;
    Parser::new(&tokens).parse_whole_expr()
}
