//! Expression grammar.

use std::sync::Arc;

use complang_ir::{Expr, ExprKind, TokenKind};
use complang_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

/// Whether a token can begin a simple expression.
fn starts_simple_expr(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::LParen
            | TokenKind::LBracket
            | TokenKind::Symbol(_)
            | TokenKind::Ref(_)
            | TokenKind::String(_)
            | TokenKind::Int(_)
            | TokenKind::Bool(_)
            | TokenKind::Null
    )
}

impl Parser<'_> {
    /// `expr := simpleExpr simpleExpr*`, folded to the left.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_simple_expr()?;
        while starts_simple_expr(self.cursor.current_kind()) {
            let message = self.parse_simple_expr()?;
            expr = Expr::message(expr, message);
        }
        Ok(expr)
    }

    fn parse_simple_expr(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::LParen => return self.parse_group(),
            TokenKind::LBracket => return self.parse_lambda(),
            TokenKind::Null => ExprKind::Null,
            TokenKind::Bool(b) => ExprKind::Bool(b),
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::String(index) => ExprKind::String(self.cursor.string(index)),
            TokenKind::Symbol(name) => ExprKind::Symbol(name),
            TokenKind::Ref(name) => ExprKind::Ref(name),
            other => {
                return Err(ParseError::ExpectedExpression {
                    found: other.describe(),
                    span: token.span,
                })
            }
        };
        self.cursor.advance();
        Ok(Expr::new(kind, token.span))
    }

    /// `'(' expr ')'`. The group keeps the inner expression's span so symbol
    /// offsets survive parenthesization.
    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.advance();
        if self.cursor.is_at_end() {
            return Err(ParseError::Unclosed {
                delimiter: '(',
                span: open.span,
            });
        }
        let inner = self.parse_expr()?;
        if self.cursor.eat(TokenKind::RParen).is_some() {
            return Ok(inner);
        }
        if self.cursor.is_at_end() {
            if self.lenient {
                trace!(offset = open.span.start, "accepting unclosed `(`");
                return Ok(inner);
            }
            return Err(ParseError::Unclosed {
                delimiter: '(',
                span: open.span,
            });
        }
        Err(ParseError::unexpected(
            "`)`",
            self.cursor.current_kind(),
            self.cursor.current_span(),
        ))
    }

    /// `'[' symbol* '|' expr ']'` or `'[' expr ']'`.
    ///
    /// Parameters are only recognised when a `|` follows the run of symbols;
    /// otherwise the run is re-read as the body.
    fn parse_lambda(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.advance();
        let body_start = self.cursor.position();

        let mut params = Vec::new();
        while let TokenKind::Symbol(name) | TokenKind::Ref(name) = self.cursor.current_kind() {
            params.push(name);
            self.cursor.advance();
        }
        if self.cursor.eat(TokenKind::Pipe).is_none() {
            params.clear();
            self.cursor.set_position(body_start);
        }

        if self.cursor.is_at_end() {
            return Err(ParseError::Unclosed {
                delimiter: '[',
                span: open.span,
            });
        }
        let body = self.parse_expr()?;

        let Some(close) = self.cursor.eat(TokenKind::RBracket) else {
            if self.cursor.is_at_end() {
                return Err(ParseError::Unclosed {
                    delimiter: '[',
                    span: open.span,
                });
            }
            return Err(ParseError::unexpected(
                "`]`",
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        };

        Ok(Expr::new(
            ExprKind::Lambda {
                params: params.into(),
                body: Arc::new(body),
            },
            open.span.merge(close.span),
        ))
    }
}
