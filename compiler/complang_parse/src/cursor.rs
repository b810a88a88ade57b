//! Token cursor for navigating the token stream.

use std::sync::Arc;

use complang_ir::{Span, Token, TokenKind, TokenList};

/// Cursor over one line's tokens.
///
/// Invariant: the list ends with `Eof` and the position never moves past it.
pub struct Cursor<'a> {
    list: &'a TokenList,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first token.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            list: tokens,
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Cooked text of the string literal at `index` in the list's table.
    pub fn string(&self, index: u32) -> Arc<str> {
        self.list
            .string(index)
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }

    /// Current position, for snapshot and restore.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Roll back to a position taken earlier with [`Cursor::position`].
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos < self.tokens.len(), "cursor position out of bounds");
        self.pos = pos;
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::default()))
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one, `Eof` past the end.
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Move past the current token. `Eof` is sticky.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }
}
