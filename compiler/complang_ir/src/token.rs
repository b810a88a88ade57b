//! Token types produced by the lexer.

use std::fmt;
use std::sync::Arc;

use super::{Name, Span};

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds.
///
/// Symbol-shaped tokens are split by the lexer: `$`-prefixed text becomes
/// `Ref`, everything else `Symbol`, except the literal spellings `null`,
/// `true` and `false`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Eq,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `|`
    Pipe,

    /// Plain symbol, a message name.
    Symbol(Name),
    /// Reference symbol (`$name`), looked up in the environment.
    Ref(Name),
    /// String literal; the index of its cooked text in
    /// [`TokenList::string`]. Literal text is not interned.
    String(u32),
    /// Signed integer literal.
    Int(i64),
    /// `true` / `false`
    Bool(bool),
    /// `null`
    Null,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Short description used in parse errors.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Eq => "`=`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Pipe => "`|`",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Ref(_) => "reference",
            TokenKind::String(_) => "string literal",
            TokenKind::Int(_) => "integer literal",
            TokenKind::Bool(_) => "boolean literal",
            TokenKind::Null => "`null`",
            TokenKind::Eof => "end of input",
        }
    }
}

/// Lexer output: the tokens of one line, always terminated by `Eof`.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
    strings: Vec<Arc<str>>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            strings: Vec::new(),
        }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Store the cooked text of a string literal, returning its index.
    pub fn push_string(&mut self, text: impl Into<Arc<str>>) -> u32 {
        let index = u32::try_from(self.strings.len()).unwrap_or(u32::MAX);
        self.strings.push(text.into());
        index
    }

    /// Cooked text of the string literal at `index`.
    pub fn string(&self, index: u32) -> Option<&Arc<str>> {
        self.strings.get(index as usize)
    }

    /// Number of tokens, `Eof` included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no token (not even `Eof`) was pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens excluding the trailing `Eof`.
    pub fn significant(&self) -> &[Token] {
        match self.tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => &self.tokens[..self.tokens.len() - 1],
            _ => &self.tokens,
        }
    }

    /// Last token before `Eof`, if any.
    pub fn last_significant(&self) -> Option<&Token> {
        self.significant().last()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}
