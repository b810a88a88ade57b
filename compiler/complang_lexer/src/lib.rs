//! Lexer for complang using logos with symbol interning.
//!
//! Raw tokens come out of a logos-derived scanner; [`tokenize`] then interns
//! symbol text, cooks string escapes into the list's literal table, and turns
//! scanner failures into [`LexError`]s. Token spans are exact byte offsets,
//! so `&source[token.span.offset()..]` always starts with the token's own text.

mod cook_escape;
mod lex_error;

use complang_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

pub use lex_error::LexError;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("=")]
    Eq,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("|")]
    Pipe,

    // Reference: sigil, then symbol characters.
    #[regex(r"\$[a-zA-Z0-9_\-:/.]*")]
    Ref,

    // Plain symbol; `null`/`true`/`false` are picked out in `convert_token`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_\-:/.]*")]
    Symbol,

    #[regex(r"-?[0-9]+")]
    Int,

    #[regex(r#""([^"\\]|\\(.|\n))*""#, priority = 4)]
    String,

    // Opening quote with no closing quote before end of input.
    #[regex(r#""([^"\\]|\\(.|\n))*\\?"#, priority = 2)]
    UnterminatedString,
}

/// Lex one line of source into a `TokenList` terminated by `Eof`.
pub fn tokenize(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let raw = token_result.map_err(|()| LexError::UnexpectedChar {
            ch: slice.chars().next().unwrap_or('\u{fffd}'),
            span,
        })?;
        let kind = convert_token(raw, slice, span, interner, &mut result)?;
        result.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof));
    Ok(result)
}

/// Convert a raw token to a `TokenKind`, interning identifiers. Cooked
/// string text goes into `tokens`' literal table instead.
fn convert_token(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
    tokens: &mut TokenList,
) -> Result<TokenKind, LexError> {
    let kind = match raw {
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Eq => TokenKind::Eq,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Ref => TokenKind::Ref(interner.intern(slice)),
        RawToken::Symbol => match slice {
            "null" => TokenKind::Null,
            "true" => TokenKind::Bool(true),
            "false" => TokenKind::Bool(false),
            _ => TokenKind::Symbol(interner.intern(slice)),
        },
        RawToken::Int => {
            let n = slice.parse::<i64>().map_err(|_| LexError::IntOutOfRange {
                text: slice.to_owned(),
                span,
            })?;
            TokenKind::Int(n)
        }
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            let cooked = cook_escape::cook_string(content, span.start + 1)?;
            TokenKind::String(tokens.push_string(cooked))
        }
        RawToken::UnterminatedString => {
            // Report a bad escape before the missing quote; it comes first in the text.
            cook_escape::cook_string(&slice[1..], span.start + 1)?;
            return Err(LexError::UnterminatedString { span });
        }
    };
    Ok(kind)
}
