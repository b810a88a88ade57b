//! Completion queries over a line prefix.
//!
//! A symbol query is tried first and a reference query second. When neither
//! applies, a prefix ending in whitespace after a complete expression, such
//! as `($obj) `, asks for every message that expression understands.

use complang_ir::{Expr, ExprKind, Name, Query, StringInterner, TokenKind, TokenList};
use complang_lexer::tokenize;
use tracing::debug;

use crate::{ParseError, Parser};

/// Parse the text before the cursor into a completion query.
#[tracing::instrument(level = "debug", skip(interner))]
pub fn parse_query(prefix: &str, interner: &StringInterner) -> Result<Query, ParseError> {
    let tokens = tokenize(prefix, interner)?;

    if let Some(query) = symbol_query(&tokens) {
        debug!(offset = query.offset(), "symbol query");
        return Ok(query);
    }
    if let Some(query) = ref_query(&tokens) {
        debug!(offset = query.offset(), "reference query");
        return Ok(query);
    }
    if let Some(query) = empty_symbol_query(prefix, &tokens) {
        debug!(offset = query.offset(), "empty symbol query");
        return Ok(query);
    }
    Err(ParseError::NotCompletable)
}

/// `receiver partial`: the outermost node sends a plain symbol.
fn symbol_query(tokens: &TokenList) -> Option<Query> {
    let stmt = Parser::lenient(tokens).parse_stmt().ok()??;
    let expr: &Expr = stmt.expr();

    let ExprKind::Message { receiver, message } = &expr.kind else {
        return None;
    };
    let ExprKind::Symbol(symbol) = message.kind else {
        return None;
    };
    Some(Query::Symbol {
        receiver: Expr::clone(receiver),
        symbol,
        offset: message.span.offset(),
    })
}

/// The last token alone, when it is a reference.
fn ref_query(tokens: &TokenList) -> Option<Query> {
    let last = tokens.last_significant()?;
    match last.kind {
        TokenKind::Ref(name) => Some(Query::Ref {
            name,
            offset: last.span.offset(),
        }),
        _ => None,
    }
}

/// `receiver ` with nothing typed yet.
fn empty_symbol_query(prefix: &str, tokens: &TokenList) -> Option<Query> {
    if !prefix.ends_with(|c: char| c.is_ascii_whitespace()) {
        return None;
    }
    let stmt = Parser::lenient(tokens).parse_stmt().ok()??;
    Some(Query::Symbol {
        receiver: stmt.expr().clone(),
        symbol: Name::EMPTY,
        offset: prefix.len(),
    })
}

#[cfg(test)]
mod tests;
