#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use super::*;
use pretty_assertions::assert_eq;

/// Render a query as `Symbol(receiver, text, offset)` or `Ref(text, offset)`.
fn render(prefix: &str) -> Option<String> {
    let interner = StringInterner::new();
    let query = parse_query(prefix, &interner).ok()?;
    Some(match query {
        Query::Symbol {
            receiver,
            symbol,
            offset,
        } => format!(
            "Symbol({}, {:?}, {offset})",
            receiver.pretty(&interner),
            interner.lookup(symbol)
        ),
        Query::Ref { name, offset } => format!("Ref({:?}, {offset})", interner.lookup(name)),
    })
}

#[test]
fn partial_message_is_symbol_query() {
    assert_eq!(render("$obj f").unwrap(), r#"Symbol(Ref($obj), "f", 5)"#);
}

#[test]
fn assignment_uses_right_hand_side() {
    assert_eq!(render("$v = $obj f").unwrap(), r#"Symbol(Ref($obj), "f", 10)"#);
}

#[test]
fn chained_receiver_is_kept_whole() {
    assert_eq!(
        render("$obj fld sub").unwrap(),
        r#"Symbol(Message(Ref($obj), Sym(fld)), "sub", 9)"#
    );
}

#[test]
fn trailing_space_keeps_the_last_lexeme() {
    assert_eq!(render("$obj f ").unwrap(), r#"Symbol(Ref($obj), "f", 5)"#);
    assert_eq!(render("$a $b ").unwrap(), r#"Ref("$b", 3)"#);
    assert_eq!(render("$obj ").unwrap(), r#"Ref("$obj", 0)"#);
    assert_eq!(render("$v = $obj ").unwrap(), r#"Ref("$obj", 5)"#);
}

#[test]
fn trailing_space_after_other_expressions_queries_every_member() {
    assert_eq!(render("($obj) ").unwrap(), r#"Symbol(Ref($obj), "", 7)"#);
    assert_eq!(render("$v = ($obj) ").unwrap(), r#"Symbol(Ref($obj), "", 12)"#);
    // A parenthesized send still ends in its message symbol.
    assert_eq!(render("($obj fld) ").unwrap(), r#"Symbol(Ref($obj), "fld", 6)"#);
    assert_eq!(render("($obj)"), None);
}

#[test]
fn lone_reference_is_ref_query() {
    assert_eq!(render("$f").unwrap(), r#"Ref("$f", 0)"#);
}

#[test]
fn reference_message_falls_back_to_ref_query() {
    assert_eq!(render("$obj $f").unwrap(), r#"Ref("$f", 5)"#);
}

#[test]
fn reference_after_assignment_is_ref_query() {
    assert_eq!(render("$x = $f").unwrap(), r#"Ref("$f", 5)"#);
}

#[test]
fn unclosed_group_still_completes() {
    assert_eq!(render("($obj f").unwrap(), r#"Symbol(Ref($obj), "f", 6)"#);
}

#[test]
fn broken_prefix_still_offers_ref_query() {
    assert_eq!(render(") $f").unwrap(), r#"Ref("$f", 2)"#);
}

#[test]
fn nothing_to_complete() {
    let interner = StringInterner::new();
    assert_eq!(
        parse_query("", &interner).unwrap_err(),
        ParseError::NotCompletable
    );
    assert_eq!(render("plain"), None);
    assert_eq!(render(r#"$obj "str""#), None);
    assert_eq!(render(r#"$obj "open"#), None);
}
