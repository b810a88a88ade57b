#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use complang_ir::SharedInterner;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn cx() -> EvalContext {
    EvalContext::new(SharedInterner::new())
}

fn sym(cx: &EvalContext, text: &str) -> Value {
    Value::Symbol(cx.intern(text))
}

fn map(cx: &EvalContext, entries: &[(&str, Value)]) -> Value {
    Value::map(
        entries
            .iter()
            .map(|(key, value)| (cx.intern(key), value.clone())),
    )
}

fn offered(cx: &EvalContext, value: &Value) -> Vec<String> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    value.complete(
        cx,
        CompleteRequest::new("", move |candidate| {
            sink.lock().push(candidate.to_owned());
            true
        }),
    );
    let out = seen.lock().clone();
    out
}

#[test]
fn show_scalars() {
    let cx = cx();
    assert_eq!(Value::Null.show(&cx), "null");
    assert_eq!(Value::Bool(true).show(&cx), "true");
    assert_eq!(Value::Bool(false).show(&cx), "false");
    assert_eq!(Value::Int(-7).show(&cx), "-7");
    assert_eq!(Value::string("a\"b\n").show(&cx), r#""a\"b\n""#);
    assert_eq!(sym(&cx, "fox").show(&cx), "fox");
    assert_eq!(Value::SHOW.show(&cx), ":show");
    assert_eq!(Value::RUN.show(&cx), ":run");
}

#[test]
fn show_strings_use_literal_escapes() {
    let cx = cx();
    assert_eq!(
        Value::string("\u{8}\u{c}\r\t\\").show(&cx),
        r#""\b\f\r\t\\""#
    );
    // Anything without a short escape is written as is.
    assert_eq!(Value::string("é\u{1}'").show(&cx), "\"é\u{1}'\"");
}

#[test]
fn show_collections() {
    let cx = cx();
    assert_eq!(Value::slice([]).show(&cx), "[]");
    assert_eq!(
        Value::slice([Value::Int(1), Value::string("x")]).show(&cx),
        r#"[1, "x"]"#
    );
    assert_eq!(map(&cx, &[]).show(&cx), "{}");
    assert_eq!(
        map(
            &cx,
            &[("zeta", Value::Int(2)), ("alpha", Value::Null), ("mid", Value::Bool(true))]
        )
        .show(&cx),
        "{alpha: null, mid: true, zeta: 2}"
    );
}

#[test]
fn show_error() {
    let cx = cx();
    assert_eq!(
        Value::error(ErrorKind::Other, "boom").show(&cx),
        "ERROR: boom"
    );
}

#[test]
fn run_returns_plain_values_unchanged() {
    let cx = cx();
    assert_eq!(Value::Int(3).run(&cx).show(&cx), "3");
    let m = map(&cx, &[("k", Value::Int(1))]);
    assert_eq!(m.run(&cx).show(&cx), "{k: 1}");
}

#[test]
fn map_answers_symbol_keys() {
    let cx = cx();
    let m = map(&cx, &[("fox", Value::string("FOX"))]);
    assert_eq!(m.message(&cx, &sym(&cx, "fox")).show(&cx), r#""FOX""#);

    let missing = m.message(&cx, &sym(&cx, "cat"));
    assert!(missing.is_does_not_understand());
    assert_eq!(
        missing.show(&cx),
        r#"ERROR: {fox: "FOX"} does not understand cat"#
    );
}

#[test]
fn map_does_not_answer_strings() {
    let cx = cx();
    let m = map(&cx, &[("fox", Value::Null)]);
    assert!(m.message(&cx, &Value::string("fox")).is_does_not_understand());
}

#[test]
fn map_offers_keys_in_order_and_stops_early() {
    let cx = cx();
    let m = map(
        &cx,
        &[("fox", Value::Null), ("fine", Value::Null), ("ant", Value::Null)],
    );
    assert_eq!(offered(&cx, &m), vec!["ant", "fine", "fox"]);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    m.complete(
        &cx,
        CompleteRequest::new("", move |candidate| {
            let mut seen = sink.lock();
            seen.push(candidate.to_owned());
            seen.len() < 2
        }),
    );
    assert_eq!(*seen.lock(), vec!["ant".to_owned(), "fine".to_owned()]);
}

#[test]
fn scalars_offer_no_completions() {
    let cx = cx();
    assert!(offered(&cx, &Value::Int(1)).is_empty());
    assert!(offered(&cx, &Value::string("x")).is_empty());
}

#[test]
fn error_receiver_answers_with_itself() {
    let cx = cx();
    let err = Value::error(ErrorKind::Other, "boom");
    let answer = err.message(&cx, &Value::Int(1));
    assert_eq!(answer.as_error().unwrap().message(), "boom");
    assert_eq!(err.run(&cx).show(&cx), "ERROR: boom");
}

#[test]
fn error_argument_floats_out() {
    let cx = cx();
    let err = Value::unbound_symbol("$nope");
    let m = map(&cx, &[("k", Value::Null)]);
    let answer = m.message(&cx, &err);
    assert_eq!(answer.as_error().unwrap().kind(), ErrorKind::UnboundSymbol);
    assert_eq!(answer.show(&cx), "ERROR: unbound symbol: $nope");
}

#[test]
fn overloaded_falls_back_on_does_not_understand() {
    let cx = cx();
    let value = Value::overloaded(
        map(&cx, &[("a", Value::Int(1))]),
        map(&cx, &[("b", Value::Int(2))]),
    );
    assert_eq!(value.message(&cx, &sym(&cx, "a")).show(&cx), "1");
    assert_eq!(value.message(&cx, &sym(&cx, "b")).show(&cx), "2");
    assert_eq!(
        value.message(&cx, &sym(&cx, "c")).show(&cx),
        "ERROR: {b: 2} does not understand c"
    );
    assert_eq!(value.show(&cx), "{a: 1}");
}

#[test]
fn overloaded_broadcasts_complete() {
    let cx = cx();
    let value = Value::overloaded(
        map(&cx, &[("a", Value::Int(1))]),
        map(&cx, &[("b", Value::Int(2))]),
    );
    assert_eq!(offered(&cx, &value), vec!["a", "b"]);
}

#[test]
fn overloaded_survives_run() {
    let cx = cx();
    let value = Value::overloaded(Value::Int(1), map(&cx, &[("b", Value::Int(2))]));
    let ran = value.run(&cx);
    assert_eq!(ran.message(&cx, &sym(&cx, "b")).show(&cx), "2");
}

#[test]
fn lazy_forwards_and_computes_once_across_threads() {
    let cx = cx();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let value = Value::lazy(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Value::Int(42)
    });

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| assert_eq!(value.show(&cx), "42"));
        }
    });
    assert_eq!(value.show(&cx), "42");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

struct Counter;

impl CustomValue for Counter {
    fn message(&self, cx: &EvalContext, arg: &Value) -> Value {
        match arg {
            Value::Protocol(Protocol::Show) => Value::string("<counter>"),
            Value::Protocol(Protocol::Run) => Value::custom(Counter),
            Value::Int(n) => Value::Int(n + 1),
            _ => Value::not_understood(cx, "<counter>", arg),
        }
    }
}

#[test]
fn custom_values_take_part_in_the_protocol() {
    let cx = cx();
    let value = Value::custom(Counter);
    assert_eq!(value.show(&cx), "<counter>");
    assert_eq!(value.message(&cx, &Value::Int(1)).show(&cx), "2");
    assert_eq!(
        value.message(&cx, &Value::Null).show(&cx),
        "ERROR: <counter> does not understand null"
    );
    // Errors never reach the custom handler.
    let err = Value::cancelled();
    assert_eq!(value.message(&cx, &err).show(&cx), "ERROR: evaluation cancelled");
}

#[test]
fn rendering_wrappers_defer_to_their_contents() {
    let cx = cx();
    let cases = [
        Value::closure(Closure::pure_thunk(|_| Value::Null)),
        Value::error(ErrorKind::Other, "boom"),
        Value::overloaded(Value::Int(1), Value::custom(Counter)),
        Value::lazy(|_| Value::string("later")),
        Value::custom(Counter),
    ];
    for value in &cases {
        assert_eq!(value.render(&cx), value.show(&cx));
    }
    assert_eq!(cases[2].render(&cx), "1");
    assert_eq!(cases[3].render(&cx), r#""later""#);
}

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
    assert_send_sync::<EvalContext>();
}

fn plain_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z ]{0,8}".prop_map(Value::string),
    ]
}

proptest! {
    #[test]
    fn shown_strings_read_back_as_the_same_literal(text in "[a-z \"\\\\\t\n\r\u{8}\u{c}é]{0,12}") {
        let cx = cx();
        let shown = Value::string(text.as_str()).show(&cx);
        let interner = complang_ir::StringInterner::new();
        let expr = complang_parse::parse_expr(&shown, &interner).unwrap();
        prop_assert_eq!(expr.kind, complang_ir::ExprKind::String(Arc::from(text.as_str())));
    }

    #[test]
    fn unhandled_messages_name_both_sides(
        receiver in plain_value(),
        message in prop_oneof![plain_value(), "[a-z]{1,6}".prop_map(|s| Value::string(s))],
    ) {
        let cx = cx();
        let answer = receiver.message(&cx, &message);
        prop_assert!(answer.is_does_not_understand());
        let text = answer.show(&cx);
        prop_assert!(text.contains(&receiver.show(&cx)));
        prop_assert!(text.contains(&message.show(&cx)));
    }
}
