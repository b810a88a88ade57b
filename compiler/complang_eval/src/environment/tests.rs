#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use super::*;
use complang_ir::SharedInterner;
use pretty_assertions::assert_eq;

fn cx() -> EvalContext {
    EvalContext::new(SharedInterner::new())
}

fn texts(cx: &EvalContext, names: &[Name]) -> Vec<&'static str> {
    names.iter().map(|name| cx.text(*name)).collect()
}

#[test]
fn inner_frames_shadow_outer_ones() {
    let cx = cx();
    let x = cx.intern("$x");
    let root = Environment::root([(x, Value::Int(1))]);
    let inner = root.extend(x, Value::Int(2));

    assert_eq!(inner.lookup(x).unwrap().show(&cx), "2");
    assert_eq!(root.lookup(x).unwrap().show(&cx), "1");
}

#[test]
fn lookup_walks_outward() {
    let cx = cx();
    let (a, b, c) = (cx.intern("$a"), cx.intern("$b"), cx.intern("$c"));
    let env = Environment::root([(a, Value::Int(1))])
        .extend(b, Value::Int(2))
        .extend(c, Value::Int(3));

    assert_eq!(env.lookup(a).unwrap().show(&cx), "1");
    assert_eq!(env.lookup(b).unwrap().show(&cx), "2");
    assert!(env.lookup(cx.intern("$d")).is_none());
}

#[test]
fn symbols_are_unique_and_sorted_by_text() {
    let cx = cx();
    // Intern in reverse so handle order disagrees with text order.
    let (z, m, a) = (cx.intern("$zeta"), cx.intern("$mid"), cx.intern("$alpha"));
    let env = Environment::root([(z, Value::Null), (a, Value::Null)])
        .extend(m, Value::Null)
        .extend(z, Value::Null);

    assert_eq!(texts(&cx, &env.symbols(&cx)), vec!["$alpha", "$mid", "$zeta"]);
}

#[test]
fn global_scope_binds_and_unbinds() {
    let cx = cx();
    let x = cx.intern("$x");
    let scope = GlobalScope::new();
    assert!(scope.is_empty());

    scope.bind(x, Value::Int(1));
    scope.bind(x, Value::Int(2));
    assert_eq!(scope.len(), 1);
    assert_eq!(scope.get(x).unwrap().show(&cx), "2");

    assert_eq!(scope.unbind(x).unwrap().show(&cx), "2");
    assert!(scope.get(x).is_none());
}

#[test]
fn frames_over_the_global_scope_see_later_binds() {
    let cx = cx();
    let (x, y) = (cx.intern("$x"), cx.intern("$y"));
    let scope = GlobalScope::new();
    let env = Environment::from(scope.clone()).extend(y, Value::Null);

    assert!(env.lookup(x).is_none());
    scope.bind(x, Value::Int(5));
    assert_eq!(env.lookup(x).unwrap().show(&cx), "5");
}

#[test]
fn to_map_prefers_inner_bindings() {
    let cx = cx();
    let (x, y) = (cx.intern("$x"), cx.intern("$y"));
    let env = Environment::root([(x, Value::Int(1)), (y, Value::Int(2))]).extend(x, Value::Int(3));
    assert_eq!(env.to_map(&cx).show(&cx), "{$x: 3, $y: 2}");
}
