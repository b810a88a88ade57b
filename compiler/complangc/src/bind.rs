//! Adapters from host Rust values into complang values.
//!
//! Anything implementing [`IntoValue`] can be bound into a session; Rust
//! functions become closures through [`native_fn`] and [`native_action`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

use complang_eval::{Closure, Environment, EvalContext, Value};
use complang_ir::Name;

/// Conversion into a runtime value.
///
/// Map keys are interned through `cx`, so conversion needs the session's
/// context.
pub trait IntoValue {
    fn into_value(self, cx: &EvalContext) -> Value;
}

impl IntoValue for Value {
    fn into_value(self, _: &EvalContext) -> Value {
        self
    }
}

impl IntoValue for () {
    fn into_value(self, _: &EvalContext) -> Value {
        Value::Null
    }
}

impl IntoValue for bool {
    fn into_value(self, _: &EvalContext) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self, _: &EvalContext) -> Value {
        Value::Int(self)
    }
}

impl IntoValue for &str {
    fn into_value(self, _: &EvalContext) -> Value {
        Value::string(self)
    }
}

impl IntoValue for String {
    fn into_value(self, _: &EvalContext) -> Value {
        Value::string(self)
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self, cx: &EvalContext) -> Value {
        match self {
            Some(value) => value.into_value(cx),
            None => Value::Null,
        }
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self, cx: &EvalContext) -> Value {
        Value::slice(self.into_iter().map(|item| item.into_value(cx)))
    }
}

impl<K: AsRef<str>, T: IntoValue> IntoValue for BTreeMap<K, T> {
    fn into_value(self, cx: &EvalContext) -> Value {
        map_value(cx, self)
    }
}

impl<K: AsRef<str>, T: IntoValue, S: BuildHasher> IntoValue for HashMap<K, T, S> {
    fn into_value(self, cx: &EvalContext) -> Value {
        map_value(cx, self)
    }
}

fn map_value<K: AsRef<str>, T: IntoValue>(
    cx: &EvalContext,
    entries: impl IntoIterator<Item = (K, T)>,
) -> Value {
    Value::map(
        entries
            .into_iter()
            .map(|(key, value)| (cx.intern(key.as_ref()), value.into_value(cx))),
    )
}

/// A curried closure calling `f` once every parameter is bound.
///
/// Arguments reach `f` in parameter order. Without parameters the result is
/// a pure thunk: `f` runs on every message and the message goes to its
/// result.
pub fn native_fn<F>(cx: &EvalContext, params: &[&str], f: F) -> Value
where
    F: Fn(&EvalContext, &[Value]) -> Value + Send + Sync + 'static,
{
    if params.is_empty() {
        return Value::closure(Closure::pure_thunk(move |cx| f(cx, &[])));
    }
    native_closure(cx, params, f, true)
}

/// Like [`native_fn`], but `f` only runs when the result is sent `Run`.
///
/// Binding the last argument yields a deferred block over the arguments;
/// plain messages and completion queue up on it without calling `f`.
pub fn native_action<F>(cx: &EvalContext, params: &[&str], f: F) -> Value
where
    F: Fn(&EvalContext, &[Value]) -> Value + Send + Sync + 'static,
{
    if params.is_empty() {
        return native_closure(cx, params, f, false);
    }
    let f = Arc::new(f);
    native_closure(
        cx,
        params,
        move |_, args: &[Value]| {
            let f = Arc::clone(&f);
            let args = args.to_vec();
            Value::closure(Closure::new(
                Environment::empty(),
                Vec::<Name>::new(),
                move |cx, _| f(cx, &args),
                false,
            ))
        },
        false,
    )
}

fn native_closure<F>(cx: &EvalContext, params: &[&str], f: F, pure: bool) -> Value
where
    F: Fn(&EvalContext, &[Value]) -> Value + Send + Sync + 'static,
{
    let names: Vec<Name> = params.iter().map(|param| cx.intern(param)).collect();
    let lookup = names.clone();
    Value::closure(Closure::new(
        Environment::empty(),
        names,
        move |cx, env| {
            let args: Vec<Value> = lookup
                .iter()
                .map(|name| env.lookup(*name).unwrap_or(Value::Null))
                .collect();
            f(cx, &args)
        },
        pure,
    ))
}
