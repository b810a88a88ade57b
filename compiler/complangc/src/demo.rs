//! Values bound in a fresh REPL so there is something to explore.

use std::collections::BTreeMap;

use complang_eval::{EvalContext, Value};

use crate::bind::{native_action, native_fn, IntoValue};
use crate::Interpreter;

/// Bind `$digits` and `$something`.
pub fn bind_demo_values(interp: &Interpreter) {
    let cx = interp.context();

    interp.bind(
        "$digits",
        BTreeMap::from([("one", "1"), ("two", "2"), ("three", "3")]),
    );

    let structure = BTreeMap::from([
        ("X", Value::Bool(true)),
        ("Y", Value::string("ok")),
        (
            "WithArg",
            native_fn(cx, &["$arg"], |cx, args| {
                Value::string(format!("ok {}", text_of(cx, &args[0])))
            }),
        ),
        (
            "With2Args",
            native_fn(cx, &["$a", "$b"], |cx, args| {
                Value::string(format!("ok {} {}", text_of(cx, &args[0]), text_of(cx, &args[1])))
            }),
        ),
        (
            "Say",
            native_action(cx, &["$text"], |cx, args| {
                println!("{}", text_of(cx, &args[0]));
                Value::Null
            }),
        ),
    ]);

    let something = BTreeMap::from([
        ("string", Value::string("hello")),
        ("bool", Value::Bool(true)),
        ("int", Value::Int(42)),
        ("slice", Value::slice([Value::string("a"), Value::string("b")])),
        ("map", Value::map([(cx.intern("key"), Value::string("value"))])),
        ("structure", structure.into_value(cx)),
    ]);
    interp.bind("$something", something);
}

/// Raw text of a string, or its display form otherwise.
fn text_of(cx: &EvalContext, value: &Value) -> String {
    match value {
        Value::String(text) => text.to_string(),
        other => other.show(cx),
    }
}
