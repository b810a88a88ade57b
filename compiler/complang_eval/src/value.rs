//! Runtime values and message dispatch.
//!
//! Every value answers exactly one operation, [`Value::message`]. Display,
//! deferred effects and completion are ordinary messages too (see
//! [`Protocol`]). A receiver with no response to a message answers with a
//! does-not-understand error instead of failing.
//!
//! Errors float outward: an error receiver answers everything but `Show`
//! with itself, and any receiver sent an error answers with that error.

mod error;
mod protocol;

pub use error::{ErrorKind, ErrorValue};
pub use protocol::{CompleteRequest, CompletionReceiver, Protocol};

use std::fmt;
use std::fmt::Write as _;
use std::sync::Arc;

use complang_ir::Name;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{Closure, EvalContext, LazyValue};

/// Symbol-keyed entries of a `Value::Map`.
pub type MapEntries = FxHashMap<Name, Value>;

/// Host extension point.
///
/// Implementors answer `Show` with a `Value::String`, answer `Run` (usually
/// with a clone of themselves), and use [`Value::not_understood`] for
/// anything they do not handle. Errors sent as arguments never reach them.
pub trait CustomValue: Send + Sync {
    fn message(&self, cx: &EvalContext, arg: &Value) -> Value;
}

/// A runtime value. Cloning is cheap; payloads sit behind `Arc`.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    String(Arc<str>),
    Symbol(Name),
    Slice(Arc<[Value]>),
    Map(Arc<MapEntries>),
    Closure(Arc<Closure>),
    Error(Arc<ErrorValue>),
    /// Try `primary`; fall back when it does not understand.
    Overloaded {
        primary: Arc<Value>,
        fallback: Arc<Value>,
    },
    Lazy(Arc<LazyValue>),
    Custom(Arc<dyn CustomValue>),
    Protocol(Protocol),
}

impl Value {
    pub const SHOW: Value = Value::Protocol(Protocol::Show);
    pub const RUN: Value = Value::Protocol(Protocol::Run);

    pub fn string(text: impl Into<Arc<str>>) -> Value {
        Value::String(text.into())
    }

    pub fn slice(items: impl IntoIterator<Item = Value>) -> Value {
        Value::Slice(items.into_iter().collect())
    }

    pub fn map(entries: impl IntoIterator<Item = (Name, Value)>) -> Value {
        Value::Map(Arc::new(entries.into_iter().collect()))
    }

    pub fn closure(closure: Closure) -> Value {
        Value::Closure(Arc::new(closure))
    }

    pub fn overloaded(primary: Value, fallback: Value) -> Value {
        Value::Overloaded {
            primary: Arc::new(primary),
            fallback: Arc::new(fallback),
        }
    }

    pub fn lazy(init: impl Fn(&EvalContext) -> Value + Send + Sync + 'static) -> Value {
        Value::Lazy(Arc::new(LazyValue::new(init)))
    }

    pub fn custom(value: impl CustomValue + 'static) -> Value {
        Value::Custom(Arc::new(value))
    }

    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Value {
        Value::Error(Arc::new(ErrorValue::new(kind, message)))
    }

    pub fn unbound_symbol(text: &str) -> Value {
        Value::error(ErrorKind::UnboundSymbol, format!("unbound symbol: {text}"))
    }

    pub fn cancelled() -> Value {
        Value::error(ErrorKind::Cancelled, "evaluation cancelled")
    }

    /// Does-not-understand error naming both parties by their `Show` text.
    pub fn does_not_understand(cx: &EvalContext, receiver: &Value, message: &Value) -> Value {
        Value::not_understood(cx, &receiver.show(cx), message)
    }

    /// Does-not-understand error for a receiver known only by display text.
    pub fn not_understood(cx: &EvalContext, receiver: &str, message: &Value) -> Value {
        let message = message.show(cx);
        trace!(receiver, message = message.as_str(), "does not understand");
        Value::error(
            ErrorKind::DoesNotUnderstand,
            format!("{receiver} does not understand {message}"),
        )
    }

    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_does_not_understand(&self) -> bool {
        self.as_error()
            .is_some_and(|err| err.kind() == ErrorKind::DoesNotUnderstand)
    }

    /// Send `arg` to this value.
    pub fn message(&self, cx: &EvalContext, arg: &Value) -> Value {
        if let Value::Error(err) = self {
            return match arg {
                Value::Protocol(Protocol::Show) => Value::string(err.show()),
                _ => self.clone(),
            };
        }
        if arg.is_error() {
            return arg.clone();
        }

        match self {
            Value::Closure(closure) => closure.message(cx, self, arg),
            Value::Overloaded { primary, fallback } => {
                overloaded_message(cx, primary, fallback, arg)
            }
            Value::Lazy(lazy) => lazy.force(cx).message(cx, arg),
            Value::Custom(custom) => custom.message(cx, arg),
            _ => self.builtin_message(cx, arg),
        }
    }

    /// Display text, via the `Show` message.
    pub fn show(&self, cx: &EvalContext) -> String {
        shown_text(self.message(cx, &Value::SHOW))
    }

    /// Perform deferred effects, via the `Run` message.
    pub fn run(&self, cx: &EvalContext) -> Value {
        self.message(cx, &Value::RUN)
    }

    /// Offer completions to `request`, via the `Complete` message.
    pub fn complete(&self, cx: &EvalContext, request: CompleteRequest) -> Value {
        self.message(cx, &Value::Protocol(Protocol::Complete(request)))
    }

    /// Plain data values and protocol messages.
    fn builtin_message(&self, cx: &EvalContext, arg: &Value) -> Value {
        match (self, arg) {
            (_, Value::Protocol(Protocol::Show)) => Value::string(self.render(cx)),
            (_, Value::Protocol(Protocol::Run)) => self.clone(),
            (Value::Map(entries), Value::Protocol(Protocol::Complete(request))) => {
                for (key, _) in sorted_entries(cx, entries) {
                    if !request.offer(key) {
                        break;
                    }
                }
                Value::Null
            }
            (Value::Map(entries), Value::Symbol(key)) => match entries.get(key) {
                Some(value) => value.clone(),
                None => Value::does_not_understand(cx, self, arg),
            },
            _ => Value::does_not_understand(cx, self, arg),
        }
    }

    fn render(&self, cx: &EvalContext) -> String {
        match self {
            Value::Null => "null".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::String(text) => quote(text),
            Value::Symbol(name) => cx.text(*name).to_owned(),
            Value::Slice(items) => {
                let mut out = String::from("[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&item.show(cx));
                }
                out.push(']');
                out
            }
            Value::Map(entries) => {
                let mut out = String::from("{");
                for (i, (key, value)) in sorted_entries(cx, entries).into_iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    let _ = write!(out, "{key}: {}", value.show(cx));
                }
                out.push('}');
                out
            }
            Value::Protocol(protocol) => protocol.name().to_owned(),
            // `message` answers `Show` for these before reaching here.
            Value::Closure(closure) => closure.show(cx),
            Value::Error(err) => err.show(),
            Value::Overloaded { primary, .. } => primary.show(cx),
            Value::Lazy(lazy) => lazy.force(cx).show(cx),
            Value::Custom(custom) => shown_text(custom.message(cx, &Value::SHOW)),
        }
    }
}

/// Text of a `Show` reply.
fn shown_text(reply: Value) -> String {
    match reply {
        Value::String(text) => String::from(&*text),
        _ => "ERROR: object does not respond to show properly".to_owned(),
    }
}

/// Quote `text` as a string literal the lexer reads back unchanged.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Map entries ordered by key text.
fn sorted_entries<'a>(cx: &EvalContext, entries: &'a MapEntries) -> Vec<(&'static str, &'a Value)> {
    let mut sorted: Vec<_> = entries
        .iter()
        .map(|(key, value)| (cx.text(*key), value))
        .collect();
    sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
    sorted
}

fn overloaded_message(cx: &EvalContext, primary: &Value, fallback: &Value, arg: &Value) -> Value {
    match arg {
        Value::Protocol(Protocol::Show) => primary.message(cx, arg),
        // Keep the fallback reachable after the primary's effects ran.
        Value::Protocol(Protocol::Run) => Value::overloaded(primary.run(cx), fallback.clone()),
        Value::Protocol(Protocol::Complete(_)) => {
            primary.message(cx, arg);
            fallback.message(cx, arg);
            Value::Null
        }
        _ => {
            let answer = primary.message(cx, arg);
            if answer.is_does_not_understand() {
                trace!("primary did not understand, trying fallback");
                fallback.message(cx, arg)
            } else {
                answer
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::string(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::string(text)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Symbol(name) => f.debug_tuple("Symbol").field(name).finish(),
            Value::Slice(items) => f.debug_tuple("Slice").field(items).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Value::Closure(closure) => fmt::Debug::fmt(&**closure, f),
            Value::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Value::Overloaded { primary, fallback } => f
                .debug_struct("Overloaded")
                .field("primary", primary)
                .field("fallback", fallback)
                .finish(),
            Value::Lazy(lazy) => fmt::Debug::fmt(&**lazy, f),
            Value::Custom(_) => f.write_str("Custom(..)"),
            Value::Protocol(protocol) => f.debug_tuple("Protocol").field(protocol).finish(),
        }
    }
}

#[cfg(test)]
mod tests;
