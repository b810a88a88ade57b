//! Curried closures.
//!
//! A closure with parameters left binds one per message, in a fresh frame
//! over its captured environment. Binding the last one evaluates the body
//! right away.
//!
//! A closure with no parameters left is a thunk:
//! - impure thunks (`[ body ]` blocks) queue every message until `Run`, then
//!   evaluate the body once and replay the queue on the result;
//! - pure thunks evaluate the body on each message and forward the message
//!   to the result.

use std::fmt;
use std::sync::Arc;

use complang_ir::{Expr, Name};
use tracing::trace;

use crate::{eval_expr, Environment, EvalContext, Protocol, Value};

/// Evaluated in the captured environment extended with every bound parameter.
type ClosureBody = Arc<dyn Fn(&EvalContext, &Environment) -> Value + Send + Sync>;

pub struct Closure {
    env: Environment,
    params: Arc<[Name]>,
    /// Index of the first unbound parameter.
    next_param: usize,
    body: ClosureBody,
    pending: Arc<[Value]>,
    pure: bool,
}

impl Closure {
    /// Closure whose body calls back into Rust.
    pub fn new(
        env: Environment,
        params: impl Into<Arc<[Name]>>,
        body: impl Fn(&EvalContext, &Environment) -> Value + Send + Sync + 'static,
        pure: bool,
    ) -> Self {
        Closure {
            env,
            params: params.into(),
            next_param: 0,
            body: Arc::new(body),
            pending: Vec::<Value>::new().into(),
            pure,
        }
    }

    /// Closure for a lambda block in source.
    pub fn lambda(env: Environment, params: Arc<[Name]>, body: Arc<Expr>) -> Self {
        Closure::new(env, params, move |cx, env| eval_expr(cx, env, &body), false)
    }

    /// Parameterless pure closure: every message is forwarded to `body`'s
    /// fresh result.
    pub fn pure_thunk(body: impl Fn(&EvalContext) -> Value + Send + Sync + 'static) -> Self {
        Closure::new(
            Environment::empty(),
            Vec::<Name>::new(),
            move |cx, _| body(cx),
            true,
        )
    }

    /// Parameters still to be bound.
    pub fn remaining_params(&self) -> &[Name] {
        &self.params[self.next_param..]
    }

    pub fn is_pure(&self) -> bool {
        self.pure
    }

    /// Messages queued for replay after `Run`.
    pub fn pending(&self) -> &[Value] {
        &self.pending
    }

    /// `receiver` is the `Value::Closure` wrapping `self`.
    pub(crate) fn message(&self, cx: &EvalContext, receiver: &Value, arg: &Value) -> Value {
        let thunk = self.remaining_params().is_empty();

        if thunk && self.pure {
            return (self.body)(cx, &self.env).message(cx, arg);
        }

        match arg {
            Value::Protocol(Protocol::Show) => Value::string(self.show(cx)),
            Value::Protocol(Protocol::Run) if thunk => self.run(cx),
            Value::Protocol(Protocol::Run) => receiver.clone(),
            Value::Protocol(Protocol::Complete(_)) => {
                Value::not_understood(cx, &self.show(cx), arg)
            }
            _ if thunk => {
                let pending: Arc<[Value]> =
                    self.pending.iter().cloned().chain([arg.clone()]).collect();
                trace!(queued = pending.len(), "deferring message");
                Value::Closure(Arc::new(self.clone_with(
                    self.env.clone(),
                    self.next_param,
                    pending,
                )))
            }
            _ => self.bind(cx, arg),
        }
    }

    fn bind(&self, cx: &EvalContext, arg: &Value) -> Value {
        let name = self.params[self.next_param];
        let env = self.env.extend(name, arg.clone());
        let next_param = self.next_param + 1;
        if next_param == self.params.len() {
            trace!(param = cx.text(name), "last parameter bound, evaluating body");
            return (self.body)(cx, &env);
        }
        Value::Closure(Arc::new(self.clone_with(env, next_param, self.pending.clone())))
    }

    /// Evaluate a thunk's body and replay queued messages on the result.
    fn run(&self, cx: &EvalContext) -> Value {
        let mut result = (self.body)(cx, &self.env);
        for message in self.pending.iter() {
            result = result.message(cx, message);
        }
        result
    }

    fn clone_with(&self, env: Environment, next_param: usize, pending: Arc<[Value]>) -> Closure {
        Closure {
            env,
            params: Arc::clone(&self.params),
            next_param,
            body: Arc::clone(&self.body),
            pending,
            pure: self.pure,
        }
    }

    /// `<Closure:$x,$y>`, or `<Closure>` with nothing left to bind.
    pub fn show(&self, cx: &EvalContext) -> String {
        let mut out = String::from("<Closure");
        for (i, param) in self.remaining_params().iter().enumerate() {
            out.push(if i == 0 { ':' } else { ',' });
            out.push_str(cx.text(*param));
        }
        out.push('>');
        out
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("remaining_params", &self.remaining_params())
            .field("pending", &self.pending.len())
            .field("pure", &self.pure)
            .finish_non_exhaustive()
    }
}
