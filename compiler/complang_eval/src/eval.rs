//! Tree-walking evaluation of expressions and statements.

use std::sync::Arc;

use complang_ir::{Expr, ExprKind, Stmt};
use complang_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{Closure, Environment, EvalContext, GlobalScope, Value};

/// Evaluate `expr` in `env`.
///
/// Never fails: unbound references, unhandled messages and cancellation all
/// come back as `Value::Error`.
pub fn eval_expr(cx: &EvalContext, env: &Environment, expr: &Expr) -> Value {
    ensure_sufficient_stack(|| eval_expr_inner(cx, env, expr))
}

fn eval_expr_inner(cx: &EvalContext, env: &Environment, expr: &Expr) -> Value {
    if cx.is_cancelled() {
        return Value::cancelled();
    }

    match &expr.kind {
        ExprKind::Null => Value::Null,
        ExprKind::Bool(b) => Value::Bool(*b),
        ExprKind::Int(n) => Value::Int(*n),
        ExprKind::String(text) => Value::String(Arc::clone(text)),
        ExprKind::Symbol(name) => Value::Symbol(*name),
        ExprKind::Ref(name) => env
            .lookup(*name)
            .unwrap_or_else(|| Value::unbound_symbol(cx.text(*name))),
        ExprKind::Message { receiver, message } => {
            let receiver = eval_expr(cx, env, receiver);
            let message = eval_expr(cx, env, message);
            receiver.message(cx, &message)
        }
        ExprKind::Lambda { params, body } => Value::closure(Closure::lambda(
            env.clone(),
            params.clone(),
            body.clone(),
        )),
    }
}

/// Evaluate a statement at top level.
///
/// The value is sent `Run` before it is displayed or bound. Returns the
/// display text for an expression statement and `None` for an assignment.
#[tracing::instrument(level = "debug", skip_all)]
pub fn eval_stmt(cx: &EvalContext, scope: &GlobalScope, stmt: &Stmt) -> Option<String> {
    let env = Environment::Global(scope.clone());
    let value = eval_expr(cx, &env, stmt.expr()).run(cx);

    match stmt {
        Stmt::Expr(_) => Some(value.show(cx)),
        Stmt::Assign { name, .. } => {
            debug!(name = cx.text(*name), "binding");
            scope.bind(*name, value);
            None
        }
    }
}
