//! Evaluator for complang.
//!
//! A tree-walking interpreter over a uniform message protocol: every runtime
//! [`Value`] answers [`Value::message`], and evaluation of a message send is
//! nothing more than evaluating both sides and sending one to the other.
//!
//! # Architecture
//!
//! - [`Environment`]: `Arc`-linked scope chain over a root map or the REPL's
//!   [`GlobalScope`]
//! - [`Value`]: closed set of variants with per-variant dispatch
//! - [`Closure`]: curried lambdas, deferred thunks and host callbacks
//! - [`eval_expr`] / [`eval_stmt`]: the evaluator
//! - [`complete`] / [`eval_query`]: completion over parsed [`Query`]s
//!
//! [`Query`]: complang_ir::Query

mod closure;
mod completion;
mod context;
mod environment;
mod eval;
mod lazy;
mod value;

pub use closure::Closure;
pub use completion::{complete, eval_query, CompleteOptions, Ranker, DEFAULT_MAX_COMPLETIONS};
pub use context::{CancelToken, EvalContext};
pub use environment::{Environment, Frame, GlobalScope};
pub use eval::{eval_expr, eval_stmt};
pub use lazy::LazyValue;
pub use value::{
    CompleteRequest, CompletionReceiver, CustomValue, ErrorKind, ErrorValue, MapEntries, Protocol,
    Value,
};
