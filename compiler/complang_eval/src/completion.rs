//! Completion over incomplete input.
//!
//! [`eval_query`] runs the raw `Complete` protocol against the query's
//! target. [`complete`] builds the ordered candidate list on top of it.

use std::sync::Arc;

use complang_ir::Query;
use parking_lot::Mutex;
use tracing::debug;

use crate::{eval_expr, CompleteRequest, Environment, EvalContext, Value};

/// Default cap on returned candidates.
pub const DEFAULT_MAX_COMPLETIONS: usize = 16;

/// Orders candidates for a partial query.
///
/// May drop candidates that do not match at all.
pub trait Ranker {
    fn rank(&self, query: &str, candidates: Vec<String>) -> Vec<String>;
}

#[derive(Clone, Copy)]
pub struct CompleteOptions<'a> {
    pub max: usize,
    pub ranker: Option<&'a dyn Ranker>,
}

impl Default for CompleteOptions<'_> {
    fn default() -> Self {
        CompleteOptions {
            max: DEFAULT_MAX_COMPLETIONS,
            ranker: None,
        }
    }
}

/// Send `Complete` for `query` to its target, feeding `receiver`.
///
/// A symbol query targets its evaluated receiver; a reference query targets
/// the environment viewed as a map of its bindings.
pub fn eval_query(
    cx: &EvalContext,
    env: &Environment,
    query: &Query,
    receiver: impl Fn(&str) -> bool + Send + Sync + 'static,
) -> Value {
    let text = cx.text(query.partial());
    let target = match query {
        Query::Symbol { receiver, .. } => eval_expr(cx, env, receiver),
        Query::Ref { .. } => env.to_map(cx),
    };
    target.complete(cx, CompleteRequest::new(text, receiver))
}

/// Candidates for `query`, best first, at most `options.max`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn complete(
    cx: &EvalContext,
    env: &Environment,
    query: &Query,
    options: CompleteOptions<'_>,
) -> Vec<String> {
    if options.max == 0 {
        return Vec::new();
    }
    let text = cx.text(query.partial());
    let found = Arc::new(Mutex::new(Vec::new()));

    let Some(ranker) = options.ranker else {
        let sink = Arc::clone(&found);
        let max = options.max;
        eval_query(cx, env, query, move |candidate| {
            let mut found = sink.lock();
            if candidate.starts_with(text) {
                found.push(candidate.to_owned());
            }
            found.len() < max
        });
        let found = std::mem::take(&mut *found.lock());
        debug!(query = text, count = found.len(), "unranked completions");
        return found;
    };

    let sink = Arc::clone(&found);
    eval_query(cx, env, query, move |candidate| {
        sink.lock().push(candidate.to_owned());
        true
    });
    let all = std::mem::take(&mut *found.lock());
    let total = all.len();

    let mut ranked = ranker.rank(text, all);
    ranked.sort_by_key(|candidate| !candidate.starts_with(text));
    ranked.truncate(options.max);
    debug!(query = text, total, count = ranked.len(), "ranked completions");
    ranked
}
