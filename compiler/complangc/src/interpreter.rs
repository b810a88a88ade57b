//! One REPL session: a global scope, an intern table and a completion setup.

use std::sync::Arc;

use complang_eval::{
    complete, eval_stmt, CancelToken, CompleteOptions, Environment, EvalContext, GlobalScope,
    Ranker, DEFAULT_MAX_COMPLETIONS,
};
use complang_ir::SharedInterner;
use complang_parse::{parse_query, parse_stmt};
use tracing::{debug, trace};

use crate::bind::IntoValue;

/// A completion choice for the line being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The completed word alone.
    pub display: String,
    /// The whole line with the word completed.
    pub new_line: String,
}

/// Session state shared between the read loop and the completer.
///
/// Clones share the same bindings.
#[derive(Clone)]
pub struct Interpreter {
    cx: EvalContext,
    scope: GlobalScope,
    max_completions: usize,
    ranker: Option<Arc<dyn Ranker + Send + Sync>>,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            cx: EvalContext::new(SharedInterner::new()),
            scope: GlobalScope::new(),
            max_completions: DEFAULT_MAX_COMPLETIONS,
            ranker: None,
        }
    }

    #[must_use]
    pub fn with_max_completions(mut self, max: usize) -> Self {
        self.max_completions = max;
        self
    }

    #[must_use]
    pub fn with_ranker(mut self, ranker: impl Ranker + Send + Sync + 'static) -> Self {
        self.ranker = Some(Arc::new(ranker));
        self
    }

    pub fn context(&self) -> &EvalContext {
        &self.cx
    }

    /// Interrupts the statement being evaluated.
    pub fn cancel_token(&self) -> &CancelToken {
        self.cx.cancel_token()
    }

    /// Bind `name` (including its `$`) in the global scope.
    pub fn bind(&self, name: &str, value: impl IntoValue) {
        let value = value.into_value(&self.cx);
        self.scope.bind(self.cx.intern(name), value);
    }

    /// Evaluate one line. Returns the text to print, if any.
    ///
    /// Parse failures come back as `error: ...` text; the session carries on.
    pub fn read_eval_print(&self, line: &str) -> Option<String> {
        let stmt = match parse_stmt(line, self.cx.interner()) {
            Ok(stmt) => stmt?,
            Err(err) => {
                debug!(%err, "parse failed");
                return Some(format!("error: {err}"));
            }
        };
        trace!(tree = %stmt.expr().pretty(self.cx.interner()), "parsed");
        self.cx.cancel_token().reset();
        eval_stmt(&self.cx, &self.scope, &stmt)
    }

    /// Completions for `line`, treated as everything left of the cursor.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn read_eval_complete(&self, line: &str) -> Vec<Candidate> {
        let query = match parse_query(line, self.cx.interner()) {
            Ok(query) => query,
            Err(err) => {
                trace!(%err, "no completion query");
                return Vec::new();
            }
        };
        let head = &line[..query.offset()];
        let options = CompleteOptions {
            max: self.max_completions,
            ranker: self.ranker.as_deref().map(|ranker| ranker as &dyn Ranker),
        };
        let env = Environment::from(self.scope.clone());
        complete(&self.cx, &env, &query, options)
            .into_iter()
            .map(|word| Candidate {
                new_line: format!("{head}{word}"),
                display: word,
            })
            .collect()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
