//! Compute-once values.

use std::fmt;
use std::sync::OnceLock;

use crate::{EvalContext, Value};

type LazyInit = Box<dyn Fn(&EvalContext) -> Value + Send + Sync>;

/// A value computed on first use and memoized.
///
/// Concurrent first uses block on one another; the initializer runs once.
pub struct LazyValue {
    cell: OnceLock<Value>,
    init: LazyInit,
}

impl LazyValue {
    pub fn new(init: impl Fn(&EvalContext) -> Value + Send + Sync + 'static) -> Self {
        LazyValue {
            cell: OnceLock::new(),
            init: Box::new(init),
        }
    }

    /// The memoized value, computing it if needed.
    pub fn force(&self, cx: &EvalContext) -> &Value {
        self.cell.get_or_init(|| {
            tracing::trace!("forcing lazy value");
            (self.init)(cx)
        })
    }

    pub fn is_forced(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for LazyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => f.write_str("Lazy(<pending>)"),
        }
    }
}
