//! Environments for reference lookup.
//!
//! An environment is a singly linked chain of `Arc` frames ending in either
//! an immutable root map or the REPL's mutable top-level scope. Frames are
//! shared, never copied, and a frame only points outward, so the chain is
//! acyclic.

use std::sync::Arc;

use complang_ir::Name;
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{EvalContext, Value};

/// The mutable top-level scope.
///
/// Clones share the same bindings, so closures that captured the scope see
/// later `bind`s.
#[derive(Clone, Default)]
pub struct GlobalScope(Arc<RwLock<FxHashMap<Name, Value>>>);

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous binding.
    pub fn bind(&self, name: Name, value: Value) {
        self.0.write().insert(name, value);
    }

    pub fn unbind(&self, name: Name) -> Option<Value> {
        self.0.write().remove(&name)
    }

    pub fn get(&self, name: Name) -> Option<Value> {
        self.0.read().get(&name).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}

/// One binding added on top of a parent environment.
pub struct Frame {
    parent: Environment,
    name: Name,
    value: Value,
}

#[derive(Clone)]
pub enum Environment {
    /// Immutable bindings supplied up front.
    Root(Arc<FxHashMap<Name, Value>>),
    /// The REPL's top-level scope.
    Global(GlobalScope),
    /// A parameter binding from a closure application.
    Extended(Arc<Frame>),
}

impl Environment {
    /// An environment with no bindings.
    pub fn empty() -> Self {
        Environment::Root(Arc::default())
    }

    pub fn root(bindings: impl IntoIterator<Item = (Name, Value)>) -> Self {
        Environment::Root(Arc::new(bindings.into_iter().collect()))
    }

    /// A new environment with `name` bound to `value`, shadowing any outer
    /// binding of the same name.
    #[must_use]
    pub fn extend(&self, name: Name, value: Value) -> Self {
        Environment::Extended(Arc::new(Frame {
            parent: self.clone(),
            name,
            value,
        }))
    }

    /// Innermost binding of `name`.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut env = self;
        loop {
            match env {
                Environment::Root(bindings) => return bindings.get(&name).cloned(),
                Environment::Global(scope) => return scope.get(name),
                Environment::Extended(frame) => {
                    if frame.name == name {
                        return Some(frame.value.clone());
                    }
                    env = &frame.parent;
                }
            }
        }
    }

    /// Every visible name, once each, in lexicographic order of text.
    pub fn symbols(&self, cx: &EvalContext) -> Vec<Name> {
        let mut seen = FxHashSet::default();
        let mut env = self;
        loop {
            match env {
                Environment::Root(bindings) => {
                    seen.extend(bindings.keys().copied());
                    break;
                }
                Environment::Global(scope) => {
                    seen.extend(scope.0.read().keys().copied());
                    break;
                }
                Environment::Extended(frame) => {
                    seen.insert(frame.name);
                    env = &frame.parent;
                }
            }
        }

        let mut names: Vec<Name> = seen.into_iter().collect();
        names.sort_unstable_by_key(|name| cx.text(*name));
        names
    }

    /// Every visible binding as a map value, inner bindings winning.
    pub fn to_map(&self, cx: &EvalContext) -> Value {
        Value::map(
            self.symbols(cx)
                .into_iter()
                .filter_map(|name| self.lookup(name).map(|value| (name, value))),
        )
    }
}

impl From<GlobalScope> for Environment {
    fn from(scope: GlobalScope) -> Self {
        Environment::Global(scope)
    }
}

#[cfg(test)]
mod tests;
