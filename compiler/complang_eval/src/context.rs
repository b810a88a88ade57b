//! Evaluation context: interner handle plus cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use complang_ir::{Name, SharedInterner, StringInterner};

/// Shared cancellation flag.
///
/// Cloning shares the flag; cancelling any clone cancels them all.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Clear the flag so the next evaluation can run.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Per-evaluation state threaded through every message send.
#[derive(Clone)]
pub struct EvalContext {
    interner: SharedInterner,
    cancel: CancelToken,
}

impl EvalContext {
    pub fn new(interner: SharedInterner) -> Self {
        EvalContext {
            interner,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_cancel_token(interner: SharedInterner, cancel: CancelToken) -> Self {
        EvalContext { interner, cancel }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    #[inline]
    pub fn intern(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    /// Text of an interned name.
    #[inline]
    pub fn text(&self, name: Name) -> &'static str {
        StringInterner::lookup(&self.interner, name)
    }
}
