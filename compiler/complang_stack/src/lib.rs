//! Stack growth guard.
//!
//! The parser and the evaluator both recurse once per nesting level of the
//! input, so a line like `((((...))))` or a long chain of nested lambda blocks
//! would otherwise be bounded by the native stack. Wrapping each recursive
//! step in [`ensure_sufficient_stack`] moves the work to a freshly allocated
//! segment whenever the remaining stack gets low.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    let _ = (RED_ZONE, SEGMENT_SIZE);
    f()
}
