//! Stack growth for deeply nested input.
//!
//! Selection sets, values, and type references recurse once per nesting
//! level. On native targets the stack is grown on demand with `stacker`;
//! WASM manages its own stack.

#[cfg(not(target_arch = "wasm32"))]
/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

#[cfg(not(target_arch = "wasm32"))]
/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
