//! Stack growth for nested builds.
//!
//! Deep but legal type graphs (long chains of nested generics or fields)
//! recurse once per level through the dispatcher. On native targets the
//! stack is grown on demand; WASM manages its own stack.

/// Remaining stack below which we grow (64KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_LEVEL: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is running low.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_LEVEL, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
