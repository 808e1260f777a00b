//! Shared node handle supporting both single-threaded and thread-safe modes
//!
//! Provides one pointer type for tree nodes:
//! - Single-threaded (default): `alloc::rc::Rc`
//! - Thread-safe (`sync` feature): `alloc::sync::Arc`
//!
//! ```bash
//! cargo build                   # Rc handles (default)
//! cargo build --features sync   # Arc handles, sets are Send + Sync
//! ```

#[cfg(not(feature = "sync"))]
pub(crate) use alloc::rc::Rc as Shared;

#[cfg(feature = "sync")]
pub(crate) use alloc::sync::Arc as Shared;

/// Physical identity of two optional handles.
///
/// Two empty handles are identical; two non-empty handles are identical when
/// they point at the same allocation.
///
/// # Performance
/// O(1) - pointer comparison, never inspects elements
#[inline(always)]
pub(crate) fn same<T>(a: &Option<Shared<T>>, b: &Option<Shared<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Shared::ptr_eq(a, b),
        _ => false,
    }
}
