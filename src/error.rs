//! Error type for set lookups and shape checks.

use alloc::string::String;

/// Errors reported by [`AvlSet`](crate::AvlSet).
///
/// `NotFound` is the only error callers are expected to handle. The other two
/// variants describe broken invariants: they are returned by
/// [`AvlSet::validate`](crate::AvlSet::validate) and by
/// [`AvlSet::try_of_sorted_list`](crate::AvlSet::try_of_sorted_list), and
/// the balancing core panics with the `InvalidShape` message if it is ever
/// handed a tree it cannot rebalance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    /// Lookup on an empty set, or no element matched.
    #[error("element not found")]
    NotFound,

    /// A node violates the height or balance invariants.
    #[error("invalid tree shape: {reason}")]
    InvalidShape {
        /// Human readable description of the violation.
        reason: String,
    },

    /// Elements are not strictly ascending at the given in-order position.
    #[error("elements not strictly ascending at index {index}")]
    Unsorted {
        /// In-order position of the first offending element.
        index: usize,
    },
}

impl SetError {
    pub(crate) fn invalid_shape(reason: &str) -> Self {
        SetError::InvalidShape {
            reason: String::from(reason),
        }
    }
}

/// Abort on a broken balancing precondition.
///
/// Only reachable through a bug in the tree core itself.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn invalid_shape(reason: &str) -> ! {
    panic!("{}", SetError::invalid_shape(reason))
}
