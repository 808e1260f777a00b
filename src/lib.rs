//! # persistent-avl-set
//!
//! Persistent ordered set built on a height-balanced binary search tree.
//! Every operation returns a new set; unchanged subtrees are shared between
//! versions instead of copied.
//!
//! ## Features
//! - O(log n) add, remove, contains, split, join
//! - Whole-set algebra (union, intersection, difference) in
//!   O(m log(n/m + 1)) for sets of size m <= n
//! - O(1) clone, O(n) bulk construction from sorted input
//! - Pluggable three-way comparator
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```rust
//! use persistent_avl_set::AvlSet;
//!
//! let a: AvlSet<i32> = [1, 2, 3].into_iter().collect();
//! let b: AvlSet<i32> = [3, 4, 5].into_iter().collect();
//!
//! assert_eq!(a.union(&b).elements(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(a.inter(&b).elements(), vec![3]);
//! assert_eq!(a.diff(&b).elements(), vec![1, 2]);
//! ```

#![no_std]

extern crate alloc;

mod compare;
mod constants;
mod error;
mod set;
mod shared;
mod tree;

#[cfg(feature = "serde")]
mod serde_impl;

pub use compare::{Comparator, FnComparator, Natural, Reversed};
pub use constants::HEIGHT_TOLERANCE;
pub use error::SetError;
pub use set::AvlSet;
pub use tree::{Iter, Range, RevIter};
