//! Persistent height-balanced tree core.
//!
//! Functions here work on bare [`Tree`](node::Tree) handles and take the
//! comparator explicitly; [`AvlSet`](crate::AvlSet) pairs a root with its
//! comparator and exposes them.
//!
//! # Module layout
//! - `node`: node type, `height`, `create`
//! - `balance`: `bal`, `join`, `merge`, `concat`, extreme elements
//! - `update`: `add`, `remove`, `find`
//! - `split`: `split`
//! - `algebra`: `union`, `inter`, `diff`, `subset`, `compare`
//! - `traverse`: `filter`, `partition`, `map`, `filter_map`, `cardinal`
//! - `search`: `find_first`, `find_last`
//! - `build`: `of_list`, `of_sorted_list`
//! - `iter`: lazy ascending, descending and range cursors
//! - `check`: invariant validation

pub(crate) mod algebra;
pub(crate) mod balance;
pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod iter;
pub(crate) mod node;
pub(crate) mod search;
pub(crate) mod split;
pub(crate) mod traverse;
pub(crate) mod update;

pub use iter::{Iter, Range, RevIter};
