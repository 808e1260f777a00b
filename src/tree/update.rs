//! Point operations: insertion, deletion, membership and exact lookup.

use core::cmp::Ordering;

use crate::compare::Comparator;
use crate::shared::same;
use crate::tree::balance::{bal, merge};
use crate::tree::node::{singleton, Tree};

/// Insert `x` into `t`.
///
/// Walks down comparing `x` against each node, rebuilds the path with `bal`.
///
/// # Returns
/// - A new tree containing `x` if it was absent
/// - `t` itself (same handle) if an equal element already exists; the
///   stored element is kept, not replaced
///
/// # Performance
/// O(log n)
pub(crate) fn add<T, C>(cmp: &C, x: T, t: &Tree<T>) -> Tree<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let Some(n) = t.as_deref() else {
        return singleton(x);
    };
    match cmp.compare(&x, &n.value) {
        Ordering::Equal => t.clone(),
        Ordering::Less => {
            let l = add(cmp, x, &n.left);
            if same(&l, &n.left) {
                t.clone()
            } else {
                bal(l, n.value.clone(), n.right.clone())
            }
        }
        Ordering::Greater => {
            let r = add(cmp, x, &n.right);
            if same(&r, &n.right) {
                t.clone()
            } else {
                bal(n.left.clone(), n.value.clone(), r)
            }
        }
    }
}

/// Remove the element equal to `x` from `t`.
///
/// The removed node is replaced by the `merge` of its two children.
///
/// # Returns
/// `t` itself (same handle) when no element equals `x`
///
/// # Performance
/// O(log n)
pub(crate) fn remove<T, C>(cmp: &C, x: &T, t: &Tree<T>) -> Tree<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let Some(n) = t.as_deref() else {
        return None;
    };
    match cmp.compare(x, &n.value) {
        Ordering::Equal => merge(&n.left, &n.right),
        Ordering::Less => {
            let l = remove(cmp, x, &n.left);
            if same(&l, &n.left) {
                t.clone()
            } else {
                bal(l, n.value.clone(), n.right.clone())
            }
        }
        Ordering::Greater => {
            let r = remove(cmp, x, &n.right);
            if same(&r, &n.right) {
                t.clone()
            } else {
                bal(n.left.clone(), n.value.clone(), r)
            }
        }
    }
}

/// Stored element equal to `x`, if any.
///
/// # Performance
/// O(log n) - iterative descent, no allocation
pub(crate) fn find<'a, T, C>(cmp: &C, x: &T, t: &'a Tree<T>) -> Option<&'a T>
where
    C: Comparator<T>,
{
    let mut node = t.as_deref();
    while let Some(n) = node {
        node = match cmp.compare(x, &n.value) {
            Ordering::Equal => return Some(&n.value),
            Ordering::Less => n.left.as_deref(),
            Ordering::Greater => n.right.as_deref(),
        };
    }
    None
}

/// Membership test.
#[inline]
pub(crate) fn mem<T, C>(cmp: &C, x: &T, t: &Tree<T>) -> bool
where
    C: Comparator<T>,
{
    find(cmp, x, t).is_some()
}
