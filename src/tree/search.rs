//! Searches driven by a monotone predicate instead of a probe element.

use crate::tree::node::Tree;

/// Smallest element for which `pred` holds.
///
/// `pred` must be monotonically increasing over the ascending order: false
/// on some prefix of the set, true on the rest.
///
/// # Performance
/// O(log n) - one root-to-leaf walk, `pred` called once per level
pub(crate) fn find_first<'a, T, F>(mut pred: F, t: &'a Tree<T>) -> Option<&'a T>
where
    F: FnMut(&T) -> bool,
{
    let mut found = None;
    let mut node = t.as_deref();
    while let Some(n) = node {
        if pred(&n.value) {
            found = Some(&n.value);
            node = n.left.as_deref();
        } else {
            node = n.right.as_deref();
        }
    }
    found
}

/// Largest element for which `pred` holds.
///
/// `pred` must be monotonically decreasing over the ascending order: true
/// on some prefix of the set, false on the rest.
///
/// # Performance
/// O(log n)
pub(crate) fn find_last<'a, T, F>(mut pred: F, t: &'a Tree<T>) -> Option<&'a T>
where
    F: FnMut(&T) -> bool,
{
    let mut found = None;
    let mut node = t.as_deref();
    while let Some(n) = node {
        if pred(&n.value) {
            found = Some(&n.value);
            node = n.right.as_deref();
        } else {
            node = n.left.as_deref();
        }
    }
    found
}
