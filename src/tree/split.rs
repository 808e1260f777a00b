//! Splitting a tree around a pivot.

use core::cmp::Ordering;

use crate::compare::Comparator;
use crate::tree::balance::join;
use crate::tree::node::Tree;

/// Split `t` around `x`.
///
/// # Returns
/// `(less, present, greater)` where `less` holds every element < `x`,
/// `greater` every element > `x`, and `present` tells whether an element
/// equal to `x` was in `t`
///
/// # Algorithm
/// Walk down to `x`'s position; on the way back up, `join` each partial
/// result with the untouched sibling subtree and the node's element.
///
/// # Performance
/// O(log n)
pub(crate) fn split<T, C>(cmp: &C, x: &T, t: &Tree<T>) -> (Tree<T>, bool, Tree<T>)
where
    T: Clone,
    C: Comparator<T>,
{
    let Some(n) = t.as_deref() else {
        return (None, false, None);
    };
    match cmp.compare(x, &n.value) {
        Ordering::Equal => (n.left.clone(), true, n.right.clone()),
        Ordering::Less => {
            let (ll, present, rl) = split(cmp, x, &n.left);
            (ll, present, join(&rl, n.value.clone(), &n.right))
        }
        Ordering::Greater => {
            let (lr, present, rr) = split(cmp, x, &n.right);
            (join(&n.left, n.value.clone(), &lr), present, rr)
        }
    }
}
