//! Rebalancing primitive and the combinators built on it.
//!
//! `bal` fixes one unit of imbalance with a single or double rotation.
//! `join` and `concat` glue trees of arbitrary relative height by walking
//! down the taller side and calling `bal` on the way back up.

use crate::constants::{BAL_PRECONDITION, HEIGHT_TOLERANCE};
use crate::error::invalid_shape;
use crate::tree::node::{create, height, singleton, Tree};

/// Rebalance `left`, `value`, `right` into one node.
///
/// # Preconditions
/// - `left` and `right` are balanced trees
/// - every element of `left` < `value` < every element of `right`
/// - their heights differ by at most `BAL_PRECONDITION`
///
/// # Algorithm
/// - Left taller by more than `HEIGHT_TOLERANCE`: single right rotation when
///   the left child's left subtree is at least as tall as its right subtree,
///   left-right double rotation otherwise
/// - Right taller by more than `HEIGHT_TOLERANCE`: mirror image
/// - Otherwise: plain `create`
///
/// # Panics
/// With an "invalid tree shape" message if the precondition is violated.
///
/// # Performance
/// O(1) - at most three allocations
pub(crate) fn bal<T: Clone>(left: Tree<T>, value: T, right: Tree<T>) -> Tree<T> {
    let hl = height(&left);
    let hr = height(&right);

    if hl > hr + BAL_PRECONDITION || hr > hl + BAL_PRECONDITION {
        invalid_shape("bal: height difference exceeds precondition");
    }

    if hl > hr + HEIGHT_TOLERANCE {
        let Some(ln) = left.as_deref() else {
            invalid_shape("bal: empty left subtree");
        };
        if height(&ln.left) >= height(&ln.right) {
            create(
                ln.left.clone(),
                ln.value.clone(),
                create(ln.right.clone(), value, right),
            )
        } else {
            let Some(lrn) = ln.right.as_deref() else {
                invalid_shape("bal: empty left-right subtree");
            };
            create(
                create(ln.left.clone(), ln.value.clone(), lrn.left.clone()),
                lrn.value.clone(),
                create(lrn.right.clone(), value, right),
            )
        }
    } else if hr > hl + HEIGHT_TOLERANCE {
        let Some(rn) = right.as_deref() else {
            invalid_shape("bal: empty right subtree");
        };
        if height(&rn.right) >= height(&rn.left) {
            create(
                create(left, value, rn.left.clone()),
                rn.value.clone(),
                rn.right.clone(),
            )
        } else {
            let Some(rln) = rn.left.as_deref() else {
                invalid_shape("bal: empty right-left subtree");
            };
            create(
                create(left, value, rln.left.clone()),
                rln.value.clone(),
                create(rln.right.clone(), rn.value.clone(), rn.right.clone()),
            )
        }
    } else {
        create(left, value, right)
    }
}

/// Smallest element of a tree.
///
/// # Performance
/// O(log n) - follows the left spine
pub(crate) fn min_elt<T>(t: &Tree<T>) -> Option<&T> {
    let mut node = t.as_deref()?;
    while let Some(l) = node.left.as_deref() {
        node = l;
    }
    Some(&node.value)
}

/// Largest element of a tree.
///
/// # Performance
/// O(log n) - follows the right spine
pub(crate) fn max_elt<T>(t: &Tree<T>) -> Option<&T> {
    let mut node = t.as_deref()?;
    while let Some(r) = node.right.as_deref() {
        node = r;
    }
    Some(&node.value)
}

/// Tree without its smallest element.
///
/// # Panics
/// On the empty tree; callers check for emptiness first.
pub(crate) fn remove_min_elt<T: Clone>(t: &Tree<T>) -> Tree<T> {
    let Some(n) = t.as_deref() else {
        invalid_shape("remove_min_elt: empty tree");
    };
    if n.left.is_none() {
        n.right.clone()
    } else {
        bal(remove_min_elt(&n.left), n.value.clone(), n.right.clone())
    }
}

/// Concatenate two trees whose heights differ by at most `HEIGHT_TOLERANCE`.
///
/// Every element of `t1` must precede every element of `t2`. The minimum of
/// `t2` becomes the new root.
///
/// # Performance
/// O(log n)
pub(crate) fn merge<T: Clone>(t1: &Tree<T>, t2: &Tree<T>) -> Tree<T> {
    if t1.is_none() {
        return t2.clone();
    }
    match min_elt(t2) {
        None => t1.clone(),
        Some(m) => bal(t1.clone(), m.clone(), remove_min_elt(t2)),
    }
}

/// Insert `value` below every element of `t`.
fn add_min_element<T: Clone>(value: T, t: &Tree<T>) -> Tree<T> {
    match t.as_deref() {
        None => singleton(value),
        Some(n) => bal(add_min_element(value, &n.left), n.value.clone(), n.right.clone()),
    }
}

/// Insert `value` above every element of `t`.
fn add_max_element<T: Clone>(value: T, t: &Tree<T>) -> Tree<T> {
    match t.as_deref() {
        None => singleton(value),
        Some(n) => bal(n.left.clone(), n.value.clone(), add_max_element(value, &n.right)),
    }
}

/// Join `left`, `value`, `right` with no constraint on relative heights.
///
/// Every element of `left` < `value` < every element of `right`.
///
/// # Algorithm
/// 1. One side empty: `value` becomes the extreme element of the other side
/// 2. One side taller by more than `HEIGHT_TOLERANCE`: recurse into the inner
///    spine of the taller side, rebalance on the way back up
/// 3. Otherwise: `create`
///
/// # Performance
/// O(|height(left) - height(right)| + 1)
pub(crate) fn join<T: Clone>(left: &Tree<T>, value: T, right: &Tree<T>) -> Tree<T> {
    match (left.as_deref(), right.as_deref()) {
        (None, _) => add_min_element(value, right),
        (_, None) => add_max_element(value, left),
        (Some(ln), Some(rn)) => {
            if ln.height > rn.height + HEIGHT_TOLERANCE {
                bal(
                    ln.left.clone(),
                    ln.value.clone(),
                    join(&ln.right, value, right),
                )
            } else if rn.height > ln.height + HEIGHT_TOLERANCE {
                bal(join(left, value, &rn.left), rn.value.clone(), rn.right.clone())
            } else {
                create(left.clone(), value, right.clone())
            }
        }
    }
}

/// Concatenate two trees of arbitrary heights.
///
/// Every element of `t1` must precede every element of `t2`.
///
/// # Performance
/// O(log n)
pub(crate) fn concat<T: Clone>(t1: &Tree<T>, t2: &Tree<T>) -> Tree<T> {
    if t1.is_none() {
        return t2.clone();
    }
    match min_elt(t2) {
        None => t1.clone(),
        Some(m) => join(t1, m.clone(), &remove_min_elt(t2)),
    }
}
