//! Rebuilding traversals: filter, partition, map, filter_map, plus size.
//!
//! Each traversal visits the left subtree, then the node's element, then
//! the right subtree, so callbacks observe elements in ascending order.
//! Results are reassembled with `join`/`concat`, and a node whose subtrees
//! and element all came back unchanged is reused as is.

use core::cmp::Ordering;

use crate::compare::Comparator;
use crate::shared::same;
use crate::tree::algebra::union;
use crate::tree::balance::{concat, join, max_elt, min_elt, remove_min_elt};
use crate::tree::node::Tree;
use crate::tree::update::add;

/// Number of elements.
///
/// # Performance
/// O(n) - recursion depth bounded by the tree height
pub(crate) fn cardinal<T>(t: &Tree<T>) -> usize {
    match t.as_deref() {
        None => 0,
        Some(n) => cardinal(&n.left) + 1 + cardinal(&n.right),
    }
}

/// Elements satisfying `pred`.
///
/// Returns `t` itself when every element is kept.
pub(crate) fn filter<T, F>(pred: &mut F, t: &Tree<T>) -> Tree<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let Some(n) = t.as_deref() else {
        return None;
    };
    let l = filter(pred, &n.left);
    let keep = pred(&n.value);
    let r = filter(pred, &n.right);

    if !keep {
        concat(&l, &r)
    } else if same(&l, &n.left) && same(&r, &n.right) {
        t.clone()
    } else {
        join(&l, n.value.clone(), &r)
    }
}

/// Split `t` into `(satisfying, not satisfying)`.
pub(crate) fn partition<T, F>(pred: &mut F, t: &Tree<T>) -> (Tree<T>, Tree<T>)
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let Some(n) = t.as_deref() else {
        return (None, None);
    };
    let (lt, lf) = partition(pred, &n.left);
    let keep = pred(&n.value);
    let (rt, rf) = partition(pred, &n.right);

    if keep {
        (join(&lt, n.value.clone(), &rt), concat(&lf, &rf))
    } else {
        (concat(&lt, &rt), join(&lf, n.value.clone(), &rf))
    }
}

/// Join `l`, `v`, `r` if `v` still separates them, otherwise fall back to
/// a union.
///
/// After `map`, the mapped halves are valid trees but `v` may no longer sit
/// strictly between them.
pub(crate) fn try_join<T, C>(cmp: &C, l: &Tree<T>, v: T, r: &Tree<T>) -> Tree<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let fits_left = max_elt(l).map_or(true, |m| cmp.compare(m, &v) == Ordering::Less);
    let fits_right = min_elt(r).map_or(true, |m| cmp.compare(&v, m) == Ordering::Less);

    if fits_left && fits_right {
        join(l, v, r)
    } else {
        union(cmp, l, &add(cmp, v, r))
    }
}

/// `concat` for halves whose relative order is not known.
pub(crate) fn try_concat<T, C>(cmp: &C, t1: &Tree<T>, t2: &Tree<T>) -> Tree<T>
where
    T: Clone,
    C: Comparator<T>,
{
    if t1.is_none() {
        return t2.clone();
    }
    match min_elt(t2) {
        None => t1.clone(),
        Some(m) => try_join(cmp, t1, m.clone(), &remove_min_elt(t2)),
    }
}

/// Apply `f` to every element.
///
/// A monotone `f` rebuilds the tree in one pass with `join`; when the
/// mapped values break the order, affected nodes are merged with `union`.
/// Returns `t` itself when `f` maps every element to an equal value.
pub(crate) fn map<T, C, F>(cmp: &C, f: &mut F, t: &Tree<T>) -> Tree<T>
where
    T: Clone + PartialEq,
    C: Comparator<T>,
    F: FnMut(&T) -> T,
{
    let Some(n) = t.as_deref() else {
        return None;
    };
    let l = map(cmp, f, &n.left);
    let v = f(&n.value);
    let r = map(cmp, f, &n.right);

    if same(&l, &n.left) && v == n.value && same(&r, &n.right) {
        t.clone()
    } else {
        try_join(cmp, &l, v, &r)
    }
}

/// Apply `f` to every element, dropping those mapped to `None`.
pub(crate) fn filter_map<T, C, F>(cmp: &C, f: &mut F, t: &Tree<T>) -> Tree<T>
where
    T: Clone + PartialEq,
    C: Comparator<T>,
    F: FnMut(&T) -> Option<T>,
{
    let Some(n) = t.as_deref() else {
        return None;
    };
    let l = filter_map(cmp, f, &n.left);
    let v = f(&n.value);
    let r = filter_map(cmp, f, &n.right);

    match v {
        Some(v) if same(&l, &n.left) && v == n.value && same(&r, &n.right) => t.clone(),
        Some(v) => try_join(cmp, &l, v, &r),
        None => try_concat(cmp, &l, &r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;
    use crate::tree::check::check;
    use crate::tree::iter::Iter;
    use alloc::vec::Vec;

    fn build(items: impl IntoIterator<Item = i32>) -> Tree<i32> {
        let mut t = None;
        for x in items {
            t = add(&Natural, x, &t);
        }
        t
    }

    fn to_vec(t: &Tree<i32>) -> Vec<i32> {
        Iter::new(t).copied().collect()
    }

    #[test]
    fn test_cardinal() {
        assert_eq!(cardinal::<i32>(&None), 0);
        assert_eq!(cardinal(&build([4])), 1);
        assert_eq!(cardinal(&build(0..1234)), 1234);
    }

    #[test]
    fn test_filter_visits_in_order() {
        let t = build([5, 3, 8, 1, 4, 7, 9, 2, 6]);
        let mut seen = Vec::new();
        let evens = filter(
            &mut |x: &i32| {
                seen.push(*x);
                x % 2 == 0
            },
            &t,
        );

        assert_eq!(seen, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(check(&Natural, &evens).is_ok());
        assert_eq!(to_vec(&evens), [2, 4, 6, 8]);
    }

    #[test]
    fn test_filter_keep_all_shares() {
        let t = build(0..100);
        assert!(same(&filter(&mut |_: &i32| true, &t), &t));
        assert!(filter(&mut |_: &i32| false, &t).is_none());
    }

    #[test]
    fn test_partition() {
        let t = build(0..300);
        let mut seen = Vec::new();
        let (small, large) = partition(
            &mut |x: &i32| {
                seen.push(*x);
                *x < 120
            },
            &t,
        );

        assert_eq!(seen, (0..300).collect::<Vec<_>>());
        assert!(check(&Natural, &small).is_ok());
        assert!(check(&Natural, &large).is_ok());
        assert_eq!(to_vec(&small), (0..120).collect::<Vec<_>>());
        assert_eq!(to_vec(&large), (120..300).collect::<Vec<_>>());
    }

    #[test]
    fn test_map_monotone() {
        let t = build(0..100);
        let doubled = map(&Natural, &mut |x: &i32| x * 2, &t);
        assert!(check(&Natural, &doubled).is_ok());
        assert_eq!(to_vec(&doubled), (0..200).step_by(2).collect::<Vec<_>>());
    }

    #[test]
    fn test_map_identity_shares() {
        let t = build(0..100);
        assert!(same(&map(&Natural, &mut |x: &i32| *x, &t), &t));
    }

    #[test]
    fn test_map_non_monotone() {
        let t = build(-50..50);

        // Folding negatives onto positives collapses duplicates
        let abs = map(&Natural, &mut |x: &i32| x.abs(), &t);
        assert!(check(&Natural, &abs).is_ok());
        assert_eq!(to_vec(&abs), (0..=50).collect::<Vec<_>>());

        // Reversal breaks every join
        let neg = map(&Natural, &mut |x: &i32| -x, &t);
        assert!(check(&Natural, &neg).is_ok());
        assert_eq!(to_vec(&neg), (-49..=50).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_map() {
        let t = build(0..100);
        let fm = filter_map(
            &Natural,
            &mut |x: &i32| if x % 3 == 0 { Some(100 - x) } else { None },
            &t,
        );
        assert!(check(&Natural, &fm).is_ok());

        let mut expected: Vec<i32> = (0..100).step_by(3).map(|x| 100 - x).collect();
        expected.sort();
        assert_eq!(to_vec(&fm), expected);
    }

    #[test]
    fn test_filter_map_identity_shares() {
        let t = build(0..64);
        assert!(same(&filter_map(&Natural, &mut |x: &i32| Some(*x), &t), &t));
    }
}
