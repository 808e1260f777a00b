//! Whole-set algebra: union, intersection, difference, disjointness,
//! inclusion and the lexicographic order over sets.
//!
//! Union, intersection and difference share one divide-and-conquer shape:
//! pick a pivot root, `split` the other tree around it, recurse on both
//! halves and glue the results back with `join` (pivot kept) or `concat`
//! (pivot dropped). For trees of size m <= n this costs O(m log(n/m + 1)).

use core::cmp::Ordering;

use crate::compare::Comparator;
use crate::shared::same;
use crate::tree::balance::{concat, join};
use crate::tree::iter::Iter;
use crate::tree::node::Tree;
use crate::tree::split::split;
use crate::tree::update::add;

/// Union of two trees.
///
/// The taller root is the pivot; a side of height 1 is inserted directly
/// with `add` instead of being split.
pub(crate) fn union<T, C>(cmp: &C, s1: &Tree<T>, s2: &Tree<T>) -> Tree<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let (Some(n1), Some(n2)) = (s1.as_deref(), s2.as_deref()) else {
        return if s1.is_none() { s2.clone() } else { s1.clone() };
    };

    if n1.height >= n2.height {
        if n2.height == 1 {
            return add(cmp, n2.value.clone(), s1);
        }
        let (l2, _, r2) = split(cmp, &n1.value, s2);
        join(
            &union(cmp, &n1.left, &l2),
            n1.value.clone(),
            &union(cmp, &n1.right, &r2),
        )
    } else {
        if n1.height == 1 {
            return add(cmp, n1.value.clone(), s2);
        }
        let (l1, _, r1) = split(cmp, &n2.value, s1);
        join(
            &union(cmp, &l1, &n2.left),
            n2.value.clone(),
            &union(cmp, &r1, &n2.right),
        )
    }
}

/// Intersection of two trees.
///
/// Keeps the elements of `s1`. Returns `s1` itself when every element of
/// `s1` is in `s2`.
pub(crate) fn inter<T, C>(cmp: &C, s1: &Tree<T>, s2: &Tree<T>) -> Tree<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let (Some(n1), Some(_)) = (s1.as_deref(), s2.as_deref()) else {
        return None;
    };

    let (l2, present, r2) = split(cmp, &n1.value, s2);
    let l = inter(cmp, &n1.left, &l2);
    let r = inter(cmp, &n1.right, &r2);

    if !present {
        concat(&l, &r)
    } else if same(&l, &n1.left) && same(&r, &n1.right) {
        s1.clone()
    } else {
        join(&l, n1.value.clone(), &r)
    }
}

/// Elements of `s1` not in `s2`.
///
/// Returns `s1` itself when no element of `s1` is in `s2`.
pub(crate) fn diff<T, C>(cmp: &C, s1: &Tree<T>, s2: &Tree<T>) -> Tree<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let Some(n1) = s1.as_deref() else {
        return None;
    };
    if s2.is_none() {
        return s1.clone();
    }

    let (l2, present, r2) = split(cmp, &n1.value, s2);
    let l = diff(cmp, &n1.left, &l2);
    let r = diff(cmp, &n1.right, &r2);

    if present {
        concat(&l, &r)
    } else if same(&l, &n1.left) && same(&r, &n1.right) {
        s1.clone()
    } else {
        join(&l, n1.value.clone(), &r)
    }
}

/// True when the two trees share no element.
///
/// Stops at the first common element without building the intersection.
pub(crate) fn disjoint<T, C>(cmp: &C, s1: &Tree<T>, s2: &Tree<T>) -> bool
where
    T: Clone,
    C: Comparator<T>,
{
    let (Some(n1), Some(_)) = (s1.as_deref(), s2.as_deref()) else {
        return true;
    };
    if same(s1, s2) {
        return false;
    }

    let (l2, present, r2) = split(cmp, &n1.value, s2);
    !present && disjoint(cmp, &n1.left, &l2) && disjoint(cmp, &n1.right, &r2)
}

/// True when every element of `s1` is in `s2`.
///
/// Never enumerates `s2`: each step compares a root of `s1` against a root
/// of `s2` and recurses on matching halves.
pub(crate) fn subset<T, C>(cmp: &C, s1: &Tree<T>, s2: &Tree<T>) -> bool
where
    C: Comparator<T>,
{
    match s1.as_deref() {
        None => true,
        Some(n1) => subset_parts(cmp, &n1.left, &n1.value, &n1.right, s2),
    }
}

/// `subset` for a tree given as a borrowed `(left, value, right)` view.
///
/// When the pivot of `s1` falls on one side of `s2`'s root, `s1` is cut
/// into "left half with pivot" and "right half". The cut halves only exist
/// as borrowed views here; no node is ever allocated for them.
fn subset_parts<T, C>(cmp: &C, l1: &Tree<T>, v1: &T, r1: &Tree<T>, s2: &Tree<T>) -> bool
where
    C: Comparator<T>,
{
    let Some(n2) = s2.as_deref() else {
        return false;
    };
    match cmp.compare(v1, &n2.value) {
        Ordering::Equal => subset(cmp, l1, &n2.left) && subset(cmp, r1, &n2.right),
        Ordering::Less => {
            subset_parts(cmp, l1, v1, &None, &n2.left) && subset(cmp, r1, s2)
        }
        Ordering::Greater => {
            subset_parts(cmp, &None, v1, r1, &n2.right) && subset(cmp, l1, s2)
        }
    }
}

/// Lexicographic comparison of the ascending enumerations of two trees.
///
/// Both sides are walked lazily in step; the first differing element
/// decides, and a proper prefix sorts first.
///
/// # Performance
/// O(k + log n) where k is the position of the first difference
pub(crate) fn compare<T, C>(cmp: &C, s1: &Tree<T>, s2: &Tree<T>) -> Ordering
where
    C: Comparator<T>,
{
    if same(s1, s2) {
        return Ordering::Equal;
    }

    let mut e1 = Iter::new(s1);
    let mut e2 = Iter::new(s2);
    loop {
        match (e1.next(), e2.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a), Some(b)) => match cmp.compare(a, b) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }
}

/// Set equality under the comparator.
#[inline]
pub(crate) fn equal<T, C>(cmp: &C, s1: &Tree<T>, s2: &Tree<T>) -> bool
where
    C: Comparator<T>,
{
    compare(cmp, s1, s2) == Ordering::Equal
}
