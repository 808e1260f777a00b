//! Bulk construction from sequences.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::compare::Comparator;
use crate::constants::SMALL_LIST_LEN;
use crate::error::{invalid_shape, SetError};
use crate::tree::node::{create, Tree};
use crate::tree::update::add;

/// Build a perfectly balanced tree from the first `n` items of `items`.
///
/// The left half gets `n / 2` elements, the right half the rest minus the
/// root, so sibling heights differ by at most one.
fn build<T, I>(n: usize, items: &mut I) -> Tree<T>
where
    I: Iterator<Item = T>,
{
    if n == 0 {
        return None;
    }
    let nl = n / 2;
    let left = build(nl, items);
    let Some(value) = items.next() else {
        invalid_shape("of_sorted_list: input shorter than its length");
    };
    let right = build(n - nl - 1, items);
    create(left, value, right)
}

/// Tree holding exactly `items`, which must be strictly ascending.
///
/// Order is not checked; see [`try_of_sorted`] for the checked variant.
///
/// # Performance
/// O(n) - one allocation per element, no comparisons
pub(crate) fn of_sorted<T>(items: Vec<T>) -> Tree<T> {
    tracing::trace!(len = items.len(), "of_sorted_list");
    let n = items.len();
    build(n, &mut items.into_iter())
}

/// Checked [`of_sorted`].
///
/// # Errors
/// [`SetError::Unsorted`] with the position of the first element that is
/// not strictly greater than its predecessor.
pub(crate) fn try_of_sorted<T, C>(cmp: &C, items: Vec<T>) -> Result<Tree<T>, SetError>
where
    C: Comparator<T>,
{
    if let Some(i) = items
        .windows(2)
        .position(|w| cmp.compare(&w[0], &w[1]) != Ordering::Less)
    {
        return Err(SetError::Unsorted { index: i + 1 });
    }
    Ok(of_sorted(items))
}

/// Tree holding the distinct elements of `items`.
///
/// When several inputs compare equal, the first one in input order is kept.
///
/// # Algorithm
/// - Up to `SMALL_LIST_LEN` elements: repeated `add`
/// - Otherwise: stable sort, drop later duplicates, balanced build
///
/// # Performance
/// O(n log n)
pub(crate) fn of_list<T, C>(cmp: &C, mut items: Vec<T>) -> Tree<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let len = items.len();

    if len <= SMALL_LIST_LEN {
        let mut t = None;
        for x in items {
            t = add(cmp, x, &t);
        }
        return t;
    }

    items.sort_by(|a, b| cmp.compare(a, b));
    items.dedup_by(|later, kept| cmp.compare(later, kept) == Ordering::Equal);
    tracing::trace!(len, unique = items.len(), "of_list");
    of_sorted(items)
}
