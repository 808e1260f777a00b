//! Three-way comparators that order set elements.

use core::cmp::Ordering;

/// Total order over set elements.
///
/// Every set carries one comparator and uses it for all lookups, insertions
/// and set algebra. Binary operations (union, inter, diff, ...) use the
/// comparator of the left operand; both operands are expected to be ordered
/// the same way.
///
/// The order must be total and consistent: `compare(a, b) == Equal` means
/// the set treats `a` and `b` as the same element.
pub trait Comparator<T: ?Sized> {
    /// Compare two elements.
    ///
    /// # Returns
    /// `Less`, `Equal` or `Greater` as `a` sorts before, with, or after `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Ascending order given by the element's `Ord` implementation.
///
/// # Example
/// ```rust
/// use persistent_avl_set::{Comparator, Natural};
/// use core::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order: the reverse of the element's `Ord` implementation.
///
/// # Example
/// ```rust
/// use persistent_avl_set::{AvlSet, Reversed};
///
/// let set = AvlSet::of_list_by(vec![1, 3, 2], Reversed);
/// assert_eq!(set.elements(), vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed;

impl<T: Ord + ?Sized> Comparator<T> for Reversed {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Comparator backed by a closure or function pointer.
///
/// # Example
/// ```rust
/// use persistent_avl_set::{AvlSet, FnComparator};
///
/// // Case-insensitive set of words; the first spelling inserted is kept.
/// let by_lower = FnComparator(|a: &&str, b: &&str| {
///     a.to_lowercase().cmp(&b.to_lowercase())
/// });
/// let words = AvlSet::of_list_by(vec!["b", "A", "a", "B"], by_lower);
/// assert_eq!(words.elements(), vec!["A", "b"]);
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> core::fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FnComparator(..)")
    }
}
