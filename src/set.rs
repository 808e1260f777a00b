//! Public persistent set type.
//!
//! [`AvlSet`] pairs a tree root with the comparator that orders it. Every
//! operation leaves `self` untouched and returns a new set; the new set
//! shares all unchanged subtrees with the old one, so cloning is O(1) and
//! old versions stay valid for as long as someone holds them.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{BitAnd, BitOr, BitXor, Bound, RangeBounds, Sub};

use crate::compare::{Comparator, Natural};
use crate::error::SetError;
use crate::shared::same;
use crate::tree::node::{self, Tree};
use crate::tree::{algebra, balance, build, check, search, split, traverse, update};
use crate::tree::{Iter, Range, RevIter};

/// Persistent ordered set.
///
/// # Type Parameters
/// * `T` - Element type
/// * `C` - Comparator ordering the elements, [`Natural`] (`Ord`) by default
///
/// # Sharing
/// - `clone()` copies one pointer
/// - `add`/`remove` allocate O(log n) new nodes and share the rest
/// - an operation that changes nothing returns a set that is
///   [`ptr_eq`](Self::ptr_eq) to its input
///
/// Binary operations use the comparator of `self`; both operands are
/// expected to be ordered the same way.
///
/// # Example
/// ```rust
/// use persistent_avl_set::AvlSet;
///
/// let v1 = AvlSet::new().add(3).add(1).add(2);
/// let v2 = v1.remove(&2);
///
/// // Both versions remain usable
/// assert_eq!(v1.elements(), vec![1, 2, 3]);
/// assert_eq!(v2.elements(), vec![1, 3]);
/// ```
pub struct AvlSet<T, C = Natural> {
    root: Tree<T>,
    cmp: C,
}

impl<T: Ord> AvlSet<T> {
    /// Create an empty set ordered by `Ord`.
    ///
    /// # Performance
    /// O(1) - no allocation
    #[inline]
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// One-element set.
    pub fn singleton(x: T) -> Self {
        Self {
            root: node::singleton(x),
            cmp: Natural,
        }
    }
}

impl<T: Ord + Clone> AvlSet<T> {
    /// Build a set from arbitrary input.
    ///
    /// Duplicates are dropped; of several equal inputs the first one is kept.
    ///
    /// # Performance
    /// O(n log n) - sort, then O(n) balanced build
    ///
    /// # Example
    /// ```rust
    /// use persistent_avl_set::AvlSet;
    ///
    /// let set = AvlSet::of_list(vec![5, 1, 4, 1, 5]);
    /// assert_eq!(set.elements(), vec![1, 4, 5]);
    /// ```
    pub fn of_list(items: Vec<T>) -> Self {
        Self::of_list_by(items, Natural)
    }

    /// Build a set from strictly ascending input.
    ///
    /// # Note
    /// The order is not verified. Unsorted or duplicated input produces a set
    /// whose lookups are unreliable; use
    /// [`try_of_sorted_list`](Self::try_of_sorted_list) when the input is not
    /// trusted.
    ///
    /// # Performance
    /// O(n) - no comparisons
    pub fn of_sorted_list(items: Vec<T>) -> Self {
        Self::of_sorted_list_by(items, Natural)
    }

    /// Build a set from input that should be strictly ascending.
    ///
    /// # Errors
    /// [`SetError::Unsorted`] with the index of the first element that is not
    /// strictly greater than its predecessor.
    ///
    /// # Example
    /// ```rust
    /// use persistent_avl_set::{AvlSet, SetError};
    ///
    /// assert!(AvlSet::try_of_sorted_list(vec![1, 2, 3]).is_ok());
    /// assert_eq!(
    ///     AvlSet::try_of_sorted_list(vec![1, 3, 2]).unwrap_err(),
    ///     SetError::Unsorted { index: 2 }
    /// );
    /// ```
    pub fn try_of_sorted_list(items: Vec<T>) -> Result<Self, SetError> {
        Self::try_of_sorted_list_by(items, Natural)
    }
}

impl<T, C> AvlSet<T, C> {
    /// Create an empty set ordered by `cmp`.
    #[inline]
    pub fn with_comparator(cmp: C) -> Self {
        Self { root: None, cmp }
    }

    /// Build a set from strictly ascending input (under `cmp`), unchecked.
    pub fn of_sorted_list_by(items: Vec<T>, cmp: C) -> Self {
        Self {
            root: build::of_sorted(items),
            cmp,
        }
    }

    /// The comparator ordering this set.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// `true` if the set has no element.
    ///
    /// # Performance
    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of elements.
    ///
    /// # Performance
    /// O(n) - the size is not cached
    #[doc(alias = "len")]
    pub fn cardinal(&self) -> usize {
        traverse::cardinal(&self.root)
    }

    /// Height of the underlying tree (0 when empty).
    #[inline]
    pub fn height(&self) -> u32 {
        node::height(&self.root)
    }

    /// `true` when both sets are the same physical tree.
    ///
    /// Implies equality; the converse does not hold.
    ///
    /// # Example
    /// ```rust
    /// use persistent_avl_set::AvlSet;
    ///
    /// let s = AvlSet::of_list(vec![1, 2, 3]);
    /// assert!(s.add(2).ptr_eq(&s));
    /// assert!(!s.add(4).ptr_eq(&s));
    /// ```
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        same(&self.root, &other.root)
    }

    /// Smallest element.
    ///
    /// # Errors
    /// [`SetError::NotFound`] on the empty set
    pub fn min_elt(&self) -> Result<&T, SetError> {
        self.min_elt_opt().ok_or(SetError::NotFound)
    }

    /// Smallest element, or `None` on the empty set.
    pub fn min_elt_opt(&self) -> Option<&T> {
        balance::min_elt(&self.root)
    }

    /// Largest element.
    ///
    /// # Errors
    /// [`SetError::NotFound`] on the empty set
    pub fn max_elt(&self) -> Result<&T, SetError> {
        self.max_elt_opt().ok_or(SetError::NotFound)
    }

    /// Largest element, or `None` on the empty set.
    pub fn max_elt_opt(&self) -> Option<&T> {
        balance::max_elt(&self.root)
    }

    /// Some element of the set. Equal sets choose equal elements (the
    /// minimum).
    ///
    /// # Errors
    /// [`SetError::NotFound`] on the empty set
    pub fn choose(&self) -> Result<&T, SetError> {
        self.min_elt()
    }

    /// Like [`choose`](Self::choose), returning `None` on the empty set.
    pub fn choose_opt(&self) -> Option<&T> {
        self.min_elt_opt()
    }

    /// Ascending iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Descending iterator.
    pub fn rev_iter(&self) -> RevIter<'_, T> {
        RevIter::new(&self.root)
    }

    /// Fold over the elements in ascending order.
    ///
    /// # Example
    /// ```rust
    /// use persistent_avl_set::AvlSet;
    ///
    /// let s = AvlSet::of_list(vec![1, 2, 3, 4]);
    /// assert_eq!(s.fold(0, |acc, x| acc + x), 10);
    /// ```
    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, f)
    }

    /// `true` if `pred` holds for every element. Stops at the first failure.
    pub fn for_all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|x| pred(x))
    }

    /// `true` if `pred` holds for some element. Stops at the first success.
    pub fn exists<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|x| pred(x))
    }

    /// Smallest element satisfying a monotone predicate.
    ///
    /// `pred` must be false on a (possibly empty) prefix of the ascending
    /// order and true on the rest.
    ///
    /// # Errors
    /// [`SetError::NotFound`] when `pred` holds for no element
    ///
    /// # Performance
    /// O(log n) predicate calls
    ///
    /// # Example
    /// ```rust
    /// use persistent_avl_set::AvlSet;
    ///
    /// let s = AvlSet::of_list(vec![10, 20, 30]);
    /// assert_eq!(s.find_first(|x| *x > 15), Ok(&20));
    /// assert!(s.find_first(|x| *x > 30).is_err());
    /// ```
    pub fn find_first<F>(&self, pred: F) -> Result<&T, SetError>
    where
        F: FnMut(&T) -> bool,
    {
        self.find_first_opt(pred).ok_or(SetError::NotFound)
    }

    /// Like [`find_first`](Self::find_first), returning `None` on failure.
    pub fn find_first_opt<F>(&self, pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        search::find_first(pred, &self.root)
    }

    /// Largest element satisfying a monotone predicate.
    ///
    /// `pred` must be true on a (possibly empty) prefix of the ascending
    /// order and false on the rest.
    ///
    /// # Errors
    /// [`SetError::NotFound`] when `pred` holds for no element
    pub fn find_last<F>(&self, pred: F) -> Result<&T, SetError>
    where
        F: FnMut(&T) -> bool,
    {
        self.find_last_opt(pred).ok_or(SetError::NotFound)
    }

    /// Like [`find_last`](Self::find_last), returning `None` on failure.
    pub fn find_last_opt<F>(&self, pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        search::find_last(pred, &self.root)
    }

    /// Elements in ascending order.
    ///
    /// # Performance
    /// O(n) - iterative walk, no recursion
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, C: Comparator<T>> AvlSet<T, C> {
    /// Membership test.
    ///
    /// # Performance
    /// O(log n) - no allocation
    pub fn contains(&self, x: &T) -> bool {
        update::mem(&self.cmp, x, &self.root)
    }

    /// Stored element equal to `x`.
    ///
    /// Useful when the comparator looks at part of the element only.
    ///
    /// # Errors
    /// [`SetError::NotFound`] when no element equals `x`
    pub fn find(&self, x: &T) -> Result<&T, SetError> {
        self.find_opt(x).ok_or(SetError::NotFound)
    }

    /// Like [`find`](Self::find), returning `None` when absent.
    pub fn find_opt(&self, x: &T) -> Option<&T> {
        update::find(&self.cmp, x, &self.root)
    }

    /// Lexicographic comparison of the ascending enumerations.
    ///
    /// A proper prefix sorts first. Stops at the first difference.
    pub fn compare(&self, other: &Self) -> Ordering {
        algebra::compare(&self.cmp, &self.root, &other.root)
    }

    /// `true` when both sets hold equal elements.
    pub fn equal(&self, other: &Self) -> bool {
        algebra::equal(&self.cmp, &self.root, &other.root)
    }

    /// `true` when every element of `self` is in `other`.
    ///
    /// # Example
    /// ```rust
    /// use persistent_avl_set::AvlSet;
    ///
    /// let small = AvlSet::of_list(vec![2, 4]);
    /// let big = AvlSet::of_list(vec![1, 2, 3, 4]);
    /// assert!(small.subset(&big));
    /// assert!(!big.subset(&small));
    /// ```
    pub fn subset(&self, other: &Self) -> bool {
        algebra::subset(&self.cmp, &self.root, &other.root)
    }

    /// Ascending iterator over the elements inside `range`.
    ///
    /// # Example
    /// ```rust
    /// use persistent_avl_set::AvlSet;
    ///
    /// let s: AvlSet<u32> = (0..10).collect();
    /// let mid: Vec<u32> = s.range(3..=5).copied().collect();
    /// assert_eq!(mid, vec![3, 4, 5]);
    /// ```
    pub fn range<R>(&self, range: R) -> Range<'_, T, C>
    where
        T: Clone,
        R: RangeBounds<T>,
    {
        Range::new(
            &self.root,
            range.start_bound(),
            range.end_bound().cloned(),
            &self.cmp,
        )
    }

    /// Ascending iterator starting at the least element `>= x`.
    pub fn iter_from(&self, x: &T) -> Range<'_, T, C> {
        Range::new(&self.root, Bound::Included(x), Bound::Unbounded, &self.cmp)
    }

    /// Check every structural invariant.
    ///
    /// Always succeeds on sets built through this API; meant for tests and
    /// for sets built with the unchecked
    /// [`of_sorted_list`](AvlSet::of_sorted_list).
    ///
    /// # Errors
    /// - [`SetError::InvalidShape`] on a stale height or a balance violation
    /// - [`SetError::Unsorted`] when the elements are not strictly ascending
    pub fn validate(&self) -> Result<(), SetError> {
        check::check(&self.cmp, &self.root)
    }
}

impl<T: Clone, C: Comparator<T>> AvlSet<T, C> {
    /// Build a set ordered by `cmp` from arbitrary input.
    ///
    /// Of several inputs comparing equal the first one is kept.
    pub fn of_list_by(items: Vec<T>, cmp: C) -> Self {
        let root = build::of_list(&cmp, items);
        Self { root, cmp }
    }

    /// Checked [`of_sorted_list_by`](Self::of_sorted_list_by).
    ///
    /// # Errors
    /// [`SetError::Unsorted`] if `items` is not strictly ascending under `cmp`
    pub fn try_of_sorted_list_by(items: Vec<T>, cmp: C) -> Result<Self, SetError> {
        let root = build::try_of_sorted(&cmp, items)?;
        Ok(Self { root, cmp })
    }
}

impl<T: Clone, C: Comparator<T> + Clone> AvlSet<T, C> {
    #[inline]
    fn with_root(&self, root: Tree<T>) -> Self {
        Self {
            root,
            cmp: self.cmp.clone(),
        }
    }

    /// Set with `x` added.
    ///
    /// If an equal element is already present the set is returned unchanged
    /// (same tree, see [`ptr_eq`](Self::ptr_eq)) and the stored element is
    /// kept.
    ///
    /// # Performance
    /// O(log n)
    pub fn add(&self, x: T) -> Self {
        self.with_root(update::add(&self.cmp, x, &self.root))
    }

    /// Set with the element equal to `x` removed.
    ///
    /// Returns the same tree when `x` is absent.
    ///
    /// # Performance
    /// O(log n)
    pub fn remove(&self, x: &T) -> Self {
        self.with_root(update::remove(&self.cmp, x, &self.root))
    }

    /// Union of two sets.
    ///
    /// # Performance
    /// O(m log(n/m + 1)) for sizes m <= n
    pub fn union(&self, other: &Self) -> Self {
        tracing::trace!(h1 = self.height(), h2 = other.height(), "union");
        self.with_root(algebra::union(&self.cmp, &self.root, &other.root))
    }

    /// Elements of `self` also in `other`.
    ///
    /// Returns `self`'s tree unchanged when `self` is a subset of `other`.
    pub fn inter(&self, other: &Self) -> Self {
        tracing::trace!(h1 = self.height(), h2 = other.height(), "inter");
        self.with_root(algebra::inter(&self.cmp, &self.root, &other.root))
    }

    /// Elements of `self` not in `other`.
    ///
    /// Returns `self`'s tree unchanged when the sets are disjoint.
    pub fn diff(&self, other: &Self) -> Self {
        tracing::trace!(h1 = self.height(), h2 = other.height(), "diff");
        self.with_root(algebra::diff(&self.cmp, &self.root, &other.root))
    }

    /// Elements in exactly one of the two sets.
    pub fn symmetric_diff(&self, other: &Self) -> Self {
        self.diff(other).union(&other.diff(self))
    }

    /// `true` when the sets have no common element.
    pub fn disjoint(&self, other: &Self) -> bool {
        algebra::disjoint(&self.cmp, &self.root, &other.root)
    }

    /// Split around `x`.
    ///
    /// # Returns
    /// `(elements < x, x present, elements > x)`
    ///
    /// # Performance
    /// O(log n)
    ///
    /// # Example
    /// ```rust
    /// use persistent_avl_set::AvlSet;
    ///
    /// let s = AvlSet::of_list(vec![1, 2, 3, 4, 5]);
    /// let (lo, present, hi) = s.split(&3);
    /// assert_eq!(lo.elements(), vec![1, 2]);
    /// assert!(present);
    /// assert_eq!(hi.elements(), vec![4, 5]);
    /// ```
    pub fn split(&self, x: &T) -> (Self, bool, Self) {
        let (l, present, r) = split::split(&self.cmp, x, &self.root);
        (self.with_root(l), present, self.with_root(r))
    }

    /// Split into `(elements < x, elements >= x)`.
    pub fn split_at(&self, x: &T) -> (Self, Self) {
        let (l, _, r) = split::split(&self.cmp, x, &self.root);
        let r = match self.find_opt(x) {
            Some(stored) => balance::join(&None, stored.clone(), &r),
            None => r,
        };
        (self.with_root(l), self.with_root(r))
    }

    /// Set holding `left`, `x` and `right`.
    ///
    /// Intended for `left < x < right`, which costs O(|h(left) - h(right)|).
    /// Any other input is still accepted and merged with a union. The result
    /// uses `left`'s comparator.
    pub fn join(left: &Self, x: T, right: &Self) -> Self {
        left.with_root(traverse::try_join(&left.cmp, &left.root, x, &right.root))
    }

    /// Set holding the elements of both sets.
    ///
    /// O(log n) when every element of `left` precedes every element of
    /// `right`; falls back to a union otherwise.
    pub fn concat(left: &Self, right: &Self) -> Self {
        left.with_root(traverse::try_concat(&left.cmp, &left.root, &right.root))
    }

    /// Elements satisfying `pred`, which sees them in ascending order.
    ///
    /// Returns the same tree when every element is kept.
    pub fn filter<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.with_root(traverse::filter(&mut pred, &self.root))
    }

    /// `(elements satisfying pred, the others)`.
    pub fn partition<F>(&self, mut pred: F) -> (Self, Self)
    where
        F: FnMut(&T) -> bool,
    {
        let (t, f) = traverse::partition(&mut pred, &self.root);
        (self.with_root(t), self.with_root(f))
    }

    /// Image of the set under `f`, called in ascending order.
    ///
    /// `f` need not be monotone; colliding images are merged. Returns the
    /// same tree when `f` maps every element to an equal value.
    ///
    /// # Example
    /// ```rust
    /// use persistent_avl_set::AvlSet;
    ///
    /// let s = AvlSet::of_list(vec![-2, -1, 0, 1, 2]);
    /// assert_eq!(s.map(|x| x * x).elements(), vec![0, 1, 4]);
    /// ```
    pub fn map<F>(&self, mut f: F) -> Self
    where
        T: PartialEq,
        F: FnMut(&T) -> T,
    {
        self.with_root(traverse::map(&self.cmp, &mut f, &self.root))
    }

    /// Like [`map`](Self::map), dropping elements mapped to `None`.
    pub fn filter_map<F>(&self, mut f: F) -> Self
    where
        T: PartialEq,
        F: FnMut(&T) -> Option<T>,
    {
        self.with_root(traverse::filter_map(&self.cmp, &mut f, &self.root))
    }
}

impl<T, C: Clone> Clone for AvlSet<T, C> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for AvlSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Default> Default for AvlSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T>> PartialEq for AvlSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T, C: Comparator<T>> Eq for AvlSet<T, C> {}

impl<T, C: Comparator<T>> PartialOrd for AvlSet<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C: Comparator<T>> Ord for AvlSet<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// Hashes the ascending elements, then the count.
///
/// Agrees with `Eq` as long as elements the comparator calls equal also
/// hash equally.
impl<T: Hash, C> Hash for AvlSet<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut n = 0usize;
        for x in self.iter() {
            x.hash(state);
            n += 1;
        }
        n.hash(state);
    }
}

impl<T: Clone, C: Comparator<T> + Default> FromIterator<T> for AvlSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of_list_by(iter.into_iter().collect(), C::default())
    }
}

impl<T: Clone, C: Comparator<T>> Extend<T> for AvlSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.root = update::add(&self.cmp, x, &self.root);
        }
    }
}

impl<T: Ord + Clone, const N: usize> From<[T; N]> for AvlSet<T> {
    fn from(items: [T; N]) -> Self {
        Self::of_list(Vec::from(items))
    }
}

impl<'a, T, C> IntoIterator for &'a AvlSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone, C: Comparator<T> + Clone> BitOr<&AvlSet<T, C>> for &AvlSet<T, C> {
    type Output = AvlSet<T, C>;

    /// Union.
    fn bitor(self, rhs: &AvlSet<T, C>) -> AvlSet<T, C> {
        self.union(rhs)
    }
}

impl<T: Clone, C: Comparator<T> + Clone> BitAnd<&AvlSet<T, C>> for &AvlSet<T, C> {
    type Output = AvlSet<T, C>;

    /// Intersection.
    fn bitand(self, rhs: &AvlSet<T, C>) -> AvlSet<T, C> {
        self.inter(rhs)
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Sub<&AvlSet<T, C>> for &AvlSet<T, C> {
    type Output = AvlSet<T, C>;

    /// Difference.
    fn sub(self, rhs: &AvlSet<T, C>) -> AvlSet<T, C> {
        self.diff(rhs)
    }
}

impl<T: Clone, C: Comparator<T> + Clone> BitXor<&AvlSet<T, C>> for &AvlSet<T, C> {
    type Output = AvlSet<T, C>;

    /// Symmetric difference.
    fn bitxor(self, rhs: &AvlSet<T, C>) -> AvlSet<T, C> {
        self.symmetric_diff(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{FnComparator, Reversed};
    use alloc::format;
    use alloc::vec;

    fn set(items: &[i32]) -> AvlSet<i32> {
        AvlSet::of_list(items.to_vec())
    }

    #[test]
    fn test_new_is_empty() {
        let s: AvlSet<i32> = AvlSet::new();
        assert!(s.is_empty());
        assert_eq!(s.cardinal(), 0);
        assert_eq!(s.height(), 0);
        assert!(s.elements().is_empty());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_singleton() {
        let s = AvlSet::singleton(7);
        assert!(!s.is_empty());
        assert_eq!(s.cardinal(), 1);
        assert!(s.contains(&7));
        assert_eq!(s.elements(), [7]);
    }

    #[test]
    fn test_insert_scenario() {
        let mut s = AvlSet::new();
        for x in [5, 3, 8, 1, 4, 7, 9, 2, 6] {
            s = s.add(x);
        }
        assert_eq!(s.elements(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_add_is_persistent() {
        let v1 = set(&[1, 2, 3]);
        let v2 = v1.add(10);
        assert_eq!(v1.elements(), [1, 2, 3]);
        assert_eq!(v2.elements(), [1, 2, 3, 10]);
    }

    #[test]
    fn test_add_existing_is_ptr_eq() {
        let s = set(&[1, 2, 3, 4, 5, 6, 7]);
        assert!(s.add(4).ptr_eq(&s));
        assert!(s.remove(&100).ptr_eq(&s));
        assert!(!s.add(100).ptr_eq(&s));
    }

    #[test]
    fn test_remove() {
        let s = set(&[1, 2, 3]);
        assert_eq!(s.remove(&2).elements(), [1, 3]);
        assert!(s.remove(&1).remove(&2).remove(&3).is_empty());
    }

    #[test]
    fn test_min_max_choose() {
        let s = set(&[4, 2, 9]);
        assert_eq!(s.min_elt(), Ok(&2));
        assert_eq!(s.max_elt(), Ok(&9));
        assert_eq!(s.choose(), Ok(&2));

        let empty: AvlSet<i32> = AvlSet::new();
        assert_eq!(empty.min_elt(), Err(SetError::NotFound));
        assert_eq!(empty.max_elt(), Err(SetError::NotFound));
        assert_eq!(empty.choose(), Err(SetError::NotFound));
        assert_eq!(empty.min_elt_opt(), None);
        assert_eq!(empty.max_elt_opt(), None);
        assert_eq!(empty.choose_opt(), None);
    }

    #[test]
    fn test_choose_equal_sets() {
        let a = AvlSet::of_list((0..100).collect());
        let b = AvlSet::of_list((0..100).rev().collect());
        assert_eq!(a.choose(), b.choose());
    }

    #[test]
    fn test_find_variants() {
        let s = set(&[10, 20, 30, 40]);
        assert_eq!(s.find(&20), Ok(&20));
        assert_eq!(s.find(&25), Err(SetError::NotFound));
        assert_eq!(s.find_opt(&25), None);

        assert_eq!(s.find_first(|x| *x >= 25), Ok(&30));
        assert_eq!(s.find_first_opt(|x| *x >= 50), None);
        assert_eq!(s.find_last(|x| *x <= 25), Ok(&20));
        assert_eq!(s.find_last(|x| *x < 10), Err(SetError::NotFound));
    }

    #[test]
    fn test_algebra_scenario() {
        let a = set(&[1, 2, 3]);
        let b = set(&[3, 4, 5]);

        assert_eq!(a.union(&b).elements(), [1, 2, 3, 4, 5]);
        assert_eq!(a.inter(&b).elements(), [3]);
        assert_eq!(a.diff(&b).elements(), [1, 2]);
        assert_eq!(a.symmetric_diff(&b).elements(), [1, 2, 4, 5]);
        assert!(!a.disjoint(&b));
        assert!(a.disjoint(&set(&[7, 8])));
    }

    #[test]
    fn test_operators() {
        let a = set(&[1, 2, 3]);
        let b = set(&[3, 4, 5]);

        assert_eq!(&a | &b, a.union(&b));
        assert_eq!(&a & &b, a.inter(&b));
        assert_eq!(&a - &b, a.diff(&b));
        assert_eq!((&a ^ &b).elements(), [1, 2, 4, 5]);
    }

    #[test]
    fn test_split_and_split_at() {
        let s: AvlSet<i32> = (0..20).collect();

        let (lo, present, hi) = s.split(&10);
        assert!(present);
        assert_eq!(lo.elements(), (0..10).collect::<Vec<_>>());
        assert_eq!(hi.elements(), (11..20).collect::<Vec<_>>());

        let (lo, hi) = s.split_at(&10);
        assert_eq!(lo.elements(), (0..10).collect::<Vec<_>>());
        assert_eq!(hi.elements(), (10..20).collect::<Vec<_>>());
        assert!(hi.validate().is_ok());

        let (lo, hi) = s.split_at(&100);
        assert_eq!(lo, s);
        assert!(hi.is_empty());
    }

    #[test]
    fn test_join_and_concat() {
        let lo = set(&[1, 2, 3]);
        let hi = set(&[7, 8, 9]);

        let j = AvlSet::join(&lo, 5, &hi);
        assert_eq!(j.elements(), [1, 2, 3, 5, 7, 8, 9]);
        assert!(j.validate().is_ok());

        let c = AvlSet::concat(&lo, &hi);
        assert_eq!(c.elements(), [1, 2, 3, 7, 8, 9]);

        // Out-of-order input falls back to union
        let j = AvlSet::join(&hi, 5, &lo);
        assert_eq!(j.elements(), [1, 2, 3, 5, 7, 8, 9]);
        assert!(j.validate().is_ok());

        let c = AvlSet::concat(&hi, &set(&[0, 8, 20]));
        assert_eq!(c.elements(), [0, 7, 8, 9, 20]);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_subset_and_compare() {
        let a = set(&[1, 2]);
        let b = set(&[1, 2, 3]);
        let c = set(&[1, 3]);

        assert!(a.subset(&b));
        assert!(!b.subset(&a));
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(c.compare(&b), Ordering::Greater);
        assert!(a < b);
        assert!(c > b);
        assert!(b.equal(&set(&[3, 2, 1])));
    }

    #[test]
    fn test_iteration() {
        let s = set(&[3, 1, 2, 5, 4]);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert_eq!(s.rev_iter().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
        assert_eq!(s.iter_from(&3).copied().collect::<Vec<_>>(), [3, 4, 5]);
        assert_eq!(s.range(2..4).copied().collect::<Vec<_>>(), [2, 3]);
        assert_eq!(s.range(..=2).copied().collect::<Vec<_>>(), [1, 2]);

        let mut seen = Vec::new();
        for x in &s {
            seen.push(*x);
        }
        assert_eq!(seen, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fold_for_all_exists() {
        let s = set(&[1, 2, 3, 4]);
        let order = s.fold(Vec::new(), |mut acc, x| {
            acc.push(*x);
            acc
        });
        assert_eq!(order, [1, 2, 3, 4]);
        assert!(s.for_all(|x| *x > 0));
        assert!(!s.for_all(|x| *x > 1));
        assert!(s.exists(|x| *x == 3));
        assert!(!s.exists(|x| *x == 9));

        let empty: AvlSet<i32> = AvlSet::new();
        assert!(empty.for_all(|_| false));
        assert!(!empty.exists(|_| true));
    }

    #[test]
    fn test_filter_partition_map() {
        let s: AvlSet<i32> = (0..10).collect();

        assert_eq!(s.filter(|x| x % 3 == 0).elements(), [0, 3, 6, 9]);
        assert!(s.filter(|_| true).ptr_eq(&s));

        let (even, odd) = s.partition(|x| x % 2 == 0);
        assert_eq!(even.elements(), [0, 2, 4, 6, 8]);
        assert_eq!(odd.elements(), [1, 3, 5, 7, 9]);

        assert_eq!(s.map(|x| x / 2).elements(), [0, 1, 2, 3, 4]);
        assert!(s.map(|x| *x).ptr_eq(&s));
        assert_eq!(
            s.filter_map(|x| (x % 2 == 1).then(|| 10 - x)).elements(),
            [1, 3, 5, 7, 9]
        );
    }

    #[test]
    fn test_reversed_comparator() {
        let s = AvlSet::of_list_by(vec![1, 5, 3], Reversed);
        assert_eq!(s.elements(), [5, 3, 1]);
        assert_eq!(s.min_elt(), Ok(&5));
        assert!(s.contains(&3));
        assert!(s.validate().is_ok());

        let t = s.add(4).remove(&5);
        assert_eq!(t.elements(), [4, 3, 1]);
    }

    #[test]
    fn test_fn_comparator_keeps_first() {
        let by_len = FnComparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        let s = AvlSet::of_list_by(vec!["bb", "a", "cc", "ddd", "e"], by_len);
        assert_eq!(s.elements(), ["a", "bb", "ddd"]);
        assert_eq!(s.find(&"xy"), Ok(&"bb"));
    }

    #[test]
    fn test_sorted_constructors() {
        let s = AvlSet::of_sorted_list((0..1000).collect());
        assert!(s.validate().is_ok());
        assert_eq!(s.cardinal(), 1000);

        assert!(AvlSet::try_of_sorted_list(vec![1, 2, 3]).is_ok());
        assert_eq!(
            AvlSet::try_of_sorted_list(vec![1, 1]).unwrap_err(),
            SetError::Unsorted { index: 1 }
        );

        // Unchecked build of unsorted input is caught by validate
        let bad = AvlSet::of_sorted_list(vec![2, 1, 3]);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_std_traits() {
        let s: AvlSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{s:?}"), "{1, 2, 3}");
        assert_eq!(s, AvlSet::from([1, 2, 3]));
        assert_eq!(AvlSet::<i32>::default(), AvlSet::new());

        let mut e = s.clone();
        e.extend([0, 3, 4]);
        assert_eq!(e.elements(), [0, 1, 2, 3, 4]);
        assert_eq!(s.elements(), [1, 2, 3]);
        assert!(s.clone().ptr_eq(&s));
    }

    #[cfg(feature = "sync")]
    #[test]
    fn test_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<AvlSet<i32>>();
    }
}
