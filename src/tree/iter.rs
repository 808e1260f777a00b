//! Lazy in-order cursors over a tree.
//!
//! Every cursor keeps an explicit stack of the nodes whose element has not
//! been yielded yet, so a step never recurses and the stack never holds more
//! than `height` entries.
//!
//! # Performance
//! - O(log n) setup (one spine walk)
//! - O(1) amortized per element
//! - Cursors borrow the tree; the set they came from may be dropped only
//!   after the cursor is

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::iter::FusedIterator;
use core::ops::Bound;

use crate::compare::Comparator;
use crate::tree::node::{height, Node, Tree};

/// Push `t` and its left spine onto `stack`.
#[inline]
fn push_left_spine<'a, T>(stack: &mut Vec<&'a Node<T>>, t: &'a Tree<T>) {
    let mut node = t.as_deref();
    while let Some(n) = node {
        stack.push(n);
        node = n.left.as_deref();
    }
}

/// Push `t` and its right spine onto `stack`.
#[inline]
fn push_right_spine<'a, T>(stack: &mut Vec<&'a Node<T>>, t: &'a Tree<T>) {
    let mut node = t.as_deref();
    while let Some(n) = node {
        stack.push(n);
        node = n.right.as_deref();
    }
}

/// Iterator over the elements of a set in ascending order.
///
/// # Example
/// ```rust
/// use persistent_avl_set::AvlSet;
///
/// let set: AvlSet<u32> = [30, 10, 20].into_iter().collect();
/// let items: Vec<u32> = set.iter().copied().collect();
/// assert_eq!(items, vec![10, 20, 30]);
/// ```
pub struct Iter<'a, T> {
    /// Nodes still to yield; the top is the next element
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Create a cursor positioned at the smallest element.
    ///
    /// # Performance
    /// O(log n) - walks the left spine once
    pub(crate) fn new(root: &'a Tree<T>) -> Self {
        let mut stack = Vec::with_capacity(height(root) as usize);
        push_left_spine(&mut stack, root);
        Self { stack }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        push_left_spine(&mut self.stack, &node.right);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// Iterator over the elements of a set in descending order.
pub struct RevIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> RevIter<'a, T> {
    /// Create a cursor positioned at the largest element.
    pub(crate) fn new(root: &'a Tree<T>) -> Self {
        let mut stack = Vec::with_capacity(height(root) as usize);
        push_right_spine(&mut stack, root);
        Self { stack }
    }
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        push_right_spine(&mut self.stack, &node.left);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<T> FusedIterator for RevIter<'_, T> {}

impl<T> Clone for RevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// Iterator over the elements of a set that fall inside a range, ascending.
///
/// # Algorithm
/// 1. Descend from the root towards the start bound, pushing every node
///    whose element is inside the bound (those are exactly the ancestors
///    still to be visited)
/// 2. Iterate like [`Iter`], checking the end bound on each element
///
/// # Performance
/// - O(log n) initial setup to find the start
/// - O(1) amortized per element, plus one comparison for the end bound
///
/// # Example
/// ```rust
/// use persistent_avl_set::AvlSet;
///
/// let set: AvlSet<u32> = (0..100).collect();
/// let keys: Vec<u32> = set.range(10..20).copied().collect();
/// assert_eq!(keys.len(), 10);
/// assert_eq!(keys[0], 10);
/// assert_eq!(keys[9], 19);
/// ```
pub struct Range<'a, T, C> {
    stack: Vec<&'a Node<T>>,

    /// End bound, checked before each element is yielded
    end: Bound<T>,

    cmp: &'a C,
}

impl<'a, T, C: Comparator<T>> Range<'a, T, C> {
    /// Create a cursor positioned at the first element inside `start`.
    ///
    /// # Arguments
    /// * `root` - Tree to iterate over
    /// * `start` - Lower bound, only used during setup
    /// * `end` - Upper bound, kept for the whole iteration
    /// * `cmp` - Order of the tree
    pub(crate) fn new(root: &'a Tree<T>, start: Bound<&T>, end: Bound<T>, cmp: &'a C) -> Self {
        let mut stack = Vec::with_capacity(height(root) as usize);
        let mut node = root.as_deref();

        while let Some(n) = node {
            let inside = match start {
                Bound::Unbounded => true,
                Bound::Included(x) => cmp.compare(&n.value, x) != Ordering::Less,
                Bound::Excluded(x) => cmp.compare(&n.value, x) == Ordering::Greater,
            };
            if inside {
                stack.push(n);
                node = n.left.as_deref();
            } else {
                node = n.right.as_deref();
            }
        }

        Self { stack, end, cmp }
    }

    /// True when `value` lies beyond the end bound.
    #[inline]
    fn is_past_end(&self, value: &T) -> bool {
        match &self.end {
            Bound::Included(end) => self.cmp.compare(value, end) == Ordering::Greater,
            Bound::Excluded(end) => self.cmp.compare(value, end) != Ordering::Less,
            Bound::Unbounded => false,
        }
    }
}

impl<'a, T, C: Comparator<T>> Iterator for Range<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if self.is_past_end(&node.value) {
            self.stack.clear();
            return None;
        }
        push_left_spine(&mut self.stack, &node.right);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The end bound may cut the walk short at any point
        (0, None)
    }
}

impl<T, C: Comparator<T>> FusedIterator for Range<'_, T, C> {}
