//! Immutable tree node and the primitive constructors.

use crate::constants::EMPTY_HEIGHT;
use crate::shared::Shared;

/// A tree is either empty (`None`) or a shared handle to a node.
///
/// Handles are reference counted, so a subtree can hang under several roots
/// at once. Nodes are never written after construction; every update builds
/// new nodes along the modified path and reuses the rest.
pub(crate) type Tree<T> = Option<Shared<Node<T>>>;

/// Internal node: left subtree, element, right subtree and cached height.
///
/// # Invariants
/// - every element of `left` sorts strictly before `value`
/// - every element of `right` sorts strictly after `value`
/// - `height == 1 + max(height(left), height(right))`
/// - child heights differ by at most `HEIGHT_TOLERANCE`
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) left: Tree<T>,
    pub(crate) value: T,
    pub(crate) right: Tree<T>,
    pub(crate) height: u32,
}

/// Height of a tree.
///
/// # Returns
/// 0 for the empty tree, the cached node height otherwise
///
/// # Performance
/// O(1) - reads the cached field
#[inline(always)]
pub(crate) fn height<T>(t: &Tree<T>) -> u32 {
    match t {
        None => EMPTY_HEIGHT,
        Some(n) => n.height,
    }
}

/// Build a node from exactly these three parts.
///
/// The caller guarantees ordering and that the heights of `left` and
/// `right` differ by at most `HEIGHT_TOLERANCE`; nothing is checked here.
///
/// # Performance
/// O(1) - one allocation
#[inline]
pub(crate) fn create<T>(left: Tree<T>, value: T, right: Tree<T>) -> Tree<T> {
    let height = height(&left).max(height(&right)) + 1;
    Some(Shared::new(Node {
        left,
        value,
        right,
        height,
    }))
}

/// One-element tree.
#[inline]
pub(crate) fn singleton<T>(value: T) -> Tree<T> {
    create(None, value, None)
}
