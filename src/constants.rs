//! Balancing constants shared by the tree algorithms.

/// Largest height difference tolerated between the two children of a node.
///
/// `bal` and `join` only rotate once one side is taller than the other by
/// more than this amount, so every reachable node has children whose
/// heights differ by at most 2.
pub const HEIGHT_TOLERANCE: u32 = 2;

/// Largest height difference `bal` accepts as input.
///
/// One unit of imbalance beyond [`HEIGHT_TOLERANCE`]; anything larger means a
/// construction path skipped a rebalance.
pub const BAL_PRECONDITION: u32 = HEIGHT_TOLERANCE + 1;

/// Inputs of at most this many elements are built by repeated insertion
/// rather than sort + bulk build.
pub const SMALL_LIST_LEN: usize = 5;

/// Height of the empty tree.
pub const EMPTY_HEIGHT: u32 = 0;
