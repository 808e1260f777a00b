//! Structural validation of a tree.

use alloc::format;
use core::cmp::Ordering;

use crate::compare::Comparator;
use crate::constants::HEIGHT_TOLERANCE;
use crate::error::SetError;
use crate::tree::iter::Iter;
use crate::tree::node::{height, Tree};

/// Verify cached heights and balance of every node, returning the real height.
fn check_shape<T>(t: &Tree<T>) -> Result<u32, SetError> {
    let Some(n) = t.as_deref() else {
        return Ok(0);
    };
    let hl = check_shape(&n.left)?;
    let hr = check_shape(&n.right)?;

    let expected = hl.max(hr) + 1;
    if n.height != expected {
        return Err(SetError::InvalidShape {
            reason: format!("cached height {} but subtrees give {}", n.height, expected),
        });
    }
    if hl.abs_diff(hr) > HEIGHT_TOLERANCE {
        return Err(SetError::InvalidShape {
            reason: format!("children heights {hl} and {hr} differ by more than {HEIGHT_TOLERANCE}"),
        });
    }
    Ok(expected)
}

/// Verify every tree invariant.
///
/// # Checks
/// 1. Each cached height equals `1 + max` of the children's real heights
/// 2. Sibling heights differ by at most `HEIGHT_TOLERANCE`
/// 3. The in-order walk is strictly ascending under `cmp`
///
/// # Errors
/// - [`SetError::InvalidShape`] for the first height or balance violation
/// - [`SetError::Unsorted`] with the in-order index of the first element not
///   strictly greater than its predecessor
///
/// # Performance
/// O(n)
pub(crate) fn check<T, C>(cmp: &C, t: &Tree<T>) -> Result<(), SetError>
where
    C: Comparator<T>,
{
    let result = check_shape(t).and_then(|h| {
        debug_assert_eq!(h, height(t));
        check_order(cmp, t)
    });
    if let Err(err) = &result {
        tracing::debug!(%err, "set invariant violated");
    }
    result
}

fn check_order<T, C>(cmp: &C, t: &Tree<T>) -> Result<(), SetError>
where
    C: Comparator<T>,
{
    let mut prev: Option<&T> = None;
    for (index, value) in Iter::new(t).enumerate() {
        if let Some(p) = prev {
            if cmp.compare(p, value) != Ordering::Less {
                return Err(SetError::Unsorted { index });
            }
        }
        prev = Some(value);
    }
    Ok(())
}
