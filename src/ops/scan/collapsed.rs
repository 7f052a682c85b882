//! Axis-collapse shape planning
//!
//! A scan over any axis of any rank is equivalent to a scan over axis 2 of
//! the 4-D shape `[1, left, axis, right]`, where `left` and `right` are the
//! products of the dims before and after the scan axis. Collapsing keeps the
//! element count and the order of elements along the scan axis.

use crate::error::{Error, Result};
use crate::tensor::checked_product;
use std::fmt;

/// Canonical 4-D form of a scan operand: `[1, left, axis, right]`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollapsedShape {
    /// Product of the dims before the scan axis
    pub left: usize,
    /// Size of the scan axis
    pub axis: usize,
    /// Product of the dims after the scan axis
    pub right: usize,
}

impl CollapsedShape {
    /// Rank of the collapsed form
    pub const NDIM: usize = 4;

    /// The collapsed dims as `[1, left, axis, right]`
    #[inline]
    pub fn dims(&self) -> [usize; 4] {
        [1, self.left, self.axis, self.right]
    }

    /// Total element count; equals the element count of the original shape
    #[inline]
    pub fn numel(&self) -> usize {
        // collapse() already proved this product fits
        self.left * self.axis * self.right
    }
}

impl fmt::Display for CollapsedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[1,{},{},{}]", self.left, self.axis, self.right)
    }
}

/// Collapse `shape` around an already-resolved `axis`
///
/// Fails with `AxisOutOfRange` if `axis >= shape.len()` and with
/// `ShapeOverflow` if `left`, `right` or the element count does not fit in
/// `usize`. `left` and `right` become graph sizes, so they must fit even
/// when a zero-size dim makes the element count 0.
pub fn collapse(shape: &[usize], axis: usize) -> Result<CollapsedShape> {
    let Some(&axis_size) = shape.get(axis) else {
        return Err(Error::AxisOutOfRange {
            axis: i64::try_from(axis).unwrap_or(i64::MAX),
            ndim: shape.len(),
        });
    };

    let overflow = || Error::ShapeOverflow {
        shape: shape.to_vec(),
    };
    let left = checked_product(&shape[..axis]).ok_or_else(overflow)?;
    let right = checked_product(&shape[axis + 1..]).ok_or_else(overflow)?;
    left.checked_mul(axis_size)
        .and_then(|n| n.checked_mul(right))
        .ok_or_else(overflow)?;

    Ok(CollapsedShape {
        left,
        axis: axis_size,
        right,
    })
}
