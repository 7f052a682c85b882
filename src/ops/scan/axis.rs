//! Scan axis resolution
//!
//! The axis arrives as a scalar tensor of an index dtype and may be negative,
//! counting from the end of the operand's dimensions.

use crate::dtype::IndexElement;
use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// Resolve a signed axis against a tensor of rank `ndim`
///
/// `axis < 0` counts from the end, so `-1` is the last dimension and
/// `-ndim` the first. Anything outside `[-ndim, ndim)` is rejected with
/// `AxisOutOfRange`; a rank-0 tensor therefore has no valid axis.
pub fn resolve_axis(ndim: usize, axis: i64) -> Result<usize> {
    let out_of_range = || Error::AxisOutOfRange { axis, ndim };
    let rank = i64::try_from(ndim).map_err(|_| out_of_range())?;

    // rank >= 0, so adding a negative axis cannot overflow
    let effective = if axis < 0 { rank + axis } else { axis };
    if (0..rank).contains(&effective) {
        usize::try_from(effective).map_err(|_| out_of_range())
    } else {
        Err(out_of_range())
    }
}

/// Read and resolve the axis carried by `axis_tensor`
///
/// The tensor must be rank 0 whatever its value. Its element is read with a
/// validated copy as `I`, then resolved against `ndim`.
pub fn read_axis<I: IndexElement>(axis_tensor: &Tensor, ndim: usize) -> Result<usize> {
    if !axis_tensor.is_scalar() {
        return Err(Error::invalid_argument(
            "axis",
            format!("ScanOp: axis must be a scalar, not {}", axis_tensor.dims()),
        ));
    }
    let raw: I = axis_tensor.scalar()?;
    resolve_axis(ndim, raw.to_axis())
}
