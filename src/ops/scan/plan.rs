//! Scan plan: everything a backend needs to build the scan node

use super::{CollapsedShape, ScanAttributes, ScanDirection, ScanOp, collapse, resolve_axis};
use crate::error::Result;
use log::debug;

/// Axis of the collapsed 4-D shape that every planned scan runs along
pub const SCAN_AXIS: u32 = 2;

/// A scan lowered onto the canonical 4-D shape
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScanPlan {
    /// Operand shape collapsed to `[1, left, axis, right]`
    pub collapsed: CollapsedShape,
    /// Logical axis of `collapsed` to scan along; always [`SCAN_AXIS`]
    pub axis: u32,
    /// Traversal order
    pub direction: ScanDirection,
    /// Whether each element is excluded from its own result
    pub exclusive: bool,
    /// Combining operator
    pub op: ScanOp,
}

impl ScanPlan {
    /// Plan a scan over the resolved `axis` of `shape`
    pub fn new(shape: &[usize], axis: usize, attrs: ScanAttributes, op: ScanOp) -> Result<Self> {
        let collapsed = collapse(shape, axis)?;
        debug!(
            "{}: planned {:?} axis {} as {} (reverse={}, exclusive={})",
            op.op_name(),
            shape,
            axis,
            collapsed,
            attrs.reverse,
            attrs.exclusive
        );
        Ok(Self {
            collapsed,
            axis: SCAN_AXIS,
            direction: attrs.direction(),
            exclusive: attrs.exclusive,
            op,
        })
    }

    /// Plan a scan from a signed, unresolved axis
    pub fn with_signed_axis(
        shape: &[usize],
        axis: i64,
        attrs: ScanAttributes,
        op: ScanOp,
    ) -> Result<Self> {
        let axis = resolve_axis(shape.len(), axis)?;
        Self::new(shape, axis, attrs, op)
    }
}
