//! Scan (cumulative) operations
//!
//! This module holds the backend-independent half of the `Cumsum` and
//! `Cumprod` kernels: axis resolution, the axis-collapse shape planner and the
//! description of the scan node handed to a backend.
//!
//! ```text
//! shape [d0 .. dn), axis k
//!     │ resolve_axis / read_axis
//!     ▼
//! collapse ──► [1, d0*..*d(k-1), dk, d(k+1)*..*dn]
//!     │
//!     ▼
//! ScanPlan { collapsed, axis: 2, direction, exclusive, op }
//! ```

mod axis;
mod collapsed;
mod plan;

pub use axis::{read_axis, resolve_axis};
pub use collapsed::{CollapsedShape, collapse};
pub use plan::{SCAN_AXIS, ScanPlan};

use crate::dtype::Element;

/// Binary operator combined along the scan axis
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanOp {
    /// Running sum
    Sum,
    /// Running product
    Product,
}

impl ScanOp {
    /// Name of the operator this scan implements
    pub const fn op_name(self) -> &'static str {
        match self {
            Self::Sum => "Cumsum",
            Self::Product => "Cumprod",
        }
    }

    /// Identity element, used for exclusive scans
    #[inline]
    pub fn identity<T: Element>(self) -> T {
        match self {
            Self::Sum => T::zero(),
            Self::Product => T::one(),
        }
    }

    /// Combine an accumulator with the next element
    #[inline]
    pub fn combine<T: Element>(self, acc: T, x: T) -> T {
        match self {
            Self::Sum => acc.sum_with(x),
            Self::Product => acc.product_with(x),
        }
    }
}

/// Traversal order along the scan axis
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    /// From index 0 upwards
    #[default]
    Increasing,
    /// From the last index downwards
    Decreasing,
}

impl ScanDirection {
    /// Direction selected by the `reverse` attribute
    #[inline]
    pub const fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Self::Decreasing
        } else {
            Self::Increasing
        }
    }
}

/// The `reverse` / `exclusive` attributes of a scan node
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanAttributes {
    /// Accumulate from the end of the axis towards the start
    pub reverse: bool,
    /// Element `i` is left out of its own accumulated value
    pub exclusive: bool,
}

impl ScanAttributes {
    /// Traversal order implied by `reverse`
    #[inline]
    pub const fn direction(&self) -> ScanDirection {
        ScanDirection::from_reverse(self.reverse)
    }
}
