//! Tensor operations
//!
//! This module holds the backend-independent parts of the operations this
//! crate provides, plus the dtype dispatch macros used by backends and by
//! kernel registration.
//!
//! # Design
//!
//! ```text
//! kernel::ScanKernel (operator surface, attributes)
//!     │
//!     ▼
//! ops::scan (axis resolution, shape collapse, ScanPlan)
//!     │
//!     ▼
//! graph::GraphBuilder ──► runtime::RuntimeClient::execute
//! ```

mod dispatch;
pub mod scan;

pub use scan::{
    CollapsedShape, SCAN_AXIS, ScanAttributes, ScanDirection, ScanOp, ScanPlan, collapse,
    read_axis, resolve_axis,
};
