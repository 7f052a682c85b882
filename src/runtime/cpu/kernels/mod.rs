//! CPU compute kernels

mod cumulative;

pub use cumulative::{ScanExtent, scan_kernel};
