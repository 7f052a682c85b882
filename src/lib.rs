//! # numscan
//!
//! **Scan kernels (cumulative sum and product) planned onto a fixed 4-D execution graph.**
//!
//! A scan over any axis of a tensor of any rank is lowered to a scan over
//! axis 2 of the shape `[1, left, axis, right]`, where `left` and `right` are
//! the products of the dimensions before and after the scan axis. The
//! lowered scan is built as a one-node graph and executed by a runtime.
//!
//! ## Layers
//!
//! - [`ops::scan`]: axis resolution, shape collapse, [`ops::ScanPlan`]
//! - [`graph`]: graph builder and compiled graphs over 4-D descriptors
//! - [`runtime`]: the `Runtime` trait and the CPU reference backend
//! - [`kernel`]: `Cumsum` / `Cumprod` kernels and the explicit kernel registry
//!
//! ## Quick Start
//!
//! ```
//! use numscan::prelude::*;
//!
//! let registry = KernelRegistry::<CpuRuntime>::with_scan_kernels()?;
//! let client = CpuRuntime::default_client(&CpuRuntime::default_device());
//!
//! let node = NodeDef::new("Cumsum")
//!     .with_attr("T", DType::F32)
//!     .with_attr("Tidx", DType::I32);
//! let kernel = registry.create_kernel(&node)?;
//!
//! let x = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
//! let axis = Tensor::from_scalar(-1i32);
//! let out = kernel.compute(&client, &[&x, &axis])?;
//! assert_eq!(out[0].to_vec::<f32>(), [1.0, 3.0, 3.0, 7.0]);
//! # Ok::<(), numscan::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16` (default): Half-precision (F16) elements

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod dtype;
pub mod error;
pub mod graph;
pub mod kernel;
pub mod ops;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::DType;
    pub use crate::error::{Error, Result};
    pub use crate::kernel::{KernelRegistry, NodeDef, OpKernel};
    pub use crate::ops::{ScanAttributes, ScanDirection, ScanOp, ScanPlan};
    pub use crate::runtime::cpu::CpuRuntime;
    pub use crate::runtime::{Device, Runtime, RuntimeClient};
    pub use crate::tensor::{Shape, Tensor};
}
