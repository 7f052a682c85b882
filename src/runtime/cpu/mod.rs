//! CPU runtime implementation
//!
//! The CPU runtime keeps tensors in host memory and provides the reference
//! implementation of every graph operation.

mod client;
mod device;
pub(crate) mod kernels;
mod runtime;

pub use client::CpuClient;
pub use device::CpuDevice;
pub use runtime::CpuRuntime;
