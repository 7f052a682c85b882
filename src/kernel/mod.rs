//! Operator kernels and their registry
//!
//! A node definition names an operator and carries its attributes. The
//! [`KernelRegistry`] maps `(op, T, Tidx)` to a factory that builds an
//! [`OpKernel`] for the node; the kernel then runs on a runtime client.
//!
//! ```text
//! NodeDef { op: "Cumsum", T: f32, Tidx: i32, reverse, exclusive }
//!     │ KernelRegistry::create_kernel
//!     ▼
//! Box<dyn OpKernel<R>> ──compute(client, [input, axis])──► [output]
//! ```

mod node;
mod registry;
mod scan;

pub use node::{ATTR_EXCLUSIVE, ATTR_INDEX_TYPE, ATTR_REVERSE, ATTR_TYPE, AttrValue, NodeDef};
pub use registry::{KernelDef, KernelFactory, KernelRegistry};
pub use scan::{ScanKernel, register_scan_kernels};

use crate::error::Result;
use crate::runtime::Runtime;
use crate::tensor::{Shape, Tensor};

/// A kernel bound to one node definition, runnable on runtime `R`
pub trait OpKernel<R: Runtime>: Send + Sync {
    /// Operator name this kernel implements
    fn name(&self) -> &'static str;

    /// Shapes of the outputs for the given input shapes
    fn output_shapes(&self, input_shapes: &[&[usize]]) -> Result<Vec<Shape>>;

    /// Run the kernel
    fn compute(&self, client: &R::Client, inputs: &[&Tensor]) -> Result<Vec<Tensor>>;
}
