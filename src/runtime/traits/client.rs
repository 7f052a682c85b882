//! Trait for runtime clients that execute compiled graphs

use super::Runtime;
use crate::error::Result;
use crate::graph::CompiledGraph;
use crate::tensor::Tensor;

/// Trait for runtime clients that execute compiled graphs
pub trait RuntimeClient<R: Runtime>: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &R::Device;

    /// Run `graph` with `inputs` bound to its inputs in declaration order
    ///
    /// Returns one tensor per graph output, shaped as its 4-D descriptor.
    /// Inputs must match their descriptors in dtype and element count; their
    /// own shapes are ignored.
    fn execute(&self, graph: &CompiledGraph, inputs: &[&Tensor]) -> Result<Vec<Tensor>>;
}
