//! Helpers shared by runtime implementations

use crate::error::{Error, Result};
use crate::graph::CompiledGraph;
use crate::tensor::Tensor;

/// Check execution inputs against the graph's input descriptors
///
/// Count, dtype and element count must match. Shapes themselves may differ:
/// callers bind an N-D tensor to its collapsed 4-D descriptor.
pub fn validate_inputs(graph: &CompiledGraph, inputs: &[&Tensor]) -> Result<()> {
    if inputs.len() != graph.inputs().len() {
        return Err(Error::InvalidGraph(format!(
            "graph expects {} input(s), got {}",
            graph.inputs().len(),
            inputs.len()
        )));
    }
    for (desc, tensor) in graph.inputs().iter().zip(inputs) {
        if tensor.dtype() != desc.dtype {
            return Err(Error::DTypeMismatch {
                lhs: desc.dtype,
                rhs: tensor.dtype(),
            });
        }
        if tensor.numel() != desc.numel() {
            return Err(Error::shape_mismatch(&desc.sizes, tensor.shape()));
        }
    }
    Ok(())
}
