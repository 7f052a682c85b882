//! CPU client: executes compiled graphs on the host

use super::device::CpuDevice;
use super::kernels::{ScanExtent, scan_kernel};
use super::runtime::CpuRuntime;
use crate::dispatch_dtype;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::graph::{CompiledGraph, GraphOp, NodeData};
use crate::runtime::{Device, RuntimeClient, validate_inputs};
use crate::tensor::{Shape, Tensor};
use log::trace;

/// CPU client for graph execution
#[derive(Clone, Debug)]
pub struct CpuClient {
    device: CpuDevice,
}

impl CpuClient {
    /// Create a new CPU client
    pub fn new(device: CpuDevice) -> Self {
        Self { device }
    }

    fn eval_node(&self, node: &NodeData, values: &[Tensor], inputs: &[&Tensor]) -> Result<Tensor> {
        let shape = Shape::from(node.desc.sizes);
        match node.op {
            GraphOp::Input { index } => {
                let tensor = inputs.get(index).ok_or_else(|| {
                    Error::InvalidGraph(format!("no execution input bound to index {index}"))
                })?;
                tensor.reshape(&shape)
            }
            GraphOp::Scan {
                input,
                axis,
                direction,
                exclusive,
                op,
            } => {
                let src = values.get(input.index()).ok_or_else(|| {
                    Error::InvalidGraph(format!("node {} used before it is computed", input.index()))
                })?;
                let extent = ScanExtent::new(&node.desc.sizes, axis as usize);
                dispatch_dtype!(node.desc.dtype, T => {
                    let a: Vec<T> = src.try_to_vec()?;
                    let mut out = vec![T::zero(); a.len()];
                    scan_kernel(&a, &mut out, extent, direction, exclusive, op);
                    Tensor::from_vec(out, shape)
                }, "cumulative")
            }
        }
    }
}

impl RuntimeClient<CpuRuntime> for CpuClient {
    fn device(&self) -> &CpuDevice {
        &self.device
    }

    fn execute(&self, graph: &CompiledGraph, inputs: &[&Tensor]) -> Result<Vec<Tensor>> {
        validate_inputs(graph, inputs)?;

        let mut values: Vec<Tensor> = Vec::with_capacity(graph.nodes().len());
        for (i, node) in graph.nodes().iter().enumerate() {
            trace!("{}: node {i} {:?} -> {}", self.device.name(), node.op, node.desc);
            let value = self.eval_node(node, &values, inputs)?;
            values.push(value);
        }

        graph
            .outputs()
            .iter()
            .map(|id| {
                values
                    .get(id.index())
                    .cloned()
                    .ok_or_else(|| Error::InvalidGraph(format!("unknown output node {}", id.index())))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;
    use crate::graph::{GraphBuilder, TensorDesc};
    use crate::ops::ScanDirection;
    use crate::runtime::Runtime;

    fn client() -> CpuClient {
        CpuRuntime::default_client(&CpuRuntime::default_device())
    }

    #[test]
    fn test_execute_scan_graph() {
        let desc = TensorDesc::new(DType::F32, [1, 2, 3, 1]);
        let mut builder = GraphBuilder::new();
        let x = builder.input(desc);
        let y = builder
            .cumulative_summation(x, 2, ScanDirection::Increasing, false)
            .unwrap();
        let graph = builder.compile(&[y]).unwrap();

        let input = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
        let out = client().execute(&graph, &[&input]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].shape(), &[1, 2, 3, 1]);
        assert_eq!(out[0].to_vec::<f32>(), [1.0, 3.0, 6.0, 4.0, 9.0, 15.0]);
    }

    #[test]
    fn test_execute_chained_scans() {
        let desc = TensorDesc::new(DType::I32, [1, 1, 3, 1]);
        let mut builder = GraphBuilder::new();
        let x = builder.input(desc);
        let y = builder
            .cumulative_summation(x, 2, ScanDirection::Increasing, false)
            .unwrap();
        let z = builder
            .cumulative_product(y, 2, ScanDirection::Increasing, false)
            .unwrap();
        let graph = builder.compile(&[y, z]).unwrap();

        let input = Tensor::from_slice(&[1i32, 1, 1], &[3]);
        let out = client().execute(&graph, &[&input]).unwrap();
        assert_eq!(out[0].to_vec::<i32>(), [1, 2, 3]);
        assert_eq!(out[1].to_vec::<i32>(), [1, 2, 6]);
    }

    #[test]
    fn test_execute_rejects_bad_input() {
        let mut builder = GraphBuilder::new();
        let x = builder.input(TensorDesc::new(DType::I64, [1, 1, 4, 1]));
        let graph = builder.compile(&[x]).unwrap();
        let input = Tensor::from_slice(&[1i64, 2], &[2]);
        assert!(matches!(
            client().execute(&graph, &[&input]),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
