//! Graph construction and compilation

use super::{CompiledGraph, GRAPH_NDIM, GraphOp, NodeData, NodeId, TensorDesc};
use crate::error::{Error, Result};
use crate::ops::{ScanDirection, ScanOp};
use log::debug;

/// Builds a graph node by node, then compiles it
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<NodeData>,
    inputs: Vec<TensorDesc>,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self, op: GraphOp, desc: TensorDesc) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData { op, desc });
        id
    }

    fn desc_of(&self, id: NodeId) -> Result<TensorDesc> {
        self.nodes
            .get(id.0)
            .map(|n| n.desc)
            .ok_or_else(|| Error::InvalidGraph(format!("unknown node {}", id.0)))
    }

    /// Declare the next graph input
    ///
    /// Inputs are bound to execution tensors in the order they are declared.
    pub fn input(&mut self, desc: TensorDesc) -> NodeId {
        let index = self.inputs.len();
        self.inputs.push(desc);
        self.add_node(GraphOp::Input { index }, desc)
    }

    /// Add a cumulative scan of `input` along `axis`
    ///
    /// The output has the same descriptor as the input.
    pub fn cumulative(
        &mut self,
        input: NodeId,
        axis: u32,
        direction: ScanDirection,
        exclusive: bool,
        op: ScanOp,
    ) -> Result<NodeId> {
        let desc = self.desc_of(input)?;
        if axis as usize >= GRAPH_NDIM {
            return Err(Error::InvalidGraph(format!(
                "scan axis {axis} out of range for {GRAPH_NDIM}-D tensor"
            )));
        }
        Ok(self.add_node(
            GraphOp::Scan {
                input,
                axis,
                direction,
                exclusive,
                op,
            },
            desc,
        ))
    }

    /// Add a running sum of `input` along `axis`
    pub fn cumulative_summation(
        &mut self,
        input: NodeId,
        axis: u32,
        direction: ScanDirection,
        exclusive: bool,
    ) -> Result<NodeId> {
        self.cumulative(input, axis, direction, exclusive, ScanOp::Sum)
    }

    /// Add a running product of `input` along `axis`
    pub fn cumulative_product(
        &mut self,
        input: NodeId,
        axis: u32,
        direction: ScanDirection,
        exclusive: bool,
    ) -> Result<NodeId> {
        self.cumulative(input, axis, direction, exclusive, ScanOp::Product)
    }

    /// Freeze the graph, returning the values of `outputs` on execution
    pub fn compile(self, outputs: &[NodeId]) -> Result<CompiledGraph> {
        if outputs.is_empty() {
            return Err(Error::InvalidGraph("graph has no outputs".to_string()));
        }
        for id in outputs {
            self.desc_of(*id)?;
        }
        debug!(
            "compiled graph: {} node(s), {} input(s), {} output(s)",
            self.nodes.len(),
            self.inputs.len(),
            outputs.len()
        );
        Ok(CompiledGraph {
            nodes: self.nodes,
            inputs: self.inputs,
            outputs: outputs.to_vec(),
        })
    }
}
