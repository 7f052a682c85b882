//! Execution graphs
//!
//! A kernel describes its work as a small graph of nodes over 4-D tensor
//! descriptors, compiles it once, and hands the compiled graph to a
//! [`Runtime`](crate::runtime::Runtime) for execution.
//!
//! ```text
//! GraphBuilder
//!   ├── input(desc)          -> NodeId
//!   ├── cumulative(...)      -> NodeId
//!   └── compile(&[outputs])  -> CompiledGraph (immutable, Send + Sync)
//! ```

mod builder;

pub use builder::GraphBuilder;

use crate::dtype::DType;
use crate::ops::{CollapsedShape, ScanDirection, ScanOp};
use std::fmt;

/// Rank of every tensor descriptor in a graph
pub const GRAPH_NDIM: usize = 4;

/// Element type and 4-D sizes of a graph tensor
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TensorDesc {
    /// Element type
    pub dtype: DType,
    /// Sizes in `[n, c, h, w]` order
    pub sizes: [usize; GRAPH_NDIM],
}

impl TensorDesc {
    /// Descriptor for a tensor with the given 4-D sizes
    pub const fn new(dtype: DType, sizes: [usize; GRAPH_NDIM]) -> Self {
        Self { dtype, sizes }
    }

    /// Descriptor for a collapsed scan operand
    pub fn collapsed(dtype: DType, shape: &CollapsedShape) -> Self {
        Self::new(dtype, shape.dims())
    }

    /// Number of elements described
    ///
    /// Sizes built from a [`CollapsedShape`] are known not to overflow; for
    /// hand-built descriptors the product saturates.
    pub fn numel(&self) -> usize {
        self.sizes.iter().fold(1usize, |acc, &d| acc.saturating_mul(d))
    }
}

impl fmt::Display for TensorDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [n, c, h, w] = self.sizes;
        write!(f, "{}[{n},{c},{h},{w}]", self.dtype)
    }
}

/// Index of a node inside its graph
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the graph
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Operation performed by a node
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GraphOp {
    /// Graph input bound to the `index`-th tensor passed at execution
    Input {
        /// Position in the execution inputs
        index: usize,
    },
    /// Cumulative scan of `input` along `axis`
    Scan {
        /// Source node
        input: NodeId,
        /// Axis of the 4-D descriptor
        axis: u32,
        /// Traversal order
        direction: ScanDirection,
        /// Exclude each element from its own result
        exclusive: bool,
        /// Combining operator
        op: ScanOp,
    },
}

/// A node: its operation and the descriptor of the tensor it produces
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeData {
    /// What the node computes
    pub op: GraphOp,
    /// Output descriptor
    pub desc: TensorDesc,
}

/// An immutable, validated graph ready for execution
///
/// Nodes are stored in insertion order, which is a topological order since a
/// node can only reference nodes created before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledGraph {
    nodes: Vec<NodeData>,
    inputs: Vec<TensorDesc>,
    outputs: Vec<NodeId>,
}

impl CompiledGraph {
    /// All nodes in execution order
    pub fn nodes(&self) -> &[NodeData] {
        &self.nodes
    }

    /// Node by id
    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    /// Descriptors of the tensors expected at execution, in binding order
    pub fn inputs(&self) -> &[TensorDesc] {
        &self.inputs
    }

    /// Nodes whose values are returned by execution
    pub fn outputs(&self) -> &[NodeId] {
        &self.outputs
    }

    /// Descriptors of the returned tensors
    pub fn output_descs(&self) -> impl Iterator<Item = TensorDesc> + '_ {
        self.outputs.iter().map(|id| self.nodes[id.0].desc)
    }

    /// Whether the single output may overwrite the single input's buffer
    ///
    /// True when the graph maps one tensor to one tensor of identical
    /// descriptor, which is the case for every scan graph.
    pub fn supports_in_place(&self) -> bool {
        match (self.inputs.as_slice(), self.outputs.as_slice()) {
            ([input], [output]) => self.nodes[output.0].desc == *input,
            _ => false,
        }
    }
}
