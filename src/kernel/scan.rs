//! Scan kernels: `Cumsum` and `Cumprod`

use super::node::{ATTR_EXCLUSIVE, ATTR_INDEX_TYPE, ATTR_REVERSE, ATTR_TYPE, NodeDef};
use super::registry::{KernelDef, KernelFactory, KernelRegistry};
use super::OpKernel;
use crate::dispatch_index_dtype;
use crate::dtype::{DType, DTypeSet, IndexElement};
use crate::error::{Error, Result};
use crate::graph::{CompiledGraph, GraphBuilder, TensorDesc};
use crate::ops::{ScanAttributes, ScanOp, ScanPlan, read_axis};
use crate::runtime::{Runtime, RuntimeClient};
use crate::tensor::{Shape, Tensor};
use std::marker::PhantomData;

impl ScanAttributes {
    /// Read `reverse` and `exclusive` from a node; absent means `false`
    pub fn from_node(node: &NodeDef) -> Result<Self> {
        Ok(Self {
            reverse: node.get_bool(ATTR_REVERSE)?.unwrap_or(false),
            exclusive: node.get_bool(ATTR_EXCLUSIVE)?.unwrap_or(false),
        })
    }
}

/// Cumulative sum or product over one axis, reading the axis as `I`
///
/// Inputs are `[operand, axis]`; the single output has the operand's shape
/// and dtype. The operand is collapsed to `[1, left, axis, right]` and
/// scanned along axis 2 by a one-node graph on the runtime.
pub struct ScanKernel<R, I> {
    op: ScanOp,
    dtype: DType,
    attrs: ScanAttributes,
    _marker: PhantomData<fn() -> (R, I)>,
}

impl<R: Runtime, I: IndexElement> ScanKernel<R, I> {
    /// Build a kernel for `node`
    ///
    /// `T` must be a scan dtype and `Tidx` must be the dtype of `I`.
    pub fn new(node: &NodeDef, op: ScanOp) -> Result<Self> {
        let dtype = node.get_type(ATTR_TYPE)?;
        if !DTypeSet::SCAN.contains(dtype) {
            return Err(Error::unsupported_dtype(dtype, op.op_name()));
        }
        let index_dtype = node.get_type(ATTR_INDEX_TYPE)?;
        if index_dtype != I::DTYPE {
            return Err(Error::DTypeMismatch {
                lhs: I::DTYPE,
                rhs: index_dtype,
            });
        }
        Ok(Self {
            op,
            dtype,
            attrs: ScanAttributes::from_node(node)?,
            _marker: PhantomData,
        })
    }

    /// Combining operator
    pub fn op(&self) -> ScanOp {
        self.op
    }

    /// Parsed `reverse` / `exclusive` attributes
    pub fn attributes(&self) -> ScanAttributes {
        self.attrs
    }

    /// Validate the axis input and plan the scan of `input`
    pub fn plan(&self, input: &Tensor, axis: &Tensor) -> Result<ScanPlan> {
        let axis = read_axis::<I>(axis, input.ndim())?;
        ScanPlan::new(input.shape(), axis, self.attrs, self.op)
    }

    /// Build and compile the one-node scan graph for `plan`
    pub fn build_graph(&self, plan: &ScanPlan) -> Result<CompiledGraph> {
        let desc = TensorDesc::collapsed(self.dtype, &plan.collapsed);
        let mut builder = GraphBuilder::new();
        let input = builder.input(desc);
        let result = builder.cumulative(input, plan.axis, plan.direction, plan.exclusive, plan.op)?;
        builder.compile(&[result])
    }
}

impl<R: Runtime, I: IndexElement> OpKernel<R> for ScanKernel<R, I> {
    fn name(&self) -> &'static str {
        self.op.op_name()
    }

    fn output_shapes(&self, input_shapes: &[&[usize]]) -> Result<Vec<Shape>> {
        let input = input_shapes
            .first()
            .ok_or_else(|| Error::invalid_argument("inputs", "scan needs an operand"))?;
        Ok(vec![Shape::from(*input)])
    }

    fn compute(&self, client: &R::Client, inputs: &[&Tensor]) -> Result<Vec<Tensor>> {
        let [input, axis] = inputs else {
            return Err(Error::invalid_argument(
                "inputs",
                format!("{} expects 2 inputs, got {}", self.name(), inputs.len()),
            ));
        };
        if input.dtype() != self.dtype {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype,
                rhs: input.dtype(),
            });
        }

        let plan = self.plan(input, axis)?;
        let graph = self.build_graph(&plan)?;
        client
            .execute(&graph, &[*input])?
            .into_iter()
            .map(|out| out.into_reshaped(input.dims().clone()))
            .collect()
    }
}

fn cumsum_factory<R: Runtime, I: IndexElement>(node: &NodeDef) -> Result<Box<dyn OpKernel<R>>> {
    Ok(Box::new(ScanKernel::<R, I>::new(node, ScanOp::Sum)?))
}

fn cumprod_factory<R: Runtime, I: IndexElement>(node: &NodeDef) -> Result<Box<dyn OpKernel<R>>> {
    Ok(Box::new(ScanKernel::<R, I>::new(node, ScanOp::Product)?))
}

/// Register `Cumsum` and `Cumprod` for every scan dtype and index dtype
///
/// F16 kernels are only registered with the `f16` feature.
pub fn register_scan_kernels<R: Runtime>(registry: &mut KernelRegistry<R>) -> Result<()> {
    for op in [ScanOp::Sum, ScanOp::Product] {
        for dtype in DTypeSet::SCAN.iter() {
            if dtype == DType::F16 && !cfg!(feature = "f16") {
                continue;
            }
            for index_dtype in DTypeSet::INDEX.iter() {
                let factory: KernelFactory<R> = dispatch_index_dtype!(index_dtype, I => {
                    Ok(match op {
                        ScanOp::Sum => cumsum_factory::<R, I> as KernelFactory<R>,
                        ScanOp::Product => cumprod_factory::<R, I> as KernelFactory<R>,
                    })
                }, "register_scan_kernels")?;
                registry.register(KernelDef::new(op.op_name(), dtype, index_dtype), factory)?;
            }
        }
    }
    Ok(())
}
