//! Tensor types
//!
//! This module provides the host `Tensor` type and its `Shape`. Tensors are
//! the inputs and outputs of kernels and of compiled graphs.

mod core;
mod shape;

pub use core::Tensor;
pub(crate) use shape::checked_product;
pub use shape::Shape;
