//! Host tensor type

use super::Shape;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array held in host memory
///
/// A tensor is a shape, a dtype and a contiguous little-endian byte buffer
/// of exactly `numel * dtype.size_in_bytes()` bytes. Element access always
/// goes through validated copies, so the buffer never needs to be aligned
/// for the element type.
///
/// # Example
///
/// ```
/// # use numscan::prelude::*;
/// let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
/// assert_eq!(a.shape(), &[2, 2]);
/// assert_eq!(a.dtype(), DType::F32);
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor {
    shape: Shape,
    dtype: DType,
    data: Vec<u8>,
}

impl Tensor {
    // ===== Tensor Creation =====

    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not match the product of `shape`. Use
    /// [`Tensor::try_from_slice`] for a fallible version.
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape)
            .unwrap_or_else(|e| panic!("Tensor::from_slice failed: {e}"))
    }

    /// Create a tensor from a slice of data (fallible version)
    pub fn try_from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        let shape = Shape::from(shape);
        let numel = shape.checked_numel()?;
        if data.len() != numel {
            return Err(Error::shape_mismatch(&[numel], &[data.len()]));
        }
        Ok(Self {
            shape,
            dtype: T::DTYPE,
            data: bytemuck::cast_slice::<T, u8>(data).to_vec(),
        })
    }

    /// Create a rank-0 tensor holding `value`
    pub fn from_scalar<T: Element>(value: T) -> Self {
        Self {
            shape: Shape::scalar(),
            dtype: T::DTYPE,
            data: bytemuck::bytes_of(&value).to_vec(),
        }
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize], dtype: DType) -> Result<Self> {
        let shape = Shape::from(shape);
        let len = Self::byte_len(&shape, dtype)?;
        Ok(Self {
            shape,
            dtype,
            data: vec![0u8; len],
        })
    }

    /// Assemble a tensor from raw parts, checking the buffer length
    pub(crate) fn from_bytes(shape: Shape, dtype: DType, data: Vec<u8>) -> Result<Self> {
        let len = Self::byte_len(&shape, dtype)?;
        if data.len() != len {
            return Err(Error::shape_mismatch(&[len], &[data.len()]));
        }
        Ok(Self { shape, dtype, data })
    }

    /// Assemble a tensor from typed elements
    pub(crate) fn from_vec<T: Element>(data: Vec<T>, shape: Shape) -> Result<Self> {
        Self::from_bytes(shape, T::DTYPE, bytemuck::cast_slice::<T, u8>(&data).to_vec())
    }

    fn byte_len(shape: &Shape, dtype: DType) -> Result<usize> {
        shape
            .checked_numel()?
            .checked_mul(dtype.size_in_bytes())
            .ok_or_else(|| Error::ShapeOverflow {
                shape: shape.to_vec(),
            })
    }

    // ===== Accessors =====

    /// Shape (dimensions) of the tensor
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Shape as an owned-able `Shape` value
    #[inline]
    pub fn dims(&self) -> &Shape {
        &self.shape
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len() / self.dtype.size_in_bytes()
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Whether this is a rank-0 tensor
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_scalar()
    }

    // ===== Shape Operations =====

    /// Reinterpret the tensor with a new shape of the same element count
    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        let new_shape = Shape::from(shape);
        if new_shape.checked_numel()? != self.numel() {
            return Err(Error::shape_mismatch(self.shape(), shape));
        }
        Ok(Self {
            shape: new_shape,
            dtype: self.dtype,
            data: self.data.clone(),
        })
    }

    /// Consume the tensor and reinterpret it with a new shape
    pub(crate) fn into_reshaped(self, shape: Shape) -> Result<Self> {
        if shape.checked_numel()? != self.numel() {
            return Err(Error::shape_mismatch(self.shape(), &shape));
        }
        Ok(Self { shape, ..self })
    }

    // ===== Data Access =====

    /// Read the value of a rank-0 tensor
    ///
    /// The value is copied out after checking rank, dtype and buffer length.
    /// Storage is never reinterpreted in place, so malformed metadata cannot
    /// lead to an out-of-bounds or misaligned read.
    pub fn scalar<T: Element>(&self) -> Result<T> {
        if !self.is_scalar() {
            return Err(Error::shape_mismatch(&[], self.shape()));
        }
        if self.dtype != T::DTYPE {
            return Err(Error::DTypeMismatch {
                lhs: T::DTYPE,
                rhs: self.dtype,
            });
        }
        let size = std::mem::size_of::<T>();
        if self.data.len() != size {
            return Err(Error::shape_mismatch(&[size], &[self.data.len()]));
        }
        Ok(bytemuck::pod_read_unaligned(&self.data))
    }

    /// Copy tensor data to a Vec (fallible version)
    pub fn try_to_vec<T: Element>(&self) -> Result<Vec<T>> {
        if self.dtype != T::DTYPE {
            return Err(Error::DTypeMismatch {
                lhs: T::DTYPE,
                rhs: self.dtype,
            });
        }
        Ok(self
            .data
            .chunks_exact(std::mem::size_of::<T>())
            .map(bytemuck::pod_read_unaligned)
            .collect())
    }

    /// Copy tensor data to a Vec
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the tensor's dtype.
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        self.try_to_vec()
            .unwrap_or_else(|e| panic!("Tensor::to_vec failed: {e}"))
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype)
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({}, dtype={})", self.shape, self.dtype)
    }
}
