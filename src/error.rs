//! Error types for numscan

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using numscan's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning, building or running a scan
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Scan axis outside `[-ndim, ndim)`
    #[error("ScanOp: expected scan axis in the range [-{ndim}, {ndim}), but got {axis}")]
    AxisOutOfRange {
        /// The axis as supplied by the caller
        axis: i64,
        /// Rank of the operand
        ndim: usize,
    },

    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Element count of a shape does not fit in `usize`
    #[error("Element count of shape {shape:?} overflows usize")]
    ShapeOverflow {
        /// The offending shape
        shape: Vec<usize>,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// DType mismatch between operands
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Expected dtype
        lhs: DType,
        /// Actual dtype
        rhs: DType,
    },

    /// DType needs a cargo feature that is disabled
    #[error("DType {dtype:?} requires the '{feature}' feature")]
    FeatureRequired {
        /// The dtype
        dtype: DType,
        /// Name of the feature to enable
        feature: &'static str,
    },

    /// Node definition lacks a required attribute
    #[error("Missing attribute '{name}'")]
    MissingAttr {
        /// Attribute name
        name: &'static str,
    },

    /// No kernel registered for the requested signature
    #[error("No kernel registered for op '{op}' with T={dtype:?}, Tidx={index_dtype:?}")]
    KernelNotFound {
        /// Operator name
        op: String,
        /// Element dtype
        dtype: DType,
        /// Axis dtype
        index_dtype: DType,
    },

    /// A kernel with the same signature is already registered
    #[error("Kernel for op '{op}' with T={dtype:?}, Tidx={index_dtype:?} is already registered")]
    DuplicateKernel {
        /// Operator name
        op: String,
        /// Element dtype
        dtype: DType,
        /// Axis dtype
        index_dtype: DType,
    },

    /// Malformed execution graph
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Whether this error reports a malformed operator configuration.
    ///
    /// Covers a non-scalar axis, an out-of-range axis and bad attributes.
    /// These abort the invocation and are never worth retrying.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::AxisOutOfRange { .. } | Self::MissingAttr { .. }
        )
    }
}
