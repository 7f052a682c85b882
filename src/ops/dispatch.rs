//! DType dispatch utilities
//!
//! This module provides the `dispatch_dtype!` and `dispatch_index_dtype!`
//! macros for runtime type dispatch. They convert from the `DType` enum to
//! concrete generic types for kernel execution and kernel registration.
//!
//! # Usage
//!
//! ```ignore
//! fn my_operation(dtype: DType) -> Result<()> {
//!     dispatch_dtype!(dtype, T => {
//!         // T is now a concrete type (f32, i32, etc.)
//!         let size = std::mem::size_of::<T>();
//!         Ok(())
//!     }, "my_operation")
//! }
//! ```
//!
//! ## Supported Types
//!
//! - `F32` -> `f32`
//! - `F16` -> `half::f16` (requires "f16" feature)
//! - `I64` -> `i64`
//! - `I32` -> `i32`
//!
//! `dispatch_index_dtype!` only accepts `I32` and `I64`; anything else yields
//! `UnsupportedDType`.

/// Internal helper macro to dispatch types requiring the "f16" feature.
#[macro_export]
#[doc(hidden)]
macro_rules! dispatch_f16_type {
    ($T:ident, $body:block, $dtype:expr, $type:ty) => {{
        #[cfg(feature = "f16")]
        {
            type $T = $type;
            $body
        }
        #[cfg(not(feature = "f16"))]
        {
            Err($crate::error::Error::FeatureRequired {
                dtype: $dtype,
                feature: "f16",
            })
        }
    }};
}

/// Macro for runtime dtype dispatch to typed operations.
///
/// Executes a code block with `T` bound to the Rust type of `$dtype`. The
/// block must evaluate to a `Result`.
#[macro_export]
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::F16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, half::f16)
            }
            $crate::dtype::DType::I64 => {
                type $T = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $T = i32;
                $body
            }
            #[allow(unreachable_patterns)]
            other => Err($crate::error::Error::UnsupportedDType {
                dtype: other,
                op: $error_op,
            }),
        }
    };
}

/// Macro for runtime dispatch over axis (index) dtypes.
///
/// Executes a code block with `I` bound to `i32` or `i64`.
#[macro_export]
macro_rules! dispatch_index_dtype {
    ($dtype:expr, $I:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::I32 => {
                type $I = i32;
                $body
            }
            $crate::dtype::DType::I64 => {
                type $I = i64;
                $body
            }
            other => Err($crate::error::Error::UnsupportedDType {
                dtype: other,
                op: $error_op,
            }),
        }
    };
}
