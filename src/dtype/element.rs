//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::Pod;
use std::fmt::Debug;

/// Trait for types that can be elements of a tensor
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod` - Safe byte-level copies in and out of tensor storage (bytemuck)
///
/// The two combining operations used by scans are part of the trait so that
/// integer types can wrap on overflow instead of panicking in debug builds.
pub trait Element: Copy + Send + Sync + Pod + Debug + PartialEq + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// `self + rhs`, wrapping for integers
    fn sum_with(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping for integers
    fn product_with(self, rhs: Self) -> Self;
}

/// Integer element that may carry a scan axis
pub trait IndexElement: Element {
    /// Widen to `i64` without loss
    fn to_axis(self) -> i64;
}

macro_rules! impl_float_element {
    ($ty:ty, $dtype:expr, $zero:expr, $one:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;

            #[inline]
            fn zero() -> Self {
                $zero
            }

            #[inline]
            fn one() -> Self {
                $one
            }

            #[inline]
            fn sum_with(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn product_with(self, rhs: Self) -> Self {
                self * rhs
            }
        }
    };
}

macro_rules! impl_int_element {
    ($ty:ty, $dtype:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn sum_with(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn product_with(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
        }

        impl IndexElement for $ty {
            #[inline]
            fn to_axis(self) -> i64 {
                i64::from(self)
            }
        }
    };
}

impl_float_element!(f32, DType::F32, 0.0, 1.0);
impl_int_element!(i32, DType::I32);
impl_int_element!(i64, DType::I64);

// Half-precision floating point (requires "f16" feature)
#[cfg(feature = "f16")]
impl_float_element!(half::f16, DType::F16, half::f16::ZERO, half::f16::ONE);
