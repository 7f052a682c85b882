//! Data type system for numscan tensors
//!
//! `DType` is the runtime tag carried by every tensor and by the `T` / `Tidx`
//! attributes of a node definition. `Element` and `IndexElement` connect the
//! tags to Rust types.

mod element;

pub use element::{Element, IndexElement};

use std::fmt;

/// Data types supported by numscan tensors
///
/// # Discriminant Values (Serialization Stability)
///
/// - Floats: 0-9 (F32=1, F16=2)
/// - Signed ints: 10-19 (I64=10, I32=11)
///
/// Existing values are never changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 32-bit floating point
    F32 = 1,
    /// 16-bit floating point (IEEE 754)
    F16 = 2,
    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
}

impl DType {
    /// Every dtype known to this crate, in discriminant order
    pub const ALL: [DType; 4] = [DType::F32, DType::F16, DType::I64, DType::I32];

    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::I64 => 8,
            Self::F32 | Self::I32 => 4,
            Self::F16 => 2,
        }
    }

    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F16)
    }

    /// Returns true if this is an integer type
    #[inline]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::I64 | Self::I32)
    }

    /// Returns true if tensors of this dtype may carry a scan axis
    #[inline]
    pub const fn is_index(self) -> bool {
        DTypeSet::INDEX.contains(self)
    }

    /// Short name for display (e.g., "f32", "i64")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F16 => "f16",
            Self::I64 => "i64",
            Self::I32 => "i32",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Set of dtypes for efficient membership testing
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DTypeSet {
    bits: u64,
}

impl DTypeSet {
    /// Empty set
    pub const EMPTY: Self = Self { bits: 0 };

    /// Element types accepted by the scan kernels
    pub const SCAN: Self = Self {
        bits: (1 << DType::F32 as u8)
            | (1 << DType::F16 as u8)
            | (1 << DType::I64 as u8)
            | (1 << DType::I32 as u8),
    };

    /// Integer types accepted for the scan axis
    pub const INDEX: Self = Self {
        bits: (1 << DType::I64 as u8) | (1 << DType::I32 as u8),
    };

    /// Create a set containing a single dtype
    #[inline]
    pub const fn single(dtype: DType) -> Self {
        Self {
            bits: 1 << dtype as u8,
        }
    }

    /// Check if the set contains a dtype
    #[inline]
    pub const fn contains(self, dtype: DType) -> bool {
        self.bits & (1 << dtype as u8) != 0
    }

    /// Union of two sets
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Iterate the members of the set in discriminant order
    pub fn iter(self) -> impl Iterator<Item = DType> {
        DType::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}
