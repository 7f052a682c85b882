//! Cumulative scan kernels (cumsum, cumprod)

use crate::dtype::Element;
use crate::ops::{ScanDirection, ScanOp};

/// Scan geometry: `outer` independent blocks of `scan * inner` elements
///
/// Element `[o, s, i]` lives at `o * scan * inner + s * inner + i`, so
/// consecutive elements along the scan axis are `inner` apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScanExtent {
    /// Product of the dims before the scan axis
    pub outer: usize,
    /// Length of the scan axis
    pub scan: usize,
    /// Product of the dims after the scan axis
    pub inner: usize,
}

impl ScanExtent {
    /// Extent of a scan along `axis` of `sizes`
    ///
    /// `axis` must be less than `sizes.len()`.
    pub fn new(sizes: &[usize], axis: usize) -> Self {
        Self {
            outer: sizes[..axis].iter().product(),
            scan: sizes[axis],
            inner: sizes[axis + 1..].iter().product(),
        }
    }

    /// Number of elements covered
    #[inline]
    pub fn numel(&self) -> usize {
        self.outer * self.scan * self.inner
    }
}

/// Cumulative scan along a strided dimension
///
/// Inclusive: `out[s] = x[first] ⊕ .. ⊕ x[s]`. Exclusive: `out[s]` stops one
/// element short, and the first visited position receives the identity.
/// "First" is index 0 for `Increasing` and `scan - 1` for `Decreasing`.
///
/// An extent with no elements returns without touching `out`.
///
/// # Panics
/// If `a` or `out` is shorter than `extent.numel()`.
pub fn scan_kernel<T: Element>(
    a: &[T],
    out: &mut [T],
    extent: ScanExtent,
    direction: ScanDirection,
    exclusive: bool,
    op: ScanOp,
) {
    let ScanExtent { outer, scan, inner } = extent;
    if outer == 0 || scan == 0 || inner == 0 {
        return;
    }
    debug_assert!(a.len() >= extent.numel() && out.len() >= extent.numel());

    for o in 0..outer {
        let block = o * scan * inner;
        for i in 0..inner {
            let mut acc = op.identity::<T>();
            for step in 0..scan {
                let s = match direction {
                    ScanDirection::Increasing => step,
                    ScanDirection::Decreasing => scan - 1 - step,
                };
                let idx = block + s * inner + i;
                if exclusive {
                    out[idx] = acc;
                    acc = op.combine(acc, a[idx]);
                } else {
                    acc = op.combine(acc, a[idx]);
                    out[idx] = acc;
                }
            }
        }
    }
}
