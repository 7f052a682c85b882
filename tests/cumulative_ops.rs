//! Integration tests for cumulative operations (cumsum, cumprod)
//!
//! Tests verify correctness across:
//! - Different dimensions
//! - Negative dimension indexing
//! - Reverse and exclusive scans
//! - Multiple dtypes and index widths
//! - Edge cases

mod common;

use common::{assert_allclose_f32, run_scan};
use numscan::dtype::DType;
use numscan::error::Error;

// ============================================================================
// Cumsum Tests
// ============================================================================

#[test]
fn test_cumsum_1d() {
    let result = run_scan("Cumsum", &[1.0f32, 2.0, 3.0, 4.0, 5.0], &[5], 0i32, false, false).unwrap();

    assert_eq!(result.shape(), &[5]);
    let data: Vec<f32> = result.to_vec();
    assert_eq!(data, [1.0, 3.0, 6.0, 10.0, 15.0]);
}

#[test]
fn test_cumsum_2d_dim0() {
    // Shape [3, 2]
    let result = run_scan("Cumsum", &[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2], 0i32, false, false)
        .unwrap();

    assert_eq!(result.shape(), &[3, 2]);
    let data: Vec<f32> = result.to_vec();
    // Column-wise cumsum:
    // [1, 2] -> [1, 2]
    // [3, 4] -> [4, 6]
    // [5, 6] -> [9, 12]
    assert_eq!(data, [1.0, 2.0, 4.0, 6.0, 9.0, 12.0]);
}

#[test]
fn test_cumsum_negative_dim() {
    // dim=-1 should be equivalent to dim=1
    let result = run_scan("Cumsum", &[1.0f32, 2.0, 3.0, 4.0], &[2, 2], -1i64, false, false).unwrap();

    assert_eq!(result.shape(), &[2, 2]);
    let data: Vec<f32> = result.to_vec();
    assert_eq!(data, [1.0, 3.0, 3.0, 7.0]);
}

#[test]
fn test_cumsum_3d_middle_axis() {
    // Shape [2, 3, 2], scanned along dim 1
    let a: Vec<i32> = (1..=12).collect();
    let result = run_scan("Cumsum", &a, &[2, 3, 2], 1i32, false, false).unwrap();

    assert_eq!(result.shape(), &[2, 3, 2]);
    assert_eq!(
        result.to_vec::<i32>(),
        [1, 2, 4, 6, 9, 12, 7, 8, 16, 18, 27, 30]
    );
}

#[test]
fn test_cumsum_reverse() {
    let result = run_scan("Cumsum", &[1i64, 2, 3, 4], &[4], 0i64, true, false).unwrap();
    assert_eq!(result.to_vec::<i64>(), [10, 9, 7, 4]);
}

#[test]
fn test_cumsum_exclusive() {
    let result = run_scan("Cumsum", &[1i64, 2, 3, 4], &[4], 0i64, false, true).unwrap();
    assert_eq!(result.to_vec::<i64>(), [0, 1, 3, 6]);
}

#[test]
fn test_cumsum_reverse_exclusive() {
    let result = run_scan("Cumsum", &[1i64, 2, 3, 4], &[4], -1i32, true, true).unwrap();
    assert_eq!(result.to_vec::<i64>(), [9, 7, 4, 0]);
}

#[test]
fn test_cumsum_f32_precision() {
    let a = [0.1f32, 0.2, 0.3, 0.4];
    let result = run_scan("Cumsum", &a, &[4], 0i32, false, false).unwrap();
    assert_allclose_f32(&result.to_vec::<f32>(), &[0.1, 0.3, 0.6, 1.0], 1e-6, 1e-6, "cumsum f32");
}

#[cfg(feature = "f16")]
#[test]
fn test_cumsum_f16() {
    let a: Vec<half::f16> = [1.0f32, 2.0, 3.0, 4.0]
        .iter()
        .map(|&v| half::f16::from_f32(v))
        .collect();
    let result = run_scan("Cumsum", &a, &[2, 2], 0i32, false, false).unwrap();

    assert_eq!(result.dtype(), DType::F16);
    let data: Vec<f32> = result.to_vec::<half::f16>().iter().map(|v| v.to_f32()).collect();
    assert_eq!(data, [1.0, 2.0, 4.0, 6.0]);
}

#[test]
fn test_cumsum_i32_wraps() {
    let result = run_scan("Cumsum", &[i32::MAX, 1], &[2], 0i32, false, false).unwrap();
    assert_eq!(result.to_vec::<i32>(), [i32::MAX, i32::MIN]);
}

// ============================================================================
// Cumprod Tests
// ============================================================================

#[test]
fn test_cumprod_1d() {
    let result = run_scan("Cumprod", &[1.0f32, 2.0, 3.0, 4.0, 5.0], &[5], 0i32, false, false).unwrap();

    assert_eq!(result.shape(), &[5]);
    let data: Vec<f32> = result.to_vec();
    assert_eq!(data, [1.0, 2.0, 6.0, 24.0, 120.0]);
}

#[test]
fn test_cumprod_2d_dim0() {
    // Shape [3, 2]
    let result = run_scan("Cumprod", &[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2], 0i64, false, false)
        .unwrap();

    // Column-wise cumprod:
    // [1, 2] -> [1, 2]
    // [3, 4] -> [3, 8]
    // [5, 6] -> [15, 48]
    assert_eq!(result.to_vec::<f32>(), [1.0, 2.0, 3.0, 8.0, 15.0, 48.0]);
}

#[test]
fn test_cumprod_2d_dim1_reverse_exclusive() {
    // Shape [2, 3]
    let result = run_scan("Cumprod", &[2i64, 3, 4, 1, 5, 6], &[2, 3], 1i32, true, true).unwrap();
    // [2, 3, 4] -> [12, 4, 1]
    // [1, 5, 6] -> [30, 6, 1]
    assert_eq!(result.to_vec::<i64>(), [12, 4, 1, 30, 6, 1]);
}

#[test]
fn test_cumprod_exclusive_forward() {
    let result = run_scan("Cumprod", &[2i32, 3, 4], &[3], 0i32, false, true).unwrap();
    assert_eq!(result.to_vec::<i32>(), [1, 2, 6]);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_scan_output_matches_input_shape() {
    let a: Vec<f32> = (0..120).map(|v| v as f32).collect();
    for axis in -5i64..5 {
        let result = run_scan("Cumsum", &a, &[2, 3, 4, 5, 1], axis, false, false).unwrap();
        assert_eq!(result.shape(), &[2, 3, 4, 5, 1], "axis {axis}");
        assert_eq!(result.dtype(), DType::F32);
    }
}

#[test]
fn test_scan_empty_tensor() {
    let result = run_scan::<f32, i32>("Cumsum", &[], &[3, 0, 2], 1, false, false).unwrap();
    assert_eq!(result.shape(), &[3, 0, 2]);
    assert_eq!(result.numel(), 0);
}

#[test]
fn test_scan_empty_axis_with_large_leading_dim() {
    let big = usize::MAX / 2;
    let result = run_scan::<f32, i32>("Cumsum", &[], &[big, 0], 1, false, false).unwrap();
    assert_eq!(result.shape(), &[big, 0]);
    assert_eq!(result.numel(), 0);

    let result = run_scan::<i64, i64>("Cumprod", &[], &[2, 0, big], -2, true, true).unwrap();
    assert_eq!(result.shape(), &[2, 0, big]);
    assert_eq!(result.numel(), 0);
}

#[test]
fn test_scan_axis_of_length_one() {
    let result = run_scan("Cumprod", &[4i64, 5, 6], &[3, 1], 1i64, false, true).unwrap();
    assert_eq!(result.to_vec::<i64>(), [1, 1, 1]);
}

#[test]
fn test_scan_axis_out_of_range() {
    let err = run_scan("Cumsum", &[1.0f32, 2.0], &[2], 1i32, false, false).unwrap_err();
    assert!(matches!(err, Error::AxisOutOfRange { axis: 1, ndim: 1 }));
    assert!(err.is_invalid_argument());

    let err = run_scan("Cumsum", &[1.0f32, 2.0], &[2], -2i64, false, false).unwrap_err();
    assert!(matches!(err, Error::AxisOutOfRange { axis: -2, ndim: 1 }));
}

#[test]
fn test_scan_scalar_operand_has_no_axis() {
    let err = run_scan("Cumsum", &[1.0f32], &[], 0i32, false, false).unwrap_err();
    assert!(matches!(err, Error::AxisOutOfRange { axis: 0, ndim: 0 }));
}
