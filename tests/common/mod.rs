//! Common test utilities
#![allow(dead_code)]

use numscan::dtype::{DType, Element, IndexElement};
use numscan::error::Result;
use numscan::kernel::{KernelRegistry, NodeDef};
use numscan::runtime::Runtime;
use numscan::runtime::cpu::{CpuClient, CpuRuntime};
use numscan::tensor::Tensor;

/// Route `log` output through the test harness
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a CPU client for testing
pub fn create_cpu_client() -> CpuClient {
    init_logger();
    CpuRuntime::default_client(&CpuRuntime::default_device())
}

/// Node definition for a scan operator
pub fn scan_node(op: &str, dtype: DType, index_dtype: DType, reverse: bool, exclusive: bool) -> NodeDef {
    NodeDef::new(op)
        .with_attr("T", dtype)
        .with_attr("Tidx", index_dtype)
        .with_attr("reverse", reverse)
        .with_attr("exclusive", exclusive)
}

/// Run `op` ("Cumsum" / "Cumprod") through the registry on the CPU runtime
pub fn run_scan<T: Element, I: IndexElement>(
    op: &str,
    data: &[T],
    shape: &[usize],
    axis: I,
    reverse: bool,
    exclusive: bool,
) -> Result<Tensor> {
    let client = create_cpu_client();
    let registry = KernelRegistry::<CpuRuntime>::with_scan_kernels()?;
    let kernel = registry.create_kernel(&scan_node(op, T::DTYPE, I::DTYPE, reverse, exclusive))?;
    let input = Tensor::try_from_slice(data, shape)?;
    let axis = Tensor::from_scalar(axis);
    let mut out = kernel.compute(&client, &[&input, &axis])?;
    assert_eq!(out.len(), 1, "scan returns exactly one tensor");
    Ok(out.remove(0))
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
