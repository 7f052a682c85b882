//! Integration tests for kernel registration and dispatch

mod common;

use common::{create_cpu_client, scan_node};
use numscan::dtype::DType;
use numscan::error::Error;
use numscan::kernel::{KernelDef, KernelRegistry, NodeDef, OpKernel};
use numscan::runtime::cpu::CpuRuntime;
use numscan::tensor::Tensor;

fn registry() -> KernelRegistry<CpuRuntime> {
    KernelRegistry::with_scan_kernels().unwrap()
}

#[test]
fn test_all_scan_signatures_registered() {
    let registry = registry();
    let mut dtypes = vec![DType::F32, DType::I32, DType::I64];
    if cfg!(feature = "f16") {
        dtypes.push(DType::F16);
    }
    for op in ["Cumsum", "Cumprod"] {
        for &dtype in &dtypes {
            for index_dtype in [DType::I32, DType::I64] {
                assert!(
                    registry.contains(&KernelDef::new(op, dtype, index_dtype)),
                    "{op} {dtype} {index_dtype}"
                );
            }
        }
    }
    assert_eq!(registry.len(), dtypes.len() * 4);
}

#[test]
fn test_kernel_name_matches_op() {
    let registry = registry();
    for op in ["Cumsum", "Cumprod"] {
        let kernel = registry
            .create_kernel(&scan_node(op, DType::I32, DType::I64, false, false))
            .unwrap();
        assert_eq!(kernel.name(), op);
    }
}

#[test]
fn test_unregistered_combinations() {
    let registry = registry();
    let unknown_op = scan_node("Cummax", DType::F32, DType::I32, false, false);
    assert!(matches!(
        registry.create_kernel(&unknown_op),
        Err(Error::KernelNotFound { .. })
    ));

    let float_index = scan_node("Cumsum", DType::F32, DType::F32, false, false);
    assert!(matches!(
        registry.create_kernel(&float_index),
        Err(Error::KernelNotFound { .. })
    ));

    let missing_tidx = NodeDef::new("Cumsum").with_attr("T", DType::F32);
    assert!(matches!(
        registry.create_kernel(&missing_tidx),
        Err(Error::MissingAttr { name: "Tidx" })
    ));
}

#[test]
fn test_output_shape_is_input_shape() {
    let kernel = registry()
        .create_kernel(&scan_node("Cumprod", DType::F32, DType::I32, false, false))
        .unwrap();
    let shapes = kernel.output_shapes(&[&[2, 3, 4], &[]]).unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].as_slice(), &[2, 3, 4]);
}

#[test]
fn test_compute_validates_inputs() {
    let client = create_cpu_client();
    let kernel = registry()
        .create_kernel(&scan_node("Cumsum", DType::F32, DType::I32, false, false))
        .unwrap();
    let x = Tensor::from_slice(&[1.0f32, 2.0, 3.0], &[3]);

    // Wrong input count
    let err = kernel.compute(&client, &[&x]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { arg: "inputs", .. }));

    // Non-scalar axis, whatever its value
    for value in [0i32, 5] {
        let axis = Tensor::from_slice(&[value], &[1]);
        let err = kernel.compute(&client, &[&x, &axis]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "axis", .. }));
    }

    // Axis of the wrong index width
    let axis = Tensor::from_scalar(0i64);
    let err = kernel.compute(&client, &[&x, &axis]).unwrap_err();
    assert!(matches!(err, Error::DTypeMismatch { .. }));

    // Operand of the wrong element type
    let y = Tensor::from_slice(&[1i32, 2, 3], &[3]);
    let axis = Tensor::from_scalar(0i32);
    let err = kernel.compute(&client, &[&y, &axis]).unwrap_err();
    assert!(matches!(
        err,
        Error::DTypeMismatch {
            lhs: DType::F32,
            rhs: DType::I32
        }
    ));
}

#[test]
fn test_kernels_are_shareable_across_threads() {
    let kernel = registry()
        .create_kernel(&scan_node("Cumsum", DType::I64, DType::I32, false, false))
        .unwrap();
    let kernel: &dyn OpKernel<CpuRuntime> = kernel.as_ref();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4i64)
            .map(|k| {
                s.spawn(move || {
                    let client = create_cpu_client();
                    let x = Tensor::from_slice(&[k, k, k], &[3]);
                    let axis = Tensor::from_scalar(0i32);
                    kernel.compute(&client, &[&x, &axis]).unwrap()[0].to_vec::<i64>()
                })
            })
            .collect();
        for (k, h) in handles.into_iter().enumerate() {
            let k = k as i64;
            assert_eq!(h.join().unwrap(), [k, 2 * k, 3 * k]);
        }
    });
}
