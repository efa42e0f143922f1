use approx::abs_diff_eq;

use crate::tensor::Tensor;
use crate::types::Element;

/// Checks that a tensor has the expected shape and that its logical elements
/// are within `tolerance` of `expected_data`.
/// Panics on the first mismatch, naming the offending position.
pub fn check_tensor_near<T: Element + approx::AbsDiffEq<Epsilon = T>>(
    actual: &Tensor<T>,
    expected_shape: &[usize],
    expected_data: &[T],
    tolerance: T,
) {
    let shape = actual.shape().expect("check_tensor_near on an unbound tensor");
    assert_eq!(shape, expected_shape, "Shape mismatch");

    let actual_data = actual
        .to_vec()
        .expect("Failed to read tensor data in check_tensor_near");
    assert_eq!(
        actual_data.len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual_data.iter().zip(expected_data.iter()).enumerate() {
        if !abs_diff_eq!(*a, *e, epsilon = tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, tolerance={:?}",
                i, a, e, tolerance
            );
        }
    }
}
