use traph_core::{FloatTensor, Slice, SliceVector};

/// f32 tensor holding `0, 1, 2, ...` in row-major order.
#[allow(dead_code)]
pub fn arange_tensor(shape: &[usize]) -> FloatTensor {
    let numel: usize = shape.iter().product();
    FloatTensor::from_vec((0..numel).map(|x| x as f32).collect(), shape.to_vec())
        .expect("Test tensor creation failed")
}

/// Builds a `SliceVector` from `(start, step, stop)` triples.
#[allow(dead_code)]
pub fn slices(items: &[(isize, isize, isize)]) -> SliceVector {
    items
        .iter()
        .map(|&(start, step, stop)| Slice::new(start, step, stop))
        .collect()
}
