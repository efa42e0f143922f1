/// Calculates the row-major strides for a given shape.
/// Strides represent the number of elements to skip in the flat storage
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<isize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1isize; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1] as isize;
    }
    strides
}

/// Resolves a possibly negative axis against a rank.
pub(crate) fn normalize_dim(dim: isize, rank: usize) -> Option<usize> {
    let rank_i = rank as isize;
    let i = if dim < 0 { dim + rank_i } else { dim };
    if (0..rank_i).contains(&i) {
        Some(i as usize)
    } else {
        None
    }
}
