// src/tensor_data.rs
use std::sync::Arc;

use crate::error::TraphError;
use crate::storage::Storage;
use crate::tensor::utils::calculate_strides;
use crate::types::Element;

/// Storage handle plus the metadata that interprets it as an N-d array.
///
/// Held by `Tensor` inside an `Arc<RwLock<TensorData<T>>>`. Views created by
/// slicing or transposing get their own `TensorData` sharing the same
/// `Arc<Storage<T>>`.
#[derive(Debug)]
pub struct TensorData<T: Element> {
    /// The shared element buffer.
    pub(crate) storage: Arc<Storage<T>>,
    /// Extent of each axis.
    pub(crate) shape: Vec<usize>,
    /// Storage elements to advance per step along each axis. Negative for reversed axes.
    pub(crate) strides: Vec<isize>,
    /// Storage offset of the element at multi-index `[0, 0, ...]`.
    pub(crate) offset: usize,
}

impl<T: Element> TensorData<T> {
    /// Allocates zeroed storage for `shape` and lays it out in row-major order.
    ///
    /// A rank-0 shape gets a single element.
    pub fn new(shape: Vec<usize>) -> Result<Self, TraphError> {
        let numel = checked_numel(&shape)?;
        let storage = Storage::allocate(numel)?;
        Ok(TensorData {
            storage: Arc::new(storage),
            strides: calculate_strides(&shape),
            shape,
            offset: 0,
        })
    }

    /// Wraps row-major data of the given shape.
    ///
    /// # Errors
    /// Returns `TraphError::ShapeMismatch` if `data.len()` differs from the
    /// number of elements `shape` describes.
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self, TraphError> {
        let numel = checked_numel(&shape)?;
        if data.len() != numel {
            return Err(TraphError::ShapeMismatch {
                expected: format!("{} elements for shape {:?}", numel, shape),
                actual: format!("{} elements", data.len()),
                operation: "from_vec".to_string(),
            });
        }
        Ok(TensorData {
            storage: Arc::new(Storage::from_vec(data)),
            strides: calculate_strides(&shape),
            shape,
            offset: 0,
        })
    }

    /// Metadata for a view over an existing storage. No element data is copied.
    pub(crate) fn new_view(
        storage: Arc<Storage<T>>,
        offset: usize,
        shape: Vec<usize>,
        strides: Vec<isize>,
    ) -> Self {
        TensorData {
            storage,
            shape,
            strides,
            offset,
        }
    }

    pub fn storage(&self) -> &Arc<Storage<T>> {
        &self.storage
    }

    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Storage offset of the element at `indices`.
    ///
    /// # Errors
    /// `RankMismatch` if `indices.len()` differs from the rank, `IndexOutOfBounds`
    /// if any index is outside its axis.
    pub fn get_offset(&self, indices: &[usize]) -> Result<usize, TraphError> {
        if indices.len() != self.shape.len() {
            return Err(TraphError::RankMismatch {
                expected: self.shape.len(),
                actual: indices.len(),
            });
        }
        if indices.iter().zip(&self.shape).any(|(&i, &d)| i >= d) {
            return Err(TraphError::IndexOutOfBounds {
                index: indices.to_vec(),
                shape: self.shape.clone(),
            });
        }
        let relative: isize = indices
            .iter()
            .zip(&self.strides)
            .map(|(&i, &s)| i as isize * s)
            .sum();
        Ok((self.offset as isize + relative) as usize)
    }

    /// True if the elements are laid out in row-major order without gaps.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = 1isize;
        for (&dim, &stride) in self.shape.iter().zip(&self.strides).rev() {
            if dim == 0 {
                return true;
            }
            if dim != 1 {
                if stride != expected {
                    return false;
                }
                expected *= dim as isize;
            }
        }
        true
    }
}

/// Number of elements a shape describes, rejecting products that overflow `usize`.
pub(crate) fn checked_numel(shape: &[usize]) -> Result<usize, TraphError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or(TraphError::AllocationError {
            requested: usize::MAX,
        })
}
