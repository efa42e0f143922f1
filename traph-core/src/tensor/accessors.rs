// src/tensor/accessors.rs
use std::sync::Arc;

use crate::error::TraphError;
use crate::storage::Storage;
use crate::tensor::iter_utils::StridedOffsetIter;
use crate::tensor::utils::normalize_dim;
use crate::tensor::Tensor;
use crate::types::{DType, Element};

impl<T: Element> Tensor<T> {
    /// Returns a clone of the tensor's shape.
    pub fn shape(&self) -> Result<Vec<usize>, TraphError> {
        Ok(self.read_data("shape")?.shape.clone())
    }

    /// Returns a clone of the tensor's strides.
    pub fn strides(&self) -> Result<Vec<isize>, TraphError> {
        Ok(self.read_data("strides")?.strides.clone())
    }

    /// Storage offset of the first element.
    pub fn offset(&self) -> Result<usize, TraphError> {
        Ok(self.read_data("offset")?.offset)
    }

    /// Number of axes.
    pub fn rank(&self) -> Result<usize, TraphError> {
        Ok(self.read_data("rank")?.shape.len())
    }

    /// Number of addressable elements.
    pub fn numel(&self) -> Result<usize, TraphError> {
        Ok(self.read_data("numel")?.numel())
    }

    /// Extent of axis `dim`; negative values count from the last axis.
    pub fn size(&self, dim: isize) -> Result<usize, TraphError> {
        let guard = self.read_data("size")?;
        let rank = guard.shape.len();
        let i = normalize_dim(dim, rank).ok_or(TraphError::DimensionOutOfRange { dim, rank })?;
        Ok(guard.shape[i])
    }

    /// Stride of axis `dim`; negative values count from the last axis.
    pub fn stride(&self, dim: isize) -> Result<isize, TraphError> {
        let guard = self.read_data("stride")?;
        let rank = guard.strides.len();
        let i = normalize_dim(dim, rank).ok_or(TraphError::DimensionOutOfRange { dim, rank })?;
        Ok(guard.strides[i])
    }

    pub fn is_contiguous(&self) -> Result<bool, TraphError> {
        Ok(self.read_data("is_contiguous")?.is_contiguous())
    }

    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Shared handle to the underlying storage.
    pub fn storage(&self) -> Result<Arc<Storage<T>>, TraphError> {
        Ok(Arc::clone(&self.read_data("storage")?.storage))
    }

    /// True if both tensors are bound to the same storage buffer.
    pub fn shares_storage_with(&self, other: &Tensor<T>) -> bool {
        match (self.storage(), other.storage()) {
            (Ok(a), Ok(b)) => Arc::ptr_eq(&a, &b),
            _ => false,
        }
    }

    /// Reads the element at a multi-index.
    pub fn get(&self, indices: &[usize]) -> Result<T, TraphError> {
        let guard = self.read_data("get")?;
        let offset = guard.get_offset(indices)?;
        guard.storage.read(offset)
    }

    /// Writes the element at a multi-index.
    pub fn set(&self, indices: &[usize], value: T) -> Result<(), TraphError> {
        let guard = self.read_data("set")?;
        let offset = guard.get_offset(indices)?;
        guard.storage.write(offset, value)
    }

    /// Extracts the value of a single-element tensor.
    pub fn item(&self) -> Result<T, TraphError> {
        let guard = self.read_data("item")?;
        if guard.numel() != 1 {
            return Err(TraphError::ShapeMismatch {
                expected: "1 element".to_string(),
                actual: format!("{} elements (shape {:?})", guard.numel(), guard.shape),
                operation: "item()".to_string(),
            });
        }
        guard.storage.read(guard.offset)
    }

    /// Copies the logical elements out in row-major order.
    pub fn to_vec(&self) -> Result<Vec<T>, TraphError> {
        let guard = self.read_data("to_vec")?;
        let buffer = guard.storage.read_guard()?;
        StridedOffsetIter::new(&guard.shape, &guard.strides, guard.offset)
            .map(|offset| {
                buffer.get(offset).copied().ok_or(TraphError::OutOfRange {
                    offset,
                    len: buffer.len(),
                })
            })
            .collect()
    }
}
