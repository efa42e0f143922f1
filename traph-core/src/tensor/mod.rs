// src/tensor/mod.rs

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dim_vector::DimVector;
use crate::error::TraphError;
use crate::tensor_data::TensorData;
use crate::types::Element;

mod accessors;
mod apply_methods;
mod cast_methods;
mod display;
mod fill;
mod traits;
mod view_methods;

pub mod create;
pub mod iter_utils;
pub mod utils;

// Re-export creation functions to make them public
pub use create::{
    arange, from_vec_f32, from_vec_f64, full, full_f64, ones, ones_f64, ones_from_arg,
    ones_like, rand, randn, zeros, zeros_f64, zeros_from_arg, zeros_like, ShapeArg,
};

/// A strided N-dimensional view over shared element storage.
///
/// A tensor is either **unbound** (no storage; only rendering as `"None"` and
/// dropping are meaningful) or **bound** to an `Arc<RwLock<TensorData<T>>>`
/// that pairs a shared `Storage` with shape, strides and offset.
///
/// Cloning a `Tensor` is shallow: clones share the same metadata and storage.
/// `select` and `transpose` create new metadata over the same storage, so
/// writes through a view are visible through every tensor aliasing it.
pub struct Tensor<T: Element = f32> {
    pub(crate) data: Option<Arc<RwLock<TensorData<T>>>>,
}

/// The reference floating-point tensor.
pub type FloatTensor = Tensor<f32>;
/// Double-precision tensor.
pub type DoubleTensor = Tensor<f64>;

impl<T: Element> Tensor<T> {
    /// Creates a tensor with no storage attached.
    pub fn unbound() -> Self {
        Tensor { data: None }
    }

    /// Creates a zero-initialized, row-major tensor of the given dimensions.
    ///
    /// An empty `DimVector` yields a rank-0 tensor holding one element.
    ///
    /// # Errors
    /// `InvalidShape` if a dimension is negative, `AllocationError` if the
    /// storage cannot be reserved.
    pub fn new(dims: &DimVector) -> Result<Self, TraphError> {
        let shape = dims.to_shape()?;
        Ok(Self::from_data(TensorData::new(shape)?))
    }

    /// Same as [`Tensor::new`] for an already validated shape.
    pub fn from_shape(shape: &[usize]) -> Result<Self, TraphError> {
        Ok(Self::from_data(TensorData::new(shape.to_vec())?))
    }

    /// Creates a tensor over `data`, read in row-major order.
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self, TraphError> {
        Ok(Self::from_data(TensorData::from_vec(data, shape)?))
    }

    pub(crate) fn from_data(data: TensorData<T>) -> Self {
        Tensor {
            data: Some(Arc::new(RwLock::new(data))),
        }
    }

    /// True once storage is attached.
    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    /// Acquires a read lock on the tensor's metadata.
    ///
    /// `operation` names the caller for the `UnboundTensor` error.
    pub fn read_data(
        &self,
        operation: &str,
    ) -> Result<RwLockReadGuard<'_, TensorData<T>>, TraphError> {
        let data = self.data.as_ref().ok_or_else(|| TraphError::UnboundTensor {
            operation: operation.to_string(),
        })?;
        data.read().map_err(|e| TraphError::LockError {
            lock_type: "read".to_string(),
            reason: format!("{} on poisoned tensor data: {}", operation, e),
        })
    }

    /// Acquires a write lock on the tensor's metadata.
    pub fn write_data(
        &self,
        operation: &str,
    ) -> Result<RwLockWriteGuard<'_, TensorData<T>>, TraphError> {
        let data = self.data.as_ref().ok_or_else(|| TraphError::UnboundTensor {
            operation: operation.to_string(),
        })?;
        data.write().map_err(|e| TraphError::LockError {
            lock_type: "write".to_string(),
            reason: format!("{} on poisoned tensor data: {}", operation, e),
        })
    }
}
