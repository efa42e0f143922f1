use std::sync::Arc;

use crate::error::TraphError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use crate::types::Element;

/// Element type conversions.
impl<T: Element> Tensor<T> {
    /// Converts the whole storage to element type `U` and views it with the
    /// same shape, strides and offset.
    ///
    /// The result owns fresh storage; writes to it never reach `self`.
    ///
    /// # Errors
    /// `UnboundTensor` if there is no storage, `InvalidArgument` if an element
    /// cannot be represented in `U`.
    pub fn cast<U: Element>(&self) -> Result<Tensor<U>, TraphError> {
        let guard = self.read_data("cast")?;
        let storage = guard.storage.cast::<U>()?;
        let data = TensorData::new_view(
            Arc::new(storage),
            guard.offset,
            guard.shape.clone(),
            guard.strides.clone(),
        );
        Ok(Tensor::from_data(data))
    }

    pub fn to_f32(&self) -> Result<Tensor<f32>, TraphError> {
        self.cast()
    }

    pub fn to_f64(&self) -> Result<Tensor<f64>, TraphError> {
        self.cast()
    }
}

#[cfg(test)]
#[path = "cast_methods_test.rs"]
mod tests;
