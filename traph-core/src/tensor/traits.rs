// src/tensor/traits.rs

use std::sync::Arc;

use crate::tensor::Tensor;
use crate::types::Element;

impl<T: Element> Clone for Tensor<T> {
    /// Shallow clone: shares metadata and storage with `self`.
    fn clone(&self) -> Self {
        Tensor {
            data: self.data.as_ref().map(Arc::clone),
        }
    }
}

impl<T: Element> Default for Tensor<T> {
    /// The unbound tensor.
    fn default() -> Self {
        Tensor::unbound()
    }
}

impl<T: Element> PartialEq for Tensor<T> {
    /// Tensors are equal when they have the same shape and logical elements.
    /// Two unbound tensors are equal; layout and storage identity are ignored.
    fn eq(&self, other: &Self) -> bool {
        match (&self.data, &other.data) {
            (None, None) => true,
            (Some(a), Some(b)) if Arc::ptr_eq(a, b) => true,
            (Some(_), Some(_)) => {
                match (self.shape(), other.shape()) {
                    (Ok(s1), Ok(s2)) if s1 == s2 => {}
                    _ => return false,
                }
                match (self.to_vec(), other.to_vec()) {
                    (Ok(v1), Ok(v2)) => v1 == v2,
                    _ => false,
                }
            }
            _ => false,
        }
    }
}
