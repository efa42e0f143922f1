//! Strided N-dimensional tensor core.
//!
//! A [`Storage`] owns a flat element buffer; a [`Tensor`] interprets it through
//! shape, strides and an offset. Slicing with [`Tensor::select`] derives views
//! that share the storage of their source.

pub mod dim_vector;
pub mod error;
pub mod index;
pub mod slice;
pub mod storage;
pub mod tensor;
pub mod tensor_data;
pub mod types;
pub mod utils;

pub use dim_vector::DimVector;
pub use error::TraphError;
pub use index::IndexItem;
pub use slice::{Slice, SliceRange, SliceVector};
pub use storage::Storage;
pub use tensor::{ones, zeros, DoubleTensor, FloatTensor, ShapeArg, Tensor};
pub use types::{DType, Element};
// Re-export traits required by public functions/structs
pub use num_traits;
