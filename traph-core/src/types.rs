use num_traits::{Float, NumCast};
use std::fmt::{Debug, Display};

/// Defines the data types a tensor element can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating-point type.
    F32,
    /// 64-bit floating-point type.
    F64,
}

/// Element types that can live in a `Storage` and be viewed through a `Tensor`.
///
/// Only floating-point instantiations are provided; `f32` is the reference type.
pub trait Element:
    Float + NumCast + Default + Debug + Display + Send + Sync + 'static
{
    /// Runtime tag for this element type.
    const DTYPE: DType;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;
}
