// src/tensor/create.rs

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::dim_vector::DimVector;
use crate::error::TraphError;
use crate::tensor::Tensor;
use crate::tensor_data::checked_numel;
use crate::types::Element;

/// Builds a tensor of the given shape and fills it with `value`.
fn filled<T: Element>(shape: &[usize], value: T) -> Result<Tensor<T>, TraphError> {
    let dims = DimVector::from(shape);
    let mut tensor = Tensor::new(&dims)?;
    tensor.fill_(value)?;
    Ok(tensor)
}

/// Creates a new f32 tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Result<Tensor<f32>, TraphError> {
    filled(shape, 0.0f32)
}

/// Creates a new f64 tensor filled with zeros with the specified shape.
pub fn zeros_f64(shape: &[usize]) -> Result<Tensor<f64>, TraphError> {
    filled(shape, 0.0f64)
}

/// Creates a new f32 tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Result<Tensor<f32>, TraphError> {
    filled(shape, 1.0f32)
}

/// Creates a new f64 tensor filled with ones with the specified shape.
pub fn ones_f64(shape: &[usize]) -> Result<Tensor<f64>, TraphError> {
    filled(shape, 1.0f64)
}

/// Creates a new f32 tensor filled with a specific value.
pub fn full(shape: &[usize], value: f32) -> Result<Tensor<f32>, TraphError> {
    filled(shape, value)
}

pub fn full_f64(shape: &[usize], value: f64) -> Result<Tensor<f64>, TraphError> {
    filled(shape, value)
}

pub fn from_vec_f32(data: Vec<f32>, shape: Vec<usize>) -> Result<Tensor<f32>, TraphError> {
    Tensor::from_vec(data, shape)
}

pub fn from_vec_f64(data: Vec<f64>, shape: Vec<usize>) -> Result<Tensor<f64>, TraphError> {
    Tensor::from_vec(data, shape)
}

/// Creates a zero tensor with the same shape and element type as `tensor`.
pub fn zeros_like<T: Element>(tensor: &Tensor<T>) -> Result<Tensor<T>, TraphError> {
    filled(&tensor.shape()?, T::zero())
}

/// Creates a tensor of ones with the same shape and element type as `tensor`.
pub fn ones_like<T: Element>(tensor: &Tensor<T>) -> Result<Tensor<T>, TraphError> {
    filled(&tensor.shape()?, T::one())
}

/// 1-d tensor holding `start, start + step, ...` up to but excluding `end`.
pub fn arange(start: f32, end: f32, step: f32) -> Result<Tensor<f32>, TraphError> {
    if step == 0.0 || (end > start && step < 0.0) || (end < start && step > 0.0) {
        return Err(TraphError::InvalidArgument(format!(
            "Invalid step {} for arange({}, {})",
            step, start, end
        )));
    }
    let numel = ((end - start) / step).ceil().max(0.0) as usize;
    let data: Vec<f32> = (0..numel).map(|i| start + i as f32 * step).collect();
    Tensor::from_vec(data, vec![numel])
}

/// Tensor of samples drawn uniformly from `[0, 1)`.
pub fn rand(shape: &[usize]) -> Result<Tensor<f32>, TraphError> {
    let numel = checked_numel(shape)?;
    let mut rng = ::rand::thread_rng();
    let data: Vec<f32> = (0..numel).map(|_| rng.gen::<f32>()).collect();
    Tensor::from_vec(data, shape.to_vec())
}

/// Tensor of samples drawn from the standard normal distribution.
pub fn randn(shape: &[usize]) -> Result<Tensor<f32>, TraphError> {
    let numel = checked_numel(shape)?;
    let mut rng = ::rand::thread_rng();
    let data: Vec<f32> = (0..numel).map(|_| StandardNormal.sample(&mut rng)).collect();
    Tensor::from_vec(data, shape.to_vec())
}

/// A shape argument as handed over by a dynamically typed caller.
///
/// Only a tuple of integers names a shape; every other kind is rejected
/// with `InvalidArgument`.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeArg {
    Tuple(Vec<i64>),
    List(Vec<i64>),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ShapeArg {
    /// Converts the argument into a `DimVector`.
    ///
    /// Negative entries are carried through; they fail with `InvalidShape`
    /// when the tensor is constructed.
    pub fn to_dims(&self) -> Result<DimVector, TraphError> {
        match self {
            ShapeArg::Tuple(values) => Ok(values.iter().map(|&v| v as isize).collect()),
            other => Err(TraphError::InvalidArgument(format!(
                "The type of shape shall be tuple, got {:?}",
                other
            ))),
        }
    }
}

/// `zeros` for a loosely typed shape argument.
pub fn zeros_from_arg(shape: &ShapeArg) -> Result<Tensor<f32>, TraphError> {
    let mut tensor = Tensor::new(&shape.to_dims()?)?;
    tensor.fill_(0.0)?;
    Ok(tensor)
}

/// `ones` for a loosely typed shape argument.
pub fn ones_from_arg(shape: &ShapeArg) -> Result<Tensor<f32>, TraphError> {
    let mut tensor = Tensor::new(&shape.to_dims()?)?;
    tensor.fill_(1.0)?;
    Ok(tensor)
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
