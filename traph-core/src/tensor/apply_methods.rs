use log::trace;

use crate::dim_vector::DimVector;
use crate::error::TraphError;
use crate::tensor::fill::checked_offsets;
use crate::tensor::iter_utils::StridedOffsetIter;
use crate::tensor::utils::normalize_dim;
use crate::tensor::Tensor;
use crate::types::Element;

/// Element-wise in-place updates, reductions and copies.
impl<T: Element> Tensor<T> {
    /// Replaces every addressable element `x` with `f(x)`.
    pub fn apply_<F>(&mut self, f: F) -> Result<(), TraphError>
    where
        F: Fn(T) -> T,
    {
        let guard = self.read_data("apply_")?;
        let offsets = checked_offsets(&guard)?;
        trace!("apply_: mapping {} elements", offsets.len());
        let mut buffer = guard.storage.write_guard()?;
        for offset in offsets {
            buffer[offset] = f(buffer[offset]);
        }
        Ok(())
    }

    pub fn sin_(&mut self) -> Result<(), TraphError> {
        self.apply_(|x| x.sin())
    }

    pub fn cos_(&mut self) -> Result<(), TraphError> {
        self.apply_(|x| x.cos())
    }

    /// Folds every element, in row-major logical order, starting from `init`.
    pub fn reduce<F>(&self, init: T, f: F) -> Result<T, TraphError>
    where
        F: Fn(T, T) -> T,
    {
        Ok(self.to_vec()?.into_iter().fold(init, f))
    }

    /// Sum of all elements as a one-element tensor of shape `[1]`.
    pub fn sum(&self) -> Result<Tensor<T>, TraphError> {
        let total = self.reduce(T::zero(), |acc, x| acc + x)?;
        Tensor::from_vec(vec![total], vec![1])
    }

    /// Folds along axis `dim`, which is removed from the result's shape.
    ///
    /// Each output element starts from zero and accumulates the elements of
    /// one lane of `dim` in index order. Reducing a rank-1 tensor yields a
    /// rank-0 tensor.
    ///
    /// # Errors
    /// `DimensionOutOfRange` if `dim` does not address an axis.
    pub fn reduce_dim<F>(&self, dim: isize, f: F) -> Result<Tensor<T>, TraphError>
    where
        F: Fn(T, T) -> T,
    {
        let guard = self.read_data("reduce_dim")?;
        let rank = guard.shape.len();
        let axis = normalize_dim(dim, rank).ok_or(TraphError::DimensionOutOfRange { dim, rank })?;

        let mut reduced = DimVector::from(guard.shape.as_slice());
        reduced.erase(dim)?;
        let mut lane_shape = guard.shape.clone();
        let mut lane_strides = guard.strides.clone();
        let extent = lane_shape.remove(axis);
        let stride = lane_strides.remove(axis);

        let buffer = guard.storage.read_guard()?;
        let len = buffer.len();
        let read = |offset: isize| -> Result<T, TraphError> {
            usize::try_from(offset)
                .ok()
                .and_then(|o| buffer.get(o).copied())
                .ok_or(TraphError::OutOfRange {
                    offset: offset.max(0) as usize,
                    len,
                })
        };

        let mut data = Vec::new();
        for base in StridedOffsetIter::new(&lane_shape, &lane_strides, guard.offset) {
            let mut acc = T::zero();
            let mut offset = base as isize;
            for _ in 0..extent {
                acc = f(acc, read(offset)?);
                offset += stride;
            }
            data.push(acc);
        }
        trace!(
            "reduce_dim: folded axis {} of extent {} into {} elements",
            axis,
            extent,
            data.len()
        );
        Tensor::from_vec(data, reduced.to_shape()?)
    }

    /// Sums along axis `dim`, removing it from the shape.
    pub fn sum_dim(&self, dim: isize) -> Result<Tensor<T>, TraphError> {
        self.reduce_dim(dim, |acc, x| acc + x)
    }

    /// Copies the logical elements into fresh contiguous storage.
    ///
    /// Unlike `clone`, the result shares nothing with `self`.
    pub fn deep_clone(&self) -> Result<Tensor<T>, TraphError> {
        let shape = self.shape()?;
        Tensor::from_vec(self.to_vec()?, shape)
    }
}

#[cfg(test)]
#[path = "apply_methods_test.rs"]
mod tests;
