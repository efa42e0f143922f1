use std::sync::Arc;

use log::debug;

use crate::error::TraphError;
use crate::index::IndexItem;
use crate::slice::{Slice, SliceRange, SliceVector};
use crate::tensor::utils::normalize_dim;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use crate::types::Element;

/// Methods deriving views of a `Tensor`.
///
/// Views share storage with the source tensor and differ only in shape,
/// strides and offset. They are frequently non-contiguous.
impl<T: Element> Tensor<T> {
    /// Derives a view selecting a strided range along each axis.
    ///
    /// Axes without a slice are taken whole. For each sliced axis the new
    /// extent is the number of selected indices, the new stride is the old
    /// stride times the slice step, and the offset advances by
    /// `start * old_stride`. No element data is copied.
    ///
    /// # Errors
    /// * `RankMismatch` if `slices` has more entries than the tensor has axes.
    /// * `SliceOutOfBounds` if a slice does not fit its axis.
    /// * `UnboundTensor` if the tensor has no storage.
    ///
    /// # Example
    /// ```
    /// use traph_core::{FloatTensor, Slice, SliceVector};
    ///
    /// let t = FloatTensor::from_vec((0..6).map(|x| x as f32).collect(), vec![2, 3]).unwrap();
    /// let view = t.select(&SliceVector::from(vec![Slice::new(1, 1, 2), Slice::new(0, 2, 3)])).unwrap();
    /// assert_eq!(view.shape().unwrap(), vec![1, 2]);
    /// assert_eq!(view.to_vec().unwrap(), vec![3.0, 5.0]);
    /// ```
    pub fn select(&self, slices: &SliceVector) -> Result<Self, TraphError> {
        let guard = self.read_data("select")?;
        let rank = guard.shape.len();
        if slices.len() > rank {
            return Err(TraphError::RankMismatch {
                expected: rank,
                actual: slices.len(),
            });
        }

        let mut new_shape = Vec::with_capacity(rank);
        let mut new_strides = Vec::with_capacity(rank);
        let mut new_offset = guard.offset as isize;
        for axis in 0..rank {
            let extent = guard.shape[axis];
            let stride = guard.strides[axis];
            let range = match slices.get(axis) {
                Some(slice) => slice.resolve(axis, extent)?,
                None => SliceRange {
                    start: 0,
                    step: 1,
                    len: extent,
                },
            };
            let new_stride = match stride.checked_mul(range.step) {
                Some(s) => s,
                // A single selected index is never stepped over
                None if range.len <= 1 => stride,
                None => {
                    let slice = slices.get(axis).copied().unwrap_or_else(|| Slice::full(extent));
                    return Err(TraphError::SliceOutOfBounds {
                        axis,
                        start: slice.start,
                        step: slice.step,
                        stop: slice.stop,
                        extent,
                    });
                }
            };
            new_shape.push(range.len);
            new_strides.push(new_stride);
            new_offset += range.start as isize * stride;
        }

        // An empty view addresses nothing; keep the source offset so it stays a valid position
        let offset = if new_shape.contains(&0) {
            guard.offset
        } else {
            new_offset as usize
        };

        debug!(
            "select: view shape={:?} strides={:?} offset={}",
            new_shape, new_strides, offset
        );
        let view = TensorData::new_view(Arc::clone(&guard.storage), offset, new_shape, new_strides);
        Ok(Tensor::from_data(view))
    }

    /// Element-access sugar: converts each item to a slice and calls [`Tensor::select`].
    ///
    /// A bare index `i` becomes `Slice(i, 1, i + 1)`. The axis is kept with
    /// extent 1, so indexing never reduces rank.
    pub fn index(&self, items: &[IndexItem]) -> Result<Self, TraphError> {
        let shape = self.shape()?;
        if items.len() > shape.len() {
            return Err(TraphError::RankMismatch {
                expected: shape.len(),
                actual: items.len(),
            });
        }
        let slices: SliceVector = items
            .iter()
            .zip(&shape)
            .map(|(item, &extent)| item.to_slice(extent))
            .collect();
        self.select(&slices)
    }

    /// Returns a view with axes `dim0` and `dim1` swapped.
    pub fn transpose(&self, dim0: isize, dim1: isize) -> Result<Self, TraphError> {
        let guard = self.read_data("transpose")?;
        let (a, b) = checked_axes(dim0, dim1, guard.shape.len())?;
        let mut shape = guard.shape.clone();
        let mut strides = guard.strides.clone();
        shape.swap(a, b);
        strides.swap(a, b);
        debug!(
            "transpose: view shape={:?} strides={:?} offset={}",
            shape, strides, guard.offset
        );
        let view = TensorData::new_view(Arc::clone(&guard.storage), guard.offset, shape, strides);
        Ok(Tensor::from_data(view))
    }

    /// Swaps axes `dim0` and `dim1` in place.
    ///
    /// Affects every handle cloned from this tensor, but not other views.
    pub fn transpose_(&mut self, dim0: isize, dim1: isize) -> Result<(), TraphError> {
        let mut guard = self.write_data("transpose_")?;
        let (a, b) = checked_axes(dim0, dim1, guard.shape.len())?;
        guard.shape.swap(a, b);
        guard.strides.swap(a, b);
        Ok(())
    }
}

fn checked_axes(dim0: isize, dim1: isize, rank: usize) -> Result<(usize, usize), TraphError> {
    let a = normalize_dim(dim0, rank).ok_or(TraphError::DimensionOutOfRange { dim: dim0, rank })?;
    let b = normalize_dim(dim1, rank).ok_or(TraphError::DimensionOutOfRange { dim: dim1, rank })?;
    Ok((a, b))
}

#[cfg(test)]
#[path = "view_methods_test.rs"]
mod tests;
