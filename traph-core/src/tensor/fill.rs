// Logic for the in-place fill operation

use log::trace;

use crate::error::TraphError;
use crate::tensor::iter_utils::StridedOffsetIter;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use crate::types::Element;

impl<T: Element> Tensor<T> {
    /// Writes `value` into every element addressable through this tensor.
    ///
    /// The multi-index space is enumerated, so on a strided view only the
    /// view's own elements change; storage elements it skips are left alone.
    ///
    /// # Errors
    /// `UnboundTensor` if there is no storage, `OutOfRange` if the metadata
    /// addresses past the storage. Nothing is written when an error is returned.
    pub fn fill_(&mut self, value: T) -> Result<(), TraphError> {
        let guard = self.read_data("fill_")?;
        let offsets = checked_offsets(&guard)?;
        trace!("fill_: writing {} into {} elements", value, offsets.len());
        let mut buffer = guard.storage.write_guard()?;
        for offset in offsets {
            buffer[offset] = value;
        }
        Ok(())
    }
}

/// Storage offsets of every element of a view, each checked against the
/// storage length so callers can write through them without partial failure.
pub(crate) fn checked_offsets<T: Element>(data: &TensorData<T>) -> Result<Vec<usize>, TraphError> {
    let len = data.storage.len();
    StridedOffsetIter::new(&data.shape, &data.strides, data.offset)
        .map(|offset| {
            if offset < len {
                Ok(offset)
            } else {
                Err(TraphError::OutOfRange { offset, len })
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "fill_test.rs"]
mod tests;
