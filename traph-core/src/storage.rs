// src/storage.rs

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use num_traits::NumCast;

use crate::error::TraphError;
use crate::types::Element;

/// Owning, fixed-size, contiguous element buffer.
///
/// A `Storage` knows nothing about shapes. Tensors share it through an
/// `Arc<Storage<T>>`, so it is released when the last tensor referencing it is
/// dropped. The buffer sits behind an `RwLock`: many readers or one writer at a
/// time, which makes aliased views safe to use across threads.
#[derive(Debug)]
pub struct Storage<T: Element> {
    data: RwLock<Vec<T>>,
    len: usize,
}

impl<T: Element> Storage<T> {
    /// Allocates a buffer of `n` elements, all set to `T::zero()`.
    ///
    /// # Errors
    /// Returns `TraphError::AllocationError` if the memory cannot be reserved.
    pub fn allocate(n: usize) -> Result<Self, TraphError> {
        let mut data: Vec<T> = Vec::new();
        data.try_reserve_exact(n)
            .map_err(|_| TraphError::AllocationError { requested: n })?;
        data.resize(n, T::zero());
        debug!("Storage: allocated {} elements of {:?}", n, T::DTYPE);
        Ok(Storage {
            data: RwLock::new(data),
            len: n,
        })
    }

    /// Wraps an existing vector without copying it.
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Storage {
            data: RwLock::new(data),
            len,
        }
    }

    /// Number of elements in the buffer. Fixed at construction.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads the element at a raw buffer offset.
    pub fn read(&self, offset: usize) -> Result<T, TraphError> {
        self.check_offset(offset)?;
        let guard = self.read_guard()?;
        Ok(guard[offset])
    }

    /// Writes the element at a raw buffer offset.
    pub fn write(&self, offset: usize, value: T) -> Result<(), TraphError> {
        self.check_offset(offset)?;
        let mut guard = self.write_guard()?;
        guard[offset] = value;
        Ok(())
    }

    /// Copies the whole buffer out.
    pub fn to_vec(&self) -> Result<Vec<T>, TraphError> {
        Ok(self.read_guard()?.clone())
    }

    /// Creates an independent storage holding a copy of this buffer.
    pub fn deep_clone(&self) -> Result<Self, TraphError> {
        Ok(Storage::from_vec(self.to_vec()?))
    }

    /// Copies the buffer into a new storage of element type `U`.
    ///
    /// # Errors
    /// `InvalidArgument` if an element has no representation in `U`.
    pub fn cast<U: Element>(&self) -> Result<Storage<U>, TraphError> {
        let converted = self
            .read_guard()?
            .iter()
            .map(|&x| {
                <U as NumCast>::from(x).ok_or_else(|| {
                    TraphError::InvalidArgument(format!(
                        "cannot cast {} from {:?} to {:?}",
                        x,
                        T::DTYPE,
                        U::DTYPE
                    ))
                })
            })
            .collect::<Result<Vec<U>, _>>()?;
        debug!(
            "Storage: cast {} elements from {:?} to {:?}",
            converted.len(),
            T::DTYPE,
            U::DTYPE
        );
        Ok(Storage::from_vec(converted))
    }

    pub fn to_f32(&self) -> Result<Storage<f32>, TraphError> {
        self.cast()
    }

    pub fn to_f64(&self) -> Result<Storage<f64>, TraphError> {
        self.cast()
    }

    /// Acquires the read lock on the buffer.
    pub(crate) fn read_guard(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, TraphError> {
        self.data.read().map_err(|e| TraphError::LockError {
            lock_type: "read".to_string(),
            reason: format!("storage buffer poisoned: {}", e),
        })
    }

    /// Acquires the write lock on the buffer.
    pub(crate) fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, TraphError> {
        self.data.write().map_err(|e| TraphError::LockError {
            lock_type: "write".to_string(),
            reason: format!("storage buffer poisoned: {}", e),
        })
    }

    fn check_offset(&self, offset: usize) -> Result<(), TraphError> {
        if offset >= self.len {
            return Err(TraphError::OutOfRange {
                offset,
                len: self.len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
