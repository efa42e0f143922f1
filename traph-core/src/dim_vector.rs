// src/dim_vector.rs

use crate::error::TraphError;

/// Ordered list of axis extents describing a tensor shape.
///
/// Entries are signed so that shapes coming from loosely typed callers can be
/// carried as-is and rejected with `InvalidShape` when a tensor is built.
/// An empty `DimVector` describes a scalar (rank 0) tensor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DimVector {
    dims: Vec<isize>,
}

impl DimVector {
    pub fn new() -> Self {
        DimVector { dims: Vec::new() }
    }

    /// Creates a `DimVector` of `len` zero extents.
    pub fn with_len(len: usize) -> Self {
        DimVector { dims: vec![0; len] }
    }

    /// Appends an axis extent.
    pub fn push_back(&mut self, extent: isize) {
        self.dims.push(extent);
    }

    pub fn len(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Returns true if `dim` addresses an axis, counting negative values from the end.
    pub fn in_range(&self, dim: isize) -> bool {
        self.normalize_dim(dim).is_some()
    }

    /// Extent of axis `dim`. Negative values count from the last axis.
    pub fn get(&self, dim: isize) -> Result<isize, TraphError> {
        let i = self.checked_dim(dim)?;
        Ok(self.dims[i])
    }

    /// Overwrites the extent of axis `dim`.
    pub fn set(&mut self, dim: isize, extent: isize) -> Result<(), TraphError> {
        let i = self.checked_dim(dim)?;
        self.dims[i] = extent;
        Ok(())
    }

    /// Removes axis `dim`, shifting later axes down.
    pub fn erase(&mut self, dim: isize) -> Result<isize, TraphError> {
        let i = self.checked_dim(dim)?;
        Ok(self.dims.remove(i))
    }

    /// Product of all extents. A scalar shape has one element.
    ///
    /// # Errors
    /// `AllocationError` if the product does not fit in an `isize`.
    pub fn flat_size(&self) -> Result<isize, TraphError> {
        self.dims
            .iter()
            .try_fold(1isize, |acc, &d| acc.checked_mul(d))
            .ok_or(TraphError::AllocationError {
                requested: usize::MAX,
            })
    }

    pub fn as_slice(&self) -> &[isize] {
        &self.dims
    }

    /// Validates the extents and converts them into a tensor shape.
    ///
    /// # Errors
    /// Returns `TraphError::InvalidShape` if any extent is negative.
    pub fn to_shape(&self) -> Result<Vec<usize>, TraphError> {
        if self.dims.iter().any(|&d| d < 0) {
            return Err(TraphError::InvalidShape {
                dims: self.dims.clone(),
            });
        }
        Ok(self.dims.iter().map(|&d| d as usize).collect())
    }

    fn normalize_dim(&self, dim: isize) -> Option<usize> {
        let rank = self.dims.len() as isize;
        let i = if dim < 0 { dim + rank } else { dim };
        if (0..rank).contains(&i) {
            Some(i as usize)
        } else {
            None
        }
    }

    fn checked_dim(&self, dim: isize) -> Result<usize, TraphError> {
        self.normalize_dim(dim)
            .ok_or(TraphError::DimensionOutOfRange {
                dim,
                rank: self.dims.len(),
            })
    }
}

impl From<Vec<usize>> for DimVector {
    fn from(shape: Vec<usize>) -> Self {
        DimVector::from(shape.as_slice())
    }
}

impl From<&[usize]> for DimVector {
    fn from(shape: &[usize]) -> Self {
        DimVector {
            dims: shape.iter().map(|&d| d as isize).collect(),
        }
    }
}

impl<const N: usize> From<[usize; N]> for DimVector {
    fn from(shape: [usize; N]) -> Self {
        DimVector::from(&shape[..])
    }
}

impl FromIterator<isize> for DimVector {
    fn from_iter<I: IntoIterator<Item = isize>>(iter: I) -> Self {
        DimVector {
            dims: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "dim_vector_test.rs"]
mod tests;
