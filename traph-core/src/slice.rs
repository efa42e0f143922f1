// src/slice.rs

use std::ops::Range;

use crate::error::TraphError;

/// A strided half-open range `start, start + step, ...` stopping before `stop`.
///
/// Fields are signed so that reversed ranges can run past index 0
/// (`Slice::new(2, -1, -1)` selects `2, 1, 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: isize,
    pub step: isize,
    pub stop: isize,
}

/// A validated `Slice` resolved against one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRange {
    /// First selected index in the original axis.
    pub start: usize,
    /// Distance between consecutive selected indices.
    pub step: isize,
    /// Number of selected indices (extent of the axis after slicing).
    pub len: usize,
}

impl Slice {
    pub fn new(start: isize, step: isize, stop: isize) -> Self {
        Slice { start, step, stop }
    }

    /// Length-1 slice selecting index `i`.
    pub fn index(i: isize) -> Self {
        Slice::new(i, 1, i.saturating_add(1))
    }

    /// Unrestricted slice over an axis of `extent` elements.
    pub fn full(extent: usize) -> Self {
        Slice::new(0, 1, extent as isize)
    }

    /// Full-range slice walking an axis of `extent` elements backwards.
    pub fn reversed(extent: usize) -> Self {
        Slice::new(extent as isize - 1, -1, -1)
    }

    /// Number of indices this slice yields, ignoring axis bounds.
    ///
    /// Returns `None` when the step is zero or points away from `stop`.
    pub fn selected_len(&self) -> Option<usize> {
        if self.step == 0 {
            return None;
        }
        // Widened so that extreme starts, stops and steps cannot overflow
        let distance = if self.step > 0 {
            self.stop as i128 - self.start as i128
        } else {
            self.start as i128 - self.stop as i128
        };
        if distance < 0 {
            return None;
        }
        if distance == 0 {
            return Some(0);
        }
        let step = self.step.unsigned_abs() as i128;
        usize::try_from((distance - 1) / step + 1).ok()
    }

    /// Validates this slice against an axis and resolves it to a `SliceRange`.
    ///
    /// An empty selection may start at `extent` (one past the last index).
    /// A non-empty selection must have its first and last index inside the axis.
    ///
    /// # Errors
    /// Returns `TraphError::SliceOutOfBounds` for a zero or wrong-direction step,
    /// a negative start, or a selected index outside `[0, extent)`.
    pub fn resolve(&self, axis: usize, extent: usize) -> Result<SliceRange, TraphError> {
        let out_of_bounds = || TraphError::SliceOutOfBounds {
            axis,
            start: self.start,
            step: self.step,
            stop: self.stop,
            extent,
        };

        let len = self.selected_len().ok_or_else(out_of_bounds)?;
        let extent_i = extent as isize;
        if self.start < 0 || self.start > extent_i {
            return Err(out_of_bounds());
        }
        if len > 0 {
            let last = self.start as i128 + (len as i128 - 1) * self.step as i128;
            if self.start >= extent_i || last < 0 || last >= extent as i128 {
                return Err(out_of_bounds());
            }
        }

        Ok(SliceRange {
            start: self.start as usize,
            step: self.step,
            len,
        })
    }
}

impl From<Range<usize>> for Slice {
    fn from(range: Range<usize>) -> Self {
        Slice::new(range.start as isize, 1, range.end as isize)
    }
}

impl SliceRange {
    /// Combines two successive selections into one.
    ///
    /// `self` was applied to the original axis and `inner` to the axis it
    /// produced; the result selects the same indices from the original axis.
    pub fn compose(&self, inner: &SliceRange) -> Slice {
        if inner.len == 0 {
            // Anchored at the outer start, which is always a valid empty position
            return Slice::new(self.start as isize, 1, self.start as isize);
        }
        let start = self.start as isize + inner.start as isize * self.step;
        let step = self.step.saturating_mul(inner.step);
        let stop = start.saturating_add((inner.len as isize).saturating_mul(step));
        Slice::new(start, step, stop)
    }
}

/// Ordered list of slices, at most one per axis, in axis order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceVector {
    slices: Vec<Slice>,
}

impl SliceVector {
    pub fn new() -> Self {
        SliceVector { slices: Vec::new() }
    }

    pub fn push_back(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn get(&self, axis: usize) -> Option<&Slice> {
        self.slices.get(axis)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }

    pub fn as_slice(&self) -> &[Slice] {
        &self.slices
    }
}

impl From<Vec<Slice>> for SliceVector {
    fn from(slices: Vec<Slice>) -> Self {
        SliceVector { slices }
    }
}

impl From<&[Slice]> for SliceVector {
    fn from(slices: &[Slice]) -> Self {
        SliceVector {
            slices: slices.to_vec(),
        }
    }
}

impl FromIterator<Slice> for SliceVector {
    fn from_iter<I: IntoIterator<Item = Slice>>(iter: I) -> Self {
        SliceVector {
            slices: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SliceVector {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod tests;
