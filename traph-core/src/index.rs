// src/index.rs

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::slice::Slice;

/// One entry of an element-access expression: a bare index or a range.
///
/// Missing range bounds are resolved against the axis extent when the item is
/// turned into a [`Slice`]. With a negative step, `start` defaults to the last
/// index and `stop` to `-1`, so `IndexItem::range(None, Some(-1), None)` walks
/// the whole axis backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexItem {
    Index(isize),
    Range {
        start: Option<isize>,
        step: Option<isize>,
        stop: Option<isize>,
    },
}

impl IndexItem {
    pub fn range(start: Option<isize>, step: Option<isize>, stop: Option<isize>) -> Self {
        IndexItem::Range { start, step, stop }
    }

    /// The whole axis, like `:`.
    pub fn all() -> Self {
        IndexItem::range(None, None, None)
    }

    /// Resolves this item against an axis of `extent` elements.
    pub fn to_slice(&self, extent: usize) -> Slice {
        match *self {
            IndexItem::Index(i) => Slice::index(i),
            IndexItem::Range { start, step, stop } => {
                let step = step.unwrap_or(1);
                let extent = extent as isize;
                if step < 0 && extent == 0 {
                    // Nothing to walk; keep the defaults on the empty position
                    Slice::new(start.unwrap_or(0), step, stop.unwrap_or(0))
                } else if step < 0 {
                    Slice::new(start.unwrap_or(extent - 1), step, stop.unwrap_or(-1))
                } else {
                    Slice::new(start.unwrap_or(0), step, stop.unwrap_or(extent))
                }
            }
        }
    }
}

impl From<usize> for IndexItem {
    fn from(i: usize) -> Self {
        IndexItem::Index(i as isize)
    }
}

impl From<isize> for IndexItem {
    fn from(i: isize) -> Self {
        IndexItem::Index(i)
    }
}

impl From<i32> for IndexItem {
    fn from(i: i32) -> Self {
        IndexItem::Index(i as isize)
    }
}

impl From<Slice> for IndexItem {
    fn from(s: Slice) -> Self {
        IndexItem::range(Some(s.start), Some(s.step), Some(s.stop))
    }
}

impl From<Range<usize>> for IndexItem {
    fn from(r: Range<usize>) -> Self {
        IndexItem::range(Some(r.start as isize), None, Some(r.end as isize))
    }
}

impl From<RangeFrom<usize>> for IndexItem {
    fn from(r: RangeFrom<usize>) -> Self {
        IndexItem::range(Some(r.start as isize), None, None)
    }
}

impl From<RangeTo<usize>> for IndexItem {
    fn from(r: RangeTo<usize>) -> Self {
        IndexItem::range(None, None, Some(r.end as isize))
    }
}

impl From<RangeFull> for IndexItem {
    fn from(_: RangeFull) -> Self {
        IndexItem::all()
    }
}

#[cfg(test)]
mod tests {
    use super::IndexItem;
    use crate::slice::Slice;

    #[test]
    fn test_bare_index_becomes_unit_slice() {
        assert_eq!(IndexItem::from(2usize).to_slice(5), Slice::new(2, 1, 3));
        assert_eq!(IndexItem::from(0i32).to_slice(1), Slice::new(0, 1, 1));
    }

    #[test]
    fn test_range_defaults() {
        assert_eq!(IndexItem::from(..).to_slice(4), Slice::new(0, 1, 4));
        assert_eq!(IndexItem::from(1usize..).to_slice(4), Slice::new(1, 1, 4));
        assert_eq!(IndexItem::from(..3usize).to_slice(4), Slice::new(0, 1, 3));
        assert_eq!(IndexItem::from(1usize..3).to_slice(4), Slice::new(1, 1, 3));
    }

    #[test]
    fn test_negative_step_defaults() {
        let reverse = IndexItem::range(None, Some(-1), None);
        assert_eq!(reverse.to_slice(3), Slice::reversed(3));
        let every_other = IndexItem::range(None, Some(-2), None);
        assert_eq!(every_other.to_slice(5), Slice::new(4, -2, -1));
    }

    #[test]
    fn test_negative_step_on_empty_axis() {
        let reverse = IndexItem::range(None, Some(-1), None).to_slice(0);
        assert_eq!(reverse, Slice::new(0, -1, 0));
        assert_eq!(reverse.selected_len(), Some(0));
        assert!(reverse.resolve(0, 0).is_ok());
    }

    #[test]
    fn test_explicit_slice_passthrough() {
        let s = Slice::new(3, -1, 0);
        assert_eq!(IndexItem::from(s).to_slice(10), s);
    }
}
