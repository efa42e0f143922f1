/// Iterator over the storage offsets of every element of a strided view, in
/// row-major logical order.
///
/// Walks the multi-index like an odometer, so non-contiguous and reversed
/// views are visited without touching storage elements outside the view.
#[derive(Debug, Clone)]
pub struct StridedOffsetIter<'a> {
    shape: &'a [usize],
    strides: &'a [isize],
    coord: Vec<usize>,
    current: isize,
    remaining: usize,
}

impl<'a> StridedOffsetIter<'a> {
    pub fn new(shape: &'a [usize], strides: &'a [isize], offset: usize) -> Self {
        StridedOffsetIter {
            shape,
            strides,
            coord: vec![0; shape.len()],
            current: offset as isize,
            remaining: shape.iter().product(),
        }
    }
}

impl<'a> Iterator for StridedOffsetIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.current as usize;
        self.remaining -= 1;
        if self.remaining > 0 {
            // Advance the innermost axis, carrying into outer axes
            for dim in (0..self.shape.len()).rev() {
                self.coord[dim] += 1;
                self.current += self.strides[dim];
                if self.coord[dim] < self.shape[dim] {
                    break;
                }
                self.current -= self.strides[dim] * self.shape[dim] as isize;
                self.coord[dim] = 0;
            }
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StridedOffsetIter<'_> {}
