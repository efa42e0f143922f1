// src/tensor/display.rs
use std::fmt::{self, Write};

use crate::tensor::Tensor;
use crate::types::Element;

/// Renders the elements as nested brackets, or `None` for an unbound tensor.
///
/// Elements print with six decimals. The innermost axis joins elements with
/// `,`; outer axes bracket each block and join blocks with `,\n`. The whole
/// rendering is wrapped in one more pair of brackets.
impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_bound() {
            return f.write_str("None");
        }
        let guard = self.read_data("to_string").map_err(|_| fmt::Error)?;
        let buffer = guard.storage.read_guard().map_err(|_| fmt::Error)?;

        let mut out = String::from("[");
        render_axis(
            &mut out,
            &buffer,
            &guard.shape,
            &guard.strides,
            0,
            guard.offset as isize,
        )?;
        out.push(']');
        f.write_str(&out)
    }
}

fn render_axis<T: Element>(
    out: &mut String,
    buffer: &[T],
    shape: &[usize],
    strides: &[isize],
    dim: usize,
    offset: isize,
) -> fmt::Result {
    let rank = shape.len();
    if dim == rank {
        let value = buffer.get(offset as usize).ok_or(fmt::Error)?;
        return write!(out, "{:.6}", value);
    }
    let innermost = dim == rank - 1;
    let mut offset = offset;
    for i in 0..shape[dim] {
        if innermost {
            if i != 0 {
                out.push(',');
            }
            render_axis(out, buffer, shape, strides, dim + 1, offset)?;
        } else {
            if i != 0 {
                out.push_str(",\n");
            }
            out.push('[');
            render_axis(out, buffer, shape, strides, dim + 1, offset)?;
            out.push(']');
        }
        offset += strides[dim];
    }
    Ok(())
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.read_data("debug") {
            Ok(guard) => write!(
                f,
                "Tensor(shape={:?}, strides={:?}, offset={}, dtype={:?})",
                guard.shape,
                guard.strides,
                guard.offset,
                T::DTYPE
            ),
            Err(_) if !self.is_bound() => write!(f, "Tensor(None)"),
            Err(_) => write!(f, "Tensor(Error: RwLock poisoned)"),
        }
    }
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;
