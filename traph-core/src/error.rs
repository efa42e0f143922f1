use thiserror::Error;

/// Custom error type for the traph tensor core.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum TraphError {
    #[error("Invalid shape {dims:?}: every dimension must be non-negative")]
    InvalidShape { dims: Vec<isize> },

    #[error("Storage allocation failed for {requested} elements")]
    AllocationError { requested: usize },

    #[error("Storage offset {offset} out of range for storage of length {len}")]
    OutOfRange { offset: usize, len: usize },

    #[error("Rank mismatch: expected at most {expected}, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error(
        "Slice ({start}, {step}, {stop}) out of bounds for axis {axis} with extent {extent}"
    )]
    SliceOutOfBounds {
        axis: usize,
        start: isize,
        step: isize,
        stop: isize,
        extent: usize,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Operation '{operation}' requires a bound tensor, but the tensor holds no storage")]
    UnboundTensor { operation: String },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Dimension {dim} out of range for tensor of rank {rank}")]
    DimensionOutOfRange { dim: isize, rank: usize },

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: String,
        actual: String,
        operation: String,
    },

    #[error("Failed to acquire {lock_type} lock: {reason}")]
    LockError { lock_type: String, reason: String },
}
