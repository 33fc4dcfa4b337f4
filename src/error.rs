use thiserror::Error;

use crate::coefficients::Direction;

/// Error types for finite-difference operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DifferentiationError {
    /// Derivative order outside 1..=4
    #[error("Unsupported derivative order: {0}. Supported orders are 1 through 4")]
    UnsupportedOrder(usize),
    /// The stencil would read outside the sample sequence
    #[error(
        "Index out of range for {direction} difference of order {order}: index {index}, length {len}"
    )]
    IndexOutOfRange {
        direction: Direction,
        order: usize,
        index: usize,
        len: usize,
    },
    /// Step size is zero or not finite
    #[error("Invalid step size: {0}. Step must be finite and nonzero")]
    InvalidStep(f64),
    /// Too few samples to estimate a step size
    #[error("Insufficient data: {len} points. Need at least {required} points")]
    InsufficientData { len: usize, required: usize },
    /// Neither centered, forward nor backward stencil fits at this index
    #[error("No stencil of order {order} fits at index {index} of a series of length {len}")]
    NoStencilFits { index: usize, order: usize, len: usize },
    /// Mathematical computation error (e.g., singular matrix)
    #[error("Computation error: {0}")]
    ComputationError(String),
}

/// Result type for finite-difference operations
pub type Result<T> = std::result::Result<T, DifferentiationError>;
