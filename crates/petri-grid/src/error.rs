//! Grid error types.

use thiserror::Error;

/// Errors that can occur when building or loading a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Grid has a zero dimension or too many cells to address.
    #[error("invalid grid dimensions: {cols}x{rows}")]
    InvalidDimensions {
        /// Requested column count.
        cols: usize,
        /// Requested row count.
        rows: usize,
    },

    /// A cell buffer does not hold `cols * rows` cells.
    #[error("grid buffers hold {current} and {next} cells, expected {expected}")]
    BufferLength {
        /// `cols * rows`.
        expected: usize,
        /// Length of the current generation.
        current: usize,
        /// Length of the scratch buffer.
        next: usize,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
