//! Pattern error types.

use thiserror::Error;

/// Errors produced while decoding or loading patterns.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A live run reaches past the declared pattern size.
    #[error("live cell at row {row}, column {col} is outside the {columns}x{rows} pattern")]
    OutOfBounds {
        /// Row of the first rejected cell.
        row: usize,
        /// Column of the first rejected cell.
        col: usize,
        /// Declared column count.
        columns: usize,
        /// Declared row count.
        rows: usize,
    },

    /// Token action is not one of `o`, `b`, `$`, `!`.
    #[error("unknown pattern action: {0:?}")]
    UnknownAction(char),

    /// Run count does not fit in a `usize`.
    #[error("invalid run count: {0}")]
    InvalidCount(String),

    /// Input ended after a run count with no action character.
    #[error("run count without an action")]
    MissingAction,

    /// Declared pattern size has a zero side, or a side over
    /// [`MAX_PATTERN_SIDE`](crate::MAX_PATTERN_SIDE).
    #[error("invalid pattern dimensions: {columns}x{rows}")]
    InvalidDimensions {
        /// Declared column count.
        columns: usize,
        /// Declared row count.
        rows: usize,
    },

    /// Catalog JSON could not be parsed.
    #[error("catalog error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;
