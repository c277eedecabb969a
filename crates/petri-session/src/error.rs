//! Session error types.

use rhizome_petri_grid::GridError;
use rhizome_petri_viewport::ViewportError;
use thiserror::Error;

/// Errors that can occur while building or resizing a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Grid construction failed.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// Viewport construction failed.
    #[error("viewport error: {0}")]
    Viewport(#[from] ViewportError),

    /// The viewport cannot hold a single column of cells.
    #[error("cannot lay out {rows} rows in a {width}x{height} viewport")]
    Layout {
        /// Viewport width in pixels.
        width: f32,
        /// Viewport height in pixels.
        height: f32,
        /// Requested row count.
        rows: usize,
    },

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
