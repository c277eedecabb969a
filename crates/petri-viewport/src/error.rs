//! Viewport error types.

use thiserror::Error;

/// Errors that can occur when building or loading a viewport.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    /// Width or height is zero, negative or not finite.
    #[error("invalid viewport dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: f32,
        /// Requested height in pixels.
        height: f32,
    },

    /// A loaded transform is not a finite, invertible affine matrix.
    #[error("invalid viewport transform: {0}")]
    InvalidTransform(glam::Mat3),
}

/// Result type for viewport operations.
pub type ViewportResult<T> = Result<T, ViewportError>;
