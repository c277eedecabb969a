//! Discrete zoom levels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest zoom level reachable by default.
pub const DEFAULT_MAX_ZOOM: u32 = 10;

/// Natural log of the scale factor applied per zoom level.
pub const DEFAULT_ZOOM_STEP: f32 = 0.4;

/// Integer zoom level clamped to `[0, max]`.
///
/// Each level change corresponds to scaling the view by `e^step`
/// (zooming in) or `e^-step` (zooming out).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZoomLevel {
    level: u32,
    max: u32,
    step: f32,
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ZOOM, DEFAULT_ZOOM_STEP)
    }
}

impl ZoomLevel {
    /// Creates a zoom level at 0.
    pub fn new(max: u32, step: f32) -> Self {
        Self { level: 0, max, step }
    }

    /// Returns the current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Returns the maximum level.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Raises the level, returning the scale factor if it changed.
    pub fn zoom_in(&mut self) -> Option<f32> {
        (self.level < self.max).then(|| {
            self.level += 1;
            self.step.exp()
        })
    }

    /// Lowers the level, returning the scale factor if it changed.
    pub fn zoom_out(&mut self) -> Option<f32> {
        (self.level > 0).then(|| {
            self.level -= 1;
            (-self.step).exp()
        })
    }

    /// Returns to level 0.
    pub fn reset(&mut self) {
        self.level = 0;
    }
}
