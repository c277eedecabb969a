//! Session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SessionResult;

/// Tunables for a [`Session`](crate::Session).
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Grid rows. Derived from the viewport height when absent.
    pub rows: Option<usize>,
    /// Rows per viewport pixel of height, used when `rows` is absent.
    pub rows_per_pixel: f32,
    /// Share of live cells when reseeding.
    pub live_probability: f32,
    /// Time between generations while running.
    pub step_interval_ms: u64,
    /// Highest zoom level.
    pub max_zoom: u32,
    /// Natural log of the scale factor per zoom level.
    pub zoom_step: f32,
    /// Base opacity change per wheel notch.
    pub opacity_step: f32,
    /// Highest base opacity.
    pub max_base_opacity: f32,
    /// Opacity of dead cells at startup.
    pub base_opacity: f32,
    /// Step with the parallel kernel. Needs the `parallel` feature.
    pub parallel: bool,
    /// Seed for reproducible reseeding. OS entropy when absent.
    pub seed: Option<u64>,
    /// Start with the simulation paused.
    pub start_paused: bool,
    /// Seed the grid randomly at startup.
    pub randomize_on_start: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: None,
            rows_per_pixel: 2.0,
            live_probability: rhizome_petri_grid::DEFAULT_LIVE_PROBABILITY,
            step_interval_ms: 80,
            max_zoom: rhizome_petri_viewport::DEFAULT_MAX_ZOOM,
            zoom_step: rhizome_petri_viewport::DEFAULT_ZOOM_STEP,
            opacity_step: 0.01,
            max_base_opacity: 0.5,
            base_opacity: 0.0,
            parallel: false,
            seed: None,
            start_paused: false,
            randomize_on_start: true,
        }
    }
}

impl SessionConfig {
    /// Parses a JSON config.
    pub fn from_json(json: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the step interval as a [`Duration`].
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Row count for a viewport of the given height.
    pub fn grid_rows(&self, height: f32) -> usize {
        self.rows
            .unwrap_or_else(|| (height * self.rows_per_pixel).floor().max(0.0) as usize)
    }
}
