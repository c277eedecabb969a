//! The session context object.

use std::time::Duration;

use glam::{Mat3, Vec2};
use rand::{SeedableRng, rngs::StdRng};
use rhizome_petri_grid::LifeGrid;
use rhizome_petri_pattern::Pattern;
use rhizome_petri_viewport::{Viewport, ZoomLevel};

use crate::command::{Command, Modifiers};
use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::layout::CellLayout;

/// What the renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// `(x, y, opacity)` per cell, row-major.
    pub buffer: &'a [f32],
    /// Maps buffer positions to clip space.
    pub matrix: Mat3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Paint,
    Pan { last: Vec2 },
}

/// Grid, viewport and UI state for one interactive board.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    grid: LifeGrid,
    viewport: Viewport,
    layout: CellLayout,
    buffer: Vec<f32>,
    zoom: ZoomLevel,
    base_opacity: f32,
    paused: bool,
    gesture: Gesture,
    last_edited: Option<usize>,
    elapsed: Duration,
    rng: StdRng,
}

impl Session {
    /// Builds a session for a `width x height` viewport.
    ///
    /// The grid size is fixed here for the session's lifetime.
    pub fn new(config: SessionConfig, width: f32, height: f32) -> SessionResult<Self> {
        let viewport = Viewport::new(width, height)?;
        let layout = CellLayout::new(width, height, config.grid_rows(height))?;
        let grid = LifeGrid::new(layout.cols(), layout.rows())?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        if config.parallel && cfg!(not(feature = "parallel")) {
            log::warn!("parallel stepping requested but the `parallel` feature is disabled");
        }

        log::info!(
            "session started: {}x{} cells in a {width}x{height} viewport",
            grid.cols(),
            grid.rows()
        );

        let mut session = Self {
            buffer: layout.coordinate_buffer(),
            zoom: ZoomLevel::new(config.max_zoom, config.zoom_step),
            base_opacity: config.base_opacity.clamp(0.0, config.max_base_opacity),
            paused: config.start_paused,
            gesture: Gesture::Idle,
            last_edited: None,
            elapsed: Duration::ZERO,
            config,
            grid,
            viewport,
            layout,
            rng,
        };

        if session.config.randomize_on_start {
            session
                .grid
                .randomize_with(&mut session.rng, session.config.live_probability);
        }

        Ok(session)
    }

    /// Returns the config the session was built with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the grid.
    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the cell layout.
    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    /// Returns the zoom level.
    pub fn zoom_level(&self) -> u32 {
        self.zoom.level()
    }

    /// Returns the opacity drawn for dead cells.
    pub fn base_opacity(&self) -> f32 {
        self.base_opacity
    }

    /// Returns true if the simulation is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pauses or resumes. Takes effect at the next [`tick`](Self::tick).
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::info!("simulation {}", if paused { "paused" } else { "running" });
        }
        self.paused = paused;
    }

    /// Applies one command.
    ///
    /// Only [`Command::Resize`] can fail.
    pub fn handle(&mut self, command: Command) -> SessionResult<()> {
        match command {
            Command::ToggleRun => self.set_paused(!self.paused),
            Command::Reseed => self.reseed(),
            Command::ClearAndPause => self.clear_and_pause(),
            Command::PointerDown { x, y, modifiers } => self.pointer_down(x, y, modifiers),
            Command::PointerMove { x, y, modifiers } => self.pointer_move(x, y, modifiers),
            Command::PointerUp => self.pointer_up(),
            Command::Wheel {
                x,
                y,
                delta_y,
                modifiers,
            } => self.wheel(x, y, delta_y, modifiers),
            Command::DropPattern { pattern, x, y } => self.stamp_pattern(&pattern, x, y),
            Command::Resize { width, height } => self.resize(width, height)?,
        }
        Ok(())
    }

    /// Advances the simulation clock.
    ///
    /// Steps once when running and at least one interval has accumulated.
    /// Returns true if a generation was computed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.paused {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed < self.config.step_interval() {
            return false;
        }

        self.elapsed = Duration::ZERO;
        self.step();
        true
    }

    /// Computes one generation, paused or not.
    pub fn step(&mut self) {
        self.step_grid();
    }

    #[cfg(feature = "parallel")]
    fn step_grid(&mut self) {
        if self.config.parallel {
            self.grid.step_with(&rhizome_petri_grid::Parallel);
        } else {
            self.grid.step();
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn step_grid(&mut self) {
        self.grid.step();
    }

    /// Refreshes the opacity buffer and returns it with the view matrix.
    pub fn frame(&mut self) -> Frame<'_> {
        self.grid.export_opacity_buffer(&mut self.buffer, self.base_opacity);
        Frame {
            buffer: &self.buffer,
            matrix: self.viewport.final_matrix(),
        }
    }

    /// Replaces the board with random cells.
    pub fn reseed(&mut self) {
        self.grid
            .randomize_with(&mut self.rng, self.config.live_probability);
        log::info!("board reseeded: {} live cells", self.grid.population());
    }

    /// Kills every cell and pauses.
    pub fn clear_and_pause(&mut self) {
        self.grid.clear();
        self.set_paused(true);
        log::info!("board cleared");
    }

    /// Stamps a pattern centered on a screen point.
    ///
    /// Cells already alive are never overwritten.
    pub fn stamp_pattern(&mut self, pattern: &Pattern, x: f32, y: f32) {
        let matrix = pattern.decode();
        let anchor = self
            .layout
            .cell_at_wrapping(self.viewport.to_grid_coords(x, y));

        let origin_x = anchor.0.saturating_sub(offset(matrix.columns() / 2));
        let origin_y = anchor.1.saturating_sub(offset(matrix.rows() / 2));

        // Dead matrix cells leave the board unchanged, so only live ones are stamped.
        for (col, row) in matrix.alive_cells() {
            self.grid.stamp_cell(
                origin_x.wrapping_add(offset(col)),
                origin_y.wrapping_add(offset(row)),
                true,
            );
        }

        log::debug!(
            "stamped {:?} ({}x{}) at cell {:?}",
            pattern.name,
            matrix.columns(),
            matrix.rows(),
            anchor
        );
    }

    /// Rebuilds the viewport for a new size and refits the board.
    ///
    /// Pan and zoom are reset; grid dimensions stay the same.
    pub fn resize(&mut self, width: f32, height: f32) -> SessionResult<()> {
        self.viewport.resize(width, height)?;
        self.layout = CellLayout::fit(width, height, self.grid.cols(), self.grid.rows());
        self.layout.write_positions(&mut self.buffer);
        self.zoom.reset();
        log::info!("viewport resized to {width}x{height}");
        Ok(())
    }

    fn pointer_down(&mut self, x: f32, y: f32, modifiers: Modifiers) {
        if modifiers.ctrl {
            self.gesture = Gesture::Pan {
                last: Vec2::new(x, y),
            };
        } else {
            self.gesture = Gesture::Paint;
            self.paint_at(x, y, !modifiers.shift);
        }
    }

    fn pointer_move(&mut self, x: f32, y: f32, modifiers: Modifiers) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Paint => self.paint_at(x, y, !modifiers.shift),
            Gesture::Pan { last } => {
                let from = self.viewport.projected_point(x, y);
                let to = self.viewport.projected_point(last.x, last.y);
                self.viewport.pan(from, to);
                self.viewport.enforce_bounds();
                self.gesture = Gesture::Pan {
                    last: Vec2::new(x, y),
                };
            }
        }
    }

    fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
        self.last_edited = None;
    }

    fn paint_at(&mut self, x: f32, y: f32, alive: bool) {
        let point = self.viewport.to_grid_coords(x, y);
        let Some((col, row)) = self.layout.cell_at(point) else {
            return;
        };

        let index = self.grid.index(col, row);
        if self.last_edited != Some(index) {
            self.grid.edit_cell(col, row, alive);
            self.last_edited = Some(index);
        }
    }

    fn wheel(&mut self, x: f32, y: f32, delta_y: f32, modifiers: Modifiers) {
        if modifiers.shift {
            let step = self.config.opacity_step;
            let max = self.config.max_base_opacity;
            if delta_y > 0.0 && self.base_opacity > 0.0 {
                self.base_opacity = (self.base_opacity - step).max(0.0);
            } else if delta_y < 0.0 && self.base_opacity < max {
                self.base_opacity = (self.base_opacity + step).min(max);
            }
            return;
        }

        let scale = if delta_y < 0.0 {
            self.zoom.zoom_in()
        } else if delta_y > 0.0 {
            self.zoom.zoom_out()
        } else {
            None
        };

        if let Some(scale) = scale {
            self.viewport.zoom_at(x, y, scale);
            self.viewport.enforce_bounds();
            log::debug!("zoom level {}", self.zoom.level());
        }
    }
}

fn offset(cells: usize) -> i32 {
    i32::try_from(cells).unwrap_or(i32::MAX)
}
