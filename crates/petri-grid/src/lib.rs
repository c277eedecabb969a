//! Toroidal Game of Life grid.
//!
//! [`LifeGrid`] owns two equal-length cell buffers. `current` is the
//! authoritative generation; `next` is scratch space for [`LifeGrid::step`]
//! and is swapped in once the whole generation is computed, so a partially
//! updated generation is never observable.
//!
//! Coordinates wrap on both axes: `(x, y)` addresses column
//! `x mod cols` of row `y mod rows`, for any `i32` values.
//!
//! # Example
//!
//! ```
//! use rhizome_petri_grid::LifeGrid;
//!
//! let mut grid = LifeGrid::new(5, 5).unwrap();
//! grid.edit_cell(1, 2, true);
//! grid.edit_cell(2, 2, true);
//! grid.edit_cell(3, 2, true);
//!
//! grid.step();
//! assert!(grid.get(2, 1) && grid.get(2, 2) && grid.get(2, 3));
//! assert!(!grid.get(1, 2));
//! ```

mod error;
mod kernel;

pub use error::{GridError, GridResult};
#[cfg(feature = "parallel")]
pub use kernel::Parallel;
pub use kernel::{Sequential, StepKernel, next_state};

use rand::{Rng, SeedableRng, rngs::StdRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default share of live cells for [`LifeGrid::randomize`].
pub const DEFAULT_LIVE_PROBABILITY: f32 = 0.3;

/// Number of floats per cell in an opacity buffer: `(x, y, opacity)`.
pub const BUFFER_STRIDE: usize = 3;

/// Double-buffered toroidal Life grid.
///
/// With the `serde` feature, deserialization runs the same checks as
/// [`LifeGrid::new`] and also rejects buffers of the wrong length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct LifeGrid {
    cols: usize,
    rows: usize,
    current: Vec<bool>,
    next: Vec<bool>,
    generation: u64,
}

impl LifeGrid {
    /// Creates an all-dead grid of `cols x rows` cells.
    ///
    /// Columns come first, as in `(x, y)` coordinates. Both dimensions must
    /// be non-zero and fit in an `i32`.
    pub fn new(cols: usize, rows: usize) -> GridResult<Self> {
        let len = checked_len(cols, rows)?;

        Ok(Self {
            cols,
            rows,
            current: vec![false; len],
            next: vec![false; len],
            generation: 0,
        })
    }

    /// Returns the column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Always false; grids have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Returns the number of steps since the last clear or randomize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flat row-major index of a wrapped coordinate.
    pub fn index(&self, x: i32, y: i32) -> usize {
        let col = x.rem_euclid(self.cols as i32) as usize;
        let row = y.rem_euclid(self.rows as i32) as usize;
        row * self.cols + col
    }

    /// Gets the state of a cell.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.current[self.index(x, y)]
    }

    /// Sets a cell in both buffers, whatever its current state.
    ///
    /// Used for painting and erasing.
    pub fn edit_cell(&mut self, x: i32, y: i32, alive: bool) {
        let i = self.index(x, y);
        self.current[i] = alive;
        self.next[i] = alive;
    }

    /// Sets a cell in both buffers only if it is currently dead.
    ///
    /// Used for pattern stamping: a pattern never erases or overwrites a
    /// live cell already on the board.
    pub fn stamp_cell(&mut self, x: i32, y: i32, alive: bool) {
        let i = self.index(x, y);
        if !self.current[i] {
            self.current[i] = alive;
            self.next[i] = alive;
        }
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.current.fill(false);
        self.next.fill(false);
        self.generation = 0;
    }

    /// Reseeds every cell from a seeded generator.
    pub fn randomize(&mut self, seed: u64, live_probability: f32) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.randomize_with(&mut rng, live_probability);
    }

    /// Reseeds every cell: each is alive with `live_probability`, clamped to `[0, 1]`.
    ///
    /// Both buffers receive the same value.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, live_probability: f32) {
        let p = if live_probability.is_nan() {
            0.0
        } else {
            f64::from(live_probability.clamp(0.0, 1.0))
        };

        for (cur, next) in self.current.iter_mut().zip(self.next.iter_mut()) {
            let alive = rng.random_bool(p);
            *cur = alive;
            *next = alive;
        }
        self.generation = 0;
    }

    /// Counts live Moore neighbors of a cell, with wraparound.
    pub fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        let i = self.index(x, y);
        kernel::live_neighbors(&self.current, i % self.cols, i / self.cols, self.cols, self.rows)
    }

    /// Advances one generation with the [`Sequential`] kernel.
    pub fn step(&mut self) {
        self.step_with(&Sequential);
    }

    /// Advances one generation with the given kernel.
    pub fn step_with<K: StepKernel + ?Sized>(&mut self, kernel: &K) {
        kernel.step(&self.current, &mut self.next, self.cols, self.rows);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "generation {} population {}",
                self.generation,
                self.population()
            );
        }
    }

    /// Advances multiple generations.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Counts live cells.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&c| c).count()
    }

    /// Returns the current generation in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.current
    }

    /// Writes cell opacities into a `(x, y, opacity)` buffer.
    ///
    /// Live cells get `1.0`, dead cells `base_opacity`. Positions are left
    /// untouched. Extra triplets on either side are ignored.
    pub fn export_opacity_buffer(&self, buffer: &mut [f32], base_opacity: f32) {
        for (triplet, &alive) in buffer.chunks_exact_mut(BUFFER_STRIDE).zip(&self.current) {
            triplet[2] = if alive { 1.0 } else { base_opacity };
        }
    }
}

fn checked_len(cols: usize, rows: usize) -> GridResult<usize> {
    let max = i32::MAX as usize;
    cols.checked_mul(rows)
        .filter(|_| cols > 0 && rows > 0 && cols <= max && rows <= max)
        .ok_or(GridError::InvalidDimensions { cols, rows })
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGrid {
    cols: usize,
    rows: usize,
    current: Vec<bool>,
    next: Vec<bool>,
    generation: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for LifeGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> GridResult<Self> {
        let expected = checked_len(raw.cols, raw.rows)?;
        if raw.current.len() != expected || raw.next.len() != expected {
            return Err(GridError::BufferLength {
                expected,
                current: raw.current.len(),
                next: raw.next.len(),
            });
        }

        Ok(Self {
            cols: raw.cols,
            rows: raw.rows,
            current: raw.current,
            next: raw.next,
            generation: raw.generation,
        })
    }
}
