//! Generation kernels.
//!
//! A kernel computes one generation from `current` into `next`. It must
//! write every cell of `next` and read only `current`, so the result is a
//! pure function of the previous generation. [`LifeGrid`](crate::LifeGrid)
//! swaps the buffers once the kernel returns.

/// Computes the next generation of a toroidal grid.
pub trait StepKernel {
    /// Fills `next` from `current`. Both slices hold `cols * rows` cells in row-major order.
    fn step(&self, current: &[bool], next: &mut [bool], cols: usize, rows: usize);
}

/// Single-threaded kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl StepKernel for Sequential {
    fn step(&self, current: &[bool], next: &mut [bool], cols: usize, rows: usize) {
        for (y, row) in next.chunks_mut(cols).enumerate() {
            step_row(current, row, y, cols, rows);
        }
    }
}

/// Kernel that splits rows across the rayon thread pool.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Parallel;

#[cfg(feature = "parallel")]
impl StepKernel for Parallel {
    fn step(&self, current: &[bool], next: &mut [bool], cols: usize, rows: usize) {
        use rayon::prelude::*;

        next.par_chunks_mut(cols)
            .enumerate()
            .for_each(|(y, row)| step_row(current, row, y, cols, rows));
    }
}

/// Conway's rule (B3/S23).
///
/// A dead cell with exactly three live neighbors is born, a live cell with
/// fewer than two or more than three dies, every other cell keeps its state.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (false, 3) => true,
        (true, n) if !(2..=3).contains(&n) => false,
        (state, _) => state,
    }
}

/// Counts live Moore neighbors of `(x, y)` with wraparound.
pub(crate) fn live_neighbors(current: &[bool], x: usize, y: usize, cols: usize, rows: usize) -> u8 {
    let up = (y + rows - 1) % rows;
    let down = (y + 1) % rows;
    let left = (x + cols - 1) % cols;
    let right = (x + 1) % cols;

    [
        (left, up),
        (x, up),
        (right, up),
        (left, y),
        (right, y),
        (left, down),
        (x, down),
        (right, down),
    ]
    .into_iter()
    .filter(|&(nx, ny)| current[ny * cols + nx])
    .count() as u8
}

fn step_row(current: &[bool], row: &mut [bool], y: usize, cols: usize, rows: usize) {
    for (x, cell) in row.iter_mut().enumerate() {
        let neighbors = live_neighbors(current, x, y, cols, rows);
        *cell = next_state(current[y * cols + x], neighbors);
    }
}
