//! Cell geometry in viewport pixels.

use glam::Vec2;
use rhizome_petri_grid::BUFFER_STRIDE;

use crate::error::{SessionError, SessionResult};

/// Square cells laid out on the viewport, centered on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    cols: usize,
    rows: usize,
    side: f32,
    offset: Vec2,
}

impl CellLayout {
    /// Fits `rows` rows to the viewport height and as many columns as fit the width.
    pub fn new(width: f32, height: f32, rows: usize) -> SessionResult<Self> {
        let invalid = SessionError::Layout {
            width,
            height,
            rows,
        };
        if rows == 0 || !(height > 0.0) {
            return Err(invalid);
        }

        let side = height / rows as f32;
        let cols = (width / side).floor();
        if !(cols >= 1.0 && cols.is_finite()) {
            return Err(invalid);
        }

        Ok(Self::fit(width, height, cols as usize, rows))
    }

    /// Fits a fixed `cols x rows` board inside the viewport.
    pub fn fit(width: f32, height: f32, cols: usize, rows: usize) -> Self {
        let side = (height / rows as f32).min(width / cols as f32);
        let board = Vec2::new(side * cols as f32, side * rows as f32);
        Self {
            cols,
            rows,
            side,
            offset: (Vec2::new(width, height) - board) / 2.0,
        }
    }

    /// Returns the column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the cell side in pixels.
    pub fn side(&self) -> f32 {
        self.side
    }

    /// Returns the board's top-left corner in pixels.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Center of a cell in pixels.
    pub fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        self.offset + (Vec2::new(col as f32, row as f32) + 0.5) * self.side
    }

    /// Cell under a pixel, `None` off the board.
    pub fn cell_at(&self, point: Vec2) -> Option<(i32, i32)> {
        let (col, row) = self.cell_at_wrapping(point);
        let on_board = (0..self.cols as i64).contains(&i64::from(col))
            && (0..self.rows as i64).contains(&i64::from(row));
        on_board.then_some((col, row))
    }

    /// Cell under a pixel, extending the lattice past the board edges.
    pub fn cell_at_wrapping(&self, point: Vec2) -> (i32, i32) {
        let cell = ((point - self.offset) / self.side).floor();
        (cell.x as i32, cell.y as i32)
    }

    /// Builds an `(x, y, opacity)` buffer with every cell's center and zero opacity.
    pub fn coordinate_buffer(&self) -> Vec<f32> {
        let mut buffer = vec![0.0; self.cols * self.rows * BUFFER_STRIDE];
        self.write_positions(&mut buffer);
        buffer
    }

    /// Rewrites the positions of an existing buffer, leaving opacities alone.
    pub fn write_positions(&self, buffer: &mut [f32]) {
        for (i, triplet) in buffer.chunks_exact_mut(BUFFER_STRIDE).enumerate() {
            let center = self.cell_center(i % self.cols, i / self.cols);
            triplet[0] = center.x;
            triplet[1] = center.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_columns() {
        let layout = CellLayout::new(105.0, 50.0, 10).unwrap();
        assert_eq!(layout.rows(), 10);
        assert_eq!(layout.cols(), 21);
        assert!((layout.side() - 5.0).abs() < 1e-6);
        // Leftover width is split between both sides.
        assert!((layout.offset() - Vec2::new(0.0, 0.0)).length() < 1e-6);

        let layout = CellLayout::new(107.0, 50.0, 10).unwrap();
        assert!((layout.offset().x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_new_rejects_degenerate() {
        assert!(CellLayout::new(100.0, 50.0, 0).is_err());
        assert!(CellLayout::new(1.0, 50.0, 10).is_err());
    }

    #[test]
    fn test_fit_centers_board() {
        let layout = CellLayout::fit(200.0, 50.0, 20, 10);
        assert!((layout.side() - 5.0).abs() < 1e-6);
        assert!((layout.offset() - Vec2::new(50.0, 0.0)).length() < 1e-5);

        let layout = CellLayout::fit(100.0, 100.0, 20, 10);
        assert!((layout.side() - 5.0).abs() < 1e-6);
        assert!((layout.offset() - Vec2::new(0.0, 25.0)).length() < 1e-5);
    }

    #[test]
    fn test_cell_center_and_lookup() {
        let layout = CellLayout::new(100.0, 50.0, 10).unwrap();
        assert!((layout.cell_center(0, 0) - Vec2::new(2.5, 2.5)).length() < 1e-6);
        assert!((layout.cell_center(3, 2) - Vec2::new(17.5, 12.5)).length() < 1e-6);

        assert_eq!(layout.cell_at(Vec2::new(17.0, 12.0)), Some((3, 2)));
        assert_eq!(layout.cell_at(Vec2::new(99.9, 49.9)), Some((19, 9)));
        assert_eq!(layout.cell_at(Vec2::new(-0.1, 10.0)), None);
        assert_eq!(layout.cell_at(Vec2::new(100.0, 10.0)), None);
    }

    #[test]
    fn test_cell_at_wrapping_extends_lattice() {
        let layout = CellLayout::new(100.0, 50.0, 10).unwrap();
        assert_eq!(layout.cell_at_wrapping(Vec2::new(-0.1, 52.0)), (-1, 10));
    }

    #[test]
    fn test_coordinate_buffer() {
        let layout = CellLayout::new(10.0, 10.0, 2).unwrap();
        let buffer = layout.coordinate_buffer();
        assert_eq!(
            buffer,
            vec![2.5, 2.5, 0.0, 7.5, 2.5, 0.0, 2.5, 7.5, 0.0, 7.5, 7.5, 0.0]
        );
    }
}
