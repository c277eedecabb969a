//! Run-length token decoding.

use crate::error::{PatternError, PatternResult};

/// Largest declared pattern width or height.
pub const MAX_PATTERN_SIDE: usize = 4096;

/// A decoded pattern: a `rows x columns` boolean matrix in row-major order.
///
/// The default matrix is `0 x 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternMatrix {
    columns: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl PatternMatrix {
    /// Creates an all-dead matrix.
    ///
    /// Either side may be zero; neither may exceed [`MAX_PATTERN_SIDE`].
    pub fn new(columns: usize, rows: usize) -> PatternResult<Self> {
        check_size(columns, rows)?;
        Ok(Self {
            columns,
            rows,
            cells: vec![false; columns * rows],
        })
    }

    /// Returns the column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Gets a cell, `false` outside the matrix.
    pub fn get(&self, col: usize, row: usize) -> bool {
        if col < self.columns && row < self.rows {
            self.cells[row * self.columns + col]
        } else {
            false
        }
    }

    /// Returns one row of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Iterates `(col, row)` of every live cell.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % columns, i / columns))
    }

    /// Counts live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Fills `count` live cells starting at `(col, row)`, clipped to the matrix.
    ///
    /// Returns the first clipped position, if any.
    fn fill_run(&mut self, col: usize, row: usize, count: usize) -> Option<(usize, usize)> {
        if row >= self.rows {
            return Some((col, row));
        }
        let end = col.saturating_add(count);
        let start = row * self.columns;
        for c in col.min(self.columns)..end.min(self.columns) {
            self.cells[start + c] = true;
        }
        (end > self.columns).then(|| (col.max(self.columns), row))
    }
}

/// Decodes a pattern, clipping malformed input.
///
/// Live cells that fall outside `columns x rows` are dropped, unknown
/// action characters and a trailing count are skipped. Irregular input is
/// reported once through `log::warn!`; the returned matrix is always the
/// best effort. A declared size over [`MAX_PATTERN_SIDE`] yields an empty
/// `0 x 0` matrix.
pub fn decode(code: &str, columns: usize, rows: usize) -> PatternMatrix {
    if let Err(err) = check_size(columns, rows) {
        log::warn!("pattern not decoded: {err}");
        return PatternMatrix::default();
    }

    let mut first = None;
    let mut irregular = 0usize;

    let matrix = run(code, columns, rows, |err| {
        irregular += 1;
        first.get_or_insert(err);
        Ok(())
    });

    if let Some(err) = first {
        log::warn!("pattern decoded with {irregular} irregular token(s), first: {err}");
    }

    // The size is checked and the lenient reporter never fails.
    matrix.unwrap_or_default()
}

/// Decodes a pattern, rejecting anything [`decode`] would clip or skip.
///
/// Both sides must be in `1..=MAX_PATTERN_SIDE`.
pub fn decode_strict(code: &str, columns: usize, rows: usize) -> PatternResult<PatternMatrix> {
    if columns == 0 || rows == 0 {
        return Err(PatternError::InvalidDimensions { columns, rows });
    }
    run(code, columns, rows, Err)
}

fn check_size(columns: usize, rows: usize) -> PatternResult<()> {
    if columns > MAX_PATTERN_SIDE || rows > MAX_PATTERN_SIDE {
        Err(PatternError::InvalidDimensions { columns, rows })
    } else {
        Ok(())
    }
}

fn run<F>(code: &str, columns: usize, rows: usize, mut report: F) -> PatternResult<PatternMatrix>
where
    F: FnMut(PatternError) -> PatternResult<()>,
{
    let mut matrix = PatternMatrix::new(columns, rows)?;
    let mut row = 0usize;
    let mut col = 0usize;
    let mut chars = code.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut digits = String::new();
        while let Some(d) = chars.next_if(char::is_ascii_digit) {
            digits.push(d);
        }

        let Some(action) = chars.next() else {
            if !digits.is_empty() {
                report(PatternError::MissingAction)?;
            }
            break;
        };

        // An absent count, and an explicit zero, both mean one.
        let count = if digits.is_empty() {
            1
        } else {
            match digits.parse::<usize>() {
                Ok(0) => 1,
                Ok(n) => n,
                Err(_) => {
                    report(PatternError::InvalidCount(digits))?;
                    continue;
                }
            }
        };

        match action {
            'o' => {
                if let Some((c, r)) = matrix.fill_run(col, row, count) {
                    report(PatternError::OutOfBounds {
                        row: r,
                        col: c,
                        columns,
                        rows,
                    })?;
                }
                col = col.saturating_add(count);
            }
            'b' => col = col.saturating_add(count),
            '$' => {
                row = row.saturating_add(count);
                col = 0;
            }
            '!' => break,
            other => report(PatternError::UnknownAction(other))?,
        }
    }

    Ok(matrix)
}
