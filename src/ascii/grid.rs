//! Output character grid.

use std::fmt;

/// Row-major grid of characters, one per tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<char>,
}

impl CharGrid {
    /// Wrap `cells`; their length must equal `rows * cols`.
    pub fn new(rows: usize, cols: usize, cells: Vec<char>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// One row of characters, if inside the grid.
    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row < self.rows {
            self.cells.get(row * self.cols..(row + 1) * self.cols)
        } else {
            None
        }
    }

    /// Rows as strings, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows).filter_map(|r| self.row(r)).map(|r| r.iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
