//! Glyph bitmaps and the density cache built on top of them.
//!
//! A [`GlyphSource`] turns a character into a fixed 16x16 on/off bitmap
//! where "on" marks background the glyph leaves unprinted. The fraction of
//! "on" cells is the glyph's density, a proxy for how bright the character
//! looks once printed dark on light. [`DensityCache`] memoizes that
//! value per character for the lifetime of the process.

mod builtin;
mod cache;
mod font_file;

use std::path::PathBuf;

pub use builtin::BuiltinFont;
pub use cache::DensityCache;
pub use font_file::FontFile;

/// Side length of every glyph bitmap.
pub const GLYPH_SIZE: usize = 16;

/// Number of cells in a glyph bitmap.
pub const GLYPH_CELLS: usize = GLYPH_SIZE * GLYPH_SIZE;

/// Fixed-size boolean rendering of one character; `true` is background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBitmap {
    cells: [[bool; GLYPH_SIZE]; GLYPH_SIZE],
}

impl GlyphBitmap {
    pub fn new(cells: [[bool; GLYPH_SIZE]; GLYPH_SIZE]) -> Self {
        Self { cells }
    }

    /// No ink at all: every cell shows the background.
    pub fn blank() -> Self {
        Self {
            cells: [[true; GLYPH_SIZE]; GLYPH_SIZE],
        }
    }

    /// Build a bitmap by evaluating `f(row, col)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = [[false; GLYPH_SIZE]; GLYPH_SIZE];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = f(row, col);
            }
        }
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Number of "on" cells.
    pub fn count_on(&self) -> usize {
        self.cells
            .iter()
            .map(|line| line.iter().filter(|&&on| on).count())
            .sum()
    }

    /// Fraction of "on" cells, in [0, 1].
    pub fn density(&self) -> f64 {
        self.count_on() as f64 / GLYPH_CELLS as f64
    }
}

/// Renders characters to glyph bitmaps.
///
/// Implementations must be pure: the same character always yields the
/// same bitmap, which is what makes caching densities sound.
pub trait GlyphSource {
    fn render(&self, c: char) -> GlyphBitmap;
}

impl<F> GlyphSource for F
where
    F: Fn(char) -> GlyphBitmap,
{
    fn render(&self, c: char) -> GlyphBitmap {
        self(c)
    }
}

/// Errors raised while loading a font file.
#[derive(Debug, thiserror::Error)]
pub enum GlyphError {
    #[error("failed to read font file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid font data: {0}")]
    Font(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_has_unit_density() {
        assert_eq!(GlyphBitmap::blank().count_on(), GLYPH_CELLS);
        assert_eq!(GlyphBitmap::blank().density(), 1.0);
    }

    #[test]
    fn test_solid_ink_has_zero_density() {
        let solid = GlyphBitmap::from_fn(|_, _| false);
        assert_eq!(solid.count_on(), 0);
        assert_eq!(solid.density(), 0.0);
    }

    #[test]
    fn test_density_is_fraction_of_cells() {
        // Top half on
        let half = GlyphBitmap::from_fn(|row, _| row < GLYPH_SIZE / 2);
        assert_eq!(half.density(), 0.5);
        assert!(half.get(0, 0));
        assert!(!half.get(GLYPH_SIZE - 1, 0));
    }

    #[test]
    fn test_closure_is_a_glyph_source() {
        let source = |c: char| GlyphBitmap::from_fn(|row, _| row < c as usize % GLYPH_SIZE);
        assert_eq!(source.render('\u{2}').count_on(), 2 * GLYPH_SIZE);
    }
}
