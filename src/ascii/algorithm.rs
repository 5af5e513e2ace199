//! The full image to character grid pipeline.

use super::{AsciiError, CharCatalog, CharGrid, RoundingPolicy};
use crate::raster::{brightness, pad, tile, Image};

/// Smallest catalog a run accepts.
pub const MIN_CHARSET_SIZE: usize = 2;

/// Resolution a fresh session starts with.
pub const DEFAULT_RESOLUTION: u32 = 2;

/// Converts images into character grids at a fixed resolution and policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiArtAlgorithm {
    resolution: u32,
    policy: RoundingPolicy,
}

impl Default for AsciiArtAlgorithm {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION, RoundingPolicy::default())
    }
}

impl AsciiArtAlgorithm {
    pub fn new(resolution: u32, policy: RoundingPolicy) -> Self {
        Self { resolution, policy }
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn policy(&self) -> RoundingPolicy {
        self.policy
    }

    /// Pad, tile, measure and match `image` against `catalog`.
    ///
    /// The catalog is only read, so it stays consistent for the whole run.
    /// Fails before any tiling when the catalog is too small, and with
    /// [`ImageError::InvalidResolution`](crate::raster::ImageError) when the
    /// resolution does not fit the padded width.
    pub fn run(&self, image: &Image, catalog: &CharCatalog) -> Result<CharGrid, AsciiError> {
        if catalog.len() < MIN_CHARSET_SIZE {
            return Err(AsciiError::InsufficientCharset {
                found: catalog.len(),
            });
        }

        let padded = pad(image);
        let tiles = tile(&padded, self.resolution)?;

        // `best_match` is `None` only for an empty catalog, which the size
        // check above already rejected.
        let cells = tiles
            .iter()
            .map(|t| catalog.best_match(brightness(t), self.policy))
            .collect::<Option<Vec<char>>>()
            .ok_or(AsciiError::InsufficientCharset {
                found: catalog.len(),
            })?;

        log::info!(
            "Rendered {}x{} grid at resolution {} ({} policy, {} chars)",
            tiles.rows,
            tiles.cols,
            self.resolution,
            self.policy,
            catalog.len()
        );

        Ok(CharGrid::new(tiles.rows, tiles.cols, cells))
    }
}

/// One-shot form of [`AsciiArtAlgorithm::run`].
pub fn render(
    image: &Image,
    resolution: u32,
    catalog: &CharCatalog,
    policy: RoundingPolicy,
) -> Result<CharGrid, AsciiError> {
    AsciiArtAlgorithm::new(resolution, policy).run(image, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{GlyphBitmap, GLYPH_SIZE};
    use crate::raster::Rgb;

    fn catalog() -> CharCatalog {
        // '@' is solid ink, ' ' is all background.
        let source = |c: char| GlyphBitmap::from_fn(|_, _| c != '@');
        CharCatalog::new(Box::new(source), [' ', '@'])
    }

    #[test]
    fn test_empty_catalog_fails_before_tiling() {
        let image = Image::filled(4, 4, Rgb::BLACK).unwrap();
        let empty = CharCatalog::new(Box::new(|_: char| GlyphBitmap::blank()), Vec::new());
        // Resolution 0 would also fail, but the catalog is checked first.
        let err = render(&image, 0, &empty, RoundingPolicy::Nearest).unwrap_err();
        assert!(matches!(err, AsciiError::InsufficientCharset { found: 0 }));
    }

    #[test]
    fn test_one_cell_per_tile() {
        let image = Image::filled(GLYPH_SIZE as u32, GLYPH_SIZE as u32, Rgb::WHITE).unwrap();
        let grid = AsciiArtAlgorithm::new(4, RoundingPolicy::Nearest)
            .run(&image, &catalog())
            .unwrap();
        assert_eq!((grid.rows, grid.cols), (4, 4));
        assert!(grid.cells.iter().all(|&c| c == ' '));
    }
}
