//! TrueType/OpenType glyph source backed by `fontdue`.

use std::path::Path;

use fontdue::{Font, FontSettings};

use super::{GlyphBitmap, GlyphError, GlyphSource, GLYPH_SIZE};

/// Coverage at or above this value counts as ink.
const COVERAGE_THRESHOLD: u8 = 128;

/// Fraction of the cell height where the baseline sits.
const BASELINE: f32 = 0.75;

/// Glyphs rasterized from a scalable font at the bitmap size.
pub struct FontFile {
    font: Font,
    px: f32,
}

impl FontFile {
    /// Parse font data already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, GlyphError> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| GlyphError::Font(e.to_string()))?;
        Ok(Self {
            font,
            px: GLYPH_SIZE as f32,
        })
    }

    /// Read and parse a font file.
    pub fn open(path: &Path) -> Result<Self, GlyphError> {
        let bytes = std::fs::read(path).map_err(|source| GlyphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::from_bytes(bytes)?;
        log::info!("Loaded font {}", path.display());
        Ok(font)
    }
}

impl GlyphSource for FontFile {
    fn render(&self, c: char) -> GlyphBitmap {
        let (metrics, coverage) = self.font.rasterize(c, self.px);
        if metrics.width == 0 || metrics.height == 0 {
            return GlyphBitmap::blank();
        }

        let size = GLYPH_SIZE as i32;
        let baseline = (size as f32 * BASELINE) as i32;
        let y_offset = baseline - metrics.height as i32 - metrics.ymin;
        let x_offset = (size - metrics.width as i32) / 2;

        GlyphBitmap::from_fn(|row, col| {
            let sx = col as i32 - x_offset;
            let sy = row as i32 - y_offset;
            if sx < 0 || sy < 0 || sx >= metrics.width as i32 || sy >= metrics.height as i32 {
                return true;
            }
            coverage[sy as usize * metrics.width + sx as usize] < COVERAGE_THRESHOLD
        })
    }
}

impl std::fmt::Debug for FontFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFile").field("px", &self.px).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = FontFile::from_bytes(vec![0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, GlyphError::Font(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FontFile::open(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, GlyphError::Io { .. }));
    }
}
