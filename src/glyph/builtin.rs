//! Built-in bitmap font.

use font8x8::legacy::BASIC_LEGACY;

use super::{GlyphBitmap, GlyphSource, GLYPH_SIZE};

/// Side length of the source glyphs in `font8x8`.
const SOURCE_SIZE: usize = 8;

/// Scale factor from the 8x8 source glyphs to the 16x16 bitmap.
const SCALE: usize = GLYPH_SIZE / SOURCE_SIZE;

/// The `font8x8` basic Latin font, each pixel doubled to fill 16x16.
///
/// Set bits are ink, so they become "off" cells. Characters outside the
/// basic table (code point 128 and above) render blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl GlyphSource for BuiltinFont {
    fn render(&self, c: char) -> GlyphBitmap {
        let Some(rows) = BASIC_LEGACY.get(c as usize) else {
            return GlyphBitmap::blank();
        };
        // Bit 0 of each row byte is the leftmost pixel.
        GlyphBitmap::from_fn(|row, col| (rows[row / SCALE] >> (col / SCALE)) & 1 == 0)
    }
}
