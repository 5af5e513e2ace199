//! Brightness-matching engine turning images into character grids.
//!
//! The pipeline behind [`AsciiArtAlgorithm::run`]:
//!
//! 1. **Padding** - grow the image to power-of-two dimensions
//! 2. **Tiling** - cut it into `resolution` square tiles per row
//! 3. **Brightness** - perceptual luma of each tile in [0, 1]
//! 4. **Matching** - pick the catalog character whose normalized glyph
//!    density best fits that brightness under the [`RoundingPolicy`]
//!
//! The [`CharCatalog`] is the only state that outlives a run. It is
//! mutated between runs and borrowed immutably during one.

mod algorithm;
mod catalog;
mod charset;
mod grid;
mod mapping;

pub use algorithm::{render, AsciiArtAlgorithm, DEFAULT_RESOLUTION, MIN_CHARSET_SIZE};
pub use catalog::CharCatalog;
pub use charset::{
    char_range, check_printable, parse_charset, DEFAULT_CHARSET, MAX_PRINTABLE, MIN_PRINTABLE, PRINTABLE,
};
pub use grid::CharGrid;
pub use mapping::{best_match, ParsePolicyError, RoundingPolicy};

use crate::raster::ImageError;

/// Errors raised by catalog validation and runs.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("charset needs at least {min} characters, found {found}", min = MIN_CHARSET_SIZE)]
    InsufficientCharset { found: usize },

    #[error("character {0:?} is outside the printable range")]
    CharOutOfRange(char),

    #[error(transparent)]
    Image(#[from] ImageError),
}
