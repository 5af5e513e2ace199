//! Raster image model and the image-side half of the ASCII pipeline.
//!
//! 1. **Padding** - grow to power-of-two dimensions on a white canvas
//! 2. **Tiling** - cut the padded image into square tiles
//! 3. **Brightness** - perceptual luminance of one tile in [0, 1]
//!
//! Loading from disk lives in [`load`] and is the only part that touches
//! the filesystem.

mod brightness;
mod load;
mod pad;
mod tiles;

use std::path::PathBuf;

pub use brightness::{brightness, luma, LUMA_B, LUMA_G, LUMA_R, MAX_CHANNEL};
pub use load::load_image;
pub use pad::{next_power_of_two, pad};
pub use tiles::{tile, TileGrid};

/// One RGB pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform gray with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// Immutable RGB image stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Image {
    /// Build an image from a row-major pixel buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::Empty { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ImageError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image of a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, ImageError> {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    /// Build an image by evaluating `f(row, col)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Rgb,
    ) -> Result<Self, ImageError> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(row, col)`. Panics when out of bounds, like slice indexing.
    pub fn pixel(&self, row: u32, col: u32) -> Rgb {
        assert!(row < self.height && col < self.width, "pixel out of bounds");
        self.pixels[row as usize * self.width as usize + col as usize]
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// One row of pixels.
    pub fn row(&self, row: u32) -> &[Rgb] {
        let start = row as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }
}

/// Errors raised while building, loading or slicing images.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image must have positive dimensions, got {width}x{height}")]
    Empty { width: u32, height: u32 },

    #[error("expected {expected} pixels, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("resolution {resolution} is out of range for an image {width} pixels wide")]
    InvalidResolution { resolution: u32, width: u32 },

    #[error("failed to load image '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },
}
