//! Square tile extraction.

use super::{Image, ImageError};

/// Grid of equally sized square tiles, stored row-major.
#[derive(Debug, Clone)]
pub struct TileGrid {
    pub rows: usize,
    pub cols: usize,
    /// Side length of every tile in pixels.
    pub tile_size: u32,
    pub tiles: Vec<Image>,
}

impl TileGrid {
    /// Tile at `(row, col)`, if inside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Image> {
        if row < self.rows && col < self.cols {
            self.tiles.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Iterate tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Image> {
        self.tiles.iter()
    }
}

/// Cut `image` into `resolution` tiles per row.
///
/// Tile side is `width / resolution` and the row count is
/// `height / side`, both with integer division. Leftover source rows at
/// the bottom (and leftover columns at the right) are dropped, never
/// turned into partial tiles.
pub fn tile(image: &Image, resolution: u32) -> Result<TileGrid, ImageError> {
    if resolution == 0 || resolution > image.width() {
        return Err(ImageError::InvalidResolution {
            resolution,
            width: image.width(),
        });
    }

    let size = image.width() / resolution;
    let rows = image.height() / size;
    let cols = resolution;

    let mut tiles = Vec::with_capacity(rows as usize * cols as usize);
    for row in 0..rows {
        for col in 0..cols {
            tiles.push(extract(image, row * size, col * size, size)?);
        }
    }

    log::debug!(
        "Tiled {}x{} image into {}x{} tiles of {}px",
        image.width(),
        image.height(),
        rows,
        cols,
        size
    );

    Ok(TileGrid {
        rows: rows as usize,
        cols: cols as usize,
        tile_size: size,
        tiles,
    })
}

fn extract(image: &Image, top: u32, left: u32, size: u32) -> Result<Image, ImageError> {
    let mut pixels = Vec::with_capacity(size as usize * size as usize);
    for row in top..top + size {
        let start = left as usize;
        pixels.extend_from_slice(&image.row(row)[start..start + size as usize]);
    }
    Image::new(size, size, pixels)
}
