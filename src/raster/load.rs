//! Decoding images from disk.

use std::path::Path;

use super::{Image, ImageError, Rgb};

/// Load a PNG or JPEG file and convert it to an RGB [`Image`].
pub fn load_image(path: &Path) -> Result<Image, ImageError> {
    let decoded = ::image::open(path)
        .map_err(|source| ImageError::Load {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();

    let (width, height) = decoded.dimensions();
    let pixels = decoded
        .pixels()
        .map(|px| Rgb::new(px.0[0], px.0[1], px.0[2]))
        .collect();

    log::info!("Loaded {} ({}x{})", path.display(), width, height);
    Image::new(width, height, pixels)
}
