//! Perceptual tile brightness.

use super::{Image, Rgb};

/// ITU-R BT.709 red weight.
pub const LUMA_R: f64 = 0.2126;
/// ITU-R BT.709 green weight.
pub const LUMA_G: f64 = 0.7152;
/// ITU-R BT.709 blue weight.
pub const LUMA_B: f64 = 0.0722;

/// Largest channel value, used to normalize luma into [0, 1].
pub const MAX_CHANNEL: f64 = 255.0;

/// Luma of one pixel on the 0-255 scale.
#[inline]
pub fn luma(px: Rgb) -> f64 {
    LUMA_R * px.r as f64 + LUMA_G * px.g as f64 + LUMA_B * px.b as f64
}

/// Average luma of every pixel in `tile`, normalized to [0, 1].
///
/// Black is 0.0 and white is (up to float rounding) 1.0.
pub fn brightness(tile: &Image) -> f64 {
    let sum: f64 = tile.pixels().iter().map(|&px| luma(px)).sum();
    sum / tile.pixels().len() as f64 / MAX_CHANNEL
}
