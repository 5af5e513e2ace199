//! Padding to power-of-two dimensions.

use std::borrow::Cow;

use super::{Image, Rgb};

/// Smallest power of two that is `>= n` (1 for `n <= 1`).
pub fn next_power_of_two(n: u32) -> u32 {
    let mut power = 1;
    while power < n {
        power *= 2;
    }
    power
}

/// Expand `image` to the next power-of-two width and height.
///
/// The source image is centered on a white canvas. Offsets use floor division,
/// so when the difference is odd the extra row/column ends up on the
/// bottom/right. An image that is already a power of two in both
/// dimensions is returned borrowed, without copying.
pub fn pad(image: &Image) -> Cow<'_, Image> {
    let new_width = next_power_of_two(image.width());
    let new_height = next_power_of_two(image.height());

    if new_width == image.width() && new_height == image.height() {
        return Cow::Borrowed(image);
    }

    let pad_left = ((new_width - image.width()) / 2) as usize;
    let pad_top = ((new_height - image.height()) / 2) as usize;
    let canvas_width = new_width as usize;

    let mut pixels = vec![Rgb::WHITE; canvas_width * new_height as usize];
    for row in 0..image.height() {
        let start = (row as usize + pad_top) * canvas_width + pad_left;
        pixels[start..start + image.width() as usize].copy_from_slice(image.row(row));
    }

    log::debug!(
        "Padded {}x{} image to {}x{} (left {}, top {})",
        image.width(),
        image.height(),
        new_width,
        new_height,
        pad_left,
        pad_top
    );

    // Dimensions are positive and the buffer length matches by construction.
    Cow::Owned(Image {
        width: new_width,
        height: new_height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(2), 2);
        assert_eq!(next_power_of_two(3), 4);
        assert_eq!(next_power_of_two(5), 8);
        assert_eq!(next_power_of_two(64), 64);
        assert_eq!(next_power_of_two(65), 128);
    }

    #[test]
    fn test_power_of_two_image_is_borrowed() {
        let img = Image::filled(8, 4, Rgb::BLACK).unwrap();
        assert!(matches!(pad(&img), Cow::Borrowed(_)));
    }

    #[test]
    fn test_odd_difference_puts_extra_column_right() {
        // Width 5 -> 8: pad_left = 1, so columns 6 and 7 are white.
        let img = Image::filled(5, 4, Rgb::BLACK).unwrap();
        let padded = pad(&img);
        assert_eq!(padded.width(), 8);
        assert_eq!(padded.pixel(0, 0), Rgb::WHITE);
        assert_eq!(padded.pixel(0, 1), Rgb::BLACK);
        assert_eq!(padded.pixel(0, 5), Rgb::BLACK);
        assert_eq!(padded.pixel(0, 6), Rgb::WHITE);
        assert_eq!(padded.pixel(0, 7), Rgb::WHITE);
    }
}
