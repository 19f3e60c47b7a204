//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use image::{GrayImage, Luma, RgbImage};

/// Luminance of one RGB pixel.
///
/// Y = 0.299*R + 0.587*G + 0.114*B, rounded to the nearest integer. The
/// coefficients are scaled by 2^16 so the whole computation stays in
/// integer arithmetic.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));
    // 19595 + 38470 + 7471 = 65536, so the result never exceeds 255
    ((19595 * r + 38470 * g + 7471 * b + 0x8000) >> 16) as u8
}

/// Convert an RGB image to single-channel grayscale.
pub fn to_grayscale(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Luma([luminance(r, g, b)])
    })
}
