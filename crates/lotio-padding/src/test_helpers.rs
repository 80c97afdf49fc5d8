//! Shared test fixtures.

use image::{DynamicImage, Rgba, RgbaImage};

/// A frame with an opaque block surrounded by the given transparent margins.
pub fn framed(width: u32, height: u32, left: u32, right: u32, top: u32, bottom: u32) -> DynamicImage {
    let mut image = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for y in top..height - bottom {
        for x in left..width - right {
            image.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }
    DynamicImage::ImageRgba8(image)
}
