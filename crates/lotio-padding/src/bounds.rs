//! Bounding box of the visible pixels in a frame.

use image::RgbaImage;

/// Inclusive pixel bounds of the non-transparent content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }
}

/// Scan every pixel for alpha > 0. `None` when the frame is fully transparent.
pub fn content_bounds(image: &RgbaImage) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => BoundingBox {
                left: x,
                right: x,
                top: y,
                bottom: y,
            },
            Some(b) => BoundingBox {
                left: b.left.min(x),
                right: b.right.max(x),
                top: b.top.min(y),
                bottom: b.bottom.max(y),
            },
        });
    }

    bounds
}
