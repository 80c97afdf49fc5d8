//! Padding measurement for a rendered frame.

use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::bounds::{content_bounds, BoundingBox};

/// Transparent margin on each side, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

/// One side of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
            Side::Top => "Top",
            Side::Bottom => "Bottom",
        }
    }
}

impl Padding {
    pub fn side(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }
}

/// Content bounds and padding of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub width: u32,
    pub height: u32,
    pub bounds: BoundingBox,
    pub padding: Padding,
}

impl Measurement {
    /// Measure a decoded frame. `None` when no pixel is visible.
    pub fn from_image(image: &DynamicImage) -> Option<Self> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let bounds = content_bounds(&rgba)?;

        Some(Self {
            width,
            height,
            bounds,
            padding: Padding {
                left: bounds.left,
                right: width - 1 - bounds.right,
                top: bounds.top,
                bottom: height - 1 - bounds.bottom,
            },
        })
    }

    /// Padding on `side` as a percentage of the frame width (left/right) or
    /// height (top/bottom).
    pub fn percent(&self, side: Side) -> f64 {
        let extent = match side {
            Side::Left | Side::Right => self.width,
            Side::Top | Side::Bottom => self.height,
        };
        f64::from(self.padding.side(side)) / f64::from(extent) * 100.0
    }

    /// Share of the frame width covered by the content, in percent.
    pub fn width_coverage(&self) -> f64 {
        f64::from(self.bounds.width()) / f64::from(self.width) * 100.0
    }
}

/// Errors that can occur when loading a frame.
#[derive(Debug, thiserror::Error)]
pub enum PaddingError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Load an image file.
pub fn load_frame(path: &Path) -> Result<DynamicImage, PaddingError> {
    ImageReader::open(path)
        .map_err(|source| PaddingError::Open {
            path: path.display().to_string(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| PaddingError::Open {
            path: path.display().to_string(),
            source,
        })?
        .decode()
        .map_err(|source| PaddingError::Decode {
            path: path.display().to_string(),
            source,
        })
}

/// A loaded frame and its measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// `None` when no pixel is visible
    pub measurement: Option<Measurement>,
}

/// Load an image file and measure it.
pub fn measure_file(path: &Path) -> Result<Frame, PaddingError> {
    let image = load_frame(path)?;
    tracing::debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());

    Ok(Frame {
        width: image.width(),
        height: image.height(),
        measurement: Measurement::from_image(&image),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::framed;
    use image::{Rgba, RgbaImage};

    #[test]
    fn opaque_frame_has_no_padding() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(12, 6, Rgba([9, 9, 9, 255])));

        let m = Measurement::from_image(&image).unwrap();

        assert_eq!(
            m.padding,
            Padding {
                left: 0,
                right: 0,
                top: 0,
                bottom: 0
            }
        );
        assert_eq!(m.width_coverage(), 100.0);
    }

    #[test]
    fn measures_asymmetric_padding() {
        let m = Measurement::from_image(&framed(100, 50, 10, 20, 5, 0)).unwrap();

        assert_eq!(
            m.padding,
            Padding {
                left: 10,
                right: 20,
                top: 5,
                bottom: 0
            }
        );
        assert_eq!(m.bounds.width(), 70);
        assert_eq!(m.bounds.height(), 45);
        assert_eq!(m.percent(Side::Left), 10.0);
        assert_eq!(m.percent(Side::Top), 10.0);
        assert_eq!(m.width_coverage(), 70.0);
    }

    #[test]
    fn transparent_frame_measures_nothing() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));

        assert_eq!(Measurement::from_image(&image), None);
    }

    #[test]
    fn rgb_images_are_fully_opaque() {
        let image = DynamicImage::ImageRgb8(image::RgbImage::new(5, 5));

        let m = Measurement::from_image(&image).unwrap();

        assert_eq!(m.padding.left, 0);
        assert_eq!(m.padding.bottom, 0);
    }

    #[test]
    fn measures_png_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("frame.png");
        framed(16, 16, 3, 3, 3, 3).save(&path).unwrap();

        let frame = measure_file(&path).unwrap();

        assert_eq!((frame.width, frame.height), (16, 16));
        assert_eq!(frame.measurement.unwrap().padding.right, 3);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let result = measure_file(Path::new("/nonexistent/frame.png"));

        assert!(matches!(result, Err(PaddingError::Open { .. })));
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("frame.png");
        std::fs::write(&path, b"not an image").unwrap();

        let result = measure_file(&path);

        assert!(matches!(result, Err(PaddingError::Decode { .. })));
    }
}
