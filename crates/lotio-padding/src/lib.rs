//! Transparent padding measurement for rendered text frames.
//!
//! Finds the bounding box of every pixel with non-zero alpha, reports the
//! margin on each side, and checks it against an expected padding.

pub mod bounds;
pub mod measure;
pub mod report;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use bounds::{content_bounds, BoundingBox};
pub use measure::{load_frame, measure_file, Frame, Measurement, Padding, PaddingError, Side};
pub use report::Report;
pub use validate::{validate, PaddingBand, Policy, SideMismatch, Validation};
