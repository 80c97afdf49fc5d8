//! Human readable measurement report.

use std::fmt;

use crate::measure::{Frame, Measurement, Side};
use crate::validate::{PaddingBand, Policy, Validation, EDGE_TO_EDGE};

/// Full report for one frame, printed by the CLI.
#[derive(Debug, Clone)]
pub struct Report {
    pub frame: Frame,
    pub validation: Option<Validation>,
}

impl Report {
    /// Measure-only report, or with validation when `expected` is given.
    pub fn new(frame: Frame, expected: Option<i64>) -> Self {
        let validation = frame
            .measurement
            .as_ref()
            .zip(expected)
            .map(|(m, expected)| crate::validate::validate(&m.padding, expected));

        Self { frame, validation }
    }

    /// 1 on a validation mismatch, 0 otherwise (including when nothing was checked).
    pub fn exit_code(&self) -> u8 {
        self.validation.as_ref().map_or(0, Validation::exit_code)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image dimensions: {}x{}", self.frame.width, self.frame.height)?;

        let Some(m) = &self.frame.measurement else {
            return writeln!(f, "No non-transparent pixels found!");
        };

        write_measurement(f, m)?;
        write_band(f, m)?;

        if let Some(validation) = &self.validation {
            write_validation(f, m, validation)?;
        }

        Ok(())
    }
}

fn write_measurement(f: &mut fmt::Formatter<'_>, m: &Measurement) -> fmt::Result {
    let b = &m.bounds;

    writeln!(f, "\nText bounds:")?;
    writeln!(f, "  Leftmost pixel: {}", b.left)?;
    writeln!(f, "  Rightmost pixel: {}", b.right)?;
    writeln!(f, "  Topmost pixel: {}", b.top)?;
    writeln!(f, "  Bottommost pixel: {}", b.bottom)?;

    writeln!(f, "\nText dimensions:")?;
    writeln!(f, "  Text width: {}px", b.width())?;
    writeln!(f, "  Text height: {}px", b.height())?;

    writeln!(f, "\nPadding:")?;
    for side in Side::ALL {
        writeln!(
            f,
            "  {} padding: {}px ({:.2}%)",
            side.label(),
            m.padding.side(side),
            m.percent(side)
        )?;
    }

    writeln!(f, "\nFrame dimensions: {}x{}", m.width, m.height)?;
    writeln!(
        f,
        "Text occupies: {}px / {}px = {:.2}% of frame width",
        b.width(),
        m.width,
        m.width_coverage()
    )
}

fn write_band(f: &mut fmt::Formatter<'_>, m: &Measurement) -> fmt::Result {
    let (left, right) = (m.padding.left, m.padding.right);

    match PaddingBand::classify(&m.padding) {
        PaddingBand::InvalidEdgeToEdge => {
            writeln!(
                f,
                "\n✗ Invalid edge-to-edge: 0px padding detected (left: {left}px, right: {right}px)"
            )?;
            writeln!(f, "  Edge-to-edge requires 1-5px transparency padding on each side")
        }
        PaddingBand::EdgeToEdge => writeln!(
            f,
            "\n✓ Text is edge-to-edge horizontally (valid padding: {left}px left, {right}px right)"
        ),
        PaddingBand::Minimal => writeln!(
            f,
            "\n⚠ Text has minimal padding: {left}px left, {right}px right"
        ),
        PaddingBand::Significant => writeln!(
            f,
            "\n✗ Text has significant padding: {left}px left, {right}px right"
        ),
    }
}

fn write_validation(f: &mut fmt::Formatter<'_>, m: &Measurement, v: &Validation) -> fmt::Result {
    let padding = &m.padding;

    writeln!(
        f,
        "\nValidation (expected {}px padding on all sides):",
        v.expected
    )?;

    let (min, max) = (*EDGE_TO_EDGE.start(), *EDGE_TO_EDGE.end());

    match (v.policy, v.passed()) {
        (Policy::EdgeToEdge, true) => writeln!(
            f,
            "  ✓ All padding is valid for edge-to-edge: {}px left, {}px right, {}px top, {}px bottom ({min}-{max}px range)",
            padding.left, padding.right, padding.top, padding.bottom
        ),
        (Policy::Exact(expected), true) => writeln!(
            f,
            "  ✓ All padding matches expected: {expected}px on all sides"
        ),
        (Policy::EdgeToEdge, false) => {
            writeln!(
                f,
                "  ✗ Padding mismatch (edge-to-edge requires {min}-{max}px on all sides):"
            )?;
            for miss in &v.mismatches {
                writeln!(
                    f,
                    "    - {}: got {}px (expected {min}-{max}px)",
                    miss.side.label(),
                    miss.actual
                )?;
            }
            Ok(())
        }
        (Policy::Exact(expected), false) => {
            writeln!(f, "  ✗ Padding mismatch:")?;
            for miss in &v.mismatches {
                writeln!(
                    f,
                    "    - {}: got {}px, expected {expected}px",
                    miss.side.label(),
                    miss.actual
                )?;
            }
            Ok(())
        }
    }
}
