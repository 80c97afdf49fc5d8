//! Padding measurement command.

use std::path::Path;

use anyhow::{Context, Result};
use lotio_padding::{measure_file, Report};

/// Parse the optional expected padding argument.
///
/// A value that is not an integer is ignored with a warning, and the image is
/// only measured.
pub fn parse_expected(raw: Option<&str>) -> Option<i64> {
    let raw = raw?;
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring expected padding {:?}: not an integer", raw);
            None
        }
    }
}

/// Run the measure-padding command. Returns the process exit status.
pub fn run(image: &Path, expected: Option<i64>) -> Result<u8> {
    let frame = measure_file(image)
        .with_context(|| format!("Could not measure {}", image.display()))?;

    if frame.measurement.is_none() && expected.is_some() {
        tracing::warn!("Nothing visible in {}, skipping validation", image.display());
    }

    let report = Report::new(frame, expected);
    print!("{report}");

    Ok(report.exit_code())
}
