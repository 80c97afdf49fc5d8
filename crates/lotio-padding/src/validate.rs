//! Horizontal padding bands and checks against an expected padding.

use std::ops::RangeInclusive;

use crate::measure::{Padding, Side};

/// Padding range that counts as edge-to-edge text.
pub const EDGE_TO_EDGE: RangeInclusive<u32> = 1..=5;

/// Horizontal padding below this is "minimal".
pub const MINIMAL_LIMIT: u32 = 10;

/// Qualitative band of the left/right padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingBand {
    /// 0px on at least one side: text is clipped against the frame
    InvalidEdgeToEdge,
    /// 1-5px on both sides
    EdgeToEdge,
    /// Under 10px on both sides
    Minimal,
    /// 10px or more on some side
    Significant,
}

impl PaddingBand {
    pub fn classify(padding: &Padding) -> Self {
        let (left, right) = (padding.left, padding.right);

        if left == 0 || right == 0 {
            Self::InvalidEdgeToEdge
        } else if EDGE_TO_EDGE.contains(&left) && EDGE_TO_EDGE.contains(&right) {
            Self::EdgeToEdge
        } else if left < MINIMAL_LIMIT && right < MINIMAL_LIMIT {
            Self::Minimal
        } else {
            Self::Significant
        }
    }
}

/// How the measured sides are compared to the expected padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Every side must fall in [`EDGE_TO_EDGE`]
    EdgeToEdge,
    /// Every side must equal the value exactly
    Exact(i64),
}

impl Policy {
    /// Expected padding of 1 or more asks for edge-to-edge text; anything
    /// else must match exactly.
    pub fn for_expected(expected: i64) -> Self {
        if expected >= 1 {
            Self::EdgeToEdge
        } else {
            Self::Exact(expected)
        }
    }

    pub fn accepts(&self, value: u32) -> bool {
        match self {
            Self::EdgeToEdge => EDGE_TO_EDGE.contains(&value),
            Self::Exact(expected) => i64::from(value) == *expected,
        }
    }
}

/// A side that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideMismatch {
    pub side: Side,
    pub actual: u32,
}

/// Outcome of comparing a measurement against an expected padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub expected: i64,
    pub policy: Policy,
    pub mismatches: Vec<SideMismatch>,
}

impl Validation {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Process exit status: 0 on pass, 1 on mismatch.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

/// Check every side of `padding` against `expected`.
pub fn validate(padding: &Padding, expected: i64) -> Validation {
    let policy = Policy::for_expected(expected);

    let mismatches = Side::ALL
        .into_iter()
        .filter(|&side| !policy.accepts(padding.side(side)))
        .map(|side| SideMismatch {
            side,
            actual: padding.side(side),
        })
        .collect();

    Validation {
        expected,
        policy,
        mismatches,
    }
}
