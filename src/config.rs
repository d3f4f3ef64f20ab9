//! Classifier configuration.
//!
//! The defaults reproduce plain floating-point equality for both side lengths
//! and the 90° test. That is known to miss most right triangles built from
//! rotated or scaled coordinates (`acos` of a cosine that should be zero comes
//! back a last-bit away from `π/2`); [`ClassifierConfig::tolerant`] is the
//! recommended setting when counts should match geometric intuition.

use crate::mesh_error::FaceClassError;
use serde::{Deserialize, Serialize};

/// How two floating-point quantities are judged equal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Bitwise-style `==`.
    Exact,
    /// Equal when the difference is at most the given tolerance.
    ///
    /// For side lengths the tolerance is relative to the longest edge; for
    /// angles it is absolute, in degrees.
    Tolerance(f64),
}

impl Comparison {
    /// Compare `lhs` and `rhs`, scaling a tolerance by `scale`.
    #[inline]
    pub fn matches(self, lhs: f64, rhs: f64, scale: f64) -> bool {
        match self {
            Comparison::Exact => lhs == rhs,
            Comparison::Tolerance(eps) => (lhs - rhs).abs() <= eps * scale,
        }
    }

    fn validate(self, what: &str) -> Result<(), FaceClassError> {
        match self {
            Comparison::Exact => Ok(()),
            Comparison::Tolerance(eps) if eps.is_finite() && eps >= 0.0 => Ok(()),
            Comparison::Tolerance(eps) => Err(FaceClassError::InvalidConfig(format!(
                "{what} tolerance must be finite and non-negative, got {eps}"
            ))),
        }
    }
}

/// What to do with zero-length or collinear triangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Clamp the Law-of-Cosines argument to `[-1, 1]` and classify anyway.
    /// An undefined argument (`0/0`, from coincident vertices) yields 0°.
    #[default]
    Clamp,
    /// Drop the triangle and tally it as degenerate.
    Skip,
}

/// Parameters for [`TriangleClassifier`](crate::classify::TriangleClassifier).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Equality test for edge lengths.
    pub sides: Comparison,
    /// Equality test between an interior angle and 90°.
    pub right_angle: Comparison,
    /// Handling of degenerate triangles.
    pub degenerate: DegeneratePolicy,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            sides: Comparison::Exact,
            right_angle: Comparison::Exact,
            degenerate: DegeneratePolicy::Clamp,
        }
    }
}

impl ClassifierConfig {
    /// Default relative tolerance for edge-length equality.
    pub const SIDE_TOLERANCE: f64 = 1e-9;
    /// Default tolerance, in degrees, for the right-angle test.
    pub const ANGLE_TOLERANCE_DEG: f64 = 1e-6;

    /// Tolerance-based comparisons for both sides and angles.
    pub fn tolerant() -> Self {
        Self {
            sides: Comparison::Tolerance(Self::SIDE_TOLERANCE),
            right_angle: Comparison::Tolerance(Self::ANGLE_TOLERANCE_DEG),
            ..Default::default()
        }
    }

    /// Reject negative or non-finite tolerances.
    pub fn validate(&self) -> Result<(), FaceClassError> {
        self.sides.validate("side")?;
        self.right_angle.validate("angle")
    }
}
