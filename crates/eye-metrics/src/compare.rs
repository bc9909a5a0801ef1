//! Left/right EAR comparison
//!
//! Diagnostic only: it tells whether two eyes produce distinguishable ratios,
//! it is not part of any closed-eye decision.

use serde::Serialize;

use crate::ear::EyeLandmarkSet;
use crate::error::EarError;

/// |a - b| / ((a + b) / 2) * 100
pub fn percentage_difference(a: f64, b: f64) -> Result<f64, EarError> {
    let sum = a + b;
    if sum == 0.0 || !sum.is_finite() {
        return Err(EarError::DegenerateGeometry {
            reference: "sum of compared values",
            value: sum,
        });
    }
    let pct = (a - b).abs() / (sum / 2.0) * 100.0;
    if !pct.is_finite() {
        return Err(EarError::DegenerateGeometry {
            reference: "percentage difference",
            value: pct,
        });
    }
    Ok(pct)
}

/// EAR of both eyes from the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinocularEar {
    pub left: f64,
    pub right: f64,
}

impl BinocularEar {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Computes both ratios; a failure on the left eye is reported first.
    pub fn from_landmarks(
        left: &EyeLandmarkSet,
        right: &EyeLandmarkSet,
    ) -> Result<Self, EarError> {
        Ok(Self::new(left.ear()?, right.ear()?))
    }

    pub fn mean(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn abs_difference(&self) -> f64 {
        (self.left - self.right).abs()
    }

    pub fn percentage_difference(&self) -> Result<f64, EarError> {
        percentage_difference(self.left, self.right)
    }

    pub fn differs(&self) -> bool {
        self.abs_difference() > 0.0
    }
}
