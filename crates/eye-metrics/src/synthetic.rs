//! Synthetic eye landmarks
//!
//! Generates an idealised six-point contour from a center, width and height.
//! The EAR of a generated eye is exactly `height / width`, which makes these
//! shapes useful for calibration checks without a detector in the loop.

use serde::{Deserialize, Serialize};

use crate::ear::EyeLandmarkSet;
use crate::error::EarError;
use crate::point::Point2D;

/// Width and height multipliers applied to a base eye shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeScale {
    width: f64,
    height: f64,
}

impl EyeScale {
    pub const IDENTITY: EyeScale = EyeScale {
        width: 1.0,
        height: 1.0,
    };

    pub fn new(width: f64, height: f64) -> Result<Self, EarError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(EarError::InvalidScale { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for EyeScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Per-eye scale factors.
///
/// The defaults give the left eye a slightly smaller, flatter shape and the
/// right eye a slightly larger, rounder one. They are a placeholder
/// calibration, not an anatomical measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsymmetryCalibration {
    pub left: EyeScale,
    pub right: EyeScale,
}

impl AsymmetryCalibration {
    pub fn symmetric() -> Self {
        Self {
            left: EyeScale::IDENTITY,
            right: EyeScale::IDENTITY,
        }
    }
}

impl Default for AsymmetryCalibration {
    fn default() -> Self {
        Self {
            left: EyeScale {
                width: 0.95,
                height: 0.92,
            },
            right: EyeScale {
                width: 1.05,
                height: 1.08,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeShape {
    pub center: Point2D,
    pub width: f64,
    pub height: f64,
}

impl EyeShape {
    pub fn new(center: Point2D, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    pub fn scaled(&self, scale: EyeScale) -> Self {
        Self {
            center: self.center,
            width: self.width * scale.width,
            height: self.height * scale.height,
        }
    }

    /// Contour points in the landmark role order used by [`EyeLandmarkSet`].
    pub fn landmarks(&self) -> EyeLandmarkSet {
        let Point2D { x: cx, y: cy } = self.center;
        let half_w = self.width / 2.0;
        let quarter_w = self.width / 4.0;
        let half_h = self.height / 2.0;

        EyeLandmarkSet::new([
            Point2D::new(cx - half_w, cy),
            Point2D::new(cx - quarter_w, cy - half_h),
            Point2D::new(cx + quarter_w, cy - half_h),
            Point2D::new(cx + half_w, cy),
            Point2D::new(cx + quarter_w, cy + half_h),
            Point2D::new(cx - quarter_w, cy + half_h),
        ])
    }
}
