//! EAR (Eye Aspect Ratio) computation
//!
//! EAR = (|p1-p5| + |p2-p4|) / (2 * |p0-p3|)
//!
//! Landmark roles by index, following the six-point eye contour of 68-point
//! face landmark models (outer corner first, upper lid, inner corner, lower
//! lid):
//!
//! | index | role                     | used as            |
//! |-------|--------------------------|--------------------|
//! | 0     | outer corner             | horizontal ref A   |
//! | 1     | upper lid, outer         | vertical pair 1 top|
//! | 2     | upper lid, inner         | vertical pair 2 top|
//! | 3     | inner corner             | horizontal ref B   |
//! | 4     | lower lid, inner         | vertical pair 2 bot|
//! | 5     | lower lid, outer         | vertical pair 1 bot|
//!
//! A detector with a different ordering must be remapped into this layout
//! before calling into this module; the ratio is meaningless otherwise.

use serde::{Deserialize, Serialize};

use crate::error::EarError;
use crate::point::{distance, Point2D};

pub const LANDMARK_COUNT: usize = 6;

pub const OUTER_CORNER: usize = 0;
pub const UPPER_OUTER: usize = 1;
pub const UPPER_INNER: usize = 2;
pub const INNER_CORNER: usize = 3;
pub const LOWER_INNER: usize = 4;
pub const LOWER_OUTER: usize = 5;

/// Horizontal distances at or below this are treated as coincident corners.
pub const DEGENERATE_EPSILON: f64 = 1e-6;

/// Six ordered landmarks for one eye.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeLandmarkSet {
    points: [Point2D; LANDMARK_COUNT],
}

impl EyeLandmarkSet {
    pub const fn new(points: [Point2D; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Builds a set from a slice, rejecting anything but exactly six points.
    pub fn from_slice(points: &[Point2D]) -> Result<Self, EarError> {
        let points: [Point2D; LANDMARK_COUNT] =
            points.try_into().map_err(|_| EarError::InvalidInput {
                expected: LANDMARK_COUNT,
                got: points.len(),
            })?;
        Ok(Self::new(points))
    }

    /// Builds a set from interleaved coordinates: x0, y0, x1, y1, ... x5, y5.
    pub fn from_flat(coords: &[f64]) -> Result<Self, EarError> {
        if coords.len() != LANDMARK_COUNT * 2 {
            return Err(EarError::InvalidInput {
                expected: LANDMARK_COUNT * 2,
                got: coords.len(),
            });
        }
        let mut points = [Point2D::new(0.0, 0.0); LANDMARK_COUNT];
        for (point, pair) in points.iter_mut().zip(coords.chunks_exact(2)) {
            *point = Point2D::new(pair[0], pair[1]);
        }
        Ok(Self::new(points))
    }

    pub fn points(&self) -> &[Point2D; LANDMARK_COUNT] {
        &self.points
    }

    /// Outer vertical span, |p1 - p5|.
    pub fn outer_vertical(&self) -> f64 {
        distance(&self.points[UPPER_OUTER], &self.points[LOWER_OUTER])
    }

    /// Inner vertical span, |p2 - p4|.
    pub fn inner_vertical(&self) -> f64 {
        distance(&self.points[UPPER_INNER], &self.points[LOWER_INNER])
    }

    /// Corner-to-corner span, |p0 - p3|.
    pub fn horizontal(&self) -> f64 {
        distance(&self.points[OUTER_CORNER], &self.points[INNER_CORNER])
    }

    pub fn ear(&self) -> Result<f64, EarError> {
        let horizontal = self.horizontal();
        if !horizontal.is_finite() || horizontal <= DEGENERATE_EPSILON {
            return Err(EarError::DegenerateGeometry {
                reference: "horizontal corner distance",
                value: horizontal,
            });
        }

        let ear = (self.outer_vertical() + self.inner_vertical()) / (2.0 * horizontal);
        if !ear.is_finite() {
            return Err(EarError::DegenerateGeometry {
                reference: "eye aspect ratio",
                value: ear,
            });
        }
        Ok(ear)
    }

    /// Reflects every point across the vertical line `x = axis_x`.
    ///
    /// Index roles are kept, so the mirrored set describes the opposite eye
    /// with the same shape.
    pub fn mirrored(&self, axis_x: f64) -> Self {
        self.map(|p| Point2D::new(2.0 * axis_x - p.x, p.y))
    }

    /// Uniformly scales every coordinate about the origin.
    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|p| Point2D::new(p.x * factor, p.y * factor))
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        self.map(|p| Point2D::new(p.x + dx, p.y + dy))
    }

    fn map(&self, f: impl Fn(&Point2D) -> Point2D) -> Self {
        Self::new(self.points.map(|p| f(&p)))
    }
}

impl TryFrom<&[Point2D]> for EyeLandmarkSet {
    type Error = EarError;

    fn try_from(points: &[Point2D]) -> Result<Self, Self::Error> {
        Self::from_slice(points)
    }
}

impl From<[Point2D; LANDMARK_COUNT]> for EyeLandmarkSet {
    fn from(points: [Point2D; LANDMARK_COUNT]) -> Self {
        Self::new(points)
    }
}

/// Computes the EAR of a six-point eye contour.
pub fn compute_ear(points: &[Point2D]) -> Result<f64, EarError> {
    EyeLandmarkSet::from_slice(points)?.ear()
}

/// Computes the EAR from 12 interleaved coordinates.
pub fn compute_ear_flat(coords: &[f64]) -> Result<f64, EarError> {
    EyeLandmarkSet::from_flat(coords)?.ear()
}
