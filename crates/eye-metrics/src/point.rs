use serde::{Deserialize, Serialize};

/// A facial landmark in image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Euclidean distance between two landmarks.
pub fn distance(p1: &Point2D, p2: &Point2D) -> f64 {
    p1.distance(p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_pythagorean() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point2D::from((320.0, 240.0));
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn distance_stays_finite_for_huge_coordinates() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(1e200, 0.0);
        assert_eq!(distance(&a, &b), 1e200);

        let c = Point2D::new(3e200, 4e200);
        let d = a.distance(&c);
        assert!(d.is_finite());
        assert!((d / 5e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn conversions() {
        assert_eq!(Point2D::from([1.5, -2.0]), Point2D::new(1.5, -2.0));
        assert!(!Point2D::new(f64::NAN, 0.0).is_finite());
    }
}
