use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Pt3 = Point3<f64>;
pub type Vec3 = Vector3<f64>;

/// Closed-open scan range along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

/// Axis-aligned scan region, one interval per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Domain {
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    /// Same interval on all three axes
    pub fn cube(min: f64, max: f64) -> Self {
        let side = Interval::new(min, max);
        Self::new(side, side, side)
    }

    pub fn volume(&self) -> f64 {
        self.x.length() * self.y.length() * self.z.length()
    }
}

/// Formats a point as a single `x y z` row
pub struct PointRow<'a>(pub &'a Pt3);

impl fmt::Display for PointRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_row_format() {
        let p = Pt3::new(1.5, -2.0, 0.25);
        assert_eq!(PointRow(&p).to_string(), "1.5 -2 0.25");
    }

    #[test]
    fn test_cube_domain_volume() {
        let domain = Domain::cube(0.0, 10.0);
        assert_eq!(domain.x, domain.z);
        assert!((domain.volume() - 1000.0).abs() < 1e-9);
    }
}
