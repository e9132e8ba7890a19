//! Spread statistics for walkers on a sphere
//!
//! Distances are measured along great circles between the directions of two
//! points as seen from the sphere center, so points slightly off the surface
//! are handled the same as points on it.

use rayon::prelude::*;
use thiserror::Error;

use crate::surface::{Pt3, Vec3};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("point coincides with the sphere center, direction is undefined")]
    DegenerateVector,
}

/// Unit for geodesic distances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Radians,
    Degrees,
    /// Arc length, in the units of the radius
    Arc,
}

fn unit_direction(point: &Pt3, center: &Pt3) -> Result<Vec3, AnalysisError> {
    let offset = point - center;
    let norm = offset.magnitude();
    if norm == 0.0 {
        return Err(AnalysisError::DegenerateVector);
    }
    Ok(offset / norm)
}

/// Angle between two unit vectors.
/// atan2 of the cross and dot products stays accurate near 0 and pi.
fn angle_between(a: &Vec3, b: &Vec3) -> f64 {
    let dot = a.dot(b).clamp(-1.0, 1.0);
    let cross_norm = a.cross(b).magnitude();
    cross_norm.atan2(dot)
}

fn convert(angle: f64, radius: f64, unit: AngleUnit) -> f64 {
    match unit {
        AngleUnit::Radians => angle,
        AngleUnit::Degrees => angle.to_degrees(),
        AngleUnit::Arc => angle * radius,
    }
}

/// Great-circle distance between `a` and `b` on the sphere `(center, radius)`
pub fn geodesic_distance(
    a: &Pt3,
    b: &Pt3,
    center: &Pt3,
    radius: f64,
    unit: AngleUnit,
) -> Result<f64, AnalysisError> {
    let a_unit = unit_direction(a, center)?;
    let b_unit = unit_direction(b, center)?;
    Ok(convert(angle_between(&a_unit, &b_unit), radius, unit))
}

/// Distance from `start` to every point, in input order
pub fn geodesic_distances(
    points: &[Pt3],
    start: &Pt3,
    center: &Pt3,
    radius: f64,
    unit: AngleUnit,
) -> Result<Vec<f64>, AnalysisError> {
    let start_unit = unit_direction(start, center)?;

    points
        .par_iter()
        .map(|point| -> Result<f64, AnalysisError> {
            let point_unit = unit_direction(point, center)?;
            Ok(convert(angle_between(&point_unit, &start_unit), radius, unit))
        })
        .collect()
}

/// Mean squared angular distance (radians) from `start`.
/// Grows linearly with time for diffusion on the sphere at short times.
pub fn angular_variance(points: &[Pt3], start: &Pt3, center: &Pt3) -> Result<f64, AnalysisError> {
    if points.is_empty() {
        return Ok(0.0);
    }

    // Radius does not affect angles
    let angles = geodesic_distances(points, start, center, 1.0, AngleUnit::Radians)?;
    let sum: f64 = angles.iter().map(|a| a * a).sum();
    Ok(sum / angles.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_quarter_circle() {
        let center = Pt3::origin();
        let a = Pt3::new(0.0, 0.0, 4.5);
        let b = Pt3::new(4.5, 0.0, 0.0);

        let rad = geodesic_distance(&a, &b, &center, 4.5, AngleUnit::Radians).unwrap();
        assert!((rad - FRAC_PI_2).abs() < 1e-12);

        let deg = geodesic_distance(&a, &b, &center, 4.5, AngleUnit::Degrees).unwrap();
        assert!((deg - 90.0).abs() < 1e-9);

        let arc = geodesic_distance(&a, &b, &center, 4.5, AngleUnit::Arc).unwrap();
        assert!((arc - 4.5 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_offset_center_and_length_invariance() {
        let center = Pt3::new(5.0, 5.0, 5.0);
        let a = Pt3::new(5.0, 0.5, 5.0);
        // Opposite side, further out than the radius
        let b = Pt3::new(5.0, 12.0, 5.0);
        let rad = geodesic_distance(&a, &b, &center, 4.5, AngleUnit::Radians).unwrap();
        assert!((rad - PI).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_vector() {
        let center = Pt3::new(1.0, 1.0, 1.0);
        let err = geodesic_distance(&center, &Pt3::origin(), &center, 1.0, AngleUnit::Radians);
        assert_eq!(err, Err(AnalysisError::DegenerateVector));
    }

    #[test]
    fn test_batch_matches_single() {
        let center = Pt3::origin();
        let start = Pt3::new(0.0, 0.0, 1.0);
        let points = vec![
            Pt3::new(1.0, 0.0, 0.0),
            Pt3::new(0.3, -0.2, 0.9),
            Pt3::new(-1.0, 2.0, -3.0),
        ];

        let batch = geodesic_distances(&points, &start, &center, 2.0, AngleUnit::Arc).unwrap();
        for (point, distance) in points.iter().zip(&batch) {
            let single = geodesic_distance(point, &start, &center, 2.0, AngleUnit::Arc).unwrap();
            assert!((single - distance).abs() < 1e-12);
        }
    }

    #[test]
    fn test_angular_variance() {
        let center = Pt3::origin();
        let start = Pt3::new(0.0, 0.0, 1.0);
        assert_eq!(angular_variance(&[start, start], &start, &center).unwrap(), 0.0);

        let points = [Pt3::new(1.0, 0.0, 0.0), Pt3::new(0.0, 0.0, 1.0)];
        let variance = angular_variance(&points, &start, &center).unwrap();
        assert!((variance - FRAC_PI_2 * FRAC_PI_2 / 2.0).abs() < 1e-12);

        assert_eq!(angular_variance(&[], &start, &center).unwrap(), 0.0);
    }
}
