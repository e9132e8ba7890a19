// Narrow-band sampling of an implicit surface
// Scans a regular grid over the domain and keeps the points close to the zero level set

use crate::surface::error::SurfaceError;
use crate::surface::field::ImplicitField;
use crate::surface::types::{Domain, Interval, Pt3};
use rayon::prelude::*;

/// Safety margin applied to the cell half-diagonal
const BAND_MARGIN: f64 = 1.1;

/// Half-width of the narrow band for grid spacing `h`.
/// Wide enough that no cell within `h * sqrt(3) / 2` of the surface is missed.
pub fn band_half_width(h: f64) -> f64 {
    BAND_MARGIN * 3.0_f64.sqrt() * h
}

pub(crate) fn validate_spacing(h: f64) -> Result<(), SurfaceError> {
    if h.is_finite() && h > 0.0 {
        Ok(())
    } else {
        Err(SurfaceError::InvalidSpacing(h))
    }
}

/// Grid coordinates along one axis: `min, min + h, min + 2h, ...` while `< max`.
///
/// Coordinates are produced by repeated addition, so for spacings that do not
/// divide the interval exactly the count can exceed `length / h`.
pub fn axis_samples(interval: Interval, h: f64) -> Result<Vec<f64>, SurfaceError> {
    validate_spacing(h)?;

    let mut samples = Vec::new();
    let mut value = interval.min;
    while value < interval.max {
        samples.push(value);
        let next = value + h;
        if next <= value {
            // Spacing below the float resolution at this magnitude
            return Err(SurfaceError::InvalidSpacing(h));
        }
        value = next;
    }
    Ok(samples)
}

/// Collect every grid point of `domain` (step `h`) where `|phi| < band_half_width(h)`.
///
/// Points are returned in scan order: x outermost, then y, then z.
/// X slabs are evaluated in parallel and concatenated in order, so the result
/// does not depend on thread scheduling.
pub fn sample_narrow_band<F>(field: &F, domain: &Domain, h: f64) -> Result<Vec<Pt3>, SurfaceError>
where
    F: ImplicitField + ?Sized,
{
    validate_spacing(h)?;

    let delta = band_half_width(h);
    let xs = axis_samples(domain.x, h)?;
    let ys = axis_samples(domain.y, h)?;
    let zs = axis_samples(domain.z, h)?;

    let slabs: Vec<Vec<Pt3>> = xs
        .par_iter()
        .map(|&x| {
            let mut slab = Vec::new();
            for &y in &ys {
                for &z in &zs {
                    let point = Pt3::new(x, y, z);
                    let dist = field.evaluate(&point);
                    if dist > -delta && dist < delta {
                        slab.push(point);
                    }
                }
            }
            slab
        })
        .collect();

    Ok(slabs.concat())
}
