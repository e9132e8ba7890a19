use crate::surface::error::SurfaceError;
use crate::surface::field::central_gradient;
use crate::surface::narrow_band::Surface;
use crate::surface::types::Pt3;

impl Surface {
    /// Move `p` toward the zero level set with one Newton step along the
    /// estimated gradient (central differences with offset `h`).
    ///
    /// A single call is not a converged projection; repeated calls keep a
    /// walker close to the surface. Points with an exactly zero gradient are
    /// returned unchanged.
    pub fn project(&self, p: Pt3) -> Result<Pt3, SurfaceError> {
        let field = match &self.field {
            Some(field) if self.h > 0.0 => field,
            _ => return Err(SurfaceError::NoFieldConfigured),
        };

        let grad = central_gradient(field.as_ref(), &p, self.h);

        if grad.x == 0.0 && grad.y == 0.0 && grad.z == 0.0 {
            return Ok(p);
        }

        let dist = field.evaluate(&p);
        let norm = grad.magnitude();

        Ok(p - grad * (dist / norm))
    }

    /// Quantize each coordinate of `p` to the nearest multiple of `h`
    /// (round half up).
    ///
    /// The stored points are not searched; the result is a grid point, which
    /// need not be one of the sampled surface points.
    pub fn snap(&self, p: Pt3) -> Result<Pt3, SurfaceError> {
        if self.points.is_empty() {
            return Err(SurfaceError::EmptySurface);
        }
        if self.h <= 0.0 {
            return Err(SurfaceError::NoFieldConfigured);
        }

        let h = self.h;
        let quantize = |v: f64| (v / h + 0.5).floor() * h;

        Ok(Pt3::new(quantize(p.x), quantize(p.y), quantize(p.z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::field::{ImplicitField, Sphere};
    use crate::surface::types::Domain;

    fn sphere_surface(h: f64) -> Surface {
        Surface::from_domain(Sphere::new(Pt3::new(5.0, 5.0, 5.0), 4.5), &Domain::cube(0.0, 10.0), h).unwrap()
    }

    #[test]
    fn test_project_on_surface_is_fixed() {
        let surface = sphere_surface(0.5);
        let p = Pt3::new(9.5, 5.0, 5.0);
        assert_eq!(surface.project(p).unwrap(), p);
    }

    #[test]
    fn test_project_zero_gradient_unchanged() {
        let flat = |_x: f64, _y: f64, _z: f64| 1.0;
        let surface = Surface::from_domain(flat, &Domain::cube(0.0, 1.0), 0.5).unwrap();
        let p = Pt3::new(0.3, 0.7, 0.1);
        assert_eq!(surface.project(p).unwrap(), p);
    }

    #[test]
    fn test_project_moves_radially_onto_sphere() {
        let sphere = Sphere::new(Pt3::new(5.0, 5.0, 5.0), 4.5);
        let surface = sphere_surface(0.5);
        let p = Pt3::new(5.0, 5.0, 10.2);
        let q = surface.project(p).unwrap();
        assert!((q.x - 5.0).abs() < 1e-9);
        assert!((q.y - 5.0).abs() < 1e-9);
        assert!(sphere.evaluate(&q).abs() < 1e-9);
    }

    #[test]
    fn test_project_requires_field() {
        let surface = Surface::filled(3, Pt3::origin());
        assert_eq!(surface.project(Pt3::origin()), Err(SurfaceError::NoFieldConfigured));
        assert_eq!(Surface::default().project(Pt3::origin()), Err(SurfaceError::NoFieldConfigured));
    }

    #[test]
    fn test_snap_rounds_half_up() {
        let surface = sphere_surface(0.5);
        let snapped = surface.snap(Pt3::new(0.25, 0.74, -0.25)).unwrap();
        assert_eq!(snapped, Pt3::new(0.5, 0.5, 0.0));

        let snapped = surface.snap(Pt3::new(-0.26, 1.0, 2.2)).unwrap();
        assert_eq!(snapped, Pt3::new(-0.5, 1.0, 2.0));
    }

    #[test]
    fn test_snap_empty_surface() {
        assert_eq!(Surface::default().snap(Pt3::origin()), Err(SurfaceError::EmptySurface));
    }

    #[test]
    fn test_snap_without_spacing() {
        let surface = Surface::filled(2, Pt3::origin());
        assert_eq!(surface.snap(Pt3::origin()), Err(SurfaceError::NoFieldConfigured));
    }
}
