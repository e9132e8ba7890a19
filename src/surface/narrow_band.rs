use crate::surface::error::SurfaceError;
use crate::surface::field::ImplicitField;
use crate::surface::sampler::sample_narrow_band;
use crate::surface::types::{Domain, Interval, PointRow, Pt3};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// Point-cloud approximation of an implicit surface.
///
/// Holds the sampled points in scan order and, when built from a field,
/// the field and grid spacing needed by `project` and `snap`.
/// Cloning deep-copies the points; the field is immutable and shared.
#[derive(Clone, Default)]
pub struct Surface {
    pub(crate) points: Vec<Pt3>,
    pub(crate) field: Option<Arc<dyn ImplicitField>>,
    /// Grid spacing used during construction, 0.0 when not applicable
    pub(crate) h: f64,
}

impl Surface {
    /// `n` copies of the same point, without a field
    pub fn filled(n: usize, point: Pt3) -> Self {
        Self {
            points: vec![point; n],
            field: None,
            h: 0.0,
        }
    }

    /// Copy of externally computed points, without a field
    pub fn from_points(points: &[Pt3]) -> Self {
        Self::from(points.to_vec())
    }

    /// Sample the narrow band of `field` over the box `x * y * z` with spacing `h`.
    /// The field and spacing are retained for projection and snapping.
    pub fn from_field<F>(
        field: F,
        x: Interval,
        y: Interval,
        z: Interval,
        h: f64,
    ) -> Result<Self, SurfaceError>
    where
        F: ImplicitField + 'static,
    {
        Self::from_shared_field(Arc::new(field), &Domain::new(x, y, z), h)
    }

    pub fn from_domain<F>(field: F, domain: &Domain, h: f64) -> Result<Self, SurfaceError>
    where
        F: ImplicitField + 'static,
    {
        Self::from_shared_field(Arc::new(field), domain, h)
    }

    /// Same as `from_domain` for a field already behind an `Arc`
    pub fn from_shared_field(
        field: Arc<dyn ImplicitField>,
        domain: &Domain,
        h: f64,
    ) -> Result<Self, SurfaceError> {
        let points = sample_narrow_band(field.as_ref(), domain, h)?;

        Ok(Self {
            points,
            field: Some(field),
            h,
        })
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pt3> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Pt3] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pt3> {
        self.points.iter()
    }

    /// Grid spacing used to build the surface, 0.0 for raw point surfaces
    pub fn spacing(&self) -> f64 {
        self.h
    }

    pub fn has_field(&self) -> bool {
        self.field.is_some()
    }

    pub fn field(&self) -> Option<&Arc<dyn ImplicitField>> {
        self.field.as_ref()
    }
}

impl From<Vec<Pt3>> for Surface {
    fn from(points: Vec<Pt3>) -> Self {
        Self {
            points,
            field: None,
            h: 0.0,
        }
    }
}

impl Index<usize> for Surface {
    type Output = Pt3;

    fn index(&self, index: usize) -> &Pt3 {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Surface {
    type Item = &'a Pt3;
    type IntoIter = std::slice::Iter<'a, Pt3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("n_points", &self.points.len())
            .field("has_field", &self.field.is_some())
            .field("h", &self.h)
            .finish()
    }
}

/// One `x y z` row per point, in scan order
impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            writeln!(f, "{}", PointRow(point))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::field::Sphere;

    fn unit_sphere_surface() -> Surface {
        let sphere = Sphere::new(Pt3::origin(), 1.0);
        Surface::from_domain(sphere, &Domain::cube(-1.5, 1.5), 0.1).unwrap()
    }

    #[test]
    fn test_filled() {
        let surface = Surface::filled(4, Pt3::new(1.0, 2.0, 3.0));
        assert_eq!(surface.n_points(), 4);
        assert!(surface.iter().all(|p| *p == Pt3::new(1.0, 2.0, 3.0)));
        assert!(!surface.has_field());
        assert_eq!(surface.spacing(), 0.0);
    }

    #[test]
    fn test_from_points_deep_copies() {
        let mut source = vec![Pt3::new(0.0, 0.0, 0.0), Pt3::new(1.0, 1.0, 1.0)];
        let surface = Surface::from_points(&source);
        source[0] = Pt3::new(9.0, 9.0, 9.0);
        assert_eq!(surface[0], Pt3::origin());
        assert_eq!(surface.n_points(), 2);
    }

    #[test]
    fn test_default_is_empty() {
        let surface = Surface::default();
        assert!(surface.is_empty());
        assert!(!surface.has_field());
        assert!(surface.get(0).is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = unit_sphere_surface();
        let mut copy = original.clone();
        assert_eq!(copy.points(), original.points());
        assert!(copy.has_field());

        copy = Surface::filled(1, Pt3::origin());
        assert_eq!(copy.n_points(), 1);
        assert!(original.n_points() > 1);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut source = unit_sphere_surface();
        let count = source.n_points();
        let moved = std::mem::take(&mut source);

        assert_eq!(moved.n_points(), count);
        assert!(moved.has_field());
        assert_eq!(source.n_points(), 0);
        assert!(!source.has_field());
        assert_eq!(source.spacing(), 0.0);
    }

    #[test]
    fn test_display_rows() {
        let surface = Surface::from_points(&[Pt3::new(1.0, 2.0, 3.0), Pt3::new(0.5, 0.0, -1.0)]);
        assert_eq!(surface.to_string(), "1 2 3\n0.5 0 -1\n");
        assert_eq!(Surface::default().to_string(), "");
    }

    #[test]
    fn test_field_surface_retains_spacing() {
        let surface = unit_sphere_surface();
        assert!(surface.n_points() > 0);
        assert_eq!(surface.spacing(), 0.1);
        assert!(surface.field().is_some());
    }
}
