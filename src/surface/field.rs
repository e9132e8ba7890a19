use crate::surface::types::{Pt3, Vec3};
use serde::{Deserialize, Serialize};

/// A scalar field over 3D space whose zero level set defines a surface.
/// Must be Sync so walkers can evaluate it from parallel iterators.
pub trait ImplicitField: Send + Sync {
    fn evaluate(&self, point: &Pt3) -> f64;
}

impl<F> ImplicitField for F
where
    F: Fn(f64, f64, f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, point: &Pt3) -> f64 {
        self(point.x, point.y, point.z)
    }
}

/// Signed distance function for a sphere
pub fn sphere_sdf(point: &Pt3, center: &Pt3, radius: f64) -> f64 {
    (point - center).magnitude() - radius
}

/// Smooth minimum (polynomial approximation)
/// Falls back to a hard min when the blend radius is not positive
pub fn smooth_min_poly(a: f64, b: f64, k: f64) -> f64 {
    if k <= 0.0 {
        return a.min(b);
    }
    let h = (k - (a - b).abs()).max(0.0);
    a.min(b) - h * h * 0.25 / k
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Pt3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Pt3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl ImplicitField for Sphere {
    fn evaluate(&self, point: &Pt3) -> f64 {
        sphere_sdf(point, &self.center, self.radius)
    }
}

/// Torus lying in the plane z = center.z, symmetric about the z axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    pub center: Pt3,
    /// Distance from the center to the middle of the tube
    pub major_radius: f64,
    /// Tube radius
    pub minor_radius: f64,
}

impl Torus {
    pub fn new(center: Pt3, major_radius: f64, minor_radius: f64) -> Self {
        Self {
            center,
            major_radius,
            minor_radius,
        }
    }
}

impl ImplicitField for Torus {
    fn evaluate(&self, point: &Pt3) -> f64 {
        let local = point - self.center;
        let ring = (local.x * local.x + local.y * local.y).sqrt() - self.major_radius;
        (ring * ring + local.z * local.z).sqrt() - self.minor_radius
    }
}

/// Field built from a supplied point cloud: a sphere around every point,
/// merged with a smooth minimum so neighbouring blobs fuse into one surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendedSpheres {
    pub centers: Vec<Pt3>,
    pub radius: f64,
    pub blend_radius: f64,
}

impl BlendedSpheres {
    pub fn new(centers: Vec<Pt3>, radius: f64, blend_radius: f64) -> Self {
        Self {
            centers,
            radius,
            blend_radius,
        }
    }
}

impl ImplicitField for BlendedSpheres {
    fn evaluate(&self, point: &Pt3) -> f64 {
        if self.centers.is_empty() {
            return f64::INFINITY; // Outside
        }

        self.centers
            .iter()
            .map(|center| sphere_sdf(point, center, self.radius))
            .fold(f64::INFINITY, |acc, d| smooth_min_poly(acc, d, self.blend_radius))
    }
}

/// Estimate the field gradient using central differences with offset `h`
pub fn central_gradient<F: ImplicitField + ?Sized>(field: &F, point: &Pt3, h: f64) -> Vec3 {
    let x = point.x;
    let y = point.y;
    let z = point.z;

    let dx = (field.evaluate(&Pt3::new(x + h, y, z)) - field.evaluate(&Pt3::new(x - h, y, z)))
        / (2.0 * h);

    let dy = (field.evaluate(&Pt3::new(x, y + h, z)) - field.evaluate(&Pt3::new(x, y - h, z)))
        / (2.0 * h);

    let dz = (field.evaluate(&Pt3::new(x, y, z + h)) - field.evaluate(&Pt3::new(x, y, z - h)))
        / (2.0 * h);

    Vec3::new(dx, dy, dz)
}
