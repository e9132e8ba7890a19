pub mod error;
pub mod field;
pub mod narrow_band;
pub mod projection;
pub mod sampler;
pub mod types;

// Re-export commonly used items
pub use error::SurfaceError;
pub use field::{central_gradient, BlendedSpheres, ImplicitField, Sphere, Torus};
pub use narrow_band::Surface;
pub use sampler::{band_half_width, sample_narrow_band};
pub use types::{Domain, Interval, PointRow, Pt3, Vec3};
