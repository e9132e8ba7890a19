//! Random walks on implicit surfaces
//!
//! A surface is approximated by the narrow band of grid points around the zero
//! level set of a scalar field. Walkers take axis-aligned lattice steps and are
//! pulled back toward the surface with one gradient step per move.
//!
//! # Example
//!
//! ```
//! use levelset_walk::surface::{Domain, Pt3, Sphere, Surface};
//!
//! let sphere = Sphere::new(Pt3::new(5.0, 5.0, 5.0), 4.5);
//! let surface = Surface::from_domain(sphere, &Domain::cube(0.0, 10.0), 0.25).unwrap();
//! assert!(surface.n_points() > 0);
//!
//! let moved = surface.project(Pt3::new(5.0, 0.0, 5.0)).unwrap();
//! assert!((moved.y - 0.5).abs() < 1e-6);
//! ```

pub mod analysis;
pub mod error;
pub mod logging;
pub mod settings;
pub mod surface;
pub mod walk;

pub use error::{Error, Result};
pub use settings::SimulationConfig;
pub use surface::{Domain, ImplicitField, Interval, Pt3, Sphere, Surface, SurfaceError};
