//! Surface errors

use thiserror::Error;

/// Precondition violations raised by the surface core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error(
        "no field configured: the surface must be built from an implicit field \
         with a positive grid spacing"
    )]
    NoFieldConfigured,

    #[error("surface has no points")]
    EmptySurface,

    #[error("invalid grid spacing {0}: must be finite and positive")]
    InvalidSpacing(f64),
}
