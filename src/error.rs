use thiserror::Error;

/// Top-level error type for the raymath kernel.
#[derive(Debug, Error)]
pub enum RaymathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

/// Errors raised while constructing geometric primitives.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("invalid bounds on axis {axis}: min {min} is greater than max {max}")]
    InvalidBounds { axis: usize, min: f32, max: f32 },
}

/// Errors raised while constructing coordinate values.
#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("radius is negative: {0}")]
    NegativeRadius(f32),

    #[error("angles must be zero when the radius is zero (theta = {theta}, phi = {phi})")]
    NonZeroAnglesAtOrigin { theta: f32, phi: f32 },
}

/// Convenience type alias for results using [`RaymathError`].
pub type Result<T> = std::result::Result<T, RaymathError>;
