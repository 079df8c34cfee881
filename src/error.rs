use thiserror::Error;

/// Top-level error type for circint.
#[derive(Debug, Error)]
pub enum CircintError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the circles themselves.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("no solution to circle intersection: distance {distance}, radii {r1} and {r2}")]
    NoIntersection { distance: f64, r1: f64, r2: f64 },

    #[error("{parameter} must not be negative, got {value}")]
    NegativeRadius { parameter: &'static str, value: f64 },

    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to how an operation was requested.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("illegal side selection {0:?}, expected one of \"lr\", \"l\", \"r\"")]
    InvalidMode(String),

    #[error("tolerance factor must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`CircintError`].
pub type Result<T> = std::result::Result<T, CircintError>;
