//! Errors for degenerate numeric input.

use thiserror::Error;

/// Errors raised instead of letting NaN or infinity flow into later math.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize a zero-length or non-finite vector")]
    ZeroLength,

    #[error("matrix is singular (determinant {determinant})")]
    Singular { determinant: f32 },

    #[error("degenerate frustum: {0}")]
    DegenerateFrustum(&'static str),

    #[error("view direction is parallel to the up vector")]
    ParallelUp,
}

/// Result type for fallible math operations.
pub type MathResult<T> = Result<T, MathError>;
