//! Render errors.

use prx_math::MathError;
use thiserror::Error;

/// Errors that can occur while configuring a camera or rendering.
///
/// A ray missing every object or running out of reflection depth is not an
/// error; those produce the background color or black.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("math error: {0}")]
    Math(#[from] MathError),

    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error(
        "camera resolution {camera_width}x{camera_height} does not match image buffer {image_width}x{image_height}"
    )]
    ResolutionMismatch {
        camera_width: u32,
        camera_height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("pixel ({x}, {row}) outside {width}x{height} image")]
    PixelOutOfRange { x: u32, row: u32, width: u32, height: u32 },

    #[error("material {field} must be finite and non-negative, got {value}")]
    InvalidMaterial { field: &'static str, value: f32 },

    #[error("camera already owns an image buffer")]
    ImageAlreadyAssigned,

    #[error("render cancelled")]
    Cancelled,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
