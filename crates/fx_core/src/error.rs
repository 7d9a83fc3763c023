//! Core error types

use thiserror::Error;

/// Errors produced when parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty or only whitespace
    #[error("color string is empty")]
    Empty,

    /// Not a known color name
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Hex notation with an unsupported number of digits
    #[error("hex color must have 3, 4, 6 or 8 digits, got {0}")]
    HexLength(usize),

    /// Hex notation containing a non-hex character
    #[error("invalid hex digit in color: {0}")]
    HexDigit(String),
}

/// Errors produced by drawing surfaces
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// Surface dimensions are zero or not representable
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    /// Backing buffer does not match the surface dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Failed to encode or write an image
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for surface operations
pub type Result<T> = std::result::Result<T, SurfaceError>;
