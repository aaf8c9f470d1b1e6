//! Error types for frost_paint

use thiserror::Error;

/// Paint-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// Pixel buffer does not hold `width * height` RGBA8 pixels
    #[error("Pixel buffer has {actual} bytes, expected {expected} for {width}x{height} RGBA8")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Width or height is zero
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
