//! Error types for pixdiff-core
//!
//! The comparison kernel itself never fails once its inputs are valid.
//! Every variant here is raised at the boundary, where a raw buffer or a
//! pair of buffers is checked before the kernel runs.

use thiserror::Error;

/// pixdiff-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Image dimensions that cannot be represented in memory
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw RGBA data whose length is not `width * height * 4`
    #[error("buffer length {actual} does not match {width}x{height} RGBA (expected {expected})")]
    BufferLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// The two compared buffers differ in size
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Pixel coordinates outside the buffer
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Unrecognized render mode name
    #[error("unknown render mode: {0} (expected highlight, heatmap or diffRGB)")]
    UnknownRenderMode(String),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pixdiff-core operations
pub type Result<T> = std::result::Result<T, Error>;
