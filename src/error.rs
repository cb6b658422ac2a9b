//! Caller-input errors
//!
//! Rasterization itself is deterministic and cannot fail; everything in
//! here is a usage error detected up front, before any buffer write.

use thiserror::Error;

/// Input validation errors for [`rasterize_quad`](crate::rasterize_quad).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    /// Fewer than four vertices were supplied.
    #[error("quadrilateral needs 4 vertices, got {x_len} x and {y_len} y coordinates")]
    TooFewVertices { x_len: usize, y_len: usize },

    /// A vertex coordinate is NaN or infinite.
    #[error("vertex {index} is not finite: ({x}, {y})")]
    NonFiniteVertex { index: usize, x: f64, y: f64 },

    /// The raster dimensions do not describe an addressable buffer.
    #[error("raster dimensions {nx}x{ny} overflow the addressable size")]
    InvalidDimension { nx: usize, ny: usize },

    /// The weight buffer length disagrees with the raster dimensions.
    #[error("weight buffer holds {got} bytes, expected {expected} ({nx}x{ny})")]
    BufferSizeMismatch {
        expected: usize,
        got: usize,
        nx: usize,
        ny: usize,
    },
}
