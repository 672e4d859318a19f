//! Error types for seglabel-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::region::Region;
use thiserror::Error;

/// seglabel core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds (pixel offset or channel index)
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Region not fully contained in the raster extent
    #[error(
        "region ({}, {}, {}x{}) out of bounds for {width}x{height} raster",
        .region.x, .region.y, .region.w, .region.h
    )]
    OutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },

    /// Two rasters passed to the same operation differ in size
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Scalar-only operation called with multi-channel pixels
    #[error("unsupported pixel type: expected 1 channel, got {channels}")]
    UnsupportedPixelType { channels: usize },

    /// Operation needs at least one pixel
    #[error("empty raster: no pixels to process")]
    EmptyRaster,

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
