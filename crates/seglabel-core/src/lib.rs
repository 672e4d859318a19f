//! seglabel Core - Basic data structures for label and color rasters
//!
//! This crate provides the fundamental data structures used throughout
//! the seglabel workspace:
//!
//! - [`Raster`] - Generic row-major 2D pixel grid
//! - [`Region`] - Rectangular sub-window of a raster
//! - [`Pixel`] / [`Scalar`] / [`Label`] - Element traits for single- and
//!   multi-channel pixels and segment identifiers
//!
//! Raster primitives (deep copy, region crop, pixel counting, min/max scan,
//! channel split/compose, display conversion) are inherent methods on
//! [`Raster`].

pub mod error;
pub mod pixel;
pub mod raster;
pub mod region;

pub use error::{Error, Result};
pub use pixel::{Label, Pixel, Scalar, Vector3};
pub use raster::convert::RescaleOptions;
pub use raster::{ColorRaster, LabelRaster, Raster};
pub use region::Region;
