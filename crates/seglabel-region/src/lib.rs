//! seglabel-region - Label raster relabeling
//!
//! Segmentations often come out with arbitrary, sparse label values
//! (watershed basins numbered by seed, superpixels numbered by grid cell,
//! ...). This crate renumbers them into the dense range `0..U` while
//! preserving their relative order, so that per-label tables can be indexed
//! directly by label.
//!
//! # Examples
//!
//! ```
//! use seglabel_core::Raster;
//! use seglabel_region::relabel_sequential;
//!
//! let labels = Raster::from_rows(&[[5u32, 5], [10, 10]]).unwrap();
//! let dense = relabel_sequential(&labels).unwrap();
//! assert_eq!(dense.data(), &[0, 0, 1, 1]);
//! ```

pub mod error;
pub mod relabel;

pub use error::{RegionError, RegionResult};
pub use relabel::{RelabelMap, count_labels, relabel_sequential, relabel_sequential_with_map, unique_labels};
