//! seglabel - Label relabeling and region average colors for Rust
//!
//! # Overview
//!
//! seglabel post-processes image segmentations:
//!
//! - Raster primitives (deep copy, region crop, pixel counting, min/max)
//! - Sequential relabeling of arbitrary label sets into `0..U`
//! - Per-label color statistics and "mean color per region" rendering
//! - Channelwise smoothing of multi-channel rasters (bilateral filter)
//! - 8-bit image output (PNG, PNM) for inspection
//!
//! # Example
//!
//! ```
//! use seglabel::{Raster, colorize_regions};
//!
//! let labels = Raster::from_rows(&[[5u32, 5], [10, 10]]).unwrap();
//! let colors = Raster::from_rows(&[
//!     [[10u8, 10, 10], [20, 20, 20]],
//!     [[30, 30, 30], [40, 40, 40]],
//! ])
//! .unwrap();
//!
//! let coloring = colorize_regions(&labels, &colors).unwrap();
//! assert_eq!(coloring.labels.data(), &[0, 0, 1, 1]);
//! assert_eq!(coloring.statistics.average_color(1).unwrap(), [35.0; 3]);
//! assert_eq!(coloring.colorized.get_pixel(0, 0).unwrap(), [15, 15, 15]);
//! ```

pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use seglabel_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use seglabel_color as color;
pub use seglabel_filter as filter;
pub use seglabel_io as io;
pub use seglabel_region as region;

pub use pipeline::{PipelineError, PipelineResult, RegionColoring, colorize_regions};
