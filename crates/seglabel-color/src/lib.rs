//! seglabel-color - Per-label color statistics and region colorizing
//!
//! Given a label raster and a color raster of the same size:
//!
//! - [`aggregate_by_label`] sums every label's colors and divides by its
//!   pixel count, producing a dense [`LabelStatistics`] table indexed by
//!   label
//! - [`colorize_by_label`] paints every pixel with the average color of its
//!   label
//!
//! Together they turn a segmentation into a "mean color per region"
//! rendering.
//!
//! # Examples
//!
//! ```
//! use seglabel_color::colorize_by_average_color;
//! use seglabel_core::Raster;
//!
//! let labels = Raster::from_rows(&[[0u32, 0], [1, 1]]).unwrap();
//! let colors = Raster::from_rows(&[
//!     [[10u8, 10, 10], [20, 20, 20]],
//!     [[30, 30, 30], [40, 40, 40]],
//! ])
//! .unwrap();
//!
//! let mean = colorize_by_average_color(&labels, &colors).unwrap();
//! assert_eq!(mean.get_pixel(1, 0).unwrap(), [15, 15, 15]);
//! assert_eq!(mean.get_pixel(0, 1).unwrap(), [35, 35, 35]);
//! ```

pub mod colorize;
pub mod error;
pub mod stats;

pub use colorize::{colorize_by_average_color, colorize_by_label};
pub use error::{ColorError, ColorResult};
pub use stats::{LabelStatistics, LabelStats, aggregate_by_label};
