//! Relabel, aggregate and colorize in one call

use log::debug;
use seglabel_color::{ColorError, LabelStatistics, aggregate_by_label, colorize_by_label};
use seglabel_core::{Label, Raster, Scalar};
use seglabel_region::{RegionError, relabel_sequential};
use thiserror::Error;

/// Errors from [`colorize_regions`]
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Relabeling failed
    #[error("relabel error: {0}")]
    Region(#[from] RegionError),

    /// Aggregation or colorizing failed
    #[error("color error: {0}")]
    Color(#[from] ColorError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Output of [`colorize_regions`]
#[derive(Debug, Clone, PartialEq)]
pub struct RegionColoring<L, S, const N: usize = 3> {
    /// Labels renumbered to `0..U`
    pub labels: Raster<L>,
    /// Color statistics indexed by the new labels
    pub statistics: LabelStatistics<N>,
    /// Every pixel painted with its region's average color
    pub colorized: Raster<[S; N]>,
}

/// Relabel `labels` sequentially, then paint each region of `colors` with
/// its average color.
///
/// Since the labels are dense after relabeling, every statistics entry is
/// defined.
pub fn colorize_regions<L: Label, S: Scalar, const N: usize>(
    labels: &Raster<L>,
    colors: &Raster<[S; N]>,
) -> PipelineResult<RegionColoring<L, S, N>> {
    debug!(
        "colorizing regions of {}x{} raster",
        labels.width(),
        labels.height()
    );
    let labels = relabel_sequential(labels)?;
    let statistics = aggregate_by_label(&labels, colors)?;
    let colorized = colorize_by_label(&labels, &statistics)?;
    Ok(RegionColoring {
        labels,
        statistics,
        colorized,
    })
}
