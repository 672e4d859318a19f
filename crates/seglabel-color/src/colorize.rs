//! Region colorizing
//!
//! Every pixel is painted with the average color of its label, converted
//! back to the output channel type with rounding and saturation.

use crate::error::{ColorError, ColorResult};
use crate::stats::{LabelStatistics, aggregate_by_label, label_index};
use log::debug;
use seglabel_core::{Label, Raster, Scalar};

/// Paint every pixel with its label's average color.
///
/// The output has the size of `labels`. It is returned only if every pixel
/// could be colored.
///
/// # Errors
///
/// - `ColorError::LabelOutOfRange` for a label with no entry in `stats`
/// - `ColorError::UndefinedAverage` for a label whose entry has no pixels
/// - `ColorError::InvalidLabel` for negative labels
pub fn colorize_by_label<L: Label, S: Scalar, const N: usize>(
    labels: &Raster<L>,
    stats: &LabelStatistics<N>,
) -> ColorResult<Raster<[S; N]>> {
    debug!(
        "colorizing {}x{} raster from {} label entries",
        labels.width(),
        labels.height(),
        stats.len()
    );

    // Convert each average once rather than once per pixel.
    let palette: Vec<Option<[S; N]>> = stats
        .iter()
        .map(|(_, s)| s.average_color.map(|avg| avg.map(S::from_f64)))
        .collect();

    let data = labels
        .pixels()
        .map(|label| {
            let index = label_index(label)?;
            palette
                .get(index)
                .ok_or(ColorError::LabelOutOfRange {
                    label: index,
                    len: palette.len(),
                })?
                .ok_or(ColorError::UndefinedAverage { label: index })
        })
        .collect::<ColorResult<Vec<_>>>()?;

    Ok(Raster::from_data(labels.width(), labels.height(), data)?)
}

/// Aggregate `colors` by label and paint each region with its average.
///
/// Every label present has at least one pixel, so no average is undefined.
pub fn colorize_by_average_color<L: Label, S: Scalar, const N: usize>(
    labels: &Raster<L>,
    colors: &Raster<[S; N]>,
) -> ColorResult<Raster<[S; N]>> {
    let stats = aggregate_by_label(labels, colors)?;
    colorize_by_label(labels, &stats)
}
