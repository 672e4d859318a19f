//! Per-label color statistics
//!
//! The table is dense: it has one entry for every id in `0..=max_label`,
//! whether or not the id occurs in the label raster. Ids that do not occur
//! have a pixel count of zero and no average color.

use crate::error::{ColorError, ColorResult};
use log::{debug, warn};
use seglabel_core::{Error, Label, Raster, Scalar};

/// Accumulated color statistics of one label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStats<const N: usize> {
    /// Number of pixels carrying the label
    pub pixel_count: u64,
    /// Per-channel sum of their colors
    pub color_sum: [f64; N],
    /// `color_sum / pixel_count`, `None` when `pixel_count` is zero
    pub average_color: Option<[f64; N]>,
}

impl<const N: usize> Default for LabelStats<N> {
    fn default() -> Self {
        Self {
            pixel_count: 0,
            color_sum: [0.0; N],
            average_color: None,
        }
    }
}

/// Dense table of [`LabelStats`] indexed by label id
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStatistics<const N: usize = 3> {
    entries: Vec<LabelStats<N>>,
}

impl<const N: usize> LabelStatistics<N> {
    /// Number of entries (`max_label + 1`)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Statistics of one label
    pub fn get(&self, label: usize) -> Option<&LabelStats<N>> {
        self.entries.get(label)
    }

    /// Pixel count of one label, `None` past the end of the table
    pub fn pixel_count(&self, label: usize) -> Option<u64> {
        self.entries.get(label).map(|s| s.pixel_count)
    }

    /// Average color of one label.
    ///
    /// # Errors
    ///
    /// - `ColorError::LabelOutOfRange` if `label >= self.len()`
    /// - `ColorError::UndefinedAverage` if the label has no pixels
    pub fn average_color(&self, label: usize) -> ColorResult<[f64; N]> {
        let entry = self.entries.get(label).ok_or(ColorError::LabelOutOfRange {
            label,
            len: self.entries.len(),
        })?;
        entry
            .average_color
            .ok_or(ColorError::UndefinedAverage { label })
    }

    /// Labels in the table that have no pixels
    pub fn undefined_labels(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, s)| s.average_color.is_none())
            .map(|(label, _)| label)
            .collect()
    }

    /// Sum of all pixel counts
    pub fn total_pixels(&self) -> u64 {
        self.entries.iter().map(|s| s.pixel_count).sum()
    }

    /// Iterate `(label, stats)` in label order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &LabelStats<N>)> {
        self.entries.iter().enumerate()
    }
}

/// Convert a label to a table index.
pub(crate) fn label_index<L: Label>(label: L) -> ColorResult<usize> {
    label
        .to_index()
        .ok_or_else(|| ColorError::InvalidLabel(format!("negative label {:?}", label)))
}

/// Accumulate color statistics for every label id in `0..=max_label`.
///
/// Colors are promoted to `f64` before summing.
///
/// # Errors
///
/// - `Error::ShapeMismatch` if the rasters differ in size
/// - `Error::EmptyRaster` if the rasters have no pixels
/// - `ColorError::InvalidLabel` for negative labels, and for a maximum label
///   whose dense table cannot be allocated
pub fn aggregate_by_label<L: Label, S: Scalar, const N: usize>(
    labels: &Raster<L>,
    colors: &Raster<[S; N]>,
) -> ColorResult<LabelStatistics<N>> {
    labels.check_same_size(colors)?;
    if labels.is_empty() {
        return Err(Error::EmptyRaster.into());
    }

    let (min_label, max_label) = labels.min_max()?;
    label_index(min_label)?;
    let len = label_index(max_label)?
        .checked_add(1)
        .ok_or_else(|| ColorError::InvalidLabel(format!("label {:?} too large", max_label)))?;
    debug!(
        "aggregating {} channels over {}x{} raster, {} label ids",
        N,
        labels.width(),
        labels.height(),
        len
    );

    let mut entries = Vec::new();
    entries.try_reserve_exact(len).map_err(|_| {
        ColorError::InvalidLabel(format!(
            "label {:?} needs a statistics table of {} entries",
            max_label, len
        ))
    })?;
    entries.resize(len, LabelStats::<N>::default());
    for (label, color) in labels.pixels().zip(colors.pixels()) {
        let entry = &mut entries[label_index(label)?];
        entry.pixel_count += 1;
        for (sum, c) in entry.color_sum.iter_mut().zip(color) {
            *sum += c.to_f64();
        }
    }

    let mut undefined = 0usize;
    for entry in &mut entries {
        if entry.pixel_count == 0 {
            undefined += 1;
            continue;
        }
        let n = entry.pixel_count as f64;
        entry.average_color = Some(entry.color_sum.map(|sum| sum / n));
    }
    if undefined > 0 {
        warn!(
            "{} of {} label ids have no pixels; their average color is undefined",
            undefined, len
        );
    }

    Ok(LabelStatistics { entries })
}
