//! Sequential relabeling
//!
//! The label set of a raster is collected once into a sorted
//! [`RelabelMap`]; the output is then written in a single pass that reads
//! only from the input raster, so a pixel that has already been renumbered
//! can never be matched again against another original value.

use crate::error::{RegionError, RegionResult};
use log::debug;
use seglabel_core::{Label, Raster};
use std::collections::BTreeSet;

/// Distinct label values of a raster, ascending
pub fn unique_labels<L: Label>(labels: &Raster<L>) -> BTreeSet<L> {
    labels.pixels().collect()
}

/// Number of distinct label values in a raster
pub fn count_labels<L: Label>(labels: &Raster<L>) -> usize {
    unique_labels(labels).len()
}

/// Mapping from original label values to sequential ids
///
/// The id of a label is its position among the sorted distinct values, so
/// the mapping is strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelabelMap<L> {
    originals: Vec<L>,
}

impl<L: Label> RelabelMap<L> {
    /// Build the mapping for the labels present in `labels`.
    pub fn from_raster(labels: &Raster<L>) -> Self {
        Self {
            originals: unique_labels(labels).into_iter().collect(),
        }
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    /// Check whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Sequential id of an original label, `None` if it was not present
    pub fn new_id(&self, original: L) -> Option<usize> {
        self.originals.binary_search(&original).ok()
    }

    /// Original label of a sequential id
    pub fn original(&self, id: usize) -> Option<L> {
        self.originals.get(id).copied()
    }

    /// Original labels in id order
    pub fn originals(&self) -> &[L] {
        &self.originals
    }

    /// Write the sequential id of every pixel of `labels` into a new raster.
    ///
    /// # Errors
    ///
    /// - `RegionError::LabelOverflow` if `len() - 1` is not representable in
    ///   the label type
    /// - `RegionError::UnknownLabel` if `labels` holds a value the map does
    ///   not contain
    pub fn apply(&self, labels: &Raster<L>) -> RegionResult<Raster<L>> {
        let count = self.len();
        let ids: Vec<L> = (0..count)
            .map(|id| L::from_index(id).ok_or(RegionError::LabelOverflow { count }))
            .collect::<RegionResult<_>>()?;

        let data = labels
            .pixels()
            .map(|value| match self.new_id(value) {
                Some(id) => Ok(ids[id]),
                None => Err(RegionError::UnknownLabel(format!("{:?}", value))),
            })
            .collect::<RegionResult<Vec<L>>>()?;

        Ok(Raster::from_data(labels.width(), labels.height(), data)?)
    }
}

/// Renumber labels to `0..U` in ascending order of their original value.
///
/// `U` is the number of distinct labels. The output has the input's size;
/// the input is not modified.
///
/// # Errors
///
/// Returns `RegionError::LabelOverflow` if `U - 1` is not representable in
/// the label type. This cannot happen for unsigned label types.
pub fn relabel_sequential<L: Label>(labels: &Raster<L>) -> RegionResult<Raster<L>> {
    relabel_sequential_with_map(labels).map(|(out, _)| out)
}

/// Like [`relabel_sequential`], also returning the mapping used so new ids
/// can be translated back to the original labels.
pub fn relabel_sequential_with_map<L: Label>(
    labels: &Raster<L>,
) -> RegionResult<(Raster<L>, RelabelMap<L>)> {
    let map = RelabelMap::from_raster(labels);
    debug!(
        "relabeling {}x{} raster with {} distinct labels",
        labels.width(),
        labels.height(),
        map.len()
    );
    let out = map.apply(labels)?;
    Ok((out, map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_labels() {
        let labels = Raster::from_rows(&[[5u32, 5], [10, 10]]).unwrap();
        let out = relabel_sequential(&labels).unwrap();
        assert_eq!(out.data(), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_input_not_modified() {
        let labels = Raster::from_rows(&[[7u16, 3], [3, 100]]).unwrap();
        let before = labels.clone();
        let out = relabel_sequential(&labels).unwrap();
        assert_eq!(labels, before);
        assert_eq!(out.data(), &[1, 0, 0, 2]);
    }

    #[test]
    fn test_chain_values_are_not_remapped_twice() {
        // 1 -> 0, 2 -> 1, 3 -> 2: rewriting in place would cascade
        let labels = Raster::from_data(3, 1, vec![3u32, 2, 1]).unwrap();
        let out = relabel_sequential(&labels).unwrap();
        assert_eq!(out.data(), &[2, 1, 0]);
    }

    #[test]
    fn test_negative_labels() {
        let labels = Raster::from_data(4, 1, vec![-4i32, 9, -4, 0]).unwrap();
        let out = relabel_sequential(&labels).unwrap();
        assert_eq!(out.data(), &[0, 2, 0, 1]);
    }

    #[test]
    fn test_map_roundtrip() {
        let labels = Raster::from_data(4, 1, vec![40u32, 10, 40, 20]).unwrap();
        let (out, map) = relabel_sequential_with_map(&labels).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.new_id(20), Some(1));
        assert_eq!(map.new_id(30), None);
        assert_eq!(map.original(2), Some(40));
        assert_eq!(map.original(3), None);
        for (id, original) in out.pixels().zip(labels.pixels()) {
            assert_eq!(map.original(id as usize), Some(original));
        }
    }

    #[test]
    fn test_apply_map_to_other_raster() {
        let reference = Raster::from_data(3, 1, vec![8u32, 2, 5]).unwrap();
        let map = RelabelMap::from_raster(&reference);

        let subset = Raster::from_data(2, 2, vec![5u32, 5, 8, 2]).unwrap();
        assert_eq!(map.apply(&subset).unwrap().data(), &[1, 1, 2, 0]);

        let unknown = Raster::from_data(2, 1, vec![2u32, 3]).unwrap();
        assert!(matches!(
            map.apply(&unknown),
            Err(RegionError::UnknownLabel(_))
        ));
    }

    #[test]
    fn test_label_overflow() {
        // 256 distinct i8 values cannot be numbered 0..=255 in i8
        let data: Vec<i8> = (i8::MIN..=i8::MAX).collect();
        let labels = Raster::from_data(256, 1, data).unwrap();
        assert!(matches!(
            relabel_sequential(&labels),
            Err(RegionError::LabelOverflow { count: 256 })
        ));
    }

    #[test]
    fn test_empty_raster() {
        let labels: Raster<u32> = Raster::new(0, 5);
        let out = relabel_sequential(&labels).unwrap();
        assert_eq!(out.dimensions(), (0, 5));
        assert_eq!(count_labels(&labels), 0);
    }
}
