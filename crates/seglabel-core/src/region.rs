//! Region - rectangular sub-window of a raster

use crate::error::{Error, Result};

/// An axis-aligned rectangle given by origin `(x, y)` and size `(w, h)`.
///
/// A small `Copy` type; regions are passed by value everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Region {
    /// Create a new region
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "region dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a region without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Region covering a whole `width` x `height` raster
    ///
    /// Sizes past `i32::MAX` saturate.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: i32::try_from(width).unwrap_or(i32::MAX),
            h: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Get the right x coordinate (exclusive)
    ///
    /// Widened to `i64` so that `x + w` cannot overflow.
    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// Check if the region is valid (non-negative dimensions)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w >= 0 && self.h >= 0
    }

    /// Check if this region contains another region
    pub fn contains_region(&self, other: &Region) -> bool {
        other.is_valid()
            && other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_new_rejects_negative_size() {
        assert!(Region::new(0, 0, -1, 5).is_err());
        assert!(Region::new(0, 0, 5, -1).is_err());
        assert!(Region::new(-3, -3, 0, 0).is_ok());
    }

    #[test]
    fn test_region_edges() {
        let r = Region::new_unchecked(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);

        let far = Region::new_unchecked(i32::MAX, i32::MAX, i32::MAX, 1);
        assert_eq!(far.right(), 2 * i32::MAX as i64);
        assert_eq!(far.bottom(), i32::MAX as i64 + 1);
    }

    #[test]
    fn test_region_contains() {
        let outer = Region::from_size(10, 8);
        assert!(outer.contains_region(&Region::new_unchecked(0, 0, 10, 8)));
        assert!(outer.contains_region(&Region::new_unchecked(9, 7, 1, 1)));
        assert!(!outer.contains_region(&Region::new_unchecked(9, 7, 2, 1)));
        assert!(!outer.contains_region(&Region::new_unchecked(-1, 0, 2, 2)));
        assert!(!outer.contains_region(&Region::new_unchecked(1, 1, -1, 2)));
    }

    #[test]
    fn test_region_contains_near_i32_max() {
        let outer = Region::from_size(4, 4);
        assert!(!outer.contains_region(&Region::new_unchecked(1, 0, i32::MAX, 1)));
        assert!(!outer.contains_region(&Region::new_unchecked(i32::MAX, 0, 1, 1)));
        assert!(!outer.contains_region(&Region::new_unchecked(0, i32::MAX, 1, i32::MAX)));
    }
}
