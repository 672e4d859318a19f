//! Value scans over a raster

use super::Raster;
use crate::error::{Error, Result};
use crate::pixel::{Pixel, Scalar};

impl<T: Pixel> Raster<T> {
    /// Count pixels equal to `value`.
    pub fn count_pixels_with_value(&self, value: T) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }
}

impl<T: Pixel + Scalar> Raster<T> {
    /// Maximum pixel value.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyRaster` if the raster has no pixels.
    pub fn max_value(&self) -> Result<T> {
        self.min_max().map(|(_, max)| max)
    }

    /// Minimum pixel value.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyRaster` if the raster has no pixels.
    pub fn min_value(&self) -> Result<T> {
        self.min_max().map(|(min, _)| min)
    }

    /// Minimum and maximum pixel values in a single pass.
    ///
    /// Incomparable values (float NaN) never replace the running extremes.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyRaster` if the raster has no pixels.
    pub fn min_max(&self) -> Result<(T, T)> {
        let (&first, rest) = self.data.split_first().ok_or(Error::EmptyRaster)?;
        let mut min = first;
        let mut max = first;
        for &v in rest {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        Ok((min, max))
    }
}
