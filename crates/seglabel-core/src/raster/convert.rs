//! Conversion to 8-bit display rasters
//!
//! - [`Raster::rescale_to_display_range`] stretches a single-channel raster
//!   linearly so its minimum maps to 0 and its maximum to 255.
//! - [`Raster::convert_to_rgb8`] casts each channel of a three-channel
//!   raster to `u8` with rounding and saturation.

use super::Raster;
use crate::error::{Error, Result};
use crate::pixel::{Pixel, Scalar};

/// Output range for [`Raster::rescale_with_options`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescaleOptions {
    /// Value assigned to the input minimum
    pub out_min: u8,
    /// Value assigned to the input maximum
    pub out_max: u8,
}

impl Default for RescaleOptions {
    fn default() -> Self {
        Self {
            out_min: 0,
            out_max: 255,
        }
    }
}

impl<P: Pixel> Raster<P> {
    /// Rescale intensities linearly to `0..=255`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedPixelType` for multi-channel pixels.
    ///
    /// # Examples
    ///
    /// ```
    /// use seglabel_core::Raster;
    ///
    /// let labels = Raster::from_data(3, 1, vec![0u32, 1, 2]).unwrap();
    /// let display = labels.rescale_to_display_range().unwrap();
    /// assert_eq!(display.data(), &[0, 128, 255]);
    ///
    /// let rgb: Raster<[u8; 3]> = Raster::new(2, 2);
    /// assert!(rgb.rescale_to_display_range().is_err());
    /// ```
    pub fn rescale_to_display_range(&self) -> Result<Raster<u8>> {
        self.rescale_with_options(&RescaleOptions::default())
    }

    /// Rescale intensities linearly to `options.out_min..=options.out_max`.
    ///
    /// A constant raster maps entirely to `out_min`.
    ///
    /// # Errors
    ///
    /// - `Error::UnsupportedPixelType` for multi-channel pixels
    /// - `Error::InvalidParameter` if `out_min > out_max`
    pub fn rescale_with_options(&self, options: &RescaleOptions) -> Result<Raster<u8>> {
        if P::CHANNELS != 1 {
            return Err(Error::UnsupportedPixelType {
                channels: P::CHANNELS,
            });
        }
        if options.out_min > options.out_max {
            return Err(Error::InvalidParameter(format!(
                "output range is inverted: {}..={}",
                options.out_min, options.out_max
            )));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for p in &self.data {
            let v = p.channel(0).to_f64();
            min = min.min(v);
            max = max.max(v);
        }

        let out_min = options.out_min as f64;
        let out_span = options.out_max as f64 - out_min;
        let scale = if max > min {
            out_span / (max - min)
        } else {
            0.0
        };

        Ok(self.map(|p| u8::from_f64(out_min + (p.channel(0).to_f64() - min) * scale)))
    }
}

impl<S: Scalar> Raster<[S; 3]> {
    /// Convert to an 8-bit RGB raster, rounding and saturating each channel.
    pub fn convert_to_rgb8(&self) -> Raster<[u8; 3]> {
        self.map(|[r, g, b]| {
            [
                u8::from_f64(r.to_f64()),
                u8::from_f64(g.to_f64()),
                u8::from_f64(b.to_f64()),
            ]
        })
    }
}
