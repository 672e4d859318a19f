//! Channel decomposition and recomposition
//!
//! A multi-channel raster is split into independent single-channel rasters
//! (each a deep copy) and reassembled from them in channel order.

use super::Raster;
use crate::error::{Error, Result};
use crate::pixel::Pixel;

impl<P: Pixel> Raster<P> {
    /// Copy channel `index` into a new single-channel raster.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= P::CHANNELS`.
    pub fn extract_channel(&self, index: usize) -> Result<Raster<P::Channel>> {
        if index >= P::CHANNELS {
            return Err(Error::IndexOutOfBounds {
                index,
                len: P::CHANNELS,
            });
        }

        Ok(Raster {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|p| p.channel(index)).collect(),
        })
    }

    /// Copy every channel into its own raster, in channel order.
    pub fn split_channels(&self) -> Vec<Raster<P::Channel>> {
        (0..P::CHANNELS)
            .map(|c| Raster {
                width: self.width,
                height: self.height,
                data: self.data.iter().map(|p| p.channel(c)).collect(),
            })
            .collect()
    }

    /// Build a multi-channel raster from one raster per channel.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidParameter` if `channels.len() != P::CHANNELS`
    /// - `Error::ShapeMismatch` if the channel rasters differ in size
    ///
    /// # Examples
    ///
    /// ```
    /// use seglabel_core::Raster;
    ///
    /// let rgb = Raster::from_fn(2, 2, |x, y| [x as u8, y as u8, 7]);
    /// let channels = rgb.split_channels();
    /// let rebuilt = Raster::<[u8; 3]>::compose_channels(&channels).unwrap();
    /// assert_eq!(rebuilt, rgb);
    /// ```
    pub fn compose_channels(channels: &[Raster<P::Channel>]) -> Result<Raster<P>> {
        if channels.len() != P::CHANNELS {
            return Err(Error::InvalidParameter(format!(
                "expected {} channel rasters, got {}",
                P::CHANNELS,
                channels.len()
            )));
        }

        let first = channels
            .first()
            .ok_or_else(|| Error::InvalidParameter("no channel rasters".to_string()))?;
        for channel in channels.iter().skip(1) {
            first.check_same_size(channel)?;
        }

        let data = (0..first.data.len())
            .map(|i| {
                let mut pixel = P::splat(first.data[i]);
                for (c, channel) in channels.iter().enumerate().skip(1) {
                    pixel.set_channel(c, channel.data[i]);
                }
                pixel
            })
            .collect();

        Ok(Raster {
            width: first.width,
            height: first.height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_fixture() -> Raster<[u8; 3]> {
        Raster::from_fn(3, 2, |x, y| [x as u8, (10 + y) as u8, 200])
    }

    #[test]
    fn test_extract_channel() {
        let rgb = rgb_fixture();
        let green = rgb.extract_channel(1).unwrap();
        assert_eq!(green.dimensions(), (3, 2));
        assert_eq!(green.data(), &[10, 10, 10, 11, 11, 11]);
    }

    #[test]
    fn test_extract_channel_out_of_range() {
        let rgb = rgb_fixture();
        assert!(matches!(
            rgb.extract_channel(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_extracted_channel_is_independent() {
        let rgb = rgb_fixture();
        let mut red = rgb.extract_channel(0).unwrap();
        red.fill(99);
        assert_eq!(rgb.get_pixel(2, 1).unwrap(), [2, 11, 200]);
    }

    #[test]
    fn test_compose_wrong_channel_count() {
        let rgb = rgb_fixture();
        let mut channels = rgb.split_channels();
        channels.pop();
        assert!(matches!(
            Raster::<[u8; 3]>::compose_channels(&channels),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_compose_mismatched_sizes() {
        let channels = vec![Raster::<u8>::new(3, 2), Raster::new(3, 2), Raster::new(2, 3)];
        assert!(matches!(
            Raster::<[u8; 3]>::compose_channels(&channels),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_scalar_split_is_single_channel() {
        let gray = Raster::from_fn(2, 2, |x, y| (x * y) as f32);
        let channels = gray.split_channels();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0], gray);
    }
}
