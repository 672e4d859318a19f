//! Deep copies and region crops
//!
//! Every function here allocates fresh storage; the result never shares
//! pixels with its source.

use super::Raster;
use crate::error::{Error, Result};
use crate::pixel::Pixel;
use crate::region::Region;

impl<T: Pixel> Raster<T> {
    /// Copy every pixel into a newly allocated raster of the same size.
    ///
    /// # Examples
    ///
    /// ```
    /// use seglabel_core::Raster;
    ///
    /// let source = Raster::from_fn(3, 3, |x, y| x + y);
    /// let mut copy = source.deep_copy();
    /// copy.set_pixel(0, 0, 99).unwrap();
    /// assert_eq!(source.get_pixel(0, 0).unwrap(), 0);
    /// ```
    pub fn deep_copy(&self) -> Raster<T> {
        let mut data = Vec::with_capacity(self.data.len());
        data.extend_from_slice(&self.data);
        Raster {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Copy the pixels inside `region` into a raster sized to the region.
    ///
    /// Output coordinates are region-local: source pixel
    /// `(region.x + dx, region.y + dy)` lands at `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `region` is not fully contained in
    /// this raster's extent.
    pub fn deep_copy_in_region(&self, region: Region) -> Result<Raster<T>> {
        self.check_region(region)?;

        let (rx, ry) = (region.x as usize, region.y as usize);
        let (rw, rh) = (region.w as usize, region.h as usize);
        let src_w = self.width as usize;

        let mut data = Vec::with_capacity(rw * rh);
        for dy in 0..rh {
            let start = (ry + dy) * src_w + rx;
            data.extend_from_slice(&self.data[start..start + rw]);
        }

        Ok(Raster {
            width: rw as u32,
            height: rh as u32,
            data,
        })
    }

    /// Crop to `region`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `region` extends beyond the raster.
    ///
    /// # Examples
    ///
    /// ```
    /// use seglabel_core::{Raster, Region};
    ///
    /// let raster: Raster<u8> = Raster::new(100, 80);
    /// let cropped = raster.extract_region(Region::new(10, 20, 50, 40).unwrap()).unwrap();
    /// assert_eq!(cropped.dimensions(), (50, 40));
    ///
    /// assert!(raster.extract_region(Region::new(80, 60, 50, 50).unwrap()).is_err());
    /// ```
    pub fn extract_region(&self, region: Region) -> Result<Raster<T>> {
        self.deep_copy_in_region(region)
    }

    fn check_region(&self, region: Region) -> Result<()> {
        if !self.extent().contains_region(&region) {
            return Err(Error::OutOfBounds {
                region,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
