//! Raster - generic 2D pixel grid
//!
//! `Raster<T>` is a 2D array of [`Pixel`] values. Label images use an
//! integer scalar (`Raster<u32>`), color images a channel array
//! (`Raster<[u8; 3]>`).
//!
//! See [`copy`] for deep copies and region crops, [`statistics`] for value
//! scans, [`channel`] for channel decomposition and [`convert`] for display
//! conversion.
//!
//! # Examples
//!
//! ```
//! use seglabel_core::Raster;
//!
//! let mut raster: Raster<u32> = Raster::new(4, 3);
//! raster.set_pixel(1, 2, 7).unwrap();
//! assert_eq!(raster.get_pixel(1, 2).unwrap(), 7);
//! assert_eq!(raster.max_value().unwrap(), 7);
//! ```

pub mod channel;
pub mod convert;
pub mod copy;
pub mod statistics;

use crate::error::{Error, Result};
use crate::pixel::{Pixel, Scalar, Vector3};
use crate::region::Region;

/// Label raster with the default label type
pub type LabelRaster<L = u32> = Raster<L>;

/// Three-channel color raster
pub type ColorRaster<S = u8> = Raster<Vector3<S>>;

/// Generic 2D raster
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The pixel at (x, y)
/// is at index `y * width + x`. Zero-sized rasters are allowed; operations
/// that need a pixel report [`Error::EmptyRaster`].
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T> {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<T>,
}

impl<T: Pixel> Raster<T> {
    /// Create a new raster with every channel of every pixel set to zero
    ///
    /// # Examples
    ///
    /// ```
    /// use seglabel_core::Raster;
    ///
    /// let raster: Raster<[u8; 3]> = Raster::new(640, 480);
    /// assert_eq!(raster.width(), 640);
    /// assert_eq!(raster.get_pixel(0, 0).unwrap(), [0, 0, 0]);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self::new_with_value(width, height, T::splat(T::Channel::default()))
    }

    /// Create a new raster with all pixels set to `value`
    pub fn new_with_value(width: u32, height: u32, value: T) -> Self {
        let size = (width as usize) * (height as usize);
        Raster {
            width,
            height,
            data: vec![value; size],
        }
    }

    /// Create a raster from row-major pixel data
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the data length doesn't match
    /// `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(Raster {
            width,
            height,
            data,
        })
    }

    /// Create a raster from nested rows
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if the rows are ragged.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::InvalidDimension {
                    width: row.len() as u32,
                    height,
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_data(width, height, data)
    }

    /// Create a raster by evaluating `f(x, y)` at every pixel
    pub fn from_fn<F: FnMut(u32, u32) -> T>(width: u32, height: u32, mut f: F) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Raster {
            width,
            height,
            data,
        }
    }

    /// Get the raster width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the raster dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the raster has no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Region covering the whole raster
    #[inline]
    pub fn extent(&self) -> Region {
        Region::from_size(self.width, self.height)
    }

    /// Number of channels per pixel
    #[inline]
    pub fn channels(&self) -> usize {
        T::CHANNELS
    }

    /// Get the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<T> {
        let idx = self.checked_index(x, y)?;
        Ok(self.data[idx])
    }

    /// Set the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Get the pixel value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is past the end of the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> T {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the pixel value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is past the end of the data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: T) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
    }

    fn checked_index(&self, x: u32, y: u32) -> Result<usize> {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: idx,
                len: self.data.len(),
            });
        }
        Ok(idx)
    }

    /// Get raw access to the pixel data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Get mutable access to the pixel data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the raster and return its pixel data
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Get a row of pixel data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[T] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Get a mutable row of pixel data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        let start = (y as usize) * (self.width as usize);
        &mut self.data[start..start + self.width as usize]
    }

    /// Iterate over pixel values in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }

    /// Iterate over `(x, y, value)` in row-major order
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (u32, u32, T)> + '_ {
        let w = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i % w) as u32, (i / w) as u32, v))
    }

    /// Set all pixels to the specified value
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Apply `f` to every pixel, producing a raster of the same size
    pub fn map<U: Pixel, F: FnMut(T) -> U>(&self, f: F) -> Raster<U> {
        Raster {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Check that `other` has the same dimensions
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` with this raster's size as the
    /// expected value.
    pub fn check_same_size<U>(&self, other: &Raster<U>) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::ShapeMismatch {
                expected: (self.width, self.height),
                actual: (other.width, other.height),
            });
        }
        Ok(())
    }
}

impl<S: Scalar, const N: usize> Raster<[S; N]> {
    /// Number of components per pixel (`N`)
    #[inline]
    pub fn component_count(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster: Raster<u32> = Raster::new(100, 50);
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 50);
        assert_eq!(raster.len(), 5000);
        assert!(raster.pixels().all(|v| v == 0));
    }

    #[test]
    fn test_raster_zero_sized() {
        let raster: Raster<u8> = Raster::new(0, 7);
        assert!(raster.is_empty());
        assert_eq!(raster.enumerate_pixels().count(), 0);
    }

    #[test]
    fn test_raster_from_data_wrong_size() {
        assert!(Raster::from_data(2, 2, vec![1u8, 2, 3]).is_err());
        assert!(Raster::from_data(2, 2, vec![1u8, 2, 3, 4]).is_ok());
    }

    #[test]
    fn test_raster_from_rows() {
        let raster = Raster::from_rows(&[[5u32, 5], [10, 10]]).unwrap();
        assert_eq!(raster.dimensions(), (2, 2));
        assert_eq!(raster.data(), &[5, 5, 10, 10]);

        let ragged: Vec<Vec<u32>> = vec![vec![1, 2], vec![3]];
        assert!(Raster::from_rows(&ragged).is_err());
    }

    #[test]
    fn test_raster_pixel_access() {
        let mut raster: Raster<[f32; 3]> = Raster::new(10, 10);
        raster.set_pixel(3, 4, [1.0, 2.0, 3.0]).unwrap();
        assert_eq!(raster.get_pixel(3, 4).unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(raster.get_pixel_unchecked(3, 4), [1.0, 2.0, 3.0]);
        assert_eq!(raster.row(4)[3], [1.0, 2.0, 3.0]);
        assert_eq!(raster.component_count(), 3);
    }

    #[test]
    fn test_raster_pixel_access_out_of_bounds() {
        let mut raster: Raster<u8> = Raster::new(10, 10);
        assert!(raster.get_pixel(10, 0).is_err());
        assert!(raster.get_pixel(0, 10).is_err());
        assert!(raster.set_pixel(10, 10, 1).is_err());
    }

    #[test]
    fn test_raster_enumerate_and_from_fn() {
        let raster = Raster::from_fn(3, 2, |x, y| x + 10 * y);
        let collected: Vec<_> = raster.enumerate_pixels().collect();
        assert_eq!(collected[0], (0, 0, 0));
        assert_eq!(collected[4], (1, 1, 11));
        assert_eq!(collected[5], (2, 1, 12));
    }

    #[test]
    fn test_raster_map_and_fill() {
        let mut raster: Raster<u8> = Raster::new(2, 2);
        raster.fill(3);
        let doubled = raster.map(|v| [v as f32 * 2.0; 3]);
        assert_eq!(doubled.get_pixel(1, 1).unwrap(), [6.0; 3]);
    }

    #[test]
    fn test_raster_check_same_size() {
        let a: Raster<u32> = Raster::new(4, 4);
        let b: Raster<[u8; 3]> = Raster::new(4, 4);
        let c: Raster<[u8; 3]> = Raster::new(4, 5);
        assert!(a.check_same_size(&b).is_ok());
        match a.check_same_size(&c) {
            Err(Error::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected, (4, 4));
                assert_eq!(actual, (4, 5));
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }
}
