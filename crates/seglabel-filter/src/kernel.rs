//! Convolution kernels
//!
//! Defines the 2D weight kernel used for the spatial part of bilateral
//! smoothing.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a new zero kernel with the given dimensions.
    ///
    /// The center is placed at `(width / 2, height / 2)`.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive: {}x{}",
                width, height
            )));
        }

        let too_large = || {
            FilterError::InvalidKernel(format!("kernel too large: {}x{}", width, height))
        };
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(too_large)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| too_large())?;
        data.resize(len, 0.0);

        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data,
        })
    }

    /// Create a normalized square Gaussian kernel.
    ///
    /// `size` must be odd so the kernel has a center pixel.
    pub fn gaussian(size: u32, sigma: f32) -> FilterResult<Self> {
        if size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "gaussian kernel size must be odd: {}",
                size
            )));
        }
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(FilterError::InvalidParameters(format!(
                "gaussian sigma must be positive: {}",
                sigma
            )));
        }

        let mut kernel = Self::new(size, size)?;
        let half = (size / 2) as f32;
        let denom = 2.0 * sigma * sigma;
        for ky in 0..size {
            for kx in 0..size {
                let dx = kx as f32 - half;
                let dy = ky as f32 - half;
                let value = (-(dx * dx + dy * dy) / denom).exp();
                kernel.set(kx, ky, value);
            }
        }
        kernel.normalize();
        Ok(kernel)
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Set a value at (x, y). Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = value;
        }
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// A kernel summing to zero is left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() > f32::EPSILON {
            for v in &mut self.data {
                *v /= sum;
            }
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
