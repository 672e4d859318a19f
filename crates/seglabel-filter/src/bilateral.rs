//! Bilateral filtering (edge-preserving smoothing)
//!
//! Bilateral filtering is a non-linear, edge-preserving smoothing filter.
//! It combines a spatial Gaussian filter with a range (intensity) Gaussian filter.
//!
//! The bilateral filter has the property of smoothing uniform regions while
//! preserving edges.
//!
//! # Algorithm
//!
//! For each pixel, the output is a weighted average of neighboring pixels where:
//! - Spatial weight: Gaussian based on distance from center pixel
//! - Range weight: Gaussian based on intensity difference from center pixel
//!
//! The spatial kernel has half-width `2 * domain_sigma`, capped at the
//! raster's larger dimension minus one; pixels beyond the border are
//! replicated from the nearest edge pixel.
//!
//! # Example
//!
//! ```
//! use seglabel_core::Raster;
//! use seglabel_filter::bilateral_filter;
//!
//! let step = Raster::from_fn(20, 20, |x, _| if x < 10 { 50u8 } else { 200 });
//! let smoothed = bilateral_filter(&step, 2.0, 30.0).unwrap();
//! assert_eq!(smoothed.get_pixel(5, 10).unwrap(), 50);
//! ```

use crate::{FilterError, FilterResult, Kernel};
use seglabel_core::{Raster, Scalar};

fn check_sigma(name: &str, sigma: f32) -> FilterResult<()> {
    if sigma > 0.0 && sigma.is_finite() {
        Ok(())
    } else {
        Err(FilterError::InvalidParameters(format!(
            "{} must be positive and finite, got {}",
            name, sigma
        )))
    }
}

/// Range weight for an intensity difference
#[inline]
fn range_weight(diff: f64, denom: f64) -> f64 {
    (-(diff * diff) / denom).exp()
}

/// Apply a bilateral filter with a precomputed spatial kernel
///
/// # Arguments
/// * `channel` - Input single-channel raster
/// * `spatial_kernel` - 2D spatial Gaussian kernel
/// * `range_sigma` - Standard deviation of the range Gaussian. If `None`,
///   degenerates to plain convolution with the spatial kernel.
pub fn bilateral_with_kernel<T: Scalar>(
    channel: &Raster<T>,
    spatial_kernel: &Kernel,
    range_sigma: Option<f32>,
) -> FilterResult<Raster<T>> {
    if let Some(sigma) = range_sigma {
        check_sigma("range_sigma", sigma)?;
    }

    let w = channel.width() as i32;
    let h = channel.height() as i32;
    let kw = spatial_kernel.width();
    let kh = spatial_kernel.height();
    let kcx = spatial_kernel.center_x() as i32;
    let kcy = spatial_kernel.center_y() as i32;
    let denom = range_sigma.map(|s| 2.0 * (s as f64) * (s as f64));

    Ok(Raster::from_fn(channel.width(), channel.height(), |x, y| {
        let center_val = channel.get_pixel_unchecked(x, y).to_f64();

        let mut sum = 0.0f64;
        let mut weight_sum = 0.0f64;

        for ky in 0..kh {
            for kx in 0..kw {
                // Clamp to image boundaries (replicate border)
                let sx = (x as i32 + (kx as i32 - kcx)).clamp(0, w - 1) as u32;
                let sy = (y as i32 + (ky as i32 - kcy)).clamp(0, h - 1) as u32;

                let neighbor_val = channel.get_pixel_unchecked(sx, sy).to_f64();
                let spatial_weight = spatial_kernel.get(kx, ky).unwrap_or(0.0) as f64;
                let weight = match denom {
                    Some(denom) => spatial_weight * range_weight(center_val - neighbor_val, denom),
                    None => spatial_weight,
                };

                sum += neighbor_val * weight;
                weight_sum += weight;
            }
        }

        if weight_sum > 0.0 {
            T::from_f64(sum / weight_sum)
        } else {
            T::from_f64(center_val)
        }
    }))
}

/// Apply an exact bilateral filter to a single-channel raster
///
/// # Arguments
/// * `channel` - Input single-channel raster
/// * `domain_sigma` - Standard deviation for spatial Gaussian (must be > 0.0)
/// * `range_sigma` - Standard deviation for range Gaussian (must be > 0.0)
///
/// # Returns
/// Filtered raster of the same size and element type
pub fn bilateral_filter<T: Scalar>(
    channel: &Raster<T>,
    domain_sigma: f32,
    range_sigma: f32,
) -> FilterResult<Raster<T>> {
    check_sigma("domain_sigma", domain_sigma)?;
    check_sigma("range_sigma", range_sigma)?;

    if channel.is_empty() {
        return Ok(channel.deep_copy());
    }

    // offsets past the larger dimension only reach replicated border pixels
    let max_extent = channel.width().max(channel.height()) - 1;
    let halfwidth = (2.0 * domain_sigma as f64).min(max_extent as f64) as u32;
    let size = halfwidth
        .checked_mul(2)
        .and_then(|s| s.checked_add(1))
        .ok_or_else(|| {
            FilterError::InvalidParameters(format!(
                "domain_sigma {} gives a kernel too large for a {}x{} raster",
                domain_sigma,
                channel.width(),
                channel.height()
            ))
        })?;
    let spatial_kernel = Kernel::gaussian(size, domain_sigma)?;
    bilateral_with_kernel(channel, &spatial_kernel, Some(range_sigma))
}
