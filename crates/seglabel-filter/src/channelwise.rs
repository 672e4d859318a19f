//! Channelwise filtering
//!
//! Multi-channel rasters are smoothed one channel at a time: each channel is
//! copied out into its own single-channel raster, handed to a
//! [`ChannelSmoother`], and the smoothed channels are recomposed in channel
//! order. The smoother never sees more than one channel, so any
//! single-channel filter can be lifted to color images.

use crate::bilateral::bilateral_filter;
use crate::error::FilterResult;
use log::{debug, trace};
use rayon::prelude::*;
use seglabel_core::{Raster, Scalar};

/// A single-channel filter parameterized by a spatial and a range sigma.
///
/// Implemented for every `Fn(&Raster<T>, f32, f32) -> FilterResult<Raster<T>>`
/// closure or function.
pub trait ChannelSmoother<T: Scalar>: Sync {
    /// Smooth one channel. The result must have the channel's size.
    fn smooth(
        &self,
        channel: &Raster<T>,
        domain_sigma: f32,
        range_sigma: f32,
    ) -> FilterResult<Raster<T>>;
}

impl<T, F> ChannelSmoother<T> for F
where
    T: Scalar,
    F: Fn(&Raster<T>, f32, f32) -> FilterResult<Raster<T>> + Sync,
{
    fn smooth(
        &self,
        channel: &Raster<T>,
        domain_sigma: f32,
        range_sigma: f32,
    ) -> FilterResult<Raster<T>> {
        self(channel, domain_sigma, range_sigma)
    }
}

/// [`ChannelSmoother`] backed by [`bilateral_filter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BilateralSmoother;

impl<T: Scalar> ChannelSmoother<T> for BilateralSmoother {
    fn smooth(
        &self,
        channel: &Raster<T>,
        domain_sigma: f32,
        range_sigma: f32,
    ) -> FilterResult<Raster<T>> {
        bilateral_filter(channel, domain_sigma, range_sigma)
    }
}

/// Options for channelwise filtering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelFilterOptions {
    /// Standard deviation of the spatial Gaussian
    pub domain_sigma: f32,
    /// Standard deviation of the range Gaussian
    pub range_sigma: f32,
    /// Smooth channels concurrently on the rayon thread pool
    pub parallel: bool,
}

impl Default for ChannelFilterOptions {
    fn default() -> Self {
        Self {
            domain_sigma: 2.0,
            range_sigma: 30.0,
            parallel: false,
        }
    }
}

/// Smooth every channel of `image` independently with `smoother`.
///
/// # Errors
///
/// - Errors from `smoother` are returned unchanged
/// - `Error::ShapeMismatch` if the smoother returns a raster of a different
///   size than its input
pub fn apply_per_channel<T, const N: usize, S>(
    image: &Raster<[T; N]>,
    smoother: &S,
    domain_sigma: f32,
    range_sigma: f32,
) -> FilterResult<Raster<[T; N]>>
where
    T: Scalar,
    S: ChannelSmoother<T> + ?Sized,
{
    let options = ChannelFilterOptions {
        domain_sigma,
        range_sigma,
        parallel: false,
    };
    apply_per_channel_with_options(image, smoother, &options)
}

/// Smooth every channel of `image` independently, as configured by `options`.
///
/// With `options.parallel` the channels are smoothed on the rayon pool; the
/// result is recomposed in channel order either way.
pub fn apply_per_channel_with_options<T, const N: usize, S>(
    image: &Raster<[T; N]>,
    smoother: &S,
    options: &ChannelFilterOptions,
) -> FilterResult<Raster<[T; N]>>
where
    T: Scalar,
    S: ChannelSmoother<T> + ?Sized,
{
    debug!(
        "filtering {} channels of {}x{} raster (domain_sigma={}, range_sigma={}, parallel={})",
        N,
        image.width(),
        image.height(),
        options.domain_sigma,
        options.range_sigma,
        options.parallel
    );

    let channels = image.split_channels();
    let smooth_channel = |(index, channel): (usize, &Raster<T>)| -> FilterResult<Raster<T>> {
        trace!("smoothing channel {}", index);
        let smoothed = smoother.smooth(channel, options.domain_sigma, options.range_sigma)?;
        channel.check_same_size(&smoothed)?;
        Ok(smoothed)
    };

    let smoothed = if options.parallel {
        channels
            .par_iter()
            .enumerate()
            .map(smooth_channel)
            .collect::<FilterResult<Vec<_>>>()?
    } else {
        channels
            .iter()
            .enumerate()
            .map(smooth_channel)
            .collect::<FilterResult<Vec<_>>>()?
    };

    Ok(Raster::<[T; N]>::compose_channels(&smoothed)?)
}

/// Bilateral-filter every channel of `image`.
pub fn bilateral_all_channels<T: Scalar, const N: usize>(
    image: &Raster<[T; N]>,
    domain_sigma: f32,
    range_sigma: f32,
) -> FilterResult<Raster<[T; N]>> {
    apply_per_channel(image, &BilateralSmoother, domain_sigma, range_sigma)
}
