//! seglabel-filter - Channelwise filtering
//!
//! This crate lifts single-channel smoothing filters to multi-channel
//! rasters:
//!
//! - [`apply_per_channel`] - split, smooth each channel, recompose
//! - [`ChannelSmoother`] - the single-channel filter interface
//! - [`bilateral_filter`] - edge-preserving smoothing of one channel
//! - [`Kernel`] - spatial weight kernels

pub mod bilateral;
pub mod channelwise;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use bilateral::{bilateral_filter, bilateral_with_kernel};
pub use channelwise::{
    BilateralSmoother, ChannelFilterOptions, ChannelSmoother, apply_per_channel,
    apply_per_channel_with_options, bilateral_all_channels,
};
