//! seglabel-io - Image writers for label and color rasters
//!
//! Rasters produced by the segmentation pipeline are inspected by writing
//! them out as 8-bit images:
//!
//! - [`write_image`] writes a gray (`u8`) or RGB (`[u8; 3]`) raster, the
//!   format chosen from the file extension
//! - [`write_scaled_scalar_image`] stretches a single-channel raster (for
//!   example a label raster) to `0..=255` first
//! - [`write_rgb_image`] casts a three-channel raster of any scalar type to
//!   8-bit RGB first
//! - [`write_region`] crops to a region first
//!
//! # Features
//!
//! - `png-format` (default): PNG via the `png` crate
//! - `pnm` (default): binary PGM/PPM

pub mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::ImageFormat;

use log::debug;
use seglabel_core::{Pixel, Raster, Region, Scalar};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Sample layout of an encodable pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// One 8-bit sample per pixel
    Gray,
    /// Three 8-bit samples per pixel
    Rgb,
}

/// Pixel types that can be written directly as 8-bit images.
pub trait DisplayPixel: Pixel<Channel = u8> {
    /// Sample layout written to the file
    const LAYOUT: PixelLayout;
}

impl DisplayPixel for u8 {
    const LAYOUT: PixelLayout = PixelLayout::Gray;
}

impl DisplayPixel for [u8; 3] {
    const LAYOUT: PixelLayout = PixelLayout::Rgb;
}

/// An 8-bit image read back from disk
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedImage {
    /// Single-channel gray image
    Gray(Raster<u8>),
    /// Three-channel RGB image
    Rgb(Raster<[u8; 3]>),
}

/// Flatten pixels into interleaved samples, row-major.
pub(crate) fn interleaved_bytes<P: DisplayPixel>(raster: &Raster<P>) -> Vec<u8> {
    let mut out = Vec::with_capacity(raster.len() * P::CHANNELS);
    for p in raster.pixels() {
        for c in 0..P::CHANNELS {
            out.push(p.channel(c));
        }
    }
    out
}

/// Write an 8-bit raster to `path`, inferring the format from its extension.
///
/// # Errors
///
/// - `IoError::UnsupportedFormat` for an unknown extension or a format whose
///   feature is disabled
/// - `IoError::InvalidData` for an empty raster
/// - `IoError::Io` if the file cannot be created
pub fn write_image<P: DisplayPixel, Q: AsRef<Path>>(raster: &Raster<P>, path: Q) -> IoResult<()> {
    let format = ImageFormat::from_path(&path)?;
    write_image_with_format(raster, path, format)
}

/// Write an 8-bit raster to `path` in the given format.
pub fn write_image_with_format<P: DisplayPixel, Q: AsRef<Path>>(
    raster: &Raster<P>,
    path: Q,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    debug!(
        "writing {}x{} {:?} raster to {} as {:?}",
        raster.width(),
        raster.height(),
        P::LAYOUT,
        path.display(),
        format
    );

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_to(raster, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an 8-bit raster into any writer.
#[allow(unused_variables)]
pub fn write_image_to<P: DisplayPixel, W: Write>(
    raster: &Raster<P>,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(raster, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(raster, writer),
        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}

/// Stretch a single-channel raster to `0..=255` and write it as gray.
///
/// Label rasters become viewable this way: the smallest label is black and
/// the largest white.
///
/// # Errors
///
/// Returns `IoError::Core(Error::UnsupportedPixelType)` for multi-channel
/// rasters, plus the errors of [`write_image`].
pub fn write_scaled_scalar_image<P: Pixel, Q: AsRef<Path>>(
    raster: &Raster<P>,
    path: Q,
) -> IoResult<()> {
    let display = raster.rescale_to_display_range()?;
    write_image(&display, path)
}

/// Cast a three-channel raster to 8-bit RGB and write it.
pub fn write_rgb_image<S: Scalar, Q: AsRef<Path>>(raster: &Raster<[S; 3]>, path: Q) -> IoResult<()> {
    write_image(&raster.convert_to_rgb8(), path)
}

/// Crop an 8-bit raster to `region` and write the crop.
///
/// # Errors
///
/// Returns `IoError::Core(Error::OutOfBounds)` if `region` is not contained
/// in the raster, plus the errors of [`write_image`].
pub fn write_region<P: DisplayPixel, Q: AsRef<Path>>(
    raster: &Raster<P>,
    region: Region,
    path: Q,
) -> IoResult<()> {
    let crop = raster.extract_region(region)?;
    write_image(&crop, path)
}

/// Read an 8-bit gray or RGB image, inferring the format from the extension.
pub fn read_image<Q: AsRef<Path>>(path: Q) -> IoResult<DecodedImage> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    debug!("reading {} as {:?}", path.display(), format);

    let reader = BufReader::new(File::open(path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        _ => {
            drop(reader);
            Err(IoError::UnsupportedFormat(format!(
                "{:?} support not enabled",
                format
            )))
        }
    }
}
