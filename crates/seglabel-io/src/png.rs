//! PNG image format support

use crate::{DecodedImage, DisplayPixel, IoError, IoResult, PixelLayout};
use png::{BitDepth, ColorType, Decoder, Encoder};
use seglabel_core::Raster;
use std::io::{BufRead, Seek, Write};

/// Read an 8-bit gray or RGB PNG
///
/// Other color types and bit depths are rejected with
/// `IoError::UnsupportedFormat`.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<DecodedImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight
        || !matches!(color_type, ColorType::Grayscale | ColorType::Rgb)
    {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?}",
            color_type, bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;
    buf.truncate(output_info.buffer_size());

    match color_type {
        ColorType::Grayscale => Ok(DecodedImage::Gray(Raster::from_data(width, height, buf)?)),
        _ => {
            let pixels = buf
                .chunks_exact(3)
                .map(|c| [c[0], c[1], c[2]])
                .collect::<Vec<_>>();
            Ok(DecodedImage::Rgb(Raster::from_data(width, height, pixels)?))
        }
    }
}

/// Write an 8-bit gray or RGB raster as PNG
pub fn write_png<P: DisplayPixel, W: Write>(raster: &Raster<P>, writer: W) -> IoResult<()> {
    if raster.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode empty {}x{} raster",
            raster.width(),
            raster.height()
        )));
    }

    let color_type = match P::LAYOUT {
        PixelLayout::Gray => ColorType::Grayscale,
        PixelLayout::Rgb => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data = crate::interleaved_bytes(raster);
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
