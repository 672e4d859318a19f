//! PNM (Portable Any Map) format support
//!
//! Writes and reads binary PGM (P5) for gray rasters and binary PPM (P6)
//! for RGB rasters, 8 bits per sample. ASCII variants (P1/P2/P3),
//! bitmaps (P4) and PAM (P7) are not supported.

use crate::{DecodedImage, DisplayPixel, IoError, IoResult, PixelLayout};
use seglabel_core::Raster;
use std::io::{BufRead, Read, Write};

/// Write a gray or RGB raster as binary PNM.
///
/// Chooses P5 for gray pixels and P6 for RGB pixels.
pub fn write_pnm<P: DisplayPixel, W: Write>(raster: &Raster<P>, mut writer: W) -> IoResult<()> {
    if raster.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode empty {}x{} raster",
            raster.width(),
            raster.height()
        )));
    }

    let magic = match P::LAYOUT {
        PixelLayout::Gray => "P5",
        PixelLayout::Rgb => "P6",
    };
    write!(writer, "{}\n{} {}\n255\n", magic, raster.width(), raster.height())?;
    writer.write_all(&crate::interleaved_bytes(raster))?;
    writer.flush()?;
    Ok(())
}

/// Read a binary PGM (P5) or PPM (P6) image with maxval 255.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<DecodedImage> {
    let magic = read_token(&mut reader)?;
    let channels = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM magic: {}",
                other
            )));
        }
    };

    let width = parse_field(&read_token(&mut reader)?, "width")?;
    let height = parse_field(&read_token(&mut reader)?, "height")?;
    let maxval = parse_field(&read_token(&mut reader)?, "maxval")?;
    if maxval != 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM maxval: {}",
            maxval
        )));
    }

    let len = width as usize * height as usize * channels;
    let mut buf = vec![0u8; len];
    reader
        .read_exact(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("truncated PNM data: {}", e)))?;

    if channels == 1 {
        Ok(DecodedImage::Gray(Raster::from_data(width, height, buf)?))
    } else {
        let pixels = buf
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect::<Vec<_>>();
        Ok(DecodedImage::Rgb(Raster::from_data(width, height, pixels)?))
    }
}

fn parse_field(token: &str, name: &str) -> IoResult<u32> {
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM {}: {:?}", name, token)))
}

/// Read one whitespace-delimited header token, skipping `#` comments.
///
/// Consumes exactly one whitespace byte after the token, so the reader is
/// positioned at the raster data after the maxval field.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::DecodeError("unexpected end of PNM header".to_string()));
            }
            return Ok(token);
        }
        let c = byte[0];
        if c == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
        } else if c.is_ascii_whitespace() {
            if !token.is_empty() {
                return Ok(token);
            }
        } else {
            token.push(c as char);
        }
    }
}
