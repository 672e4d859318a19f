//! Image format selection
//!
//! Writers infer the output format from the file extension.

use crate::{IoError, IoResult};
use std::path::Path;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// PNG, 8-bit gray or RGB
    Png,
    /// Binary PGM (P5) for gray, PPM (P6) for RGB
    Pnm,
}

impl ImageFormat {
    /// Get the canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }

    /// Infer the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `IoError::UnsupportedFormat` for a missing or unknown
    /// extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| {
                IoError::UnsupportedFormat(format!("no file extension: {}", path.display()))
            })?;

        match ext.as_str() {
            "png" => Ok(Self::Png),
            "pnm" | "pgm" | "ppm" => Ok(Self::Pnm),
            other => Err(IoError::UnsupportedFormat(format!(
                "unknown extension '{}'",
                other
            ))),
        }
    }
}
