//! Error types for seglabel-color

use thiserror::Error;

/// Errors that can occur while aggregating or colorizing by label
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] seglabel_core::Error),

    /// Label has no entry in the statistics table
    #[error("label {label} out of range for statistics of length {len}")]
    LabelOutOfRange { label: usize, len: usize },

    /// Label has no pixels, so its average color is undefined
    #[error("average color of label {label} is undefined (no pixels)")]
    UndefinedAverage { label: usize },

    /// Label value cannot index the statistics table (negative)
    #[error("invalid label: {0}")]
    InvalidLabel(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
