//! Error types for seglabel-region

use thiserror::Error;

/// Errors that can occur during relabeling
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] seglabel_core::Error),

    /// More distinct labels than the label type can number sequentially
    #[error("label overflow: {count} distinct labels do not fit the label type")]
    LabelOverflow { count: usize },

    /// Label value has no entry in the relabel map
    #[error("label {0} is not in the relabel map")]
    UnknownLabel(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
