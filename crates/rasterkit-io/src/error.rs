//! Error types for rasterkit-io

use thiserror::Error;

/// Errors that can occur while reading or writing image files
#[derive(Debug, Error)]
pub enum IoError {
    /// Codec failure (unsupported format, corrupt data, file errors)
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Raster could not be converted for encoding
    #[error("encode error: {0}")]
    Encode(String),
}

/// Result type for image I/O operations
pub type IoResult<T> = Result<T, IoError>;
