//! rasterkit-filter - Neighborhood and enhancement operations
//!
//! This crate provides the filtering half of the rasterkit engine:
//!
//! - Convolution with arbitrary square kernels (replicate borders)
//! - Averaging, Gaussian blur, and unsharp-mask sharpening
//! - Brightness and contrast adjustment
//! - Gradient edge detection (Roberts, Sobel, Scharr, Laplace, custom)

pub mod convolve;
pub mod edge;
pub mod enhance;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{average_filter, convolve, gaussian_filter, sharpen_filter};
pub use edge::{
    EdgeOperator, LAPLACE_WEIGHTS, ROBERTS_WEIGHTS, SCHARR_WEIGHTS, SOBEL_WEIGHTS, detect_edges,
    gradient_magnitude, laplace, roberts_cross,
};
pub use enhance::{adjust_brightness, adjust_contrast};
