//! rasterkit-color - Point operators
//!
//! Per-pixel, context-free transforms over [`rasterkit_core::Raster`]:
//!
//! - Grayscale conversion and negation
//! - Global-threshold binarization
//!
//! Brightness and contrast adjustment live in `rasterkit-filter` next to
//! the other enhancement operations.

pub mod colorspace;
mod error;
pub mod threshold;

pub use colorspace::{to_grayscale, to_negative};
pub use error::{ColorError, ColorResult};
pub use threshold::binarize;
