//! Grayscale and negative point operators
//!
//! Per-pixel, context-free transforms. Both produce RGB output so the
//! downstream display path handles a single channel layout, matching the
//! rest of the engine.

use crate::ColorResult;
use rasterkit_core::{ChannelMode, Raster, RasterMut, luma};

/// Convert an image to grayscale.
///
/// Every pixel becomes `(gray, gray, gray)` with
/// `gray = round(0.299 r + 0.587 g + 0.114 b)`. The output is a
/// three-channel raster of the same dimensions. Idempotent: a gray image
/// maps to itself.
pub fn to_grayscale(src: &Raster) -> ColorResult<Raster> {
    let mut out = RasterMut::with_size_of(src, ChannelMode::Rgb);
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            let gray = luma(r, g, b);
            out.set_rgb_unchecked(x, y, gray, gray, gray);
        }
    }
    Ok(out.into())
}

/// Invert an image.
///
/// Every channel `c` becomes `255 - c`. Applying the operator twice
/// restores the original pixel values.
pub fn to_negative(src: &Raster) -> ColorResult<Raster> {
    let mut out = RasterMut::with_size_of(src, ChannelMode::Rgb);
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            out.set_rgb_unchecked(x, y, 255 - r, 255 - g, 255 - b);
        }
    }
    Ok(out.into())
}
