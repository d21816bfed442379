//! Binarization
//!
//! Global threshold against the luma of each pixel.

use crate::ColorResult;
use rasterkit_core::{ChannelMode, Raster, RasterMut, luma};

/// Binarize an image against a global threshold.
///
/// A pixel becomes pure white when its luma is strictly greater than
/// `threshold`, pure black otherwise. The output is a three-channel
/// raster of the same dimensions; with `threshold == 255` the result is
/// all black.
pub fn binarize(src: &Raster, threshold: u8) -> ColorResult<Raster> {
    let mut out = RasterMut::with_size_of(src, ChannelMode::Rgb);
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            let v = if luma(r, g, b) > threshold { 255 } else { 0 };
            out.set_rgb_unchecked(x, y, v, v, v);
        }
    }
    Ok(out.into())
}
