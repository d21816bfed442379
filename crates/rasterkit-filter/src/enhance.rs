//! Brightness and contrast enhancement
//!
//! Per-channel linear remappings. Factors are unit-scaled (a UI slider's
//! percentage divided by 100); 1.0 is the identity for both operators.

use crate::{FilterError, FilterResult};
use rasterkit_core::{ChannelMode, Raster, RasterMut};

/// Adjust image brightness.
///
/// Every channel becomes `clamp(round(c * factor), 0, 255)`. There is no
/// upper bound on `factor`; values above 1.0 brighten, below 1.0 darken.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `factor` is negative or
/// not finite.
pub fn adjust_brightness(src: &Raster, factor: f64) -> FilterResult<Raster> {
    check_factor("brightness", factor)?;
    remap(src, |c| f64::from(c) * factor)
}

/// Adjust image contrast around the mid-gray pivot.
///
/// Every channel becomes `clamp(round(128 + factor * (c - 128)), 0, 255)`.
/// A channel already at 128 is invariant for any factor.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `factor` is negative or
/// not finite.
pub fn adjust_contrast(src: &Raster, factor: f64) -> FilterResult<Raster> {
    check_factor("contrast", factor)?;
    remap(src, |c| 128.0 + factor * (f64::from(c) - 128.0))
}

fn check_factor(name: &str, factor: f64) -> FilterResult<()> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "{name} factor must be finite and >= 0, got {factor}"
        )));
    }
    Ok(())
}

fn remap(src: &Raster, f: impl Fn(u8) -> f64) -> FilterResult<Raster> {
    let mut out = RasterMut::with_size_of(src, ChannelMode::Rgb);
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            out.set_rgb_unchecked(
                x,
                y,
                round_clamp(f(r)),
                round_clamp(f(g)),
                round_clamp(f(b)),
            );
        }
    }
    Ok(out.into())
}

#[inline]
fn round_clamp(v: f64) -> u8 {
    (v.round() as i64).clamp(0, 255) as u8
}
