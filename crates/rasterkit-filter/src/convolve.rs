//! Convolution operations
//!
//! Applies an arbitrary square kernel to an image with replicate (clamp)
//! border handling: source coordinates outside the image are replaced by
//! the nearest edge pixel, never wrapped or zero-padded. Each channel
//! accumulates independently; the accumulated value is truncated to an
//! integer and clamped to [0, 255].
//!
//! Averaging, Gaussian blur, and sharpening are all this one routine with
//! different kernels.

use crate::{FilterResult, Kernel};
use rasterkit_core::{ChannelMode, Raster, RasterMut};

/// Convolve an image with a kernel.
///
/// The output has the same dimensions and channel mode as the input.
pub fn convolve(src: &Raster, kernel: &Kernel) -> FilterResult<Raster> {
    match src.mode() {
        ChannelMode::Gray => convolve_gray(src, kernel),
        ChannelMode::Rgb => convolve_rgb(src, kernel),
    }
}

fn convolve_gray(src: &Raster, kernel: &Kernel) -> FilterResult<Raster> {
    let w = src.width();
    let h = src.height();
    let size = kernel.size();
    let offset = kernel.center() as i64;

    let mut out = RasterMut::with_size_of(src, ChannelMode::Gray);
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f64;
            for ky in 0..size {
                for kx in 0..size {
                    let sx = clamp_coord(x as i64 + kx as i64 - offset, w);
                    let sy = clamp_coord(y as i64 + ky as i64 - offset, h);
                    let weight = kernel.get(kx, ky).unwrap_or(0.0);
                    sum += f64::from(src.get_gray_unchecked(sx, sy)) * weight;
                }
            }
            out.set_gray_unchecked(x, y, truncate_clamp(sum));
        }
    }
    Ok(out.into())
}

fn convolve_rgb(src: &Raster, kernel: &Kernel) -> FilterResult<Raster> {
    let w = src.width();
    let h = src.height();
    let size = kernel.size();
    let offset = kernel.center() as i64;

    let mut out = RasterMut::with_size_of(src, ChannelMode::Rgb);
    for y in 0..h {
        for x in 0..w {
            let mut sum_r = 0.0f64;
            let mut sum_g = 0.0f64;
            let mut sum_b = 0.0f64;
            for ky in 0..size {
                for kx in 0..size {
                    let sx = clamp_coord(x as i64 + kx as i64 - offset, w);
                    let sy = clamp_coord(y as i64 + ky as i64 - offset, h);
                    let (r, g, b) = src.get_rgb_unchecked(sx, sy);
                    let weight = kernel.get(kx, ky).unwrap_or(0.0);
                    sum_r += f64::from(r) * weight;
                    sum_g += f64::from(g) * weight;
                    sum_b += f64::from(b) * weight;
                }
            }
            out.set_rgb_unchecked(
                x,
                y,
                truncate_clamp(sum_r),
                truncate_clamp(sum_g),
                truncate_clamp(sum_b),
            );
        }
    }
    Ok(out.into())
}

#[inline]
fn clamp_coord(v: i64, limit: u32) -> u32 {
    v.clamp(0, i64::from(limit) - 1) as u32
}

#[inline]
fn truncate_clamp(v: f64) -> u8 {
    (v as i64).clamp(0, 255) as u8
}

/// Apply an averaging (box) filter.
///
/// # Errors
///
/// Returns [`crate::FilterError::InvalidKernel`] if `kernel_size` is even
/// or 0.
pub fn average_filter(src: &Raster, kernel_size: u32) -> FilterResult<Raster> {
    let kernel = Kernel::box_kernel(kernel_size)?;
    convolve(src, &kernel)
}

/// Apply a Gaussian blur.
///
/// # Errors
///
/// Returns [`crate::FilterError::InvalidKernel`] for an even or zero
/// `kernel_size`, or [`crate::FilterError::InvalidParameters`] for a
/// non-positive `sigma`.
pub fn gaussian_filter(src: &Raster, kernel_size: u32, sigma: f64) -> FilterResult<Raster> {
    let kernel = Kernel::gaussian(kernel_size, sigma)?;
    convolve(src, &kernel)
}

/// Apply unsharp-mask sharpening.
///
/// # Errors
///
/// Returns [`crate::FilterError::InvalidKernel`] for an even or zero
/// `kernel_size`, or [`crate::FilterError::InvalidParameters`] for a
/// negative `intensity`.
pub fn sharpen_filter(src: &Raster, kernel_size: u32, intensity: f64) -> FilterResult<Raster> {
    let kernel = Kernel::sharpening(kernel_size, intensity)?;
    convolve(src, &kernel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_kernel_is_a_no_op() {
        let src = Raster::from_samples(
            2,
            2,
            ChannelMode::Gray,
            vec![10, 20, 30, 40],
        )
        .unwrap();
        let identity =
            Kernel::from_slice(3, &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let out = convolve(&src, &identity).unwrap();
        assert_eq!(out.samples(), src.samples());
    }

    #[test]
    fn border_sampling_replicates_edges() {
        // single white pixel in the corner of a 2x2 black image; a box
        // average at (0, 0) sees that pixel replicated 4 times
        let src = Raster::from_samples(2, 2, ChannelMode::Gray, vec![90, 0, 0, 0]).unwrap();
        let out = average_filter(&src, 3).unwrap();
        // (4 * 90 + 5 * 0) / 9 = 40
        assert_eq!(out.get_gray(0, 0), Some(40));
    }
}
