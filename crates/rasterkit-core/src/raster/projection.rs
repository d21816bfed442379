//! Intensity projection profiles
//!
//! Sums gray intensities along rows or columns and scales the result
//! against the maximum sum, for visualizing the intensity distribution
//! along an axis.

use super::{ChannelMode, Raster};
use crate::error::{Error, Result};

/// Projection axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Per-row sums; profile length = image height
    Horizontal,
    /// Per-column sums; profile length = image width
    Vertical,
}

impl Raster {
    /// Compute the intensity projection profile along an axis.
    ///
    /// Gray intensities (stored samples, or rounded luma for RGB) are
    /// summed per row or per column. When the maximum sum is positive,
    /// every entry is scaled by `255 * normalization_factor / max_sum`;
    /// a uniformly black image yields an all-zero profile unscaled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `normalization_factor` is
    /// negative or not finite.
    pub fn projection_profile(&self, axis: Axis, normalization_factor: f64) -> Result<Vec<f64>> {
        if !normalization_factor.is_finite() || normalization_factor < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "normalization factor must be finite and >= 0, got {normalization_factor}"
            )));
        }

        let len = match axis {
            Axis::Horizontal => self.height() as usize,
            Axis::Vertical => self.width() as usize,
        };
        let mut sums = vec![0.0f64; len];

        let width = self.width() as usize;
        match self.mode() {
            ChannelMode::Gray => {
                for (y, row) in self.samples().chunks_exact(width).enumerate() {
                    for (x, &v) in row.iter().enumerate() {
                        let slot = match axis {
                            Axis::Horizontal => y,
                            Axis::Vertical => x,
                        };
                        sums[slot] += f64::from(v);
                    }
                }
            }
            ChannelMode::Rgb => {
                for (y, row) in self.samples().chunks_exact(width * 3).enumerate() {
                    for (x, px) in row.chunks_exact(3).enumerate() {
                        let slot = match axis {
                            Axis::Horizontal => y,
                            Axis::Vertical => x,
                        };
                        sums[slot] += f64::from(super::convert::luma(px[0], px[1], px[2]));
                    }
                }
            }
        }

        let max_sum = sums.iter().copied().fold(0.0f64, f64::max);
        if max_sum > 0.0 {
            let scale = 255.0 * normalization_factor / max_sum;
            for v in &mut sums {
                *v *= scale;
            }
        }
        Ok(sums)
    }
}
