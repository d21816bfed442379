//! Channel mode conversion
//!
//! Luma-based grayscale reduction and gray-to-RGB replication. These are
//! the only mode conversions the engine performs; richer color-space
//! handling is out of scope.

use super::{ChannelMode, Raster, RasterMut};
use crate::error::Result;

/// Weighted grayscale intensity of an RGB triple (Rec. 601 luma).
///
/// `luma = round(0.299 r + 0.587 g + 0.114 b)`
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    // weights sum to 1, so y never exceeds 255
    y.round() as u8
}

impl Raster {
    /// Get a single-channel luma view of the image.
    ///
    /// A grayscale raster is returned as-is (cheap clone); an RGB raster
    /// is reduced with [`luma`].
    pub fn to_gray(&self) -> Result<Raster> {
        if self.mode() == ChannelMode::Gray {
            return Ok(self.clone());
        }
        let src = self.samples();
        let mut gray = Vec::with_capacity(self.width() as usize * self.height() as usize);
        for px in src.chunks_exact(3) {
            gray.push(luma(px[0], px[1], px[2]));
        }
        Raster::from_samples(self.width(), self.height(), ChannelMode::Gray, gray)
    }

    /// Get a three-channel view of the image.
    ///
    /// An RGB raster is returned as-is; a grayscale raster has its
    /// intensity replicated into all three channels.
    pub fn to_rgb(&self) -> Result<Raster> {
        if self.mode() == ChannelMode::Rgb {
            return Ok(self.clone());
        }
        let mut out = RasterMut::with_size_of(self, ChannelMode::Rgb);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let v = self.get_gray_unchecked(x, y);
                out.set_rgb_unchecked(x, y, v, v, v);
            }
        }
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_weights() {
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(0, 0, 0), 0);
        // 0.299 * 255 = 76.245 -> 76
        assert_eq!(luma(255, 0, 0), 76);
        // 0.587 * 255 = 149.685 -> 150
        assert_eq!(luma(0, 255, 0), 150);
        // 0.114 * 255 = 29.07 -> 29
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn gray_round_trip() {
        let g = Raster::from_samples(2, 1, ChannelMode::Gray, vec![7, 77]).unwrap();
        let rgb = g.to_rgb().unwrap();
        assert_eq!(rgb.get_rgb(1, 0), Some((77, 77, 77)));
        let back = rgb.to_gray().unwrap();
        assert_eq!(back.samples(), g.samples());
    }
}
