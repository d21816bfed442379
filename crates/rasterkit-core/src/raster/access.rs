//! Pixel access functions
//!
//! Checked getters return `None` out of bounds; unchecked variants index
//! directly and panic on bad coordinates. Reading RGB from a grayscale
//! raster replicates the intensity sample across all three channels, so
//! callers that work in RGB terms never need a mode check.

use super::{ChannelMode, Raster, RasterMut};
use crate::error::{Error, Result};

impl Raster {
    /// Get the (r, g, b) values at (x, y).
    ///
    /// For grayscale rasters the single sample is replicated.
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.get_rgb_unchecked(x, y))
    }

    /// Get the (r, g, b) values without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let i = self.inner.sample_index(x, y);
        let s = &self.inner.samples;
        match self.inner.mode {
            ChannelMode::Gray => (s[i], s[i], s[i]),
            ChannelMode::Rgb => (s[i], s[i + 1], s[i + 2]),
        }
    }

    /// Get the gray intensity at (x, y).
    ///
    /// For grayscale rasters this is the stored sample; for RGB rasters
    /// it is the rounded luma. Returns `None` if out of bounds.
    pub fn get_gray(&self, x: u32, y: u32) -> Option<u8> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.get_gray_unchecked(x, y))
    }

    /// Get the gray intensity without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_gray_unchecked(&self, x: u32, y: u32) -> u8 {
        let i = self.inner.sample_index(x, y);
        let s = &self.inner.samples;
        match self.inner.mode {
            ChannelMode::Gray => s[i],
            ChannelMode::Rgb => super::convert::luma(s[i], s[i + 1], s[i + 2]),
        }
    }
}

impl RasterMut {
    /// Set an RGB pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModeMismatch`] on a grayscale raster, or
    /// [`Error::PixelOutOfBounds`] for bad coordinates.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.data.mode != ChannelMode::Rgb {
            return Err(Error::ModeMismatch {
                expected: ChannelMode::Rgb,
                actual: self.data.mode,
            });
        }
        self.check_bounds(x, y)?;
        self.set_rgb_unchecked(x, y, r, g, b);
        Ok(())
    }

    /// Set an RGB pixel without bounds or mode checking.
    ///
    /// # Panics
    ///
    /// Panics on out-of-bounds coordinates or a grayscale raster.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        debug_assert_eq!(self.data.mode, ChannelMode::Rgb);
        let i = self.data.sample_index(x, y);
        self.data.samples[i] = r;
        self.data.samples[i + 1] = g;
        self.data.samples[i + 2] = b;
    }

    /// Set a grayscale pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModeMismatch`] on an RGB raster, or
    /// [`Error::PixelOutOfBounds`] for bad coordinates.
    pub fn set_gray(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if self.data.mode != ChannelMode::Gray {
            return Err(Error::ModeMismatch {
                expected: ChannelMode::Gray,
                actual: self.data.mode,
            });
        }
        self.check_bounds(x, y)?;
        self.set_gray_unchecked(x, y, value);
        Ok(())
    }

    /// Set a grayscale pixel without bounds or mode checking.
    ///
    /// # Panics
    ///
    /// Panics on out-of-bounds coordinates or an RGB raster.
    #[inline]
    pub fn set_gray_unchecked(&mut self, x: u32, y: u32, value: u8) {
        debug_assert_eq!(self.data.mode, ChannelMode::Gray);
        let i = self.data.sample_index(x, y);
        self.data.samples[i] = value;
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.data.width || y >= self.data.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.data.width,
                height: self.data.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_read_replicates_channels() {
        let r = Raster::from_samples(2, 1, ChannelMode::Gray, vec![10, 200]).unwrap();
        assert_eq!(r.get_rgb(0, 0), Some((10, 10, 10)));
        assert_eq!(r.get_rgb(1, 0), Some((200, 200, 200)));
        assert_eq!(r.get_rgb(2, 0), None);
    }

    #[test]
    fn set_rgb_rejects_gray_mode() {
        let mut m = RasterMut::new(2, 2, ChannelMode::Gray).unwrap();
        assert!(m.set_rgb(0, 0, 1, 2, 3).is_err());
        assert!(m.set_gray(0, 0, 9).is_ok());
        assert!(m.set_gray(5, 0, 9).is_err());
    }
}
