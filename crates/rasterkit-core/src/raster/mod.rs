//! Raster - the image container
//!
//! A `Raster` is an immutable grid of 8-bit color samples, either one
//! sample per pixel (grayscale) or three (interleaved RGB). Rows are
//! stored contiguously, top to bottom, with no padding.
//!
//! # Ownership model
//!
//! `Raster` shares its samples behind an `Arc`, so cloning is cheap and
//! a held clone is a stable snapshot. Pixel data can only be written
//! through [`RasterMut`], which owns its samples uniquely; once converted
//! back into a `Raster` (via `Into`), the image is frozen. An operator
//! therefore never mutates its input: it builds a fresh `RasterMut` and
//! returns the finished image.

mod access;
mod convert;
mod histogram;
mod projection;

pub use convert::luma;
pub use histogram::HISTOGRAM_BINS;
pub use projection::Axis;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Channel layout of a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    /// One 8-bit intensity sample per pixel
    Gray,
    /// Three interleaved 8-bit samples per pixel (R, G, B)
    Rgb,
}

impl ChannelMode {
    /// Number of samples stored per pixel.
    #[inline]
    pub fn samples_per_pixel(self) -> u32 {
        match self {
            ChannelMode::Gray => 1,
            ChannelMode::Rgb => 3,
        }
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Channel layout
    mode: ChannelMode,
    /// Interleaved sample data, row-major
    samples: Vec<u8>,
}

impl RasterData {
    fn new(width: u32, height: u32, mode: ChannelMode) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = Raster::expected_len(width, height, mode);
        Ok(RasterData {
            width,
            height,
            mode,
            samples: vec![0u8; len],
        })
    }

    #[inline]
    fn sample_index(&self, x: u32, y: u32) -> usize {
        let spp = self.mode.samples_per_pixel() as usize;
        (y as usize * self.width as usize + x as usize) * spp
    }
}

/// Raster - immutable image container
///
/// # Examples
///
/// ```
/// use rasterkit_core::{ChannelMode, Raster};
///
/// let raster = Raster::new(640, 480, ChannelMode::Rgb).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.samples().len(), 640 * 480 * 3);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new zero-filled (black) raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, mode: ChannelMode) -> Result<Self> {
        Ok(RasterMut::new(width, height, mode)?.into())
    }

    /// Create a raster from an existing sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions, or
    /// [`Error::SampleCountMismatch`] if the buffer length is not
    /// `width * height * samples_per_pixel`.
    pub fn from_samples(
        width: u32,
        height: u32,
        mode: ChannelMode,
        samples: Vec<u8>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = Self::expected_len(width, height, mode);
        if samples.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                mode,
                samples,
            }),
        })
    }

    #[inline]
    fn expected_len(width: u32, height: u32, mode: ChannelMode) -> usize {
        width as usize * height as usize * mode.samples_per_pixel() as usize
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn mode(&self) -> ChannelMode {
        self.inner.mode
    }

    /// Get the raw sample data.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.inner.samples
    }

    /// Check whether coordinates fall inside the image.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.mode() == other.mode()
            && self.samples() == other.samples()
    }
}

impl Eq for Raster {}

/// Mutable raster under construction
///
/// Owns its samples uniquely; convert into a [`Raster`] with `into()`
/// once all pixels are written.
#[derive(Debug)]
pub struct RasterMut {
    data: RasterData,
}

impl RasterMut {
    /// Create a new zero-filled mutable raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, mode: ChannelMode) -> Result<Self> {
        Ok(RasterMut {
            data: RasterData::new(width, height, mode)?,
        })
    }

    /// Create a zero-filled mutable raster with the dimensions of an
    /// existing image.
    pub fn with_size_of(src: &Raster, mode: ChannelMode) -> Self {
        // src upholds the nonzero-dimension invariant already
        RasterMut {
            data: RasterData {
                width: src.width(),
                height: src.height(),
                mode,
                samples: vec![0u8; Raster::expected_len(src.width(), src.height(), mode)],
            },
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.data.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.data.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn mode(&self) -> ChannelMode {
        self.data.mode
    }

    /// Get the raw sample data.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.data.samples
    }
}

impl From<RasterMut> for Raster {
    fn from(m: RasterMut) -> Raster {
        Raster {
            inner: Arc::new(m.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_rejected() {
        assert!(Raster::new(0, 10, ChannelMode::Gray).is_err());
        assert!(Raster::new(10, 0, ChannelMode::Rgb).is_err());
    }

    #[test]
    fn from_samples_checks_length() {
        let r = Raster::from_samples(2, 2, ChannelMode::Rgb, vec![0u8; 12]).unwrap();
        assert_eq!(r.mode(), ChannelMode::Rgb);
        assert!(Raster::from_samples(2, 2, ChannelMode::Rgb, vec![0u8; 11]).is_err());
        assert!(Raster::from_samples(2, 2, ChannelMode::Gray, vec![0u8; 12]).is_err());
    }

    #[test]
    fn new_raster_is_black() {
        let r = Raster::new(3, 3, ChannelMode::Gray).unwrap();
        assert!(r.samples().iter().all(|&s| s == 0));
    }
}
