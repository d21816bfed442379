//! rasterkit-io - Image file decoding and encoding
//!
//! The codec boundary of the engine: converts between image files (any
//! format the `image` crate understands) and [`Raster`] buffers. Nothing
//! else in rasterkit touches the filesystem.
//!
//! Grayscale files decode to single-channel rasters; everything else is
//! converted to 8-bit RGB.

mod error;

pub use error::{IoError, IoResult};

use image::DynamicImage;
use rasterkit_core::{ChannelMode, Raster};
use std::path::Path;

/// Read an image file into a raster.
///
/// # Errors
///
/// Returns [`IoError::Image`] when the file cannot be opened or decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    raster_from_dynamic(image::open(path)?)
}

/// Decode an in-memory image into a raster.
///
/// The format is guessed from the byte content.
pub fn read_image_from_memory(bytes: &[u8]) -> IoResult<Raster> {
    raster_from_dynamic(image::load_from_memory(bytes)?)
}

/// Write a raster to an image file.
///
/// The format is chosen from the file extension.
///
/// # Errors
///
/// Returns [`IoError::Image`] when encoding or writing fails.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let w = raster.width();
    let h = raster.height();
    match raster.mode() {
        ChannelMode::Gray => {
            let buf = image::GrayImage::from_raw(w, h, raster.samples().to_vec())
                .ok_or_else(|| IoError::Encode("gray sample buffer mismatch".into()))?;
            buf.save(path)?;
        }
        ChannelMode::Rgb => {
            let buf = image::RgbImage::from_raw(w, h, raster.samples().to_vec())
                .ok_or_else(|| IoError::Encode("rgb sample buffer mismatch".into()))?;
            buf.save(path)?;
        }
    }
    Ok(())
}

fn raster_from_dynamic(img: DynamicImage) -> IoResult<Raster> {
    match img {
        DynamicImage::ImageLuma8(gray) => {
            let (w, h) = gray.dimensions();
            Ok(Raster::from_samples(w, h, ChannelMode::Gray, gray.into_raw())?)
        }
        other => {
            let rgb = other.to_rgb8();
            let (w, h) = rgb.dimensions();
            Ok(Raster::from_samples(w, h, ChannelMode::Rgb, rgb.into_raw())?)
        }
    }
}
