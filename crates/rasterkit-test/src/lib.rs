//! rasterkit-test - Regression test support
//!
//! Provides [`RegParams`], a failure-accumulating test driver, and
//! constructors for the small synthetic rasters the regression tests run
//! against.
//!
//! # Usage
//!
//! ```
//! use rasterkit_test::{RegParams, solid_gray};
//!
//! let mut rp = RegParams::new("histogram");
//! let raster = solid_gray(4, 4, 128);
//! rp.compare_values(16.0, raster.gray_histogram()[128] as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use rasterkit_core::{ChannelMode, Raster};
use std::path::PathBuf;

/// Get the directory for files written by regression tests.
///
/// The caller is responsible for creating it.
pub fn regout_dir() -> PathBuf {
    std::env::temp_dir().join("rasterkit_regout")
}

/// Build a single-channel raster filled with one intensity.
pub fn solid_gray(width: u32, height: u32, value: u8) -> Raster {
    let len = width as usize * height as usize;
    Raster::from_samples(width, height, ChannelMode::Gray, vec![value; len])
        .expect("valid test raster dimensions")
}

/// Build an RGB raster filled with one color.
pub fn solid_rgb(width: u32, height: u32, (r, g, b): (u8, u8, u8)) -> Raster {
    let mut samples = Vec::with_capacity(width as usize * height as usize * 3);
    for _ in 0..width as usize * height as usize {
        samples.extend_from_slice(&[r, g, b]);
    }
    Raster::from_samples(width, height, ChannelMode::Rgb, samples)
        .expect("valid test raster dimensions")
}

/// Build a single-channel raster whose intensity ramps left to right.
///
/// Column `x` holds `round(255 * x / (width - 1))`; a one-column image
/// is all zero.
pub fn gray_ramp(width: u32, height: u32) -> Raster {
    let mut samples = Vec::with_capacity(width as usize * height as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = if width > 1 {
                (255.0 * f64::from(x) / f64::from(width - 1)).round() as u8
            } else {
                0
            };
            samples.push(v);
        }
    }
    Raster::from_samples(width, height, ChannelMode::Gray, samples)
        .expect("valid test raster dimensions")
}

/// Build a single-channel raster split into a dark left half and a
/// bright right half, for exercising vertical-edge responses.
pub fn step_edge(width: u32, height: u32, dark: u8, bright: u8) -> Raster {
    let mut samples = Vec::with_capacity(width as usize * height as usize);
    for _ in 0..height {
        for x in 0..width {
            samples.push(if x < width / 2 { dark } else { bright });
        }
    }
    Raster::from_samples(width, height, ChannelMode::Gray, samples)
        .expect("valid test raster dimensions")
}
