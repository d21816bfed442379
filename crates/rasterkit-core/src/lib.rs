//! rasterkit-core - Core raster container and analysis
//!
//! This crate provides the fundamental image type shared by all rasterkit
//! crates:
//!
//! - [`Raster`] / [`RasterMut`]: 8-bit grayscale or RGB sample grids with
//!   an immutable-share / unique-mutate ownership model
//! - Channel conversion ([`Raster::to_gray`], [`Raster::to_rgb`])
//! - Grayscale histogram and row/column projection profiles

mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Axis, ChannelMode, HISTOGRAM_BINS, Raster, RasterMut, luma};
