//! Histogram generation
//!
//! Computes the 256-bin grayscale intensity distribution of an image.

use super::{ChannelMode, Raster};

/// Number of bins in a grayscale histogram.
pub const HISTOGRAM_BINS: usize = 256;

impl Raster {
    /// Get the grayscale histogram of the image.
    ///
    /// Each pixel contributes one count to the bin of its gray intensity:
    /// the stored sample for grayscale rasters, the rounded luma for RGB
    /// rasters. The bin counts always sum to `width * height`.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_core::{ChannelMode, Raster};
    ///
    /// let raster = Raster::new(100, 100, ChannelMode::Gray).unwrap();
    /// let hist = raster.gray_histogram();
    /// assert_eq!(hist[0], 100 * 100);
    /// ```
    pub fn gray_histogram(&self) -> [u32; HISTOGRAM_BINS] {
        let mut histogram = [0u32; HISTOGRAM_BINS];
        match self.mode() {
            ChannelMode::Gray => {
                for &v in self.samples() {
                    histogram[v as usize] += 1;
                }
            }
            ChannelMode::Rgb => {
                for px in self.samples().chunks_exact(3) {
                    let v = super::convert::luma(px[0], px[1], px[2]);
                    histogram[v as usize] += 1;
                }
            }
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_pixel_count() {
        let r = Raster::from_samples(2, 2, ChannelMode::Gray, vec![0, 1, 1, 255]).unwrap();
        let hist = r.gray_histogram();
        assert_eq!(hist[0], 1);
        assert_eq!(hist[1], 2);
        assert_eq!(hist[255], 1);
        assert_eq!(hist.iter().sum::<u32>(), 4);
    }
}
