//! Convolution kernels
//!
//! Square weight matrices for neighborhood operations, with constructors
//! for the standard blur and sharpening kernels. Symmetric kernels
//! require an odd side length so the center pixel is well defined.

use crate::{FilterError, FilterResult};

/// A square 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length of the kernel
    size: u32,
    /// Kernel weights (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from a slice of weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is 0 or the slice
    /// length is not `size * size`.
    pub fn from_slice(size: u32, data: &[f64]) -> FilterResult<Self> {
        if size == 0 {
            return Err(FilterError::InvalidKernel("kernel size must be > 0".into()));
        }
        let expected = (size as usize) * (size as usize);
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {expected} weights for a {size}x{size} kernel, got {}",
                data.len()
            )));
        }
        Ok(Kernel {
            size,
            data: data.to_vec(),
        })
    }

    /// Create a box (averaging) kernel.
    ///
    /// All weights are `1 / (size * size)`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or 0.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        check_odd(size)?;
        let n = (size as usize) * (size as usize);
        let weight = 1.0 / n as f64;
        Ok(Kernel {
            size,
            data: vec![weight; n],
        })
    }

    /// Create a normalized Gaussian kernel.
    ///
    /// The weight at offset `(x, y)` from the center is
    /// `exp(-(x^2 + y^2) / (2 sigma^2))`; weights are then divided by
    /// their total so the kernel sums to 1. With `size == 1` this
    /// degenerates to the single weight `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or 0, or
    /// [`FilterError::InvalidParameters`] if `sigma` is not a positive
    /// finite number.
    pub fn gaussian(size: u32, sigma: f64) -> FilterResult<Self> {
        check_odd(size)?;
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "sigma must be finite and > 0, got {sigma}"
            )));
        }

        let center = (size / 2) as i64;
        let n = (size as usize) * (size as usize);
        let mut data = Vec::with_capacity(n);
        let mut sum = 0.0f64;
        for j in 0..size as i64 {
            for i in 0..size as i64 {
                let x = i - center;
                let y = j - center;
                let w = (-((x * x + y * y) as f64) / (2.0 * sigma * sigma)).exp();
                data.push(w);
                sum += w;
            }
        }
        for w in &mut data {
            *w /= sum;
        }
        Ok(Kernel { size, data })
    }

    /// Create an unsharp-mask sharpening kernel.
    ///
    /// Every off-center weight is `-intensity / size^2` and the center
    /// weight is `1 + intensity - intensity / size^2`: the identity plus
    /// `intensity` times the difference between the identity and the box
    /// blur.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or 0, or
    /// [`FilterError::InvalidParameters`] if `intensity` is negative or
    /// not finite.
    pub fn sharpening(size: u32, intensity: f64) -> FilterResult<Self> {
        check_odd(size)?;
        if !intensity.is_finite() || intensity < 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "intensity must be finite and >= 0, got {intensity}"
            )));
        }

        let n = (size as usize) * (size as usize);
        let off_center = -intensity / n as f64;
        let mut data = vec![off_center; n];
        let center = (size / 2) as usize;
        data[center * size as usize + center] = 1.0 + intensity + off_center;
        Ok(Kernel { size, data })
    }

    /// Get the side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get the center offset (`size / 2`).
    #[inline]
    pub fn center(&self) -> u32 {
        self.size / 2
    }

    /// Get the kernel weights in row-major order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get the weight at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.data[(y * self.size + x) as usize])
    }

    /// Get the sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Scale the weights so they sum to 1.
    ///
    /// Leaves the kernel unchanged when the sum is 0.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum != 0.0 {
            for w in &mut self.data {
                *w /= sum;
            }
        }
    }
}

fn check_odd(size: u32) -> FilterResult<()> {
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel size must be odd and >= 1, got {size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_sizes_rejected() {
        assert!(Kernel::box_kernel(4).is_err());
        assert!(Kernel::gaussian(2, 1.0).is_err());
        assert!(Kernel::sharpening(0, 1.0).is_err());
    }

    #[test]
    fn gaussian_degenerates_at_size_one() {
        let k = Kernel::gaussian(1, 0.5).unwrap();
        assert_eq!(k.data(), &[1.0]);
    }

    #[test]
    fn sharpening_weights() {
        let k = Kernel::sharpening(3, 0.9).unwrap();
        let off = -0.9 / 9.0;
        assert!((k.get(0, 0).unwrap() - off).abs() < 1e-12);
        assert!((k.get(1, 1).unwrap() - (1.0 + 0.9 + off)).abs() < 1e-12);
        // identity plus a zero-mean high-pass: total mass stays 1
        assert!((k.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn box_kernel_is_uniform() {
        let k = Kernel::box_kernel(5).unwrap();
        assert!(k.data().iter().all(|&w| (w - 1.0 / 25.0).abs() < 1e-12));
        assert_eq!(k.center(), 2);
    }
}
