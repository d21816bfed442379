//! Gradient edge detection
//!
//! Directional-gradient magnitude operators over the luma view of an
//! image: Roberts cross (2x2), Sobel and Scharr (3x3 kernel pairs),
//! Laplace (single 3x3 kernel), and caller-supplied weight matrices
//! dispatched by shape. Output is always re-expressed as a three-channel
//! image for uniform downstream handling.
//!
//! Pixels whose kernel footprint would leave the image are never visited:
//! the output buffer starts zero-filled, so the unvisited border (last
//! row/column for Roberts, the one-pixel frame for the 3x3 operators) is
//! black by post-condition, not by accident.

use crate::{FilterError, FilterResult};
use rasterkit_core::{ChannelMode, Raster, RasterMut};

/// A 2x2 edge-detection weight matrix
pub type Matrix2 = [[f64; 2]; 2];
/// A 3x3 edge-detection weight matrix
pub type Matrix3 = [[f64; 3]; 3];

/// Default Roberts cross weights
pub const ROBERTS_WEIGHTS: Matrix2 = [[1.0, 0.0], [0.0, -1.0]];

/// Default Sobel weights (horizontal derivative)
pub const SOBEL_WEIGHTS: Matrix3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Default Scharr weights (better rotational symmetry than Sobel)
pub const SCHARR_WEIGHTS: Matrix3 = [[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]];

/// Default Laplace weights
pub const LAPLACE_WEIGHTS: Matrix3 = [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]];

/// Edge-detection operator selection
///
/// `Custom` matrices are validated once here at the dispatch boundary:
/// 2x2 routes to the Roberts algorithm, 3x3 to the Sobel algorithm, and
/// any other shape (or an all-zero matrix) is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeOperator {
    /// Roberts cross with the default 2x2 weights
    Roberts,
    /// Sobel operator with the default 3x3 weights
    Sobel,
    /// Scharr operator with the default 3x3 weights
    Scharr,
    /// Laplace operator with the default 3x3 weights
    Laplace,
    /// Caller-supplied 2x2 or 3x3 weight matrix
    Custom(Vec<Vec<f64>>),
}

/// Run an edge-detection operator over an image.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] for a `Custom` matrix that is
/// not 2x2 or 3x3, or whose weights are all zero.
pub fn detect_edges(src: &Raster, operator: &EdgeOperator) -> FilterResult<Raster> {
    match operator {
        EdgeOperator::Roberts => roberts_cross(src, ROBERTS_WEIGHTS),
        EdgeOperator::Sobel => gradient_magnitude(src, SOBEL_WEIGHTS),
        EdgeOperator::Scharr => gradient_magnitude(src, SCHARR_WEIGHTS),
        EdgeOperator::Laplace => laplace(src, LAPLACE_WEIGHTS),
        EdgeOperator::Custom(matrix) => custom_detection(src, matrix),
    }
}

/// Apply the Roberts cross operator with the given 2x2 weights.
///
/// A second matrix is derived from `weights` by a fixed 90-degree style
/// reflection; for each pixel with a right and below neighbor, the two
/// weighted sums over the 2x2 footprint give `gx` and `gy`, and the
/// output is `min(255, round(sqrt(gx^2 + gy^2)))`. The final row and
/// column stay black.
pub fn roberts_cross(src: &Raster, weights: Matrix2) -> FilterResult<Raster> {
    let gray = src.to_gray()?;
    let w = gray.width();
    let h = gray.height();
    let second: Matrix2 = [
        [weights[0][1], -weights[0][0]],
        [-weights[1][1], weights[1][0]],
    ];

    let mut out = RasterMut::with_size_of(&gray, ChannelMode::Gray);
    for y in 0..h - 1 {
        for x in 0..w - 1 {
            let p00 = f64::from(gray.get_gray_unchecked(x, y));
            let p10 = f64::from(gray.get_gray_unchecked(x + 1, y));
            let p01 = f64::from(gray.get_gray_unchecked(x, y + 1));
            let p11 = f64::from(gray.get_gray_unchecked(x + 1, y + 1));

            let gx = weights[0][0] * p00
                + weights[0][1] * p10
                + weights[1][0] * p01
                + weights[1][1] * p11;
            let gy =
                second[0][0] * p00 + second[0][1] * p10 + second[1][0] * p01 + second[1][1] * p11;

            out.set_gray_unchecked(x, y, magnitude((gx * gx + gy * gy).sqrt()));
        }
    }
    // the unreachable last row/column keep the zero fill
    Ok(Raster::from(out).to_rgb()?)
}

/// Apply a Sobel-style gradient-pair operator with the given 3x3 weights.
///
/// The orthogonal kernel is `weights` rotated 90 degrees (rows reversed,
/// then transposed). Interior pixels get
/// `min(255, round(sqrt(gx^2 + gy^2)))`; the one-pixel border stays
/// black. [`SOBEL_WEIGHTS`] and [`SCHARR_WEIGHTS`] are the stock kernels.
pub fn gradient_magnitude(src: &Raster, weights: Matrix3) -> FilterResult<Raster> {
    let gray = src.to_gray()?;
    let w = gray.width();
    let h = gray.height();
    let second = rotate90(&weights);

    let mut out = RasterMut::with_size_of(&gray, ChannelMode::Gray);
    for y in 1..h.saturating_sub(1) {
        for x in 1..w - 1 {
            let mut gx = 0.0f64;
            let mut gy = 0.0f64;
            for j in 0..3 {
                for i in 0..3 {
                    let p = f64::from(gray.get_gray_unchecked(x + i - 1, y + j - 1));
                    gx += p * weights[j as usize][i as usize];
                    gy += p * second[j as usize][i as usize];
                }
            }
            out.set_gray_unchecked(x, y, magnitude((gx * gx + gy * gy).sqrt()));
        }
    }
    Ok(Raster::from(out).to_rgb()?)
}

/// Apply the Laplace operator with the given 3x3 weights.
///
/// Single-kernel convolution without gradient pairing; interior pixels
/// get `min(255, round(|sum|))` and the one-pixel border stays black.
pub fn laplace(src: &Raster, weights: Matrix3) -> FilterResult<Raster> {
    let gray = src.to_gray()?;
    let w = gray.width();
    let h = gray.height();

    let mut out = RasterMut::with_size_of(&gray, ChannelMode::Gray);
    for y in 1..h.saturating_sub(1) {
        for x in 1..w - 1 {
            let mut acc = 0.0f64;
            for j in 0..3 {
                for i in 0..3 {
                    let p = f64::from(gray.get_gray_unchecked(x + i - 1, y + j - 1));
                    acc += p * weights[j as usize][i as usize];
                }
            }
            out.set_gray_unchecked(x, y, magnitude(acc.abs()));
        }
    }
    Ok(Raster::from(out).to_rgb()?)
}

fn custom_detection(src: &Raster, matrix: &[Vec<f64>]) -> FilterResult<Raster> {
    let size = matrix.len();
    let square = matrix.iter().all(|row| row.len() == size);
    if !square || !(size == 2 || size == 3) {
        return Err(FilterError::InvalidKernel(
            "custom weight matrix must be 2x2 or 3x3".into(),
        ));
    }
    if matrix.iter().flatten().all(|&v| v == 0.0) {
        return Err(FilterError::InvalidKernel(
            "custom weight matrix must contain a nonzero weight".into(),
        ));
    }

    if size == 2 {
        let weights = [
            [matrix[0][0], matrix[0][1]],
            [matrix[1][0], matrix[1][1]],
        ];
        roberts_cross(src, weights)
    } else {
        let weights = [
            [matrix[0][0], matrix[0][1], matrix[0][2]],
            [matrix[1][0], matrix[1][1], matrix[1][2]],
            [matrix[2][0], matrix[2][1], matrix[2][2]],
        ];
        gradient_magnitude(src, weights)
    }
}

/// Rotate a 3x3 matrix 90 degrees: reverse row order, then transpose.
fn rotate90(m: &Matrix3) -> Matrix3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            *v = m[2 - j][i];
        }
    }
    out
}

#[inline]
fn magnitude(v: f64) -> u8 {
    v.round().min(255.0) as u8
}
