//! Convolution regression test
//!
//! Kernel construction, blur and sharpen behavior over uniform images,
//! and parameter validation.

use rasterkit_filter::{Kernel, average_filter, gaussian_filter, sharpen_filter};
use rasterkit_test::{RegParams, gray_ramp, solid_gray, solid_rgb};

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    // --- Test 1: Gaussian kernels are normalized to unit mass ---
    for &size in &[1u32, 3, 5, 7] {
        for &sigma in &[0.5f64, 1.0, 5.0] {
            let kernel = Kernel::gaussian(size, sigma).expect("gaussian kernel");
            rp.compare_values(1.0, kernel.sum(), 1e-6);
        }
    }

    // --- Test 2: Gaussian weights fall off from the center ---
    let kernel = Kernel::gaussian(5, 1.0).expect("gaussian kernel");
    let center = kernel.get(2, 2).expect("center weight");
    let edge = kernel.get(0, 0).expect("corner weight");
    rp.check("gaussian peaks at the center", center > edge && edge > 0.0);

    // --- Test 3: filtering preserves dimensions and mode ---
    let ramp = gray_ramp(10, 10);
    let rgb = solid_rgb(10, 10, (30, 60, 90));
    for &size in &[1u32, 3, 5, 7, 9] {
        let blurred = average_filter(&ramp, size).expect("average");
        rp.check("gray dims preserved", blurred.width() == 10 && blurred.height() == 10);
        rp.check("gray mode preserved", blurred.mode() == ramp.mode());
        let blurred = gaussian_filter(&rgb, size, 1.2).expect("gaussian");
        rp.check("rgb dims preserved", blurred.width() == 10 && blurred.height() == 10);
        rp.check("rgb mode preserved", blurred.mode() == rgb.mode());
    }

    // --- Test 4: a size-1 kernel is the identity ---
    let out = gaussian_filter(&ramp, 1, 2.0).expect("gaussian");
    rp.compare_rasters(&ramp, &out);

    // --- Test 5: blurring a uniform image changes nothing measurable ---
    // box weights are 1/n^2, so the sum can land a hair under the input
    // and truncate one level down
    let flat = solid_gray(8, 8, 173);
    let out = average_filter(&flat, 5).expect("average");
    for &(x, y) in &[(0u32, 0u32), (4, 4), (7, 7)] {
        rp.compare_values(
            173.0,
            out.get_gray(x, y).expect("in bounds") as f64,
            1.0,
        );
    }
    let out = gaussian_filter(&flat, 3, 0.8).expect("gaussian");
    rp.compare_values(173.0, out.get_gray(3, 3).expect("in bounds") as f64, 1.0);

    // --- Test 6: sharpening with exactly representable weights is a
    //     fixed point on uniform images ---
    // intensity 2.25 over a 3x3 kernel gives off-center weights of -0.25
    // and a center of 3.0, all exact in binary
    let flat = solid_rgb(6, 6, (100, 40, 250));
    let out = sharpen_filter(&flat, 3, 2.25).expect("sharpen");
    rp.compare_rasters(&flat, &out);

    // --- Test 7: sharpening amplifies a point source and clamps ---
    let mut samples = vec![0u8; 25];
    samples[2 * 5 + 2] = 90;
    let spot = rasterkit_core::Raster::from_samples(
        5,
        5,
        rasterkit_core::ChannelMode::Gray,
        samples,
    )
    .expect("point source image");
    let out = sharpen_filter(&spot, 3, 2.25).expect("sharpen");
    // center: 90 * 3.0 = 270, clamped to 255
    rp.compare_values(255.0, out.get_gray(2, 2).expect("in bounds") as f64, 0.0);
    // neighbor: 90 * -0.25 = -22.5, clamped to 0
    rp.compare_values(0.0, out.get_gray(2, 1).expect("in bounds") as f64, 0.0);
    rp.compare_values(0.0, out.get_gray(0, 0).expect("in bounds") as f64, 0.0);

    // --- Test 8: even and zero kernel sizes are rejected ---
    let flat = solid_gray(4, 4, 10);
    rp.check("even average rejected", average_filter(&flat, 4).is_err());
    rp.check("zero average rejected", average_filter(&flat, 0).is_err());
    rp.check("even gaussian rejected", gaussian_filter(&flat, 2, 1.0).is_err());
    rp.check("even sharpen rejected", sharpen_filter(&flat, 6, 1.0).is_err());

    // --- Test 9: non-positive sigma and negative intensity rejected ---
    rp.check("zero sigma rejected", gaussian_filter(&flat, 3, 0.0).is_err());
    rp.check("nan sigma rejected", gaussian_filter(&flat, 3, f64::NAN).is_err());
    rp.check(
        "negative intensity rejected",
        sharpen_filter(&flat, 3, -0.1).is_err(),
    );

    assert!(rp.cleanup(), "convolve regression test failed");
}
