//! Edge detection regression test
//!
//! Flat-field response, step-edge localization, border behavior, and
//! custom-matrix dispatch.

use rasterkit_core::{ChannelMode, Raster};
use rasterkit_filter::{EdgeOperator, SOBEL_WEIGHTS, detect_edges};
use rasterkit_test::{RegParams, solid_gray, step_edge};

fn all_black(raster: &Raster) -> bool {
    raster.samples().iter().all(|&s| s == 0)
}

#[test]
fn edge_reg() {
    let mut rp = RegParams::new("edge");

    let builtins = [
        EdgeOperator::Roberts,
        EdgeOperator::Sobel,
        EdgeOperator::Scharr,
        EdgeOperator::Laplace,
    ];

    // --- Test 1: a flat field has no edges, output is always RGB ---
    let flat = solid_gray(7, 7, 140);
    for operator in &builtins {
        let out = detect_edges(&flat, operator).expect("detect");
        rp.check("flat field is all black", all_black(&out));
        rp.check("edge output is rgb", out.mode() == ChannelMode::Rgb);
        rp.check("dims preserved", out.width() == 7 && out.height() == 7);
    }

    // --- Test 2: Sobel finds a vertical step edge ---
    // left half 0, right half 200; the last dark column (x = 2) sees the
    // bright side with weight 1 + 2 + 1, saturating the magnitude
    let step = step_edge(6, 5, 0, 200);
    let out = detect_edges(&step, &EdgeOperator::Sobel).expect("sobel");
    rp.check("sobel fires at the edge", out.get_rgb(2, 2) == Some((255, 255, 255)));
    rp.check("sobel quiet off the edge", out.get_rgb(1, 2) == Some((0, 0, 0)));
    // the one-pixel frame is never written
    rp.check("sobel top border black", out.get_rgb(2, 0) == Some((0, 0, 0)));
    rp.check("sobel left border black", out.get_rgb(0, 2) == Some((0, 0, 0)));

    // --- Test 3: Scharr fires on the same edge ---
    let out = detect_edges(&step, &EdgeOperator::Scharr).expect("scharr");
    rp.check("scharr fires at the edge", out.get_rgb(2, 2) == Some((255, 255, 255)));
    rp.check("scharr quiet off the edge", out.get_rgb(1, 2) == Some((0, 0, 0)));

    // --- Test 4: Roberts on the step edge, last row/column stay black ---
    // at x = 2: gx = -200, gy = -200, magnitude = sqrt(80000) -> 255
    let out = detect_edges(&step, &EdgeOperator::Roberts).expect("roberts");
    rp.check("roberts fires at the edge", out.get_rgb(2, 2) == Some((255, 255, 255)));
    rp.check("roberts quiet in flat area", out.get_rgb(0, 0) == Some((0, 0, 0)));
    for y in 0..5 {
        rp.check("roberts last column black", out.get_rgb(5, y) == Some((0, 0, 0)));
    }
    for x in 0..6 {
        rp.check("roberts last row black", out.get_rgb(x, 4) == Some((0, 0, 0)));
    }

    // --- Test 5: Laplace response to a point source ---
    let mut samples = vec![0u8; 25];
    samples[2 * 5 + 2] = 200;
    let spot = Raster::from_samples(5, 5, ChannelMode::Gray, samples).expect("point source");
    let out = detect_edges(&spot, &EdgeOperator::Laplace).expect("laplace");
    // center: |4 * 200| = 800 -> 255; four-neighbor: |-200| = 200
    rp.check("laplace center saturates", out.get_rgb(2, 2) == Some((255, 255, 255)));
    rp.check("laplace neighbor response", out.get_rgb(2, 1) == Some((200, 200, 200)));
    rp.check("laplace diagonal quiet", out.get_rgb(1, 1) == Some((0, 0, 0)));

    // --- Test 6: custom matrices dispatch by shape ---
    let roberts_custom = EdgeOperator::Custom(vec![vec![1.0, 0.0], vec![0.0, -1.0]]);
    let stock = detect_edges(&step, &EdgeOperator::Roberts).expect("roberts");
    let custom = detect_edges(&step, &roberts_custom).expect("custom 2x2");
    rp.compare_rasters(&stock, &custom);

    let sobel_custom = EdgeOperator::Custom(
        SOBEL_WEIGHTS.iter().map(|row| row.to_vec()).collect(),
    );
    let stock = detect_edges(&step, &EdgeOperator::Sobel).expect("sobel");
    let custom = detect_edges(&step, &sobel_custom).expect("custom 3x3");
    rp.compare_rasters(&stock, &custom);

    // --- Test 7: malformed custom matrices are rejected ---
    let src = solid_gray(4, 4, 50);
    let ragged = EdgeOperator::Custom(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]);
    rp.check("ragged matrix rejected", detect_edges(&src, &ragged).is_err());
    let oversized = EdgeOperator::Custom(vec![vec![1.0; 4]; 4]);
    rp.check("4x4 matrix rejected", detect_edges(&src, &oversized).is_err());
    let single = EdgeOperator::Custom(vec![vec![1.0]]);
    rp.check("1x1 matrix rejected", detect_edges(&src, &single).is_err());
    let zeros = EdgeOperator::Custom(vec![vec![0.0; 2]; 2]);
    rp.check("all-zero matrix rejected", detect_edges(&src, &zeros).is_err());

    // --- Test 8: rgb input is reduced to luma first ---
    // a channel-only edge with identical luma on both sides is invisible
    let mut samples = Vec::new();
    for _y in 0..4 {
        for x in 0..4u32 {
            if x < 2 {
                samples.extend_from_slice(&[100, 100, 100]);
            } else {
                // luma(201, 44, 98) = round(60.099 + 25.828 + 11.172) = 97
                samples.extend_from_slice(&[201, 44, 98]);
            }
        }
    }
    let color_edge = Raster::from_samples(4, 4, ChannelMode::Rgb, samples).expect("rgb image");
    let out = detect_edges(&color_edge, &EdgeOperator::Sobel).expect("sobel");
    let max = out.samples().iter().copied().max().unwrap_or(0);
    rp.check("near-isoluminant edge stays faint", max < 30);

    assert!(rp.cleanup(), "edge regression test failed");
}
