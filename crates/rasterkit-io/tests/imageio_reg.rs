//! Image I/O regression test
//!
//! Lossless PNG round trips for both channel modes, in-memory decoding,
//! and the failure paths for unreadable input.

use rasterkit_core::ChannelMode;
use rasterkit_io::{read_image, read_image_from_memory, write_image};
use rasterkit_test::{RegParams, gray_ramp, regout_dir, solid_rgb};
use std::fs;

#[test]
fn imageio_reg() {
    let mut rp = RegParams::new("imageio");

    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("create output directory");

    // --- Test 1: grayscale PNG round trip is lossless ---
    let gray = gray_ramp(33, 9);
    let path = outdir.join("imageio_gray.png");
    write_image(&gray, &path).expect("write gray png");
    let back = read_image(&path).expect("read gray png");
    rp.check("gray decodes to one channel", back.mode() == ChannelMode::Gray);
    rp.compare_rasters(&gray, &back);

    // --- Test 2: RGB PNG round trip is lossless ---
    let rgb = solid_rgb(12, 7, (250, 3, 127));
    let path = outdir.join("imageio_rgb.png");
    write_image(&rgb, &path).expect("write rgb png");
    let back = read_image(&path).expect("read rgb png");
    rp.check("rgb decodes to three channels", back.mode() == ChannelMode::Rgb);
    rp.compare_rasters(&rgb, &back);

    // --- Test 3: BMP round trip through a different codec ---
    let path = outdir.join("imageio_rgb.bmp");
    write_image(&rgb, &path).expect("write bmp");
    let back = read_image(&path).expect("read bmp");
    rp.compare_rasters(&rgb, &back);

    // --- Test 4: in-memory decode matches the file decode ---
    let png_path = outdir.join("imageio_rgb.png");
    let bytes = fs::read(&png_path).expect("read png bytes");
    let from_memory = read_image_from_memory(&bytes).expect("decode from memory");
    rp.compare_rasters(&rgb, &from_memory);

    // --- Test 5: unreadable input reports an error ---
    rp.check(
        "missing file errors",
        read_image(outdir.join("imageio_missing.png")).is_err(),
    );
    rp.check(
        "garbage bytes error",
        read_image_from_memory(&[0u8, 1, 2, 3, 4]).is_err(),
    );

    assert!(rp.cleanup(), "imageio regression test failed");
}
