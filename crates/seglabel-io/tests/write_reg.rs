//! Image writer regression test
//!
//! Writes label, color and cropped rasters through the file-level writers
//! and reads them back.

use seglabel_core::{Error, Raster, Region};
use seglabel_io::{
    DecodedImage, IoError, read_image, write_image, write_region, write_rgb_image,
    write_scaled_scalar_image,
};
use seglabel_test::{RegParams, block_label_raster, gradient_color_raster};
use std::fs;
use std::path::PathBuf;

fn out_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("seglabel_write_reg");
    fs::create_dir_all(&dir).expect("create output dir");
    dir.join(name)
}

fn as_gray(image: DecodedImage) -> Option<Raster<u8>> {
    match image {
        DecodedImage::Gray(r) => Some(r),
        DecodedImage::Rgb(_) => None,
    }
}

fn as_rgb(image: DecodedImage) -> Option<Raster<[u8; 3]>> {
    match image {
        DecodedImage::Rgb(r) => Some(r),
        DecodedImage::Gray(_) => None,
    }
}

#[test]
fn write_reg() {
    let mut rp = RegParams::new("write");

    let labels: Raster<u32> = block_label_raster(40, 30, 10, 3);
    let colors: Raster<[u8; 3]> = gradient_color_raster(40, 30);

    // --- Test 1: scaled label raster as PNG ---
    eprintln!("=== Scaled labels ===");
    let path = out_path("labels.png");
    write_scaled_scalar_image(&labels, &path).expect("write labels");
    let gray = as_gray(read_image(&path).expect("read labels")).expect("gray image");
    let expected = labels.rescale_to_display_range().expect("rescale");
    rp.compare_rasters(&expected, &gray);

    // --- Test 2: color raster as PNG and PPM ---
    eprintln!("=== Color ===");
    for name in ["colors.png", "colors.ppm"] {
        let path = out_path(name);
        write_image(&colors, &path).expect("write colors");
        let rgb = as_rgb(read_image(&path).expect("read colors")).expect("rgb image");
        rp.compare_rasters(&colors, &rgb);
    }

    // --- Test 3: float color raster is cast to 8 bits ---
    let float_colors: Raster<[f64; 3]> = gradient_color_raster(40, 30);
    let path = out_path("float_colors.png");
    write_rgb_image(&float_colors, &path).expect("write float colors");
    let rgb = as_rgb(read_image(&path).expect("read float colors")).expect("rgb image");
    rp.compare_rasters(&colors, &rgb);

    // --- Test 4: region writer crops first ---
    eprintln!("=== Region ===");
    let region = Region::new_unchecked(5, 5, 20, 10);
    let path = out_path("region.pgm");
    write_region(&expected, region, &path).expect("write region");
    let crop = as_gray(read_image(&path).expect("read region")).expect("gray image");
    let expected_crop = expected.extract_region(region).expect("crop");
    rp.compare_rasters(&expected_crop, &crop);

    let outside = Region::new_unchecked(30, 25, 20, 10);
    let rejected = matches!(
        write_region(&expected, outside, out_path("outside.png")),
        Err(IoError::Core(Error::OutOfBounds { .. }))
    );
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    // --- Test 5: unsupported inputs ---
    let multi = matches!(
        write_scaled_scalar_image(&colors, out_path("multi.png")),
        Err(IoError::Core(Error::UnsupportedPixelType { channels: 3 }))
    );
    rp.compare_values(1.0, if multi { 1.0 } else { 0.0 }, 0.0);
    let unknown = matches!(
        write_image(&colors, out_path("colors.xyz")),
        Err(IoError::UnsupportedFormat(_))
    );
    rp.compare_values(1.0, if unknown { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup());
}
