//! Raster primitives regression test
//!
//! Deep copies, region crops, pixel counting and min/max scans on synthetic
//! label and color rasters.

use seglabel_core::{Error, Raster, Region};
use seglabel_test::{RegParams, gradient_color_raster, random_label_raster};

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    let labels: Raster<u32> = random_label_raster(50, 40, 9, 21);
    let colors: Raster<[u8; 3]> = gradient_color_raster(50, 40);

    // --- Test 1: deep copy equality and independence ---
    eprintln!("=== Deep copy ===");
    let mut copy = labels.deep_copy();
    rp.compare_rasters(&labels, &copy);
    copy.fill(1000);
    rp.compare_values(0.0, labels.count_pixels_with_value(1000) as f64, 0.0);
    rp.compare_values(2000.0, copy.count_pixels_with_value(1000) as f64, 0.0);

    // --- Test 2: full-extent crop round-trips ---
    eprintln!("=== Region round-trip ===");
    let full = colors.extract_region(colors.extent()).expect("full extent");
    rp.compare_rasters(&colors, &full);

    // --- Test 3: interior crop uses region-local coordinates ---
    eprintln!("=== Interior crop ===");
    let region = Region::new(12, 7, 20, 15).expect("region");
    let crop = colors.deep_copy_in_region(region).expect("crop");
    rp.compare_values(20.0, crop.width() as f64, 0.0);
    rp.compare_values(15.0, crop.height() as f64, 0.0);
    let mut local_ok = true;
    for (x, y, p) in crop.enumerate_pixels() {
        if colors.get_pixel(x + 12, y + 7).ok() != Some(p) {
            local_ok = false;
        }
    }
    rp.compare_values(1.0, if local_ok { 1.0 } else { 0.0 }, 0.0);
    rp.write_raster(&crop).expect("write crop");

    // --- Test 4: regions leaving the raster are rejected ---
    eprintln!("=== Out of bounds ===");
    for region in [
        Region::new_unchecked(40, 30, 11, 1),
        Region::new_unchecked(-1, 0, 5, 5),
        Region::new_unchecked(0, 39, 1, 2),
        Region::new_unchecked(1, 0, i32::MAX, 1),
        Region::new_unchecked(i32::MAX, 0, 1, 1),
    ] {
        let rejected = matches!(
            colors.extract_region(region),
            Err(Error::OutOfBounds { .. })
        );
        rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 5: counts sum to the pixel total; extremes are in range ---
    eprintln!("=== Counting and extremes ===");
    let total: usize = (0..=9).map(|v| labels.count_pixels_with_value(v)).sum();
    rp.compare_values(2000.0, total as f64, 0.0);
    let (min, max) = labels.min_max().expect("min_max");
    rp.compare_values(max as f64, labels.max_value().expect("max") as f64, 0.0);
    rp.compare_values(1.0, if min <= max && max <= 9 { 1.0 } else { 0.0 }, 0.0);

    // --- Test 6: display rescaling spans the full byte range ---
    let display = labels.rescale_to_display_range().expect("rescale");
    let (dmin, dmax) = display.min_max().expect("display min_max");
    rp.compare_values(0.0, dmin as f64, 0.0);
    rp.compare_values(255.0, dmax as f64, 0.0);
    rp.write_raster(&display).expect("write display");

    assert!(rp.cleanup());
}
