//! Relabeling regression test
//!
//! Sequential relabeling of synthetic label rasters: density of the output
//! ids, order preservation, idempotence and the degenerate single-label
//! case.

use seglabel_core::Raster;
use seglabel_region::{count_labels, relabel_sequential, relabel_sequential_with_map};
use seglabel_test::{RegParams, block_label_raster, random_label_raster};

#[test]
fn relabel_reg() {
    let mut rp = RegParams::new("relabel");

    // --- Test 1: sparse block labels become dense ---
    eprintln!("=== Sparse block labels ===");
    let sparse: Raster<u32> = block_label_raster(40, 30, 10, 7);
    let dense = relabel_sequential(&sparse).expect("relabel sparse");
    let n = count_labels(&sparse);
    eprintln!("  {} distinct labels", n);
    rp.compare_values(12.0, n as f64, 0.0);
    rp.compare_values(n as f64, count_labels(&dense) as f64, 0.0);
    rp.compare_values((n - 1) as f64, dense.max_value().expect("max") as f64, 0.0);
    rp.compare_values(0.0, dense.min_value().expect("min") as f64, 0.0);
    rp.write_raster(&dense.rescale_to_display_range().expect("rescale"))
        .expect("write dense");

    // --- Test 2: order preservation ---
    eprintln!("=== Order preservation ===");
    let random: Raster<u32> = random_label_raster(64, 48, 200, 11);
    let (relabeled, map) = relabel_sequential_with_map(&random).expect("relabel random");
    let mut ordered = true;
    for (a, ra) in random.pixels().zip(relabeled.pixels()).step_by(37) {
        for (b, rb) in random.pixels().zip(relabeled.pixels()).step_by(53) {
            if (a < b) != (ra < rb) {
                ordered = false;
            }
        }
    }
    rp.compare_values(1.0, if ordered { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(map.len() as f64, count_labels(&relabeled) as f64, 0.0);

    // --- Test 3: ids translate back to the original labels ---
    let restored = relabeled.map(|id| map.original(id as usize).unwrap_or(u32::MAX));
    rp.compare_rasters(&random, &restored);

    // --- Test 4: idempotence on dense input ---
    eprintln!("=== Idempotence ===");
    let again = relabel_sequential(&relabeled).expect("relabel dense");
    rp.compare_rasters(&relabeled, &again);

    // --- Test 5: single label ---
    eprintln!("=== Single label ===");
    let single = Raster::new_with_value(9, 4, 42u16);
    let zero = relabel_sequential(&single).expect("relabel single");
    rp.compare_values(36.0, zero.count_pixels_with_value(0) as f64, 0.0);

    assert!(rp.cleanup());
}
