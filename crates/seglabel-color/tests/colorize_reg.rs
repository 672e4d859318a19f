//! Label color statistics regression test
//!
//! Aggregates a gradient color raster over synthetic label rasters and
//! paints the regions with their average colors: conservation of pixel
//! counts and color sums, consistency of the painted pixels, and the
//! handling of sparse label ids.

use seglabel_color::{aggregate_by_label, colorize_by_average_color, colorize_by_label};
use seglabel_core::Raster;
use seglabel_region::relabel_sequential;
use seglabel_test::{RegParams, block_label_raster, gradient_color_raster, random_label_raster};

#[test]
fn colorize_reg() {
    let mut rp = RegParams::new("colorize");

    let (w, h) = (60u32, 45u32);
    let colors: Raster<[u8; 3]> = gradient_color_raster(w, h);

    // --- Test 1: conservation over random labels ---
    eprintln!("=== Conservation ===");
    let labels: Raster<u32> = random_label_raster(w, h, 15, 3);
    let stats = aggregate_by_label(&labels, &colors).expect("aggregate");
    rp.compare_values((w * h) as f64, stats.total_pixels() as f64, 0.0);
    let mut max_err = 0.0f64;
    for (_, s) in stats.iter() {
        if let Some(avg) = s.average_color {
            for c in 0..3 {
                let err = (s.color_sum[c] - s.pixel_count as f64 * avg[c]).abs();
                max_err = max_err.max(err);
            }
        }
    }
    rp.compare_values(0.0, max_err, 1e-6);

    // --- Test 2: painted pixels equal their label's rounded average ---
    eprintln!("=== Colorize consistency ===");
    let painted: Raster<[u8; 3]> = colorize_by_label(&labels, &stats).expect("colorize");
    let mut consistent = true;
    for (label, color) in labels.pixels().zip(painted.pixels()) {
        let avg = stats.average_color(label as usize).expect("defined average");
        let expected = avg.map(|v| v.round() as u8);
        if expected != color {
            consistent = false;
        }
    }
    rp.compare_values(1.0, if consistent { 1.0 } else { 0.0 }, 0.0);
    rp.write_raster(&painted).expect("write painted");

    // --- Test 3: sparse block labels leave gaps ---
    eprintln!("=== Sparse labels ===");
    let sparse: Raster<u32> = block_label_raster(w, h, 15, 2);
    let sparse_stats = aggregate_by_label(&sparse, &colors).expect("aggregate sparse");
    let undefined = sparse_stats.undefined_labels();
    eprintln!("  {} entries, {} undefined", sparse_stats.len(), undefined.len());
    rp.compare_values(23.0, sparse_stats.len() as f64, 0.0);
    rp.compare_values(11.0, undefined.len() as f64, 0.0);
    rp.compare_values(1.0, if undefined.iter().all(|l| l % 2 == 1) { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: relabeling first removes the gaps ---
    let dense = relabel_sequential(&sparse).expect("relabel");
    let dense_stats = aggregate_by_label(&dense, &colors).expect("aggregate dense");
    rp.compare_values(12.0, dense_stats.len() as f64, 0.0);
    rp.compare_values(0.0, dense_stats.undefined_labels().len() as f64, 0.0);

    // Region averages do not depend on the numbering.
    let via_sparse = colorize_by_average_color(&sparse, &colors).expect("colorize sparse");
    let via_dense = colorize_by_average_color(&dense, &colors).expect("colorize dense");
    rp.compare_rasters(&via_sparse, &via_dense);
    rp.write_raster(&via_dense).expect("write blocks");

    assert!(rp.cleanup());
}
