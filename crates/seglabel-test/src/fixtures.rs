//! Deterministic test rasters
//!
//! Regression tests build their inputs here instead of loading images, so
//! every run sees the same pixels.

use seglabel_core::{Label, Raster, Scalar};

/// Simple linear congruential generator for reproducible randomness
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `[0, 1]`
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64)
    }

    /// Uniform value in `0..bound`; `bound` must be nonzero
    pub fn next_below(&mut self, bound: u64) -> u64 {
        // high bits of an LCG are the better-distributed ones
        (self.next_u64() >> 11) % bound
    }
}

/// Label raster with labels drawn uniformly from `0..=max_label`.
///
/// # Panics
///
/// Panics if `max_label` is not representable in `L`.
pub fn random_label_raster<L: Label>(width: u32, height: u32, max_label: usize, seed: u32) -> Raster<L> {
    let mut rng = SimpleRng::new(seed);
    Raster::from_fn(width, height, |_, _| {
        let id = rng.next_below(max_label as u64 + 1) as usize;
        L::from_index(id).expect("label out of range for label type")
    })
}

/// Label raster tiled with `block x block` squares.
///
/// Block `(bx, by)` gets label `(by * blocks_per_row + bx) * stride`, so a
/// stride above one produces a sparse label set.
///
/// # Panics
///
/// Panics if `block` is zero or a label is not representable in `L`.
pub fn block_label_raster<L: Label>(width: u32, height: u32, block: u32, stride: usize) -> Raster<L> {
    assert!(block > 0, "block size must be positive");
    let blocks_per_row = width.div_ceil(block) as usize;
    Raster::from_fn(width, height, |x, y| {
        let id = ((y / block) as usize * blocks_per_row + (x / block) as usize) * stride;
        L::from_index(id).expect("label out of range for label type")
    })
}

/// Color raster with a horizontal red ramp, vertical green ramp and
/// constant blue, values in `0..=255`.
pub fn gradient_color_raster<S: Scalar>(width: u32, height: u32) -> Raster<[S; 3]> {
    let sx = 255.0 / width.saturating_sub(1).max(1) as f64;
    let sy = 255.0 / height.saturating_sub(1).max(1) as f64;
    Raster::from_fn(width, height, |x, y| {
        [
            S::from_f64(x as f64 * sx),
            S::from_f64(y as f64 * sy),
            S::from_f64(128.0),
        ]
    })
}
