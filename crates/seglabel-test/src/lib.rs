//! seglabel-test - Regression test framework for seglabel
//!
//! Every regression test creates a [`RegParams`], runs a numbered series of
//! checks through it and finally asserts on [`RegParams::cleanup`]. Two
//! modes are supported:
//!
//! - **Compare**: run every check in memory (default)
//! - **Display**: additionally write intermediate rasters to `tests/regout`
//!   for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use seglabel_test::RegParams;
//!
//! let mut rp = RegParams::new("relabel");
//! rp.compare_values(4.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{SimpleRng, block_label_raster, gradient_color_raster, random_label_raster};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // seglabel-test is at crates/seglabel-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
