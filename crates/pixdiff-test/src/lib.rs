//! pixdiff-test - Regression test framework for pixdiff
//!
//! Tests record numbered checks on a [`RegParams`] and assert on
//! [`RegParams::cleanup`] at the end, so one run reports every failing
//! check instead of stopping at the first.
//!
//! # Usage
//!
//! ```ignore
//! use pixdiff_test::RegParams;
//!
//! let mut rp = RegParams::new("compare");
//! rp.compare_values(50.0, metrics.diff_percentage, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display". In display
//!   mode, images passed to [`RegParams::write_buffer`] are saved under
//!   `tests/regout` for visual inspection.
//!
//! The [`synth`] module builds deterministic test images in code, so the
//! regression tests need no binary fixtures.

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load an image through pixdiff-io, mapping failures to [`TestError`].
pub fn load_image(path: &str) -> TestResult<pixdiff_core::PixelBuffer> {
    pixdiff_io::read_image(path).map_err(|e| TestError::ImageLoad {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixdiff-test is at crates/pixdiff-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
