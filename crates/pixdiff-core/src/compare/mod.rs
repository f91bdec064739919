//! Image comparison
//!
//! - [`compare`] walks two equally sized buffers in lockstep, classifies
//!   every pixel against a tolerance, renders a diff image and reports
//!   whole-image [`Metrics`].
//! - [`compare_region`] runs the same classification over a clamped
//!   rectangle and reports metrics only.
//!
//! A pixel is *different* when any of its red, green or blue channels
//! differs by strictly more than the tolerance. Alpha is never compared.
//!
//! Both functions check that the buffers have identical dimensions and
//! return [`crate::Error::DimensionMismatch`] otherwise; pixels are compared
//! strictly position for position.

pub mod kernel;
mod metrics;
mod mode;
mod region;

pub use metrics::{Metrics, peak_snr};
pub use mode::{ALERT_COLOR, HEATMAP_GREEN_CAP, RenderMode};
pub use region::compare_region;

use crate::buffer::PixelBuffer;
use crate::color::CHANNELS;
use crate::error::Result;
use kernel::{Tally, scan_row};
use log::debug;

/// Default per-channel tolerance
pub const DEFAULT_TOLERANCE: u8 = 16;

/// Result of a whole-image comparison
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Rendered diff, same size as the inputs, alpha always 255
    pub output: PixelBuffer,
    /// Whole-image metrics
    pub metrics: Metrics,
}

/// Compare two images and render their difference.
///
/// # Arguments
///
/// * `a` - Reference image; `Highlight` mode draws unchanged pixels from it
/// * `b` - Image compared against `a`
/// * `mode` - How the output buffer is drawn
/// * `tolerance` - Largest per-channel difference still counted as equal
///
/// # Errors
///
/// Returns [`crate::Error::DimensionMismatch`] if `a` and `b` differ in size.
///
/// # Examples
///
/// ```
/// use pixdiff_core::{PixelBuffer, RenderMode, compare};
///
/// let a = PixelBuffer::filled(8, 8, [40, 40, 40, 255]).unwrap();
/// let r = compare(&a, &a, RenderMode::Heatmap, 0).unwrap();
/// assert_eq!(r.metrics.diff_pixel_count, 0);
/// assert!(r.metrics.peak_signal_to_noise_ratio.is_infinite());
/// ```
pub fn compare(
    a: &PixelBuffer,
    b: &PixelBuffer,
    mode: RenderMode,
    tolerance: u8,
) -> Result<Comparison> {
    a.check_same_size(b)?;
    let (width, height) = a.dimensions();

    let mut output = PixelBuffer::new(width, height)?;
    let tally = if output.is_empty() {
        Tally::default()
    } else {
        render_rows(a, b, &mut output, mode, tolerance)
    };

    let metrics = Metrics::from_tally(width, height, tally);
    debug!(
        "compare {}x{} mode={} tolerance={}: {} of {} pixels differ, mse={:.3}",
        width,
        height,
        mode,
        tolerance,
        metrics.diff_pixel_count,
        metrics.total_pixel_count,
        metrics.mean_squared_error
    );
    Ok(Comparison { output, metrics })
}

/// Render one output row and tally it.
#[inline]
fn render_row(
    row_a: &[u8],
    row_b: &[u8],
    out: &mut [u8],
    mode: RenderMode,
    tolerance: u8,
) -> Tally {
    scan_row(row_a, row_b, tolerance, |i, diff, differs| {
        let at = i * CHANNELS;
        let px = mode.render(&row_a[at..at + CHANNELS], diff, differs);
        out[at..at + CHANNELS].copy_from_slice(&px);
    })
}

#[cfg(not(feature = "parallel"))]
fn render_rows(
    a: &PixelBuffer,
    b: &PixelBuffer,
    output: &mut PixelBuffer,
    mode: RenderMode,
    tolerance: u8,
) -> Tally {
    let row_bytes = a.row_bytes();
    output
        .data_mut()
        .chunks_exact_mut(row_bytes)
        .zip(a.data().chunks_exact(row_bytes))
        .zip(b.data().chunks_exact(row_bytes))
        .map(|((out, ra), rb)| render_row(ra, rb, out, mode, tolerance))
        .fold(Tally::default(), Tally::merge)
}

#[cfg(feature = "parallel")]
fn render_rows(
    a: &PixelBuffer,
    b: &PixelBuffer,
    output: &mut PixelBuffer,
    mode: RenderMode,
    tolerance: u8,
) -> Tally {
    use rayon::prelude::*;

    let row_bytes = a.row_bytes();
    output
        .data_mut()
        .par_chunks_exact_mut(row_bytes)
        .zip(a.data().par_chunks_exact(row_bytes))
        .zip(b.data().par_chunks_exact(row_bytes))
        .map(|((out, ra), rb)| render_row(ra, rb, out, mode, tolerance))
        .reduce(Tally::default, Tally::merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Pixel 0 equal in both; pixel 1 is (200, 10, 10) in `a`, (10, 10, 10) in `b`.
    fn two_by_one() -> (PixelBuffer, PixelBuffer) {
        let a = PixelBuffer::from_raw(2, 1, vec![10, 10, 10, 255, 200, 10, 10, 255]).unwrap();
        let b = PixelBuffer::from_raw(2, 1, vec![10, 10, 10, 255, 10, 10, 10, 255]).unwrap();
        (a, b)
    }

    #[test]
    fn test_scenario_two_by_one() {
        let (a, b) = two_by_one();
        let r = compare(&a, &b, RenderMode::Highlight, 16).unwrap();
        let m = r.metrics;
        assert_eq!((m.width, m.height), (2, 1));
        assert_eq!(m.diff_pixel_count, 1);
        assert_eq!(m.total_pixel_count, 2);
        assert_eq!(m.diff_percentage, 50.0);
        assert!((m.mean_squared_error - 2005.5556).abs() < 1e-3);
        assert!((m.peak_signal_to_noise_ratio - 15.11).abs() < 0.01);
        // pixel 0 identical, dimmed from `a`; pixel 1 alert
        assert_eq!(r.output.get_rgba(0, 0), Some([6, 6, 6, 255]));
        assert_eq!(r.output.get_rgba(1, 0), Some([239, 68, 68, 255]));
    }

    #[test]
    fn test_highlight_dims_from_first_image() {
        let (a, b) = two_by_one();
        // tolerance high enough that nothing differs
        let r = compare(&a, &b, RenderMode::Highlight, 255).unwrap();
        assert_eq!(r.metrics.diff_pixel_count, 0);
        // a's pixel 1 is (200, 10, 10)
        assert_eq!(r.output.get_rgba(1, 0), Some([120, 6, 6, 255]));
    }

    #[test]
    fn test_tolerance_boundary() {
        let a = PixelBuffer::filled(1, 1, [100, 100, 100, 255]).unwrap();
        let b = PixelBuffer::filled(1, 1, [116, 100, 100, 255]).unwrap();
        let at = |tol| {
            compare(&a, &b, RenderMode::DiffRgb, tol)
                .unwrap()
                .metrics
                .diff_pixel_count
        };
        assert_eq!(at(16), 0);
        assert_eq!(at(15), 1);
    }

    #[test]
    fn test_alpha_not_compared() {
        let a = PixelBuffer::filled(3, 3, [50, 60, 70, 0]).unwrap();
        let b = PixelBuffer::filled(3, 3, [50, 60, 70, 255]).unwrap();
        let r = compare(&a, &b, RenderMode::Highlight, 0).unwrap();
        assert_eq!(r.metrics.diff_pixel_count, 0);
        assert_eq!(r.metrics.mean_squared_error, 0.0);
        assert!(r.output.data().chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn test_zero_area() {
        let a = PixelBuffer::new(0, 4).unwrap();
        let r = compare(&a, &a, RenderMode::Heatmap, 16).unwrap();
        assert!(r.output.is_empty());
        assert_eq!(r.metrics.total_pixel_count, 0);
        assert_eq!(r.metrics.diff_percentage, 0.0);
        assert_eq!(r.metrics.mean_squared_error, 0.0);
        assert!(r.metrics.peak_signal_to_noise_ratio.is_infinite());
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = PixelBuffer::new(4, 3).unwrap();
        let b = PixelBuffer::new(3, 4).unwrap();
        assert_eq!(
            compare(&a, &b, RenderMode::Highlight, 16).unwrap_err(),
            Error::DimensionMismatch {
                expected: (4, 3),
                actual: (3, 4)
            }
        );
    }

    #[test]
    fn test_output_is_fresh_storage() {
        let a = PixelBuffer::filled(2, 2, [1, 2, 3, 255]).unwrap();
        let r = compare(&a, &a, RenderMode::DiffRgb, 0).unwrap();
        assert_ne!(r.output.data().as_ptr(), a.data().as_ptr());
        assert!(r.output.data().chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }
}
