//! Region statistics
//!
//! Metrics over a user-selected rectangle, without rendering.

use super::kernel::scan_span;
use super::metrics::Metrics;
use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::rect::Rect;

/// Compute metrics for the part of two images inside `region`.
///
/// The region is clamped to the image bounds first. The reported width and
/// height are those of the clamped area floored at 1, and they are also the
/// denominators of the percentage and MSE. A region that is degenerate or
/// lies entirely outside the image therefore reports at least a 1x1 area
/// with no differences, even though no pixel was scanned.
///
/// With `region` equal to [`Rect::full`] of the images, the result matches
/// the metrics of [`super::compare`] exactly.
///
/// # Errors
///
/// Returns [`crate::Error::DimensionMismatch`] if `a` and `b` differ in size.
pub fn compare_region(
    a: &PixelBuffer,
    b: &PixelBuffer,
    region: Rect,
    tolerance: u8,
) -> Result<Metrics> {
    a.check_same_size(b)?;
    let span = region.clamp_to(a.width(), a.height());
    let tally = scan_span(a, b, &span, tolerance);
    let (width, height) = span.reported_size();
    Ok(Metrics::from_tally(width, height, tally))
}
