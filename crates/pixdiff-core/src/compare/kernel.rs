//! Per-pixel difference kernel
//!
//! Shared by whole-image and region comparison. A scan visits the pixels
//! of a [`Span`] row by row, classifies each against the tolerance and
//! accumulates a [`Tally`].
//!
//! The squared error is accumulated as the integer `(dr + dg + db)^2`; the
//! division by 9 that turns it into `avgDiff^2` is applied once when the
//! metrics are built. The sum is exact, and parallel and serial scans
//! produce identical results.

use crate::buffer::PixelBuffer;
use crate::color::{self, CHANNELS};
use crate::rect::Span;

/// Absolute per-channel difference of one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelDiff {
    pub dr: u8,
    pub dg: u8,
    pub db: u8,
}

impl PixelDiff {
    /// Difference between two RGBA pixel slices. Alpha is ignored.
    #[inline]
    pub fn between(a: &[u8], b: &[u8]) -> Self {
        let (ra, ga, ba) = color::rgb(a);
        let (rb, gb, bb) = color::rgb(b);
        Self {
            dr: ra.abs_diff(rb),
            dg: ga.abs_diff(gb),
            db: ba.abs_diff(bb),
        }
    }

    /// `dr + dg + db`, in `0..=765`
    #[inline]
    pub fn channel_sum(self) -> u32 {
        self.dr as u32 + self.dg as u32 + self.db as u32
    }

    /// Mean channel difference
    #[inline]
    pub fn average(self) -> f64 {
        self.channel_sum() as f64 / 3.0
    }

    /// True if any channel differs by strictly more than `tolerance`
    #[inline]
    pub fn exceeds(self, tolerance: u8) -> bool {
        self.dr > tolerance || self.dg > tolerance || self.db > tolerance
    }
}

/// Accumulated counts over a set of pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Pixels classified as different
    pub diff_count: u64,
    /// Sum of `(dr + dg + db)^2`
    pub channel_sum_sq: u64,
}

impl Tally {
    /// Add one pixel's contribution.
    #[inline]
    pub fn record(&mut self, diff: PixelDiff, differs: bool) {
        let s = diff.channel_sum() as u64;
        self.channel_sum_sq += s * s;
        self.diff_count += differs as u64;
    }

    /// Combine two partial tallies.
    #[inline]
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            diff_count: self.diff_count + other.diff_count,
            channel_sum_sq: self.channel_sum_sq + other.channel_sum_sq,
        }
    }

    /// Sum of `avgDiff^2` over the recorded pixels.
    pub fn squared_error_sum(&self) -> f64 {
        self.channel_sum_sq as f64 / 9.0
    }
}

/// Scan one row segment.
///
/// `row_a` and `row_b` hold the same number of RGBA pixels. `visit` is
/// called with the pixel's index within the segment, its difference and
/// its classification.
#[inline]
pub fn scan_row<F>(row_a: &[u8], row_b: &[u8], tolerance: u8, mut visit: F) -> Tally
where
    F: FnMut(usize, PixelDiff, bool),
{
    let mut tally = Tally::default();
    for (i, (pa, pb)) in row_a
        .chunks_exact(CHANNELS)
        .zip(row_b.chunks_exact(CHANNELS))
        .enumerate()
    {
        let diff = PixelDiff::between(pa, pb);
        let differs = diff.exceeds(tolerance);
        tally.record(diff, differs);
        visit(i, diff, differs);
    }
    tally
}

/// Byte range of the span's columns within a row.
#[inline]
fn column_bytes(span: &Span) -> std::ops::Range<usize> {
    span.x1 as usize * CHANNELS..span.x2 as usize * CHANNELS
}

/// Tally every pixel of `span`, producing no output.
///
/// `a` and `b` must have the same dimensions and `span` must lie inside them.
#[cfg(not(feature = "parallel"))]
pub fn scan_span(a: &PixelBuffer, b: &PixelBuffer, span: &Span, tolerance: u8) -> Tally {
    let cols = column_bytes(span);
    (span.y1..span.y2)
        .map(|y| {
            scan_row(
                &a.row(y)[cols.clone()],
                &b.row(y)[cols.clone()],
                tolerance,
                |_, _, _| {},
            )
        })
        .fold(Tally::default(), Tally::merge)
}

/// Tally every pixel of `span`, producing no output.
///
/// Rows are distributed over the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn scan_span(a: &PixelBuffer, b: &PixelBuffer, span: &Span, tolerance: u8) -> Tally {
    use rayon::prelude::*;

    let cols = column_bytes(span);
    (span.y1..span.y2)
        .into_par_iter()
        .map(|y| {
            scan_row(
                &a.row(y)[cols.clone()],
                &b.row(y)[cols.clone()],
                tolerance,
                |_, _, _| {},
            )
        })
        .reduce(Tally::default, Tally::merge)
}
