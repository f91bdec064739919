//! Comparison metrics
//!
//! [`Metrics`] is a plain value record built once per comparison. The
//! formulas are shared by whole-image and region comparison:
//!
//! - `diff_percentage = diff_pixel_count / total_pixel_count * 100`
//! - `mean_squared_error = sum(avgDiff^2) / total_pixel_count`
//! - `peak_signal_to_noise_ratio = 20 log10(255) - 10 log10(mse)`
//!
//! A zero pixel total yields 0 for the percentage and MSE, and an MSE of 0
//! yields an infinite PSNR.

use super::kernel::Tally;
use crate::color::MAX_VALUE;
use std::fmt;

/// Summary statistics of a comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Width of the compared area
    pub width: u32,
    /// Height of the compared area
    pub height: u32,
    /// Pixels with at least one channel differing by more than the tolerance
    pub diff_pixel_count: u64,
    /// `width * height`
    pub total_pixel_count: u64,
    /// Differing pixels as a percentage of the total, 0 to 100
    pub diff_percentage: f64,
    /// Mean of the squared per-pixel average channel difference
    pub mean_squared_error: f64,
    /// Peak signal-to-noise ratio in dB; infinite when the MSE is 0
    pub peak_signal_to_noise_ratio: f64,
}

impl Metrics {
    /// Build metrics for a `width x height` area from its tally.
    pub(crate) fn from_tally(width: u32, height: u32, tally: Tally) -> Self {
        let total = width as u64 * height as u64;
        let (pct, mse) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                tally.diff_count as f64 / total as f64 * 100.0,
                tally.squared_error_sum() / total as f64,
            )
        };
        Self {
            width,
            height,
            diff_pixel_count: tally.diff_count,
            total_pixel_count: total,
            diff_percentage: pct,
            mean_squared_error: mse,
            peak_signal_to_noise_ratio: peak_snr(mse),
        }
    }

    /// Check whether no pixel exceeded the tolerance.
    pub fn is_match(&self) -> bool {
        self.diff_pixel_count == 0
    }

    /// PSNR with two decimals, or `∞`.
    pub fn psnr_label(&self) -> String {
        if self.peak_signal_to_noise_ratio.is_finite() {
            format!("{:.2}", self.peak_signal_to_noise_ratio)
        } else {
            "∞".to_string()
        }
    }
}

/// Peak signal-to-noise ratio in dB for 8-bit channels.
///
/// Returns `f64::INFINITY` when `mse` is 0.
pub fn peak_snr(mse: f64) -> f64 {
    if mse == 0.0 {
        f64::INFINITY
    } else {
        20.0 * (MAX_VALUE as f64).log10() - 10.0 * mse.log10()
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dimensions:  {} × {}", self.width, self.height)?;
        writeln!(f, "Different:   {:.2}%", self.diff_percentage)?;
        writeln!(f, "MSE:         {:.2}", self.mean_squared_error)?;
        writeln!(f, "PSNR:        {}", self.psnr_label())?;
        write!(f, "Diff pixels: {} px", self.diff_pixel_count)
    }
}
