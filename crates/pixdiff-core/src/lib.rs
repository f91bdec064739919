//! pixdiff-core - Pixel comparison for RGBA rasters
//!
//! This crate compares two equally sized RGBA images position by position:
//!
//! - [`PixelBuffer`] - Owned row-major RGBA8 raster
//! - [`Rect`] / [`Span`] - Selection rectangles and their clamped scan range
//! - [`compare`] - Whole-image comparison producing a rendered diff and [`Metrics`]
//! - [`compare_region`] - The same statistics restricted to a rectangle
//! - [`RenderMode`] - How a diff is turned into output pixels
//!
//! Both comparison entry points run the same per-pixel kernel, so a region
//! covering the whole image reports exactly the whole-image metrics.
//!
//! # Example
//!
//! ```
//! use pixdiff_core::{PixelBuffer, RenderMode, compare};
//!
//! let a = PixelBuffer::filled(4, 4, [10, 10, 10, 255]).unwrap();
//! let b = PixelBuffer::filled(4, 4, [200, 10, 10, 255]).unwrap();
//! let result = compare(&a, &b, RenderMode::Highlight, 16).unwrap();
//! assert_eq!(result.metrics.diff_pixel_count, 16);
//! assert_eq!(result.output.get_rgba(0, 0), Some([239, 68, 68, 255]));
//! ```

pub mod buffer;
pub mod compare;
pub mod error;
pub mod rect;

pub use buffer::PixelBuffer;
pub use compare::{
    ALERT_COLOR, Comparison, DEFAULT_TOLERANCE, HEATMAP_GREEN_CAP, Metrics, RenderMode, compare,
    compare_region, peak_snr,
};
pub use error::{Error, Result};
pub use rect::{Rect, Span};

/// Channel layout of an RGBA8 pixel.
///
/// # Pixel format
///
/// Each pixel occupies four consecutive bytes `[r, g, b, a]`; rows are
/// stored top to bottom with no padding.
pub mod color {
    /// Red channel offset
    pub const RED: usize = 0;
    /// Green channel offset
    pub const GREEN: usize = 1;
    /// Blue channel offset
    pub const BLUE: usize = 2;
    /// Alpha channel offset
    pub const ALPHA: usize = 3;

    /// Bytes per pixel
    pub const CHANNELS: usize = 4;

    /// Largest channel value, the peak signal for PSNR
    pub const MAX_VALUE: u8 = 255;

    /// Fully opaque alpha
    pub const OPAQUE: u8 = 255;

    /// Extract the RGB values of a pixel slice.
    ///
    /// # Panics
    ///
    /// Panics if `pixel` holds fewer than three bytes.
    #[inline]
    pub fn rgb(pixel: &[u8]) -> (u8, u8, u8) {
        (pixel[RED], pixel[GREEN], pixel[BLUE])
    }

    /// Compose an opaque RGBA pixel.
    #[inline]
    pub fn opaque(r: u8, g: u8, b: u8) -> [u8; 4] {
        [r, g, b, OPAQUE]
    }

    /// Scale a channel by `num / den`, rounding half away from zero.
    #[inline]
    pub fn scale_channel(value: u8, num: u16, den: u16) -> u8 {
        ((value as u32 * num as u32 * 2 + den as u32) / (den as u32 * 2)) as u8
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_rgb_ignores_alpha() {
            assert_eq!(rgb(&[1, 2, 3, 4]), (1, 2, 3));
        }

        #[test]
        fn test_opaque() {
            assert_eq!(opaque(9, 8, 7), [9, 8, 7, 255]);
        }

        #[test]
        fn test_scale_channel_rounds_to_nearest() {
            // 60% brightness
            assert_eq!(scale_channel(255, 3, 5), 153);
            assert_eq!(scale_channel(10, 3, 5), 6);
            // 1 * 0.6 = 0.6 -> 1, 3 * 0.6 = 1.8 -> 2, 4 * 0.6 = 2.4 -> 2
            assert_eq!(scale_channel(1, 3, 5), 1);
            assert_eq!(scale_channel(3, 3, 5), 2);
            assert_eq!(scale_channel(4, 3, 5), 2);
            assert_eq!(scale_channel(0, 3, 5), 0);
        }

        #[test]
        fn test_scale_channel_half_rounds_up() {
            // 5 * 0.5 = 2.5 -> 3
            assert_eq!(scale_channel(5, 1, 2), 3);
        }
    }
}
