//! Nearest-neighbor stretch
//!
//! Used to fit one image onto another's pixel grid before comparing. This
//! is a plain sampling stretch with no filtering; comparisons assume the
//! caller accepts that quality.

use super::PixelBuffer;
use crate::color::CHANNELS;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Stretch the image to `width x height` by nearest-neighbor sampling.
    ///
    /// Each destination pixel takes the source pixel under its center.
    /// Returns a copy when the size is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] when a zero-area source would
    /// have to fill a non-empty target.
    pub fn scale_to_size(&self, width: u32, height: u32) -> Result<PixelBuffer> {
        if self.dimensions() == (width, height) {
            return Ok(self.clone());
        }
        let mut out = PixelBuffer::new(width, height)?;
        if out.is_empty() {
            return Ok(out);
        }
        if self.is_empty() {
            return Err(Error::InvalidParameter(format!(
                "cannot stretch a {}x{} image to {}x{}",
                self.width, self.height, width, height
            )));
        }

        let xmap: Vec<usize> = (0..width)
            .map(|x| sample_index(x, width, self.width) * CHANNELS)
            .collect();
        let out_row_bytes = out.row_bytes();

        for (y, dst) in out.data.chunks_exact_mut(out_row_bytes).enumerate() {
            let sy = sample_index(y as u32, height, self.height);
            let src = self.row(sy as u32);
            for (d, &sx) in dst.chunks_exact_mut(CHANNELS).zip(&xmap) {
                d.copy_from_slice(&src[sx..sx + CHANNELS]);
            }
        }
        Ok(out)
    }
}

/// Source index whose cell contains the center of destination cell `i`.
#[inline]
fn sample_index(i: u32, dst_len: u32, src_len: u32) -> usize {
    let s = ((2 * i as u64 + 1) * src_len as u64) / (2 * dst_len as u64);
    s.min(src_len as u64 - 1) as usize
}
