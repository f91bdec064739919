//! PixelBuffer - Owned RGBA8 raster
//!
//! `PixelBuffer` is the image type every comparison reads from and writes
//! to: one `Vec<u8>` with four bytes per pixel, row-major and without row
//! padding.
//!
//! # Invariant
//!
//! `data.len() == width * height * 4` for every buffer that exists.
//! Zero-area buffers (width or height 0) are valid and hold no bytes.
//!
//! # Ownership model
//!
//! Sources are borrowed read-only by the comparison functions. The output
//! of [`crate::compare`] is a freshly allocated buffer and never aliases
//! either input.

mod access;
mod scale;

use crate::color::CHANNELS;
use crate::error::{Error, Result};

/// Owned, row-major RGBA8 raster
///
/// # Examples
///
/// ```
/// use pixdiff_core::PixelBuffer;
///
/// let buf = PixelBuffer::new(640, 480).unwrap();
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.data().len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// RGBA bytes, row-major
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer with every byte set to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the byte length overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Create a buffer with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Byte length of a `width x height` RGBA raster.
    fn byte_len(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels, `width * height`.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check whether the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the raw RGBA bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Bytes per row.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Get the bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.row_bytes();
        &self.data[start..start + self.row_bytes()]
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Require `other` to have the same size as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] naming `self` as the expected size.
    pub fn check_same_size(&self, other: &PixelBuffer) -> Result<()> {
        if self.sizes_equal(other) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            })
        }
    }
}
