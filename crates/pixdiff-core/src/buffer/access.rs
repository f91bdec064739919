//! Pixel access functions
//!
//! Get and set individual RGBA pixels by coordinate.

use super::PixelBuffer;
use crate::color::{CHANNELS, OPAQUE};
use crate::error::{Error, Result};

impl PixelBuffer {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Get the RGBA value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        let p = &self.data[i..i + CHANNELS];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Get the RGB value at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_rgba(x, y).map(|[r, g, b, _]| (r, g, b))
    }

    /// Set the RGBA value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
        Ok(())
    }

    /// Set an opaque RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_rgba(x, y, [r, g, b, OPAQUE])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut buf = PixelBuffer::new(3, 2).unwrap();
        buf.set_rgba(2, 1, [10, 20, 30, 40]).unwrap();
        assert_eq!(buf.get_rgba(2, 1), Some([10, 20, 30, 40]));
        assert_eq!(buf.get_rgb(2, 1), Some((10, 20, 30)));
        assert_eq!(&buf.data()[20..24], &[10, 20, 30, 40]);
    }

    #[test]
    fn test_set_rgb_is_opaque() {
        let mut buf = PixelBuffer::new(1, 1).unwrap();
        buf.set_rgb(0, 0, 1, 2, 3).unwrap();
        assert_eq!(buf.get_rgba(0, 0), Some([1, 2, 3, 255]));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        assert_eq!(buf.get_rgba(2, 0), None);
        assert_eq!(buf.get_rgba(0, 2), None);
        assert!(matches!(
            buf.set_rgba(5, 0, [0; 4]),
            Err(Error::OutOfBounds { x: 5, y: 0, .. })
        ));
    }
}
