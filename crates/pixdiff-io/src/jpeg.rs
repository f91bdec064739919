//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale, RGB and
//! CMYK images are all converted to opaque 8-bit RGBA. Writing is not
//! supported; diffs are always saved as PNG.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use pixdiff_core::PixelBuffer;
use pixdiff_core::color::{CHANNELS, OPAQUE};
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let (samples, convert): (usize, fn(&[u8]) -> [u8; 4]) = match info.pixel_format {
        PixelFormat::L8 => (1, |s: &[u8]| [s[0], s[0], s[0], OPAQUE]),
        // big-endian 16-bit gray, keep the high byte
        PixelFormat::L16 => (2, |s: &[u8]| [s[0], s[0], s[0], OPAQUE]),
        PixelFormat::RGB24 => (3, |s: &[u8]| [s[0], s[1], s[2], OPAQUE]),
        PixelFormat::CMYK32 => (4, |s: &[u8]| cmyk_to_rgba(s[0], s[1], s[2], s[3])),
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    let mut pix = PixelBuffer::new(info.width as u32, info.height as u32)?;
    let expected = pix.pixel_count() as usize * samples;
    if data.len() < expected {
        return Err(IoError::DecodeError(format!(
            "JPEG data too short: {} bytes, expected {}",
            data.len(),
            expected
        )));
    }

    for (d, s) in pix
        .data_mut()
        .chunks_exact_mut(CHANNELS)
        .zip(data.chunks_exact(samples))
    {
        d.copy_from_slice(&convert(s));
    }

    Ok(pix)
}

/// Naive CMYK to RGB: each channel is `(255 - ink) * (255 - k) / 255`.
fn cmyk_to_rgba(c: u8, m: u8, y: u8, k: u8) -> [u8; 4] {
    let white = 255 - k as u32;
    let ch = |ink: u8| ((255 - ink as u32) * white / 255) as u8;
    [ch(c), ch(m), ch(y), OPAQUE]
}
