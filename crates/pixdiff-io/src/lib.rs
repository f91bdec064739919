//! pixdiff-io - Image loading and diff output
//!
//! Decodes PNG and JPEG files into [`PixelBuffer`]s and writes rendered
//! diffs back out as PNG. The format is detected from the file header.
//!
//! # Features
//!
//! - `png-format` (default): PNG read and write
//! - `jpeg` (default): JPEG read

mod error;
mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use log::{debug, warn};
use pixdiff_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image file into an RGBA buffer.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened,
/// [`IoError::UnsupportedFormat`] if the header is not recognized or its
/// format is disabled, and [`IoError::DecodeError`] if decoding fails.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    let pix = read_with_format(reader, format)?;
    debug!(
        "read {} {}x{} from {}",
        format,
        pix.width(),
        pix.height(),
        path.display()
    );
    Ok(pix)
}

/// Decode an in-memory image into an RGBA buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    let format = detect_format_from_bytes(data)?;
    read_with_format(Cursor::new(data), format)
}

#[allow(unused_variables)]
fn read_with_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<PixelBuffer> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => self::png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{} support is not enabled",
            other
        ))),
    }
}

/// Write a buffer as PNG to any writer.
#[cfg(feature = "png-format")]
pub fn write_png<W: Write>(pix: &PixelBuffer, writer: W) -> IoResult<()> {
    self::png::write_png(pix, writer)
}

/// Write a buffer to a PNG file, replacing any existing file.
pub fn write_image<P: AsRef<Path>>(pix: &PixelBuffer, path: P) -> IoResult<()> {
    #[cfg(feature = "png-format")]
    {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self::png::write_png(pix, &mut writer)?;
        writer.flush()?;
        debug!("wrote {}x{} png to {}", pix.width(), pix.height(), path.display());
        Ok(())
    }
    #[cfg(not(feature = "png-format"))]
    {
        let _ = (pix, path);
        Err(IoError::UnsupportedFormat(
            "png support is not enabled".to_string(),
        ))
    }
}

/// Load the two images of a comparison.
///
/// When the sizes differ and `fit_b_to_a` is set, the second image is
/// stretched to the first one's size by nearest-neighbor sampling.
///
/// # Errors
///
/// Returns any read error, or [`IoError::Core`] wrapping
/// [`pixdiff_core::Error::DimensionMismatch`] when the sizes differ and
/// `fit_b_to_a` is not set.
pub fn load_pair<P: AsRef<Path>, Q: AsRef<Path>>(
    path_a: P,
    path_b: Q,
    fit_b_to_a: bool,
) -> IoResult<(PixelBuffer, PixelBuffer)> {
    let a = read_image(path_a)?;
    let b = read_image(path_b)?;
    if a.sizes_equal(&b) {
        return Ok((a, b));
    }
    if !fit_b_to_a {
        a.check_same_size(&b)?;
    }
    warn!(
        "stretching second image from {}x{} to {}x{}",
        b.width(),
        b.height(),
        a.width(),
        a.height()
    );
    let b = b.scale_to_size(a.width(), a.height())?;
    Ok((a, b))
}
