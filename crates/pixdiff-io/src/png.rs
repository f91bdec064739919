//! PNG image format support
//!
//! Every PNG color type is decoded to 8-bit RGBA. Palette and low bit
//! depth images are expanded by the decoder and 16-bit samples are
//! stripped to their high byte. Output is always written as 8-bit RGBA.

use crate::{IoError, IoResult};
use pixdiff_core::PixelBuffer;
use pixdiff_core::color::{CHANNELS, OPAQUE};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth {:?}",
            info.bit_depth
        )));
    }

    let samples = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let (width, height) = (info.width, info.height);
    let mut pix = PixelBuffer::new(width, height)?;
    let out_row_bytes = pix.row_bytes();
    if out_row_bytes == 0 {
        return Ok(pix);
    }

    let src = &buf[..info.buffer_size()];
    for (dst, row) in pix
        .data_mut()
        .chunks_exact_mut(out_row_bytes)
        .zip(src.chunks(info.line_size))
    {
        for (d, s) in dst.chunks_exact_mut(CHANNELS).zip(row.chunks_exact(samples)) {
            let px = match *s {
                [g] => [g, g, g, OPAQUE],
                [g, a] => [g, g, g, a],
                [r, g, b] => [r, g, b, OPAQUE],
                [r, g, b, a] => [r, g, b, a],
                _ => unreachable!(),
            };
            d.copy_from_slice(&px);
        }
    }

    Ok(pix)
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(pix: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(pix.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;
    Ok(())
}
