// Copyright (c) the jpix Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Narrow adapter over the external JPEG codec.
//!
//! Everything touching the JPEG bitstream (headers, Huffman/DCT, entropy
//! coding) lives behind this module; malformed input surfaces as a
//! structured [`Error`] rather than terminating the process.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageFormat};
use tracing::debug;

use crate::error::{Error, Result};
use crate::image::PixelBuffer;

/// Decodes a JPEG stream into a pixel buffer. The codec determines the
/// channel count: grayscale sources yield 1 channel, color sources 3.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer> {
    let decoded =
        image::load_from_memory_with_format(bytes, ImageFormat::Jpeg).map_err(Error::Decode)?;
    let size = (decoded.width() as usize, decoded.height() as usize);
    debug!("decoded {}x{} JPEG, color {:?}", size.0, size.1, decoded.color());
    match decoded {
        DynamicImage::ImageLuma8(mono) => PixelBuffer::from_raw(size, 1, mono.into_raw()),
        DynamicImage::ImageRgb8(rgb) => PixelBuffer::from_raw(size, 3, rgb.into_raw()),
        other => Err(Error::UnsupportedColor(other.color())),
    }
}

/// Encodes a pixel buffer as JPEG. `quality` is clamped into 0-100;
/// out-of-range requests are not rejected.
pub fn encode(buffer: &PixelBuffer, quality: i32) -> Result<Vec<u8>> {
    let quality = clamp_quality(quality);
    let color = match buffer.channels() {
        1 => ExtendedColorType::L8,
        _ => ExtendedColorType::Rgb8,
    };
    debug!(
        "encoding {}x{} buffer as JPEG, quality {}",
        buffer.width(),
        buffer.height(),
        quality
    );
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .encode(
            buffer.data(),
            buffer.width() as u32,
            buffer.height() as u32,
            color,
        )
        .map_err(Error::Encode)?;
    Ok(out)
}

pub(crate) fn clamp_quality(quality: i32) -> u8 {
    quality.clamp(0, 100) as u8
}
