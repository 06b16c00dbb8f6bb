// Copyright (c) the jpix Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fs;
use std::path::Path;

use crate::codec;
use crate::enc::ppm;
use crate::error::{Error, Result};
use crate::image::PixelBuffer;
use crate::resample;

/// A decoded JPEG image.
///
/// Owns exactly one [`PixelBuffer`] at a time. Transforms build a complete
/// replacement buffer before swapping it in, so a failed operation leaves
/// the previous pixels untouched. Cloning deep-copies the buffer; moving
/// transfers ownership and invalidates the source, both directly from the
/// owning-container semantics.
#[derive(Clone, Debug)]
pub struct Jpeg {
    buffer: PixelBuffer,
}

impl Jpeg {
    /// Decodes a JPEG stream.
    pub fn from_bytes(bytes: &[u8]) -> Result<Jpeg> {
        Ok(Jpeg {
            buffer: codec::decode(bytes)?,
        })
    }

    /// Reads and decodes a JPEG file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Jpeg> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::ReadSource(path.to_owned(), e))?;
        Jpeg::from_bytes(&bytes)
    }

    /// Wraps an existing buffer, e.g. synthetic test data.
    pub fn from_buffer(buffer: PixelBuffer) -> Jpeg {
        Jpeg { buffer }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    /// Samples per pixel: 1 for monochrome, 3 for RGB.
    pub fn channels(&self) -> usize {
        self.buffer.channels()
    }

    /// See [`PixelBuffer::pixel`].
    pub fn pixel(&self, x: usize, y: usize) -> Result<&[u8]> {
        self.buffer.pixel(x, y)
    }

    /// See [`PixelBuffer::luminance`].
    pub fn luminance(&self, x: usize, y: usize) -> Result<u8> {
        self.buffer.luminance(x, y)
    }

    /// See [`PixelBuffer::box_average`].
    pub fn box_average(&self, x: usize, y: usize, box_size: usize) -> Result<Vec<u8>> {
        self.buffer.box_average(x, y, box_size)
    }

    /// Shrinks proportionally to `new_width`. Does nothing if `new_width`
    /// is not smaller than the current width.
    pub fn shrink(&mut self, new_width: usize) -> Result<()> {
        if new_width >= self.buffer.width() {
            return Ok(());
        }
        self.buffer = resample::downscale_to_width(&self.buffer, new_width)?;
        Ok(())
    }

    /// Encodes as JPEG. Quality is clamped into 0-100.
    pub fn to_jpeg(&self, quality: i32) -> Result<Vec<u8>> {
        codec::encode(&self.buffer, quality)
    }

    /// Encodes as JPEG and writes the result to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P, quality: i32) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_jpeg(quality)?;
        fs::write(path, bytes).map_err(|e| Error::WriteSink(path.to_owned(), e))
    }

    /// Produces the uncompressed fixed-format dump, see [`ppm::to_ppm`].
    pub fn to_ppm(&self) -> Vec<u8> {
        ppm::to_ppm(&self.buffer)
    }

    /// Writes the uncompressed dump to `path`.
    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_ppm()).map_err(|e| Error::WriteSink(path.to_owned(), e))
    }
}

#[cfg(test)]
mod test {
    use super::Jpeg;
    use crate::error::Result;
    use crate::image::PixelBuffer;

    fn gradient(size: (usize, usize), channels: usize) -> Jpeg {
        let total = size.0 * size.1 * channels;
        let data = (0..total).map(|v| (v % 256) as u8).collect();
        Jpeg::from_buffer(PixelBuffer::from_raw(size, channels, data).unwrap())
    }

    #[test]
    fn shrink_to_wider_width_changes_nothing() -> Result<()> {
        let mut img = gradient((4, 4), 3);
        let before = img.buffer().data().to_vec();
        img.shrink(4)?;
        img.shrink(1000)?;
        assert_eq!(img.buffer().size(), (4, 4));
        assert_eq!(img.channels(), 3);
        assert_eq!(img.buffer().data(), before);
        Ok(())
    }

    #[test]
    fn shrink_replaces_the_buffer() -> Result<()> {
        let mut img = gradient((8, 8), 1);
        img.shrink(4)?;
        assert_eq!(img.width(), 4);
        assert_eq!(img.channels(), 1);
        assert!(img.height() < 8);
        Ok(())
    }

    #[test]
    fn failed_shrink_leaves_the_image_untouched() {
        // Shrinking 2 rows to width 1 emits no destination rows.
        let mut img = gradient((2, 2), 3);
        let before = img.buffer().data().to_vec();
        assert!(img.shrink(1).is_err());
        assert_eq!(img.buffer().size(), (2, 2));
        assert_eq!(img.buffer().data(), before);
    }

    #[test]
    fn clones_do_not_share_pixels() -> Result<()> {
        let original = gradient((6, 6), 1);
        let mut copy = original.clone();
        copy.shrink(3)?;
        assert_eq!(original.width(), 6);
        assert_eq!(copy.width(), 3);
        Ok(())
    }
}
