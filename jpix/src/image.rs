// Copyright (c) the jpix Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt::Debug;

use tracing::debug;

use crate::error::{Error, Result};

/// Row-major grid of interleaved 8-bit samples.
///
/// A buffer holds `height` scanlines of `width * channels` bytes each,
/// stored contiguously. `channels` is 1 for monochrome and 3 for RGB;
/// no other layout is supported. Cloning deep-copies every scanline.
#[derive(Clone)]
pub struct PixelBuffer {
    size: (usize, usize),
    channels: usize,
    data: Vec<u8>,
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PixelBuffer {}x{}x{}",
            self.size.0, self.size.1, self.channels
        )
    }
}

fn checked_len(size: (usize, usize), channels: usize) -> Result<usize> {
    let (xsize, ysize) = size;
    if channels != 1 && channels != 3 {
        return Err(Error::InvalidChannelCount(channels));
    }
    if xsize == 0 || ysize == 0 {
        return Err(Error::InvalidImageSize(xsize, ysize));
    }
    // These limits let us not worry about overflows.
    if xsize as u64 >= i64::MAX as u64 / 4 || ysize as u64 >= i64::MAX as u64 / 4 {
        return Err(Error::ImageSizeTooLarge(xsize, ysize));
    }
    xsize
        .checked_mul(ysize)
        .and_then(|px| px.checked_mul(channels))
        .ok_or(Error::ImageSizeTooLarge(xsize, ysize))
}

impl PixelBuffer {
    /// Allocates a zero-filled buffer.
    pub fn new(size: (usize, usize), channels: usize) -> Result<PixelBuffer> {
        let total_size = checked_len(size, channels)?;
        debug!("allocating {}x{}x{} buffer", size.0, size.1, channels);
        let mut data = Vec::new();
        data.try_reserve_exact(total_size)?;
        data.resize(total_size, 0);
        Ok(PixelBuffer {
            size,
            channels,
            data,
        })
    }

    /// Wraps already-interleaved scanline data. The data length must be
    /// exactly `width * height * channels`.
    pub fn from_raw(size: (usize, usize), channels: usize, data: Vec<u8>) -> Result<PixelBuffer> {
        let total_size = checked_len(size, channels)?;
        if data.len() != total_size {
            return Err(Error::BufferSizeMismatch(
                data.len(),
                size.0,
                size.1,
                channels,
            ));
        }
        Ok(PixelBuffer {
            size,
            channels,
            data,
        })
    }

    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.0
    }

    pub fn height(&self) -> usize {
        self.size.1
    }

    /// Samples per pixel: 1 for monochrome, 3 for RGB.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Length in bytes of one scanline.
    pub fn stride(&self) -> usize {
        self.size.0 * self.channels
    }

    pub fn row(&self, row: usize) -> &[u8] {
        debug_assert!(row < self.size.1);
        let start = row * self.stride();
        &self.data[start..start + self.stride()]
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
