// Copyright (c) the jpix Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not read {0}: {1}")]
    ReadSource(PathBuf, std::io::Error),
    #[error("Not a valid JPEG stream: {0}")]
    Decode(image::ImageError),
    #[error("Unsupported decoded color layout {0:?}, expected 8-bit grayscale or RGB")]
    UnsupportedColor(image::ColorType),
    #[error("JPEG encoding failed: {0}")]
    Encode(image::ImageError),
    #[error("Could not write {0}: {1}")]
    WriteSink(PathBuf, std::io::Error),
    #[error("Invalid channel count {0}, expected 1 or 3")]
    InvalidChannelCount(usize),
    #[error("Invalid image size: {0}x{1}")]
    InvalidImageSize(usize, usize),
    #[error("Image size too large: {0}x{1}")]
    ImageSizeTooLarge(usize, usize),
    #[error("Buffer length {0} does not match a {1}x{2} image with {3} channels")]
    BufferSizeMismatch(usize, usize, usize, usize),
    #[error("Pixel ({0}, {1}) out of bounds in {2}x{3} image")]
    PixelOutOfBounds(usize, usize, usize, usize),
    #[error("{0}x{0} box does not fit in {1}x{2} image")]
    BoxTooLarge(usize, usize, usize),
    #[error("Box size must be at least 1")]
    ZeroSizedBox,
    #[error("Target width must be at least 1")]
    ZeroTargetWidth,
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;
