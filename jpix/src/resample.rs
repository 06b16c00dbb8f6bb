// Copyright (c) the jpix Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Proportional downscale driven by a single target width.

use tracing::debug;

use crate::error::{Error, Result};
use crate::image::PixelBuffer;

/// Shrinks `src` proportionally so that its width becomes `new_width`.
///
/// The source is folded into the destination in a single forward pass:
/// every source sample column maps to `floor(scale * col)` and is
/// accumulated into per-destination-column sum/count arrays; a destination
/// scanline is emitted whenever `floor(scale * row)` advances past the last
/// emitted destination row. Averages use exact integer sums with
/// truncating division; floating point only drives the index mapping.
///
/// Source rows after the last emission never produce a destination row, so
/// the output can be one row shorter than `floor(scale * height)`. This
/// matches the historical behavior and is pinned by tests rather than
/// corrected.
///
/// If `new_width >= src.width()` the buffer is returned unchanged.
pub fn downscale_to_width(src: &PixelBuffer, new_width: usize) -> Result<PixelBuffer> {
    let (width, height) = src.size();
    if new_width == 0 {
        return Err(Error::ZeroTargetWidth);
    }
    if new_width >= width {
        return Ok(src.clone());
    }

    let channels = src.channels();
    let scale = new_width as f32 / width as f32;
    let new_height = (scale * height as f32) as usize;
    let stride = new_width * channels;
    debug!(
        "downscaling {}x{} to {}x{} ({} channels)",
        width, height, new_width, new_height, channels
    );

    let mut data = Vec::new();
    data.try_reserve_exact(new_height * stride)?;

    let mut sums = vec![0usize; stride];
    let mut counts = vec![0usize; stride];
    let mut last_emitted = 0usize;
    for row in 0..height {
        for (col, &sample) in src.row(row).iter().enumerate() {
            let idx = (scale * col as f32) as usize;
            sums[idx] += sample as usize;
            counts[idx] += 1;
        }
        let dest_row = (scale * row as f32) as usize;
        if dest_row > last_emitted {
            last_emitted = dest_row;
            for (sum, count) in sums.iter_mut().zip(counts.iter_mut()) {
                data.push((*sum / *count) as u8);
                *sum = 0;
                *count = 0;
            }
        }
    }

    // Height comes from the scanlines actually emitted, not from the
    // analytic value, so the two truncating axes cannot drift apart.
    let emitted = data.len() / stride;
    PixelBuffer::from_raw((new_width, emitted), channels, data)
}
