// Copyright (c) the jpix Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::io::Write;

use crate::image::PixelBuffer;

/// Uncompressed fixed-format dump: `"P6 " <width> " " <height> " 255\n"`
/// followed by the raw interleaved samples, row-major, no padding.
///
/// Monochrome buffers are dumped under the same header; tools consuming
/// this format rely on the bytes being reproduced exactly, so the header
/// is not adjusted to the channel count.
pub fn to_ppm(buffer: &PixelBuffer) -> Vec<u8> {
    let (width, height) = buffer.size();
    let mut out = vec![];
    write!(&mut out, "P6 {width} {height} 255\n").unwrap();
    for row in 0..height {
        out.extend_from_slice(buffer.row(row));
    }
    out
}
