// Copyright (c) the jpix Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::io::Write;

use color_eyre::eyre::Result;
use jpix::jpeg::Jpeg;

/// Luminance 0-255 mapped onto an 11-step brightness ramp.
const RAMP: &[u8] = b" .,:-=+*#%@";

/// Renders the image as ASCII art, one doubled ramp character per pixel so
/// the output keeps roughly the source aspect ratio in a terminal.
pub fn render<W: Write>(img: &Jpeg, out: &mut W) -> Result<()> {
    for y in 0..img.height() {
        for x in 0..img.width() {
            let step = RAMP[(img.luminance(x, y)? / 24) as usize];
            out.write_all(&[step, step])?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}
