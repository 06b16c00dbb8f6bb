// Copyright (c) the jpix Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Point sampling, luminance approximation and windowed box averages.

use crate::error::{Error, Result};
use crate::image::PixelBuffer;

impl PixelBuffer {
    /// Returns the samples of one pixel, in channel order. The slice has
    /// exactly `channels()` elements.
    pub fn pixel(&self, x: usize, y: usize) -> Result<&[u8]> {
        let (width, height) = self.size();
        if x >= width || y >= height {
            return Err(Error::PixelOutOfBounds(x, y, width, height));
        }
        let start = x * self.channels();
        Ok(&self.row(y)[start..start + self.channels()])
    }

    /// Fast approximation of perceived brightness. Monochrome pixels are
    /// returned unchanged; RGB pixels use the fixed weights (2, 3, 1)/6.
    /// The weights are kept as-is for bit-compatible output.
    pub fn luminance(&self, x: usize, y: usize) -> Result<u8> {
        let px = self.pixel(x, y)?;
        Ok(match *px {
            [g] => g,
            [r, g, b] => ((2 * r as u32 + 3 * g as u32 + b as u32) / 6) as u8,
            _ => 0,
        })
    }

    /// Per-channel average over a `box_size` x `box_size` window whose
    /// top-left corner is at (x, y), with truncating integer division.
    ///
    /// A window that would run past the right or bottom edge is shifted
    /// left/up just enough to fit, so requests near those edges alias to
    /// the shifted origin.
    pub fn box_average(&self, x: usize, y: usize, box_size: usize) -> Result<Vec<u8>> {
        let (width, height) = self.size();
        if box_size == 0 {
            return Err(Error::ZeroSizedBox);
        }
        if box_size > width || box_size > height {
            return Err(Error::BoxTooLarge(box_size, width, height));
        }
        let x = match x.checked_add(box_size) {
            Some(end) if end < width => x,
            _ => width - box_size,
        };
        let y = match y.checked_add(box_size) {
            Some(end) if end < height => y,
            _ => height - box_size,
        };

        let channels = self.channels();
        let mut sums = vec![0usize; channels];
        for row in y..y + box_size {
            let line = self.row(row);
            for col in x..x + box_size {
                for (c, sum) in sums.iter_mut().enumerate() {
                    *sum += line[col * channels + c] as usize;
                }
            }
        }
        let samples = box_size * box_size;
        Ok(sums.into_iter().map(|sum| (sum / samples) as u8).collect())
    }
}

#[cfg(test)]
mod test {
    use crate::error::{Error, Result};
    use crate::image::PixelBuffer;

    fn uniform(size: (usize, usize), channels: usize, value: u8) -> PixelBuffer {
        PixelBuffer::from_raw(size, channels, vec![value; size.0 * size.1 * channels]).unwrap()
    }

    #[test]
    fn pixel_len_matches_channels() {
        arbtest::arbtest(|u| {
            let width = u.int_in_range(1..=16)?;
            let height = u.int_in_range(1..=16)?;
            let channels = *u.choose(&[1usize, 3])?;
            let buf = PixelBuffer::new((width, height), channels).unwrap();
            let x = u.int_in_range(0..=width - 1)?;
            let y = u.int_in_range(0..=height - 1)?;
            assert_eq!(buf.pixel(x, y).unwrap().len(), channels);
            Ok(())
        });
    }

    #[test]
    fn pixel_out_of_bounds() {
        let buf = uniform((3, 2), 1, 0);
        assert!(buf.pixel(2, 1).is_ok());
        assert!(matches!(
            buf.pixel(3, 0),
            Err(Error::PixelOutOfBounds(3, 0, 3, 2))
        ));
        assert!(buf.pixel(0, 2).is_err());
    }

    #[test]
    fn pixel_channel_order() -> Result<()> {
        let buf = PixelBuffer::from_raw((2, 1), 3, vec![1, 2, 3, 4, 5, 6])?;
        assert_eq!(buf.pixel(0, 0)?, [1, 2, 3]);
        assert_eq!(buf.pixel(1, 0)?, [4, 5, 6]);
        Ok(())
    }

    #[test]
    fn luminance_monochrome_is_identity() -> Result<()> {
        let buf = PixelBuffer::from_raw((2, 1), 1, vec![0, 171])?;
        assert_eq!(buf.luminance(0, 0)?, 0);
        assert_eq!(buf.luminance(1, 0)?, 171);
        Ok(())
    }

    #[test]
    fn luminance_rgb_weights() -> Result<()> {
        let buf = PixelBuffer::from_raw(
            (3, 1),
            3,
            vec![0, 0, 0, 255, 255, 255, 10, 20, 30],
        )?;
        assert_eq!(buf.luminance(0, 0)?, 0);
        assert_eq!(buf.luminance(1, 0)?, 255);
        // floor((2*10 + 3*20 + 30) / 6)
        assert_eq!(buf.luminance(2, 0)?, 18);
        Ok(())
    }

    #[test]
    fn box_average_uniform() -> Result<()> {
        for channels in [1, 3] {
            let buf = uniform((5, 4), channels, 93);
            for box_size in 1..=4 {
                let avg = buf.box_average(0, 0, box_size)?;
                assert_eq!(avg, vec![93; channels]);
            }
        }
        Ok(())
    }

    #[test]
    fn box_average_truncates() -> Result<()> {
        let buf = PixelBuffer::from_raw((2, 2), 1, vec![0, 1, 2, 3])?;
        // (0 + 1 + 2 + 3) / 4
        assert_eq!(buf.box_average(0, 0, 2)?, vec![1]);
        Ok(())
    }

    #[test]
    fn box_average_per_channel() -> Result<()> {
        let buf = PixelBuffer::from_raw((2, 1), 3, vec![10, 100, 200, 30, 120, 240])?;
        assert_eq!(buf.box_average(0, 0, 1)?, vec![10, 100, 200]);
        Ok(())
    }

    #[test]
    fn box_average_shifts_to_fit() -> Result<()> {
        let data: Vec<u8> = (0..25).map(|v| v * 10).collect();
        let buf = PixelBuffer::from_raw((5, 5), 1, data)?;
        let clamped = buf.box_average(3, 3, 2)?;
        // Any origin past the edge aliases to the shifted window.
        assert_eq!(buf.box_average(4, 4, 2)?, clamped);
        assert_eq!(buf.box_average(100, 100, 2)?, clamped);
        assert_eq!(buf.box_average(usize::MAX, 3, 2)?, buf.box_average(3, 3, 2)?);
        Ok(())
    }

    #[test]
    fn box_average_window_must_fit() {
        let buf = uniform((4, 3), 1, 0);
        assert!(matches!(
            buf.box_average(0, 0, 4),
            Err(Error::BoxTooLarge(4, 4, 3))
        ));
        assert!(buf.box_average(0, 0, 3).is_ok());
        assert!(matches!(
            buf.box_average(0, 0, 0),
            Err(Error::ZeroSizedBox)
        ));
    }
}
