// Copyright (c) the jpix Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use jpix::jpeg::Jpeg;
use jpix_cli::ascii;

#[derive(Parser)]
struct Opt {
    /// Input JPEG file
    input: PathBuf,

    /// Shrink proportionally to this width (in px) before any output
    #[clap(long)]
    width: Option<usize>,

    /// Output image file, should end in .jpg, .jpeg or .ppm; if omitted,
    /// the image is rendered as ASCII on stdout
    #[clap(long)]
    output: Option<PathBuf>,

    /// JPEG quality, usable values are 0-100
    #[clap(long, default_value_t = 95)]
    quality: i32,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    #[cfg(feature = "tracing-subscriber")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let opt = Opt::parse();
    let mut img = Jpeg::open(&opt.input)?;
    if let Some(width) = opt.width {
        img.shrink(width)?;
    }

    match opt.output {
        Some(output) => {
            let fn_str = String::from(output.to_string_lossy());
            if fn_str.ends_with(".jpg") || fn_str.ends_with(".jpeg") {
                img.save(&output, opt.quality)?;
            } else if fn_str.ends_with(".ppm") {
                img.save_ppm(&output)?;
            } else {
                return Err(eyre!("Unsupported output extension: {}", output.display()));
            }
        }
        None => {
            let stdout = std::io::stdout();
            ascii::render(&img, &mut stdout.lock())?;
            println!();
            println!("Image height: {}", img.height());
            println!("Image width : {}", img.width());
            println!("Image px sz : {}", img.channels());
        }
    }
    Ok(())
}
