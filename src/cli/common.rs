//! Shared pipeline stages for the icon commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

use crate::config::IcoConfig;
use crate::image::background::remove_background;
use crate::{debug, log};

/// Load the source image and apply background removal when enabled.
///
/// Also writes the transparency-processed PNG side artifact if configured.
pub fn prepare_source(config: &IcoConfig) -> Result<RgbaImage> {
    let source = &config.input.source;
    let img = image::open(source)
        .with_context(|| format!("failed to read source image `{}`", source.display()))?;
    let mut img = img.to_rgba8();
    debug!("source"; "{} ({}x{})", source.display(), img.width(), img.height());

    if !config.background.enable {
        debug!("background"; "removal disabled");
    } else if remove_background(&mut img, &config.background) {
        debug!("background"; "removed edge-connected white background");
    }

    if let Some(png) = &config.output.png {
        write_png(&img, png)?;
        log!("png"; "wrote {}", png.display());
    }

    Ok(img)
}

/// Write the processed image as PNG, creating parent directories.
fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write `{}`", path.display()))
}
