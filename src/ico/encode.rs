use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, RgbaImage};

/// Resample the image to every requested square size and pack the results
/// into a single ICO container at `path`.
///
/// Missing parent directories are created.
pub fn write_ico(img: &RgbaImage, sizes: &[u32], path: &Path) -> Result<()> {
    let frames = encode_frames(img, sizes)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file =
        File::create(path).with_context(|| format!("failed to create `{}`", path.display()))?;
    IcoEncoder::new(file)
        .encode_images(&frames)
        .with_context(|| format!("failed to encode `{}`", path.display()))?;
    Ok(())
}

/// One PNG-compressed ICO frame per size, resampled with Lanczos3.
fn encode_frames(img: &RgbaImage, sizes: &[u32]) -> Result<Vec<IcoFrame<'static>>> {
    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let resized = imageops::resize(img, size, size, FilterType::Lanczos3);
        let frame = IcoFrame::as_png(resized.as_raw(), size, size, ExtendedColorType::Rgba8)
            .with_context(|| format!("failed to encode {size}x{size} frame"))?;
        frames.push(frame);
    }
    Ok(frames)
}
