//! `recording` command: build the recording icon variant.

use anyhow::Result;

use crate::cli::common::prepare_source;
use crate::config::IcoConfig;
use crate::ico::write_ico;
use crate::image::recolor::recolor_above_threshold;
use crate::log;

/// Build the recording variant: recolor white pixels to the configured
/// tint, then export.
pub fn build_recording_icon(config: &IcoConfig) -> Result<()> {
    let mut img = prepare_source(config)?;
    recolor_above_threshold(&mut img, config.recolor.threshold, config.recolor.target_rgb());
    write_ico(&img, &config.output.sizes, &config.output.recording)?;
    log!(
        "recording";
        "created {} ({} sizes)",
        config.output.recording.display(),
        config.output.sizes.len()
    );
    Ok(())
}
