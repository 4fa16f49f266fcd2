//! `generate` command: build both icons from one processed source.

use anyhow::Result;

use crate::cli::common::prepare_source;
use crate::config::IcoConfig;
use crate::ico::write_ico;
use crate::image::recolor::recolor_above_threshold;
use crate::log;

/// Build the application icon and the recording variant.
///
/// The source is loaded and background-processed once; both containers
/// derive from the same buffer, so the recording variant inherits the
/// transparent background instead of recoloring it.
pub fn generate_all(config: &IcoConfig) -> Result<()> {
    let img = prepare_source(config)?;

    write_ico(&img, &config.output.sizes, &config.output.app)?;
    log!("app"; "created {}", config.output.app.display());

    let mut recording = img;
    recolor_above_threshold(
        &mut recording,
        config.recolor.threshold,
        config.recolor.target_rgb(),
    );
    write_ico(&recording, &config.output.sizes, &config.output.recording)?;
    log!("recording"; "created {}", config.output.recording.display());

    Ok(())
}
