//! `app` command: build the application icon.

use anyhow::Result;

use crate::cli::common::prepare_source;
use crate::config::IcoConfig;
use crate::ico::write_ico;
use crate::log;

/// Build the application icon: background removal, then multi-resolution
/// ICO export.
pub fn build_app_icon(config: &IcoConfig) -> Result<()> {
    let img = prepare_source(config)?;
    write_ico(&img, &config.output.sizes, &config.output.app)?;
    log!(
        "app";
        "created {} ({} sizes)",
        config.output.app.display(),
        config.output.sizes.len()
    );
    Ok(())
}
