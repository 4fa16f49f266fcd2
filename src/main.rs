//! icogen - application icon pipeline.
//!
//! Turns a single PNG source into multi-resolution Windows ICO files,
//! optionally removing the white background and producing a red
//! "recording" variant.

mod cli;
mod config;
mod ico;
mod image;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::IcoConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color_mode {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.args().verbose);

    let config = IcoConfig::load(&cli)?;

    match &cli.command {
        Commands::Generate { .. } => cli::generate::generate_all(&config),
        Commands::App { .. } => cli::app::build_app_icon(&config),
        Commands::Recording { .. } => cli::recording::build_recording_icon(&config),
    }
}
