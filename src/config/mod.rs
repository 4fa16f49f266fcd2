//! Configuration management for `icogen.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                   |
//! |----------------|-------------------------------------------|
//! | `[input]`      | Source image path                         |
//! | `[background]` | Background removal gate and threshold     |
//! | `[recolor]`    | Recording variant threshold and color     |
//! | `[output]`     | Output paths and icon resolutions         |
//!
//! The config file is optional: when no `icogen.toml` is found (searching
//! upward from cwd), built-in defaults apply and paths resolve against the
//! current directory. CLI arguments override config-file values.

mod error;
mod util;

pub use error::ConfigError;

use crate::cli::Cli;
use crate::image::recolor::{RECORDING_RED, parse_hex_color};
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{find_config_file, resolve_against};

/// Largest square resolution an ICO directory entry can describe.
pub const MAX_ICO_SIZE: u32 = 256;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing icogen.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IcoConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Source image settings
    #[serde(default)]
    pub input: InputConfig,

    /// Background removal settings
    #[serde(default)]
    pub background: BackgroundConfig,

    /// Recording variant recolor settings
    #[serde(default)]
    pub recolor: RecolorConfig,

    /// Output paths and icon resolutions
    #[serde(default)]
    pub output: OutputConfig,
}

// ============================================================================
// sections
// ============================================================================

/// `[input]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Source PNG path
    pub source: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("app_icon.png"),
        }
    }
}

/// `[background]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Attempt background removal (still gated by corner detection)
    pub enable: bool,

    /// All RGB channels must exceed this value to count as background
    pub threshold: u8,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enable: true,
            threshold: 240,
        }
    }
}

/// `[recolor]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecolorConfig {
    /// All RGB channels must exceed this value to be recolored
    pub threshold: u8,

    /// Recolor target as `#rrggbb`
    pub color: String,
}

impl Default for RecolorConfig {
    fn default() -> Self {
        Self {
            threshold: 200,
            color: "#ff0000".to_string(),
        }
    }
}

impl RecolorConfig {
    /// Parsed recolor target. Validation guarantees the color parses;
    /// falls back to pure red otherwise.
    pub fn target_rgb(&self) -> [u8; 3] {
        parse_hex_color(&self.color).unwrap_or(RECORDING_RED)
    }
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Application icon output path
    pub app: PathBuf,

    /// Recording variant output path
    pub recording: PathBuf,

    /// Optional transparency-processed PNG side artifact
    pub png: Option<PathBuf>,

    /// Square resolutions packed into each ICO container
    pub sizes: Vec<u32>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            app: PathBuf::from("app_icon.ico"),
            recording: PathBuf::from("recording_icon.ico"),
            png: None,
            sizes: vec![256, 128, 64, 48, 32, 16],
        }
    }
}

// ============================================================================
// loading
// ============================================================================

impl IcoConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file. A missing config file
    /// is not an error; built-in defaults apply and the root is the cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                let mut config = Self::default();
                config.root = std::env::current_dir().unwrap_or_default();
                config
            }
        };

        config.apply_command_options(cli);
        config.normalize_paths();
        config.validate().with_context(|| {
            if config.config_path.as_os_str().is_empty() {
                "invalid configuration".to_string()
            } else {
                format!("invalid configuration in `{}`", config.config_path.display())
            }
        })?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            let display_name = path
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            log!("warning"; "unknown fields in {}, ignoring:", display_name);
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Apply CLI overrides on top of config-file values.
    fn apply_command_options(&mut self, cli: &Cli) {
        let args = cli.args();

        if let Some(source) = &args.source {
            self.input.source = source.clone();
        }
        if let Some(output) = &args.output {
            self.output.app = output.clone();
        }
        if let Some(recording) = &args.recording_output {
            self.output.recording = recording.clone();
        }
        if let Some(png) = &args.png {
            self.output.png = Some(png.clone());
        }
        if let Some(background) = args.background {
            self.background.enable = background;
        }
        if let Some(color) = &args.color {
            self.recolor.color = color.clone();
        }
    }

    /// Resolve all configured paths against the project root.
    fn normalize_paths(&mut self) {
        self.input.source = resolve_against(&self.input.source, &self.root);
        self.output.app = resolve_against(&self.output.app, &self.root);
        self.output.recording = resolve_against(&self.output.recording, &self.root);
        if let Some(png) = self.output.png.take() {
            self.output.png = Some(resolve_against(&png, &self.root));
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.output.sizes.is_empty() {
            errors.push("output.sizes must not be empty".to_string());
        }
        for (i, &size) in self.output.sizes.iter().enumerate() {
            if size == 0 || size > MAX_ICO_SIZE {
                errors.push(format!(
                    "output.sizes: {size} is outside 1..={MAX_ICO_SIZE}"
                ));
            }
            if self.output.sizes[..i].contains(&size) {
                errors.push(format!("output.sizes: duplicate size {size}"));
            }
        }

        if self.background.threshold == u8::MAX {
            errors.push("background.threshold: no channel can exceed 255".to_string());
        }
        if self.recolor.threshold == u8::MAX {
            errors.push("recolor.threshold: no channel can exceed 255".to_string());
        }
        if parse_hex_color(&self.recolor.color).is_none() {
            errors.push(format!(
                "recolor.color: `{}` is not a #rrggbb color",
                self.recolor.color
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("\n")).into())
        }
    }
}

// ============================================================================
// tests
// ============================================================================
