//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// icogen application icon generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored terminal output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color_mode: ColorChoice,

    /// Config file path (default: icogen.toml)
    #[arg(short = 'C', long, default_value = "icogen.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate both the application icon and the recording variant
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Generate only the application icon
    #[command(visible_alias = "a")]
    App {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Generate only the recording (recolored) variant
    #[command(visible_alias = "r")]
    Recording {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

/// Shared arguments for all icon commands
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Source PNG path
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub source: Option<PathBuf>,

    /// Output path for the application icon
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Output path for the recording variant
    #[arg(short = 'r', long, value_hint = clap::ValueHint::FilePath)]
    pub recording_output: Option<PathBuf>,

    /// Also write the transparency-processed PNG to this path
    #[arg(short = 'p', long, value_hint = clap::ValueHint::FilePath)]
    pub png: Option<PathBuf>,

    /// Enable background removal (overrides config)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub background: Option<bool>,

    /// Recolor target for the recording variant (e.g. #ff0000)
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Shared args of the active subcommand.
    pub fn args(&self) -> &GenerateArgs {
        match &self.command {
            Commands::Generate { args } | Commands::App { args } | Commands::Recording { args } => {
                args
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["icogen", "generate"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate { .. }));
        assert!(cli.args().source.is_none());
        assert!(!cli.args().verbose);
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "icogen",
            "app",
            "logo.png",
            "-o",
            "out/logo.ico",
            "--background=false",
            "-V",
        ])
        .unwrap();
        let args = cli.args();
        assert_eq!(args.source.as_deref(), Some(std::path::Path::new("logo.png")));
        assert_eq!(
            args.output.as_deref(),
            Some(std::path::Path::new("out/logo.ico"))
        );
        assert_eq!(args.background, Some(false));
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_background_toggle_without_value() {
        let cli = Cli::try_parse_from(["icogen", "recording", "--background"]).unwrap();
        assert_eq!(cli.args().background, Some(true));
    }

    #[test]
    fn test_cli_subcommand_aliases() {
        for (alias, full) in [("g", "generate"), ("a", "app"), ("r", "recording")] {
            let from_alias = Cli::try_parse_from(["icogen", alias]).unwrap();
            let from_full = Cli::try_parse_from(["icogen", full]).unwrap();
            assert_eq!(
                std::mem::discriminant(&from_alias.command),
                std::mem::discriminant(&from_full.command)
            );
        }
    }
}
