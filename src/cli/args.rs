//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{Output, Round};

/// Convert images to ASCII art by matching tile brightness to glyph density
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Image to ASCII art by glyph density", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Font file used to measure glyph density (default: builtin bitmap font)
    #[arg(long, global = true)]
    pub font: Option<PathBuf>,
}

/// Overrides for the configured render settings.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderOptions {
    /// Tiles per row
    #[arg(long, short)]
    pub resolution: Option<u32>,

    /// Rounding method
    #[arg(long)]
    pub round: Option<Round>,

    /// Initial character set, e.g. " .:-=+*#%@"
    #[arg(long)]
    pub charset: Option<String>,

    /// Output method
    #[arg(long, short)]
    pub output: Option<Output>,

    /// HTML output file
    #[arg(long)]
    pub html_path: Option<PathBuf>,

    /// Font family named in the HTML output
    #[arg(long)]
    pub font_name: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open an image in the interactive shell
    Shell {
        /// Image file (PNG or JPEG)
        image: PathBuf,
        #[command(flatten)]
        options: RenderOptions,
    },
    /// Render an image once and exit
    Render {
        /// Image file (PNG or JPEG)
        image: PathBuf,
        #[command(flatten)]
        options: RenderOptions,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let args = Args::parse_from(["asciify", "render", "cat.png"]);
        assert!(args.config.is_none());
        assert!(args.font.is_none());
        match args.command {
            Command::Render { image, options } => {
                assert_eq!(image, PathBuf::from("cat.png"));
                assert!(options.resolution.is_none());
                assert!(options.round.is_none());
                assert!(options.charset.is_none());
                assert!(options.output.is_none());
            }
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn test_render_overrides() {
        let args = Args::parse_from([
            "asciify",
            "render",
            "cat.png",
            "-r",
            "64",
            "--round",
            "down",
            "--charset",
            " .#",
            "--output",
            "html",
            "--html-path",
            "cat.html",
        ]);
        let Command::Render { options, .. } = args.command else {
            panic!("expected render");
        };
        assert_eq!(options.resolution, Some(64));
        assert_eq!(options.round, Some(Round::Down));
        assert_eq!(options.charset.as_deref(), Some(" .#"));
        assert_eq!(options.output, Some(Output::Html));
        assert_eq!(options.html_path, Some(PathBuf::from("cat.html")));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::parse_from([
            "asciify",
            "shell",
            "cat.png",
            "--font",
            "mono.ttf",
            "--config",
            "my.toml",
        ]);
        assert_eq!(args.font, Some(PathBuf::from("mono.ttf")));
        assert_eq!(args.config, Some(PathBuf::from("my.toml")));
        assert!(matches!(args.command, Command::Shell { .. }));
    }

    #[test]
    fn test_config_actions() {
        let args = Args::parse_from(["asciify", "config", "show"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Show
            }
        ));
        let args = Args::parse_from(["asciify", "config", "init"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Init
            }
        ));
    }

    #[test]
    fn test_missing_image_is_error() {
        assert!(Args::try_parse_from(["asciify", "render"]).is_err());
        assert!(Args::try_parse_from(["asciify", "render", "a.png", "--round", "left"]).is_err());
    }
}
