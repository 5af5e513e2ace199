//! Subcommand handlers for shell, render and config actions.

use std::io::Write;
use std::path::Path;

use super::args::{Args, Command, ConfigAction, RenderOptions};
use crate::ascii::{parse_charset, render, AsciiError, CharCatalog, CharGrid};
use crate::config::{default_path, Config, ConfigError, Settings, DEFAULT_CONFIG};
use crate::glyph::{BuiltinFont, FontFile, GlyphError, GlyphSource};
use crate::output::{AsciiOutput, ConsoleOutput, HtmlOutput, OutputError, OutputKind};
use crate::raster::{load_image, ImageError};
use crate::shell::{self, Session, ShellError};

/// Anything that can end a CLI invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Glyph(#[from] GlyphError),

    #[error(transparent)]
    Ascii(#[from] AsciiError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(std::path::PathBuf),

    #[error("Resolution {resolution} is outside {min}..={max} for this image")]
    ResolutionOutOfRange { resolution: u32, min: u32, max: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the subcommand selected by `args`.
pub fn dispatch(args: Args) -> Result<(), CliError> {
    let config_path = args.config.as_deref();
    match args.command {
        Command::Config { action } => handle_config_action(action, config_path),
        Command::Shell { image, options } => {
            let config = Config::load(config_path)?;
            let settings = resolve_settings(&config, &options, args.font.as_deref())?;
            run_shell(&image, &settings)
        }
        Command::Render { image, options } => {
            let config = Config::load(config_path)?;
            let settings = resolve_settings(&config, &options, args.font.as_deref())?;
            let grid = render_once(&image, &settings)?;
            write_grid(&grid, &settings)
        }
    }
}

/// Layer command-line overrides on top of the config file.
pub fn resolve_settings(
    config: &Config,
    options: &RenderOptions,
    font: Option<&Path>,
) -> Result<Settings, CliError> {
    let mut settings = config.settings()?;
    if let Some(charset) = &options.charset {
        settings.charset = parse_charset(charset)?;
    }
    if let Some(resolution) = options.resolution {
        settings.resolution = resolution;
    }
    if let Some(round) = options.round {
        settings.policy = round.into();
    }
    if let Some(output) = options.output {
        settings.output = output.into();
    }
    if let Some(path) = &options.html_path {
        settings.html_path = path.clone();
    }
    if let Some(name) = &options.font_name {
        settings.font_name = name.clone();
    }
    if let Some(font) = font {
        settings.font_path = Some(font.to_path_buf());
    }
    Ok(settings)
}

/// Glyph source for an optional font file, the builtin font otherwise.
pub fn glyph_source(font_path: Option<&Path>) -> Result<Box<dyn GlyphSource>, GlyphError> {
    match font_path {
        Some(path) => Ok(Box::new(FontFile::open(path)?)),
        None => Ok(Box::new(BuiltinFont)),
    }
}

/// Catalog seeded with the configured charset.
pub fn build_catalog(settings: &Settings) -> Result<CharCatalog, GlyphError> {
    let source = glyph_source(settings.font_path.as_deref())?;
    Ok(CharCatalog::new(source, settings.charset.iter().copied()))
}

/// Load, render and return the grid for one image.
pub fn render_once(image_path: &Path, settings: &Settings) -> Result<CharGrid, CliError> {
    let image = load_image(image_path)?;
    let catalog = build_catalog(settings)?;
    Ok(render(
        &image,
        settings.resolution,
        &catalog,
        settings.policy,
    )?)
}

/// Build a shell session, refusing a starting resolution the image can't take.
pub fn start_session(image_path: &Path, settings: &Settings) -> Result<Session, CliError> {
    let image = load_image(image_path)?;
    let catalog = build_catalog(settings)?;
    let session = Session::new(&image, catalog)
        .with_resolution(settings.resolution)
        .with_policy(settings.policy)
        .with_output(settings.output, html_output(settings));

    if !session.resolution_in_bounds() {
        let (min, max) = session.resolution_bounds();
        return Err(CliError::ResolutionOutOfRange {
            resolution: settings.resolution,
            min,
            max,
        });
    }
    Ok(session)
}

/// Start the interactive shell on stdin/stdout.
pub fn run_shell(image_path: &Path, settings: &Settings) -> Result<(), CliError> {
    let mut session = start_session(image_path, settings)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell::run(&mut session, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn html_output(settings: &Settings) -> HtmlOutput {
    HtmlOutput::new(settings.html_path.clone(), settings.font_name.clone())
}

fn write_grid(grid: &CharGrid, settings: &Settings) -> Result<(), CliError> {
    match settings.output {
        OutputKind::Console => ConsoleOutput::stdout().out(grid)?,
        OutputKind::Html => html_output(settings).out(grid)?,
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let settings = Config::load(Some(&path))?.settings()?;
            let mut stdout = std::io::stdout();
            write_settings(&mut stdout, &settings)?;
            writeln!(stdout)?;
            if path.exists() {
                writeln!(stdout, "Config file: {} (exists)", path.display())?;
            } else {
                writeln!(stdout, "Config file: {} (not found)", path.display())?;
            }
        }
        ConfigAction::Init => {
            if path.exists() {
                return Err(CliError::ConfigExists(path));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG)?;
            println!("Created config file: {}", path.display());
        }
    }
    Ok(())
}

/// Human-readable dump of effective settings.
pub(crate) fn write_settings<W: Write>(out: &mut W, settings: &Settings) -> std::io::Result<()> {
    let charset: String = settings.charset.iter().collect();
    writeln!(out, "Current configuration:")?;
    writeln!(out, "  Charset: {:?}", charset)?;
    writeln!(out, "  Resolution: {}", settings.resolution)?;
    writeln!(out, "  Rounding: {}", settings.policy)?;
    writeln!(out, "  Output: {}", settings.output)?;
    writeln!(out, "  HTML file: {}", settings.html_path.display())?;
    writeln!(out, "  HTML font: {}", settings.font_name)?;
    match &settings.font_path {
        Some(path) => writeln!(out, "  Glyph font: {}", path.display()),
        None => writeln!(out, "  Glyph font: builtin"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::RoundingPolicy;
    use crate::cli::{Output, Round};
    use std::path::PathBuf;

    #[test]
    fn test_cli_overrides_config() {
        let config: Config = toml::from_str("[render]\nresolution = 8\nround = \"up\"\n").unwrap();
        let options = RenderOptions {
            resolution: Some(32),
            output: Some(Output::Html),
            ..Default::default()
        };
        let settings = resolve_settings(&config, &options, Some(Path::new("f.ttf"))).unwrap();
        assert_eq!(settings.resolution, 32);
        assert_eq!(settings.policy, RoundingPolicy::PreferBrighter);
        assert_eq!(settings.output, OutputKind::Html);
        assert_eq!(settings.font_path, Some(PathBuf::from("f.ttf")));
    }

    #[test]
    fn test_cli_round_overrides_config_round() {
        let config: Config = toml::from_str("[render]\nround = \"up\"\n").unwrap();
        let options = RenderOptions {
            round: Some(Round::Down),
            ..Default::default()
        };
        let settings = resolve_settings(&config, &options, None).unwrap();
        assert_eq!(settings.policy, RoundingPolicy::PreferDarker);
    }

    #[test]
    fn test_cli_charset_validated() {
        let options = RenderOptions {
            charset: Some("a\u{7}".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_settings(&Config::default(), &options, None),
            Err(CliError::Ascii(AsciiError::CharOutOfRange('\u{7}')))
        ));
    }

    #[test]
    fn test_config_init_then_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        handle_config_action(ConfigAction::Init, Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert!(matches!(
            handle_config_action(ConfigAction::Init, Some(&path)),
            Err(CliError::ConfigExists(_))
        ));
    }

    #[test]
    fn test_write_settings() {
        let mut out = Vec::new();
        write_settings(&mut out, &Settings::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Resolution: 2"));
        assert!(text.contains("Rounding: abs"));
        assert!(text.contains("Glyph font: builtin"));
    }

    #[test]
    fn test_missing_image_is_load_error() {
        let err = render_once(Path::new("/nonexistent/cat.png"), &Settings::default()).unwrap_err();
        assert!(matches!(err, CliError::Image(ImageError::Load { .. })));
    }
}
