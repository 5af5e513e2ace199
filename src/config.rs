//! Configuration file handling for asciify.
//!
//! Loads configuration from `<config dir>/asciify/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{
    parse_charset, AsciiError, RoundingPolicy, DEFAULT_CHARSET, DEFAULT_RESOLUTION,
};
use crate::output::{OutputKind, DEFAULT_FONT_NAME, DEFAULT_HTML_PATH};

/// Configuration file structure for asciify.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub glyphs: GlyphConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct RenderConfig {
    /// Initial catalog, one entry per character.
    pub charset: Option<String>,
    pub resolution: Option<u32>,
    pub round: Option<RoundingPolicy>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct OutputConfig {
    pub kind: Option<OutputKind>,
    pub html_path: Option<PathBuf>,
    pub font_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct GlyphConfig {
    /// TrueType/OpenType font used to measure glyph density.
    pub font_path: Option<PathBuf>,
}

/// Fully resolved settings a session starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub charset: Vec<char>,
    pub resolution: u32,
    pub policy: RoundingPolicy,
    pub output: OutputKind,
    pub html_path: PathBuf,
    pub font_name: String,
    pub font_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_vec(),
            resolution: DEFAULT_RESOLUTION,
            policy: RoundingPolicy::default(),
            output: OutputKind::default(),
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Merge file values over the built-in defaults.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let defaults = Settings::default();
        let charset = match &self.render.charset {
            Some(chars) => parse_charset(chars)?,
            None => defaults.charset,
        };

        Ok(Settings {
            charset,
            resolution: self.render.resolution.unwrap_or(defaults.resolution),
            policy: self.render.round.unwrap_or(defaults.policy),
            output: self.output.kind.unwrap_or(defaults.output),
            html_path: self.output.html_path.clone().unwrap_or(defaults.html_path),
            font_name: self.output.font_name.clone().unwrap_or(defaults.font_name),
            font_path: self.glyphs.font_path.clone(),
        })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid charset in config: {0}")]
    Charset(#[from] AsciiError),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}

/// Contents written by `asciify config init`.
pub const DEFAULT_CONFIG: &str = r#"# asciify configuration

[render]
# Initial character set
charset = "0123456789"
# Tiles per row
resolution = 2
# Rounding method: abs, up, down
round = "abs"

[output]
# Output method: console, html
kind = "console"
html_path = "out.html"
font_name = "Courier New"

[glyphs]
# Font used to measure glyph density (builtin bitmap font if unset)
# font_path = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[render]\ncharset = \" .#\"\nresolution = 64\nround = \"down\"\n\n[output]\nkind = \"html\"\n",
        )
        .unwrap();

        let settings = Config::load(Some(&path)).unwrap().settings().unwrap();
        assert_eq!(settings.charset, vec![' ', '.', '#']);
        assert_eq!(settings.resolution, 64);
        assert_eq!(settings.policy, RoundingPolicy::PreferDarker);
        assert_eq!(settings.output, OutputKind::Html);
        assert_eq!(settings.font_name, DEFAULT_FONT_NAME);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render\nresolution = ").unwrap();
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_unknown_round_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\nround = \"sideways\"\n").unwrap();
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_unprintable_charset_rejected() {
        let config = Config {
            render: RenderConfig {
                charset: Some("ab\tc".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.settings(),
            Err(ConfigError::Charset(AsciiError::CharOutOfRange('\t')))
        ));
    }
}
