//! Renderers for finished character grids.

mod console;
mod html;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

pub use console::ConsoleOutput;
pub use html::{HtmlOutput, DEFAULT_FONT_NAME, DEFAULT_HTML_PATH};

use crate::ascii::CharGrid;

/// Which renderer a session writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Console,
    Html,
}

impl OutputKind {
    pub fn name(&self) -> &'static str {
        match self {
            OutputKind::Console => "console",
            OutputKind::Html => "html",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputKind {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(OutputKind::Console),
            "html" => Ok(OutputKind::Html),
            _ => Err(OutputError::UnknownKind(s.to_string())),
        }
    }
}

/// Destination for a rendered grid.
pub trait AsciiOutput {
    fn out(&mut self, grid: &CharGrid) -> Result<(), OutputError>;
}

/// Errors raised while writing a grid.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("unknown output method '{0}' (expected console or html)")]
    UnknownKind(String),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_kind_parse() {
        assert_eq!("console".parse::<OutputKind>().unwrap(), OutputKind::Console);
        assert_eq!("HTML".parse::<OutputKind>().unwrap(), OutputKind::Html);
        assert!(matches!(
            "pdf".parse::<OutputKind>(),
            Err(OutputError::UnknownKind(_))
        ));
    }
}
