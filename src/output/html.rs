//! Standalone HTML page output.

use std::path::{Path, PathBuf};

use super::{AsciiOutput, OutputError};
use crate::ascii::CharGrid;

/// File written when no path is configured.
pub const DEFAULT_HTML_PATH: &str = "out.html";

/// Monospace font used when none is configured.
pub const DEFAULT_FONT_NAME: &str = "Courier New";

/// Writes the grid into a `<pre>` block of an HTML file, replacing it on
/// every run.
#[derive(Debug, Clone)]
pub struct HtmlOutput {
    path: PathBuf,
    font_name: String,
}

impl Default for HtmlOutput {
    fn default() -> Self {
        Self::new(DEFAULT_HTML_PATH, DEFAULT_FONT_NAME)
    }
}

impl HtmlOutput {
    pub fn new(path: impl Into<PathBuf>, font_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            font_name: font_name.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full HTML document for `grid`.
    pub fn document(&self, grid: &CharGrid) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>ASCII Art</title>\n</head>\n");
        html.push_str("<body style=\"background: #fff; color: #000\">\n");
        html.push_str(&format!(
            "<pre style=\"font-family: '{}', monospace; font-size: 8px; line-height: 1em; letter-spacing: 0.4em\">\n",
            escape(&self.font_name)
        ));
        for line in grid.lines() {
            html.push_str(&escape(&line));
            html.push('\n');
        }
        html.push_str("</pre>\n</body>\n</html>\n");
        html
    }
}

impl AsciiOutput for HtmlOutput {
    fn out(&mut self, grid: &CharGrid) -> Result<(), OutputError> {
        std::fs::write(&self.path, self.document(grid)).map_err(|source| OutputError::File {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Wrote HTML output to {}", self.path.display());
        Ok(())
    }
}

/// Escape the characters HTML treats specially.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_document_contains_rows_and_font() {
        let grid = CharGrid::new(2, 2, vec!['<', '#', '.', '&']);
        let html = HtmlOutput::new("unused.html", "Courier New").document(&grid);
        assert!(html.contains("font-family: 'Courier New'"));
        assert!(html.contains("&lt;#\n.&amp;\n"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
