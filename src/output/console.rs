//! Plain-text output to a terminal or any writer.

use std::io::Write;

use super::{AsciiOutput, OutputError};
use crate::ascii::CharGrid;

/// Writes each grid row on its own line.
///
/// Every character is followed by a space: terminal cells are about twice
/// as tall as they are wide, and the extra column keeps tiles square.
pub struct ConsoleOutput<W: Write> {
    writer: W,
}

impl ConsoleOutput<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            writer: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AsciiOutput for ConsoleOutput<W> {
    fn out(&mut self, grid: &CharGrid) -> Result<(), OutputError> {
        let mut output = String::with_capacity(grid.rows * (grid.cols * 2 + 1));
        for row in (0..grid.rows).filter_map(|r| grid.row(r)) {
            for &c in row {
                output.push(c);
                output.push(' ');
            }
            output.push('\n');
        }

        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
