//! Interactive command loop.
//!
//! A [`Session`] holds the state that lives between commands: the padded
//! image, the character catalog, the resolution, the rounding policy and
//! the selected output. [`run`] reads one command per line, applies it,
//! and reports recoverable failures back to the user without leaving the
//! loop.

mod command;

use std::io::{BufRead, Write};

pub use command::{CharSelection, Command, ResChange};

use crate::ascii::{AsciiArtAlgorithm, AsciiError, CharCatalog, CharGrid, RoundingPolicy};
use crate::output::{AsciiOutput, ConsoleOutput, HtmlOutput, OutputError, OutputKind};
use crate::raster::{pad, Image};

/// Prompt printed before every command.
pub const PROMPT: &str = ">>> ";

/// Errors surfaced by shell commands.
///
/// Everything except [`ShellError::Io`] is reported to the user and the
/// loop continues; none of them leave partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Did not add due to incorrect format.")]
    AddFormat,

    #[error("Did not remove due to incorrect format.")]
    RemoveFormat,

    #[error("Did not change resolution due to incorrect format.")]
    ResFormat,

    #[error("Did not change resolution due to exceeding boundaries.")]
    ResBounds,

    #[error("Did not change rounding method due to incorrect format.")]
    RoundFormat,

    #[error("Did not change output method due to incorrect format.")]
    OutputFormat,

    #[error("Did not execute. Charset is too small.")]
    CharsetTooSmall,

    #[error("Did not execute due to incorrect command.")]
    UnknownCommand,

    #[error("Did not execute: {0}")]
    Ascii(AsciiError),

    #[error("Did not write output: {0}")]
    Output(#[from] OutputError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Whether the loop should report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShellError::Io(_))
    }
}

impl From<AsciiError> for ShellError {
    fn from(err: AsciiError) -> Self {
        match err {
            AsciiError::InsufficientCharset { .. } => ShellError::CharsetTooSmall,
            other => ShellError::Ascii(other),
        }
    }
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// State shared by all commands of one shell session.
#[derive(Debug)]
pub struct Session {
    image: Image,
    catalog: CharCatalog,
    resolution: u32,
    policy: RoundingPolicy,
    output: OutputKind,
    html: HtmlOutput,
}

impl Session {
    /// Start a session on `image`, padding it once up front.
    pub fn new(image: &Image, catalog: CharCatalog) -> Self {
        Self {
            image: pad(image).into_owned(),
            catalog,
            resolution: AsciiArtAlgorithm::default().resolution(),
            policy: RoundingPolicy::default(),
            output: OutputKind::default(),
            html: HtmlOutput::default(),
        }
    }

    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_policy(mut self, policy: RoundingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_output(mut self, output: OutputKind, html: HtmlOutput) -> Self {
        self.output = output;
        self.html = html;
        self
    }

    /// The padded image every run works on.
    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn catalog(&self) -> &CharCatalog {
        &self.catalog
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn policy(&self) -> RoundingPolicy {
        self.policy
    }

    pub fn output(&self) -> OutputKind {
        self.output
    }

    /// Allowed resolutions `(min, max)` for the padded image.
    ///
    /// At most one tile per pixel column, and at least enough tiles that a
    /// wide image still yields one full row.
    pub fn resolution_bounds(&self) -> (u32, u32) {
        let min = (self.image.width() / self.image.height()).max(1);
        (min, self.image.width())
    }

    /// Whether the current resolution lies within [`Self::resolution_bounds`].
    pub fn resolution_in_bounds(&self) -> bool {
        let (min, max) = self.resolution_bounds();
        (min..=max).contains(&self.resolution)
    }

    /// Double or halve the resolution, leaving it unchanged when the step
    /// would cross the bound it moves toward.
    ///
    /// Only the bound in the direction of travel is checked, so a session
    /// started outside the bounds can always step back inside them.
    pub fn change_resolution(&mut self, change: ResChange) -> Result<u32, ShellError> {
        let (min, max) = self.resolution_bounds();
        let (next, crossed) = match change {
            ResChange::Up => {
                let next = self.resolution.saturating_mul(2);
                (next, next > max)
            }
            ResChange::Down => {
                let next = self.resolution / 2;
                (next, next < min)
            }
        };
        if crossed {
            log::debug!("Resolution {} outside bounds {}..={}", next, min, max);
            return Err(ShellError::ResBounds);
        }
        self.resolution = next;
        Ok(next)
    }

    /// Render the current state into a grid.
    pub fn render(&self) -> Result<CharGrid, ShellError> {
        let grid = AsciiArtAlgorithm::new(self.resolution, self.policy)
            .run(&self.image, &self.catalog)?;
        Ok(grid)
    }

    /// Apply one command, writing any user-facing text to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, ShellError> {
        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Chars => {
                let members: Vec<String> =
                    self.catalog.members().map(|c| c.to_string()).collect();
                writeln!(out, "{}", members.join(" "))?;
            }
            Command::Add(selection) => self.catalog.add_all(selection.chars()),
            Command::Remove(selection) => self.catalog.remove_all(selection.chars()),
            Command::Res(change) => {
                if let Some(change) = change {
                    self.change_resolution(change)?;
                }
                writeln!(out, "Resolution set to {}.", self.resolution)?;
            }
            Command::Round(policy) => self.policy = policy,
            Command::Output(kind) => self.output = kind,
            Command::AsciiArt => {
                let grid = self.render()?;
                match self.output {
                    OutputKind::Console => ConsoleOutput::new(&mut *out).out(&grid)?,
                    OutputKind::Html => self.html.out(&grid)?,
                }
            }
        }
        Ok(Flow::Continue)
    }
}

/// Read commands from `input` until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> Result<(), ShellError> {
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let result = Command::parse(trimmed).and_then(|cmd| session.execute(cmd, out));
        match result {
            Ok(Flow::Exit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(e) if e.is_recoverable() => {
                log::debug!("Command {:?} failed: {:?}", trimmed, e);
                writeln!(out, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
    }
}
