//! Shell command grammar.

use crate::ascii::{char_range, check_printable, RoundingPolicy, PRINTABLE};
use crate::output::OutputKind;

use super::ShellError;

/// Characters named by an `add`/`remove` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSelection {
    /// One printable character (`space` selects `' '`).
    Single(char),
    /// Every printable character.
    All,
    /// Inclusive range, either direction (`a-z`, `9-0`).
    Range(char, char),
}

impl CharSelection {
    /// Parse an argument; `None` when malformed or unprintable.
    pub fn parse(arg: &str) -> Option<Self> {
        if arg.eq_ignore_ascii_case("all") {
            return Some(CharSelection::All);
        }
        if arg.eq_ignore_ascii_case("space") {
            return Some(CharSelection::Single(' '));
        }

        let chars: Vec<char> = arg.chars().collect();
        match chars.as_slice() {
            [c] => check_printable(*c).ok().map(CharSelection::Single),
            [from, '-', to] => char_range(*from, *to)
                .ok()
                .map(|_| CharSelection::Range(*from, *to)),
            _ => None,
        }
    }

    /// The selected characters in ascending order.
    pub fn chars(&self) -> Vec<char> {
        match *self {
            CharSelection::Single(c) => vec![c],
            CharSelection::All => PRINTABLE.collect(),
            // Validated at parse time.
            CharSelection::Range(from, to) => char_range(from, to).unwrap_or_default(),
        }
    }
}

/// Direction for the `res` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResChange {
    Up,
    Down,
}

/// One line of shell input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Chars,
    Add(CharSelection),
    Remove(CharSelection),
    /// `None` reports the current resolution without changing it.
    Res(Option<ResChange>),
    Round(RoundingPolicy),
    Output(OutputKind),
    AsciiArt,
}

impl Command {
    /// Parse a non-empty input line. Keywords are case-insensitive.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next().unwrap_or_default();

        match keyword.as_str() {
            "exit" => Ok(Command::Exit),
            "chars" => Ok(Command::Chars),
            "add" => CharSelection::parse(arg)
                .map(Command::Add)
                .ok_or(ShellError::AddFormat),
            "remove" => CharSelection::parse(arg)
                .map(Command::Remove)
                .ok_or(ShellError::RemoveFormat),
            "res" => match arg.to_ascii_lowercase().as_str() {
                "" => Ok(Command::Res(None)),
                "up" => Ok(Command::Res(Some(ResChange::Up))),
                "down" => Ok(Command::Res(Some(ResChange::Down))),
                _ => Err(ShellError::ResFormat),
            },
            "round" => arg
                .parse::<RoundingPolicy>()
                .map(Command::Round)
                .map_err(|_| ShellError::RoundFormat),
            "output" => arg
                .parse::<OutputKind>()
                .map(Command::Output)
                .map_err(|_| ShellError::OutputFormat),
            "asciiart" => Ok(Command::AsciiArt),
            _ => Err(ShellError::UnknownCommand),
        }
    }
}
