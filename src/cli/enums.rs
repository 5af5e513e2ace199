//! CLI enum types for rounding and output options.

use clap::ValueEnum;

use crate::ascii::RoundingPolicy;
use crate::output::OutputKind;

/// Rounding method for matching tiles to characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Round {
    /// Nearest brightness
    #[default]
    Abs,
    /// Nearest brightness at or above the tile
    Up,
    /// Nearest brightness at or below the tile
    Down,
}

impl From<Round> for RoundingPolicy {
    fn from(r: Round) -> Self {
        match r {
            Round::Abs => RoundingPolicy::Nearest,
            Round::Up => RoundingPolicy::PreferBrighter,
            Round::Down => RoundingPolicy::PreferDarker,
        }
    }
}

/// Where rendered art is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Output {
    #[default]
    Console,
    Html,
}

impl From<Output> for OutputKind {
    fn from(o: Output) -> Self {
        match o {
            Output::Console => OutputKind::Console,
            Output::Html => OutputKind::Html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_policy() {
        assert_eq!(RoundingPolicy::from(Round::Abs), RoundingPolicy::Nearest);
        assert_eq!(
            RoundingPolicy::from(Round::Up),
            RoundingPolicy::PreferBrighter
        );
        assert_eq!(
            RoundingPolicy::from(Round::Down),
            RoundingPolicy::PreferDarker
        );
    }

    #[test]
    fn test_output_to_kind() {
        assert_eq!(OutputKind::from(Output::Console), OutputKind::Console);
        assert_eq!(OutputKind::from(Output::Html), OutputKind::Html);
    }
}
