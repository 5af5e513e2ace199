//! Printable character range and the default character set.

use std::ops::RangeInclusive;

use super::AsciiError;

/// First printable ASCII character (space, code 32).
pub const MIN_PRINTABLE: char = ' ';

/// Last printable ASCII character (tilde, code 126).
pub const MAX_PRINTABLE: char = '~';

/// Characters accepted by catalog commands.
pub const PRINTABLE: RangeInclusive<char> = MIN_PRINTABLE..=MAX_PRINTABLE;

/// Digits `0`-`9`, the catalog a fresh session starts with.
pub const DEFAULT_CHARSET: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Reject characters outside [`PRINTABLE`].
pub fn check_printable(c: char) -> Result<char, AsciiError> {
    if PRINTABLE.contains(&c) {
        Ok(c)
    } else {
        Err(AsciiError::CharOutOfRange(c))
    }
}

/// Every character between `from` and `to`, inclusive, in either direction.
///
/// Both ends must be printable; nothing is returned otherwise, so callers
/// can validate a whole range before mutating anything.
pub fn char_range(from: char, to: char) -> Result<Vec<char>, AsciiError> {
    let from = check_printable(from)?;
    let to = check_printable(to)?;
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    Ok((lo..=hi).collect())
}

/// Validate every character of `chars` and return them in input order.
pub fn parse_charset(chars: &str) -> Result<Vec<char>, AsciiError> {
    chars.chars().map(check_printable).collect()
}
