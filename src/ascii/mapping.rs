//! Brightness to character matching.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How candidate characters are scored against a tile's brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum RoundingPolicy {
    /// Closest brightness in either direction (`abs`).
    #[default]
    #[serde(rename = "abs", alias = "nearest")]
    Nearest,
    /// Closest brightness at or above the target (`up`).
    #[serde(rename = "up", alias = "prefer-brighter")]
    PreferBrighter,
    /// Closest brightness at or below the target (`down`).
    #[serde(rename = "down", alias = "prefer-darker")]
    PreferDarker,
}

impl RoundingPolicy {
    /// Distance of a candidate from `target`; `f64::INFINITY` disqualifies it.
    pub fn score(self, normalized: f64, target: f64) -> f64 {
        match self {
            RoundingPolicy::Nearest => (normalized - target).abs(),
            RoundingPolicy::PreferBrighter if normalized >= target => normalized - target,
            RoundingPolicy::PreferDarker if normalized <= target => target - normalized,
            _ => f64::INFINITY,
        }
    }

    /// Short name used by the shell and config file.
    pub fn name(&self) -> &'static str {
        match self {
            RoundingPolicy::Nearest => "abs",
            RoundingPolicy::PreferBrighter => "up",
            RoundingPolicy::PreferDarker => "down",
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized rounding policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rounding method '{0}' (expected abs, up or down)")]
pub struct ParsePolicyError(pub String);

impl FromStr for RoundingPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abs" | "nearest" => Ok(RoundingPolicy::Nearest),
            "up" | "prefer-brighter" => Ok(RoundingPolicy::PreferBrighter),
            "down" | "prefer-darker" => Ok(RoundingPolicy::PreferDarker),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Pick the candidate with the lowest score for `brightness`.
///
/// Equal scores go to the lower character code. The first candidate (the
/// lowest code, for a catalog) seeds the search, so when `policy`
/// disqualifies every candidate the lowest code is returned. `None` only
/// for an empty candidate list.
pub fn best_match(
    brightness: f64,
    candidates: impl IntoIterator<Item = (char, f64)>,
    policy: RoundingPolicy,
) -> Option<char> {
    let mut candidates = candidates.into_iter();
    let (first, first_brightness) = candidates.next()?;
    let mut best = first;
    let mut best_score = policy.score(first_brightness, brightness);

    for (c, normalized) in candidates {
        let score = policy.score(normalized, brightness);
        if score < best_score || (score == best_score && c < best) {
            best = c;
            best_score = score;
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names_round_trip() {
        for policy in [
            RoundingPolicy::Nearest,
            RoundingPolicy::PreferBrighter,
            RoundingPolicy::PreferDarker,
        ] {
            assert_eq!(policy.name().parse::<RoundingPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_policy_parse_is_case_insensitive() {
        assert_eq!("ABS".parse(), Ok(RoundingPolicy::Nearest));
        assert_eq!("Prefer-Darker".parse(), Ok(RoundingPolicy::PreferDarker));
        assert!("sideways".parse::<RoundingPolicy>().is_err());
    }

    #[test]
    fn test_scores() {
        assert!((RoundingPolicy::Nearest.score(0.2, 0.5) - 0.3).abs() < 1e-12);
        assert_eq!(RoundingPolicy::PreferBrighter.score(0.2, 0.5), f64::INFINITY);
        assert_eq!(RoundingPolicy::PreferBrighter.score(0.5, 0.5), 0.0);
        assert_eq!(RoundingPolicy::PreferDarker.score(0.8, 0.5), f64::INFINITY);
        assert_eq!(RoundingPolicy::PreferDarker.score(0.5, 0.5), 0.0);
    }

    #[test]
    fn test_unsorted_candidates_still_break_ties_low() {
        let chosen = best_match(0.5, [('z', 0.5), ('b', 0.5), ('m', 0.5)], RoundingPolicy::Nearest);
        assert_eq!(chosen, Some('b'));
    }

    #[test]
    fn test_empty_candidates() {
        assert_eq!(best_match(0.5, std::iter::empty(), RoundingPolicy::Nearest), None);
    }
}
