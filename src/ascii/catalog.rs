//! The user-editable character catalog.

use std::collections::BTreeMap;

use super::mapping::{best_match, RoundingPolicy};
use crate::glyph::{DensityCache, GlyphSource};

/// Ordered, duplicate-free set of characters with normalized brightness.
///
/// Each member's glyph density is rescaled so the sparsest member maps to
/// 0.0 and the densest to 1.0. The mapping is recomputed from scratch on
/// every add/remove, because either can move the minimum or maximum.
///
/// When the density range collapses (one member, or all members share the
/// same density) every member is assigned 0.0.
#[derive(Debug)]
pub struct CharCatalog {
    cache: DensityCache,
    brightness: BTreeMap<char, f64>,
}

impl CharCatalog {
    /// Create a catalog rendering glyphs with `source`, seeded with `chars`.
    pub fn new(source: Box<dyn GlyphSource>, chars: impl IntoIterator<Item = char>) -> Self {
        let mut catalog = Self {
            cache: DensityCache::new(source),
            brightness: BTreeMap::new(),
        };
        catalog.add_all(chars);
        catalog
    }

    /// Insert `c` if absent, then renormalize.
    pub fn add(&mut self, c: char) {
        self.brightness.insert(c, 0.0);
        self.renormalize();
    }

    /// Insert every character, renormalizing once at the end.
    pub fn add_all(&mut self, chars: impl IntoIterator<Item = char>) {
        for c in chars {
            self.brightness.insert(c, 0.0);
        }
        self.renormalize();
    }

    /// Remove `c` if present, then renormalize.
    pub fn remove(&mut self, c: char) {
        self.brightness.remove(&c);
        self.renormalize();
    }

    /// Remove every character, renormalizing once at the end.
    pub fn remove_all(&mut self, chars: impl IntoIterator<Item = char>) {
        for c in chars {
            self.brightness.remove(&c);
        }
        self.renormalize();
    }

    pub fn contains(&self, c: char) -> bool {
        self.brightness.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.brightness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brightness.is_empty()
    }

    /// Members in ascending character code order.
    pub fn members(&self) -> impl Iterator<Item = char> + '_ {
        self.brightness.keys().copied()
    }

    /// Normalized brightness of a member, `None` for non-members.
    pub fn normalized_brightness(&self, c: char) -> Option<f64> {
        self.brightness.get(&c).copied()
    }

    /// Member to normalized brightness, in ascending character order.
    pub fn brightness_map(&self) -> &BTreeMap<char, f64> {
        &self.brightness
    }

    /// Best member for a tile of the given brightness.
    pub fn best_match(&self, brightness: f64, policy: RoundingPolicy) -> Option<char> {
        best_match(
            brightness,
            self.brightness.iter().map(|(&c, &b)| (c, b)),
            policy,
        )
    }

    /// Glyph densities seen so far, including removed characters.
    pub fn cache(&self) -> &DensityCache {
        &self.cache
    }

    fn renormalize(&mut self) {
        let cache = &mut self.cache;
        let densities: Vec<(char, f64)> = self
            .brightness
            .keys()
            .map(|&c| (c, cache.density(c)))
            .collect();

        let lo = densities.iter().map(|&(_, d)| d).fold(f64::INFINITY, f64::min);
        let hi = densities
            .iter()
            .map(|&(_, d)| d)
            .fold(f64::NEG_INFINITY, f64::max);
        let range = hi - lo;

        if !densities.is_empty() && range <= 0.0 {
            log::debug!(
                "Degenerate density range over {} member(s), normalizing all to 0",
                densities.len()
            );
        }

        for (c, density) in densities {
            let normalized = if range > 0.0 {
                (density - lo) / range
            } else {
                0.0
            };
            self.brightness.insert(c, normalized);
        }
    }
}
