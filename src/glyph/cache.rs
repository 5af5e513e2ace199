//! Memoized glyph densities.

use std::collections::HashMap;

use super::GlyphSource;

/// Maps characters to the density of their rendered glyph.
///
/// Each character is rendered at most once. Entries are never evicted:
/// the key space is the printable character range, so the map stays tiny.
pub struct DensityCache {
    source: Box<dyn GlyphSource>,
    densities: HashMap<char, f64>,
}

impl DensityCache {
    pub fn new(source: Box<dyn GlyphSource>) -> Self {
        Self {
            source,
            densities: HashMap::new(),
        }
    }

    /// Density of `c`, rendering its glyph on first request.
    pub fn density(&mut self, c: char) -> f64 {
        let source = &self.source;
        *self.densities.entry(c).or_insert_with(|| {
            let density = source.render(c).density();
            log::debug!("Cached glyph density for {:?}: {:.4}", c, density);
            density
        })
    }

    pub fn contains(&self, c: char) -> bool {
        self.densities.contains_key(&c)
    }

    /// Number of cached characters.
    pub fn len(&self) -> usize {
        self.densities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }
}

impl std::fmt::Debug for DensityCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DensityCache")
            .field("densities", &self.densities)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{GlyphBitmap, GLYPH_SIZE};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_source(calls: Arc<AtomicUsize>) -> Box<dyn GlyphSource> {
        Box::new(move |c: char| {
            calls.fetch_add(1, Ordering::SeqCst);
            GlyphBitmap::from_fn(|row, _| row < (c as usize) % (GLYPH_SIZE + 1))
        })
    }

    #[test]
    fn test_renders_once_per_character() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut cache = DensityCache::new(counting_source(calls.clone()));

        let first = cache.density('A');
        let second = cache.density('A');
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        cache.density('B');
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_contains_after_lookup() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut cache = DensityCache::new(counting_source(calls));
        assert!(cache.is_empty());
        assert!(!cache.contains('x'));
        cache.density('x');
        assert!(cache.contains('x'));
    }

    #[test]
    fn test_density_value() {
        // 'A' = 65, 65 % 17 = 14 rows on
        let calls = Arc::new(AtomicUsize::new(0));
        let mut cache = DensityCache::new(counting_source(calls));
        assert_eq!(cache.density('A'), 14.0 / 16.0);
    }
}
