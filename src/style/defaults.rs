//! Per-session baseline style resolution.
//!
//! The first lookup for a tag asks the [`DefaultsProvider`] for the computed
//! value of every curated design property on a bare element of that tag, and
//! memoizes the resulting map under the uppercased tag name. Later lookups
//! answer from the cache without touching the provider again.

use std::collections::HashMap;

use super::StyleMap;
use super::properties::DESIGN_PROPERTIES;
use crate::element::DefaultsProvider;

/// Session-scoped cache of per-tag baseline styles.
///
/// Owns a borrowed handle to the isolated-context provider for the duration
/// of one extraction session. [`DefaultsCache::close`] releases the handle
/// and clears the cache; after that (or when the provider reports not
/// ready) every lookup yields an empty baseline, so diffing degrades to
/// keeping all properties rather than failing.
pub struct DefaultsCache<'a> {
    provider: Option<&'a dyn DefaultsProvider>,
    cache: HashMap<String, StyleMap>,
    empty: StyleMap,
}

impl<'a> DefaultsCache<'a> {
    pub fn new(provider: &'a dyn DefaultsProvider) -> Self {
        Self {
            provider: Some(provider),
            cache: HashMap::new(),
            empty: StyleMap::new(),
        }
    }

    /// Baseline style map for `tag` (case-insensitive).
    pub fn defaults_for(&mut self, tag: &str) -> &StyleMap {
        let key = tag.to_ascii_uppercase();
        if self.cache.contains_key(&key) {
            return &self.cache[&key];
        }

        // Not-ready providers are not cached: the context may come up later
        // in the session.
        let Some(provider) = self.provider else {
            return &self.empty;
        };
        if !provider.is_ready() {
            return &self.empty;
        }

        let lower = tag.to_ascii_lowercase();
        let mut defaults = StyleMap::new();
        for prop in DESIGN_PROPERTIES {
            defaults.insert(*prop, provider.computed_default(&lower, prop));
        }
        self.cache.entry(key).or_insert(defaults)
    }

    /// Release the provider handle and drop all cached baselines.
    ///
    /// Must be called at session end; a live provider typically tears down a
    /// hidden rendering surface when its last handle goes away.
    pub fn close(&mut self) {
        self.provider = None;
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingProvider {
        ready: bool,
        calls: Cell<usize>,
    }

    impl DefaultsProvider for CountingProvider {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn computed_default(&self, _tag: &str, property: &str) -> String {
            self.calls.set(self.calls.get() + 1);
            if property == "display" {
                "block".to_string()
            } else {
                String::new()
            }
        }
    }

    #[test]
    fn memoizes_per_tag() {
        let provider = CountingProvider {
            ready: true,
            calls: Cell::new(0),
        };
        let mut cache = DefaultsCache::new(&provider);

        let first = cache.defaults_for("div").clone();
        let after_first = provider.calls.get();
        assert_eq!(first.get("display"), Some("block"));
        assert!(after_first > 0);

        // Same tag, different case: no further provider reads.
        let _ = cache.defaults_for("DIV");
        assert_eq!(provider.calls.get(), after_first);
    }

    #[test]
    fn not_ready_provider_yields_empty_baseline() {
        let provider = CountingProvider {
            ready: false,
            calls: Cell::new(0),
        };
        let mut cache = DefaultsCache::new(&provider);

        assert!(cache.defaults_for("div").is_empty());
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn close_releases_provider() {
        let provider = CountingProvider {
            ready: true,
            calls: Cell::new(0),
        };
        let mut cache = DefaultsCache::new(&provider);
        let _ = cache.defaults_for("span");
        cache.close();

        assert!(cache.defaults_for("span").is_empty());
    }
}
