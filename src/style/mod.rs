//! Style extraction: baseline resolution, diffing, and canonicalization.
//!
//! An element's resolved style is diffed against the baseline for its tag
//! ([`diff::diff_styles`]), then the surviving overrides are canonicalized
//! into shorthands and pruned of layout-mode-irrelevant properties
//! ([`canonical::canonicalize`]). Everything operates on [`StyleMap`], an
//! insertion-ordered string map: downstream shorthand merging and utility
//! class emission depend on key order being the curated property-list order.

pub mod canonical;
pub mod defaults;
pub mod diff;
pub mod properties;

pub use canonical::canonicalize;
pub use defaults::DefaultsCache;
pub use diff::diff_styles;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered mapping from CSS property name to value.
///
/// Small by construction (a few dozen entries at most), so lookups are
/// linear scans. Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Insert or replace. A replaced property keeps its original position;
    /// a new property is appended.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == property)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, String)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order() {
        let mut map = StyleMap::new();
        map.insert("display", "flex");
        map.insert("padding-top", "8px");
        map.insert("color", "red");
        map.insert("display", "grid"); // replace in place

        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["display", "padding-top", "color"]);
        assert_eq!(map.get("display"), Some("grid"));
    }

    #[test]
    fn serializes_in_insertion_order() {
        let map: StyleMap = [("b", "2"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }
}
