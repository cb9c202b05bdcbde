use std::collections::BTreeMap;

pub mod content_renderer;
pub mod metadata;
pub mod raw_document;

/// Header of a source document: lowercase keys mapped to trimmed values.
/// A repeated key keeps the last value seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataHeader {
    entries: BTreeMap<String, String>,
}

impl MetadataHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.trim().to_lowercase(), value.trim().to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(|v| v.as_str())
    }

    /// Value of the first key in `keys` that is present.
    pub fn get_first(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
