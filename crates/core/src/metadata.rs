//! Metadata maps for collections and segments
//!
//! A `Metadata` maps a key to exactly one `MetadataValue`. Keys are unique;
//! setting an existing key overwrites it. Iteration visits every key exactly
//! once in no particular order.
//!
//! Collections and segments share the same map type. The aliases below only
//! name the two uses.

use crate::value::MetadataValue;
use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;

/// Metadata attached to a collection
pub type CollectionMetadata = Metadata;

/// Metadata attached to a segment
pub type SegmentMetadata = Metadata;

/// Key to value mapping for entity metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    entries: HashMap<String, MetadataValue>,
}

impl Metadata {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value for `key`
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Alias of [`Metadata::set`]
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.set(key, value);
    }

    /// Builder form of [`Metadata::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Get the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    /// Check whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the map has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> hash_map::Iter<'_, String, MetadataValue> {
        self.entries.iter()
    }
}

impl FromIterator<(String, MetadataValue)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, MetadataValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Metadata {
    type Item = (String, MetadataValue);
    type IntoIter = hash_map::IntoIter<String, MetadataValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a String, &'a MetadataValue);
    type IntoIter = hash_map::Iter<'a, String, MetadataValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
