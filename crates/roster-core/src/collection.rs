//! Ordered key → character mapping
//!
//! Entries keep insertion order so listings are stable and a data file
//! survives a load/save cycle unchanged. Serialized as a JSON object.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Character;

/// A snapshot of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    entries: Vec<(String, Character)>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Character> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Character> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, c)| c)
    }

    /// Insert or replace. A replaced entry keeps its position; a new entry
    /// goes to the end. Returns the previous record, if any.
    pub fn insert(&mut self, key: impl Into<String>, character: Character) -> Option<Character> {
        let key = key.into();
        match self.get_mut(&key) {
            Some(existing) => Some(std::mem::replace(existing, character)),
            None => {
                self.entries.push((key, character));
                None
            }
        }
    }

    /// Remove an entry, shifting later entries up to keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Character> {
        let idx = self.position(key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Character)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Character> {
        self.entries.iter().map(|(_, c)| c)
    }
}

impl FromIterator<(String, Character)> for Collection {
    fn from_iter<I: IntoIterator<Item = (String, Character)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (key, character) in iter {
            collection.insert(key, character);
        }
        collection
    }
}

impl IntoIterator for Collection {
    type Item = (String, Character);
    type IntoIter = std::vec::IntoIter<(String, Character)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, character) in &self.entries {
            map.serialize_entry(key, character)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor)
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = Collection;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of character key to character record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Collection, A::Error> {
        let mut collection = Collection {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((key, character)) = access.next_entry::<String, Character>()? {
            if collection.contains_key(&key) {
                return Err(de::Error::custom(format_args!("duplicate key `{key}`")));
            }
            collection.entries.push((key, character));
        }
        Ok(collection)
    }
}
