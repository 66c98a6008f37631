//! Insertion-ordered map.
//!
//! Keys and values have their own element types. Key lookups take the key
//! text and build the key with the map's key type, so `get("1")` on an
//! `i32`-keyed map finds the entry inserted as `("1", ..)`.

use rustc_hash::FxHashMap;
use tofu_types::TypeTag;
use tofu_value::{allocation_failure_from, duplicate, not_found, TaggedValue, TofuResult};

use crate::config::CollectionConfig;
use crate::element::{admit, element_tag, make, reserve, resolve_element_tag, vec_with_capacity};

/// Map from tagged keys to tagged values.
#[derive(Clone, Debug, Default)]
pub struct MapOf {
    entries: Vec<(TaggedValue, TaggedValue)>,
    index: FxHashMap<TaggedValue, usize>,
    key_tag: TypeTag,
    value_tag: TypeTag,
}

impl MapOf {
    pub fn new(key_type: &str, value_type: &str) -> Self {
        MapOf {
            entries: Vec::new(),
            index: FxHashMap::default(),
            key_tag: element_tag(key_type),
            value_tag: element_tag(value_type),
        }
    }

    pub fn with_config(
        key_type: &str,
        value_type: &str,
        config: &CollectionConfig,
    ) -> TofuResult<Self> {
        let key_tag = resolve_element_tag(key_type, config.type_policy)?;
        let value_tag = resolve_element_tag(value_type, config.type_policy)?;
        let mut index = FxHashMap::default();
        index
            .try_reserve(config.initial_capacity)
            .map_err(|e| allocation_failure_from(config.initial_capacity, &e))?;
        Ok(MapOf {
            entries: vec_with_capacity(config.initial_capacity)?,
            index,
            key_tag,
            value_tag,
        })
    }

    #[inline]
    pub fn key_type(&self) -> TypeTag {
        self.key_tag
    }

    #[inline]
    pub fn value_type(&self) -> TypeTag {
        self.value_tag
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn not_empty(&self) -> bool {
        !self.entries.is_empty()
    }

    fn key(&self, text: &str) -> TaggedValue {
        make(self.key_tag, text)
    }
}

// Insertion and removal

impl MapOf {
    /// Add a new entry; fails with `Duplicate` if the key exists.
    pub fn insert(&mut self, key: &str, value: &str) -> TofuResult<()> {
        let key = self.key(key);
        let value = make(self.value_tag, value);
        self.add(key, value)
    }

    pub fn insert_value(&mut self, key: TaggedValue, value: TaggedValue) -> TofuResult<()> {
        let key = admit(self.key_tag, key)?;
        let value = admit(self.value_tag, value)?;
        self.add(key, value)
    }

    fn add(&mut self, key: TaggedValue, value: TaggedValue) -> TofuResult<()> {
        if self.index.contains_key(&key) {
            tracing::debug!(key = %key, "rejected duplicate map key");
            return Err(duplicate());
        }
        reserve(&mut self.entries, 1)?;
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        Ok(())
    }

    /// Update the value for `key`, inserting the entry if it is missing.
    ///
    /// An existing value keeps its metadata and mutable flag; an immutable
    /// one fails with `ImmutableValue`.
    pub fn set(&mut self, key: &str, value: &str) -> TofuResult<()> {
        match self.get_mut(key) {
            Some(existing) => existing.set_value(value),
            None => self.insert(key, value),
        }
    }

    /// Remove the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> TofuResult<TaggedValue> {
        let key = self.key(key);
        let at = self.index.remove(&key).ok_or_else(not_found)?;
        let (_, value) = self.entries.remove(at);
        for (shifted, _) in &self.entries[at..] {
            if let Some(slot) = self.index.get_mut(shifted) {
                *slot -= 1;
            }
        }
        Ok(value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn take(&mut self) -> MapOf {
        MapOf {
            entries: std::mem::take(&mut self.entries),
            index: std::mem::take(&mut self.index),
            key_tag: self.key_tag,
            value_tag: self.value_tag,
        }
    }
}

// Lookup

impl MapOf {
    pub fn get(&self, key: &str) -> Option<&TaggedValue> {
        let at = *self.index.get(&self.key(key))?;
        self.entries.get(at).map(|(_, v)| v)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut TaggedValue> {
        let at = *self.index.get(&self.key(key))?;
        self.entries.get_mut(at).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(&self.key(key))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &TaggedValue> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &TaggedValue> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&TaggedValue, &TaggedValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}
