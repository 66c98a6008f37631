//! Insertion-ordered set.
//!
//! Elements live in a `Vec` in insertion order; an `FxHashSet` mirrors them
//! for membership checks. Uniqueness follows [`TaggedValue::equals`].

use rustc_hash::FxHashSet;
use tofu_types::TypeTag;
use tofu_value::{allocation_failure_from, duplicate, not_found, TaggedValue, TofuResult};

use crate::config::CollectionConfig;
use crate::element::{admit, element_tag, make, reserve, resolve_element_tag, vec_with_capacity};

/// Set of unique tagged values.
#[derive(Clone, Debug, Default)]
pub struct SetOf {
    items: Vec<TaggedValue>,
    index: FxHashSet<TaggedValue>,
    tag: TypeTag,
}

impl SetOf {
    pub fn new(type_id: &str) -> Self {
        SetOf {
            items: Vec::new(),
            index: FxHashSet::default(),
            tag: element_tag(type_id),
        }
    }

    /// Build with reserved capacity and the configured type policy.
    pub fn with_config(type_id: &str, config: &CollectionConfig) -> TofuResult<Self> {
        let tag = resolve_element_tag(type_id, config.type_policy)?;
        let mut index = FxHashSet::default();
        index
            .try_reserve(config.initial_capacity)
            .map_err(|e| allocation_failure_from(config.initial_capacity, &e))?;
        Ok(SetOf {
            items: vec_with_capacity(config.initial_capacity)?,
            index,
            tag,
        })
    }

    #[inline]
    pub fn element_type(&self) -> TypeTag {
        self.tag
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn not_empty(&self) -> bool {
        !self.items.is_empty()
    }

    /// Add an element built from `text`; fails with `Duplicate` if present.
    pub fn insert(&mut self, text: &str) -> TofuResult<()> {
        self.add(make(self.tag, text))
    }

    pub fn insert_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        self.add(value)
    }

    fn add(&mut self, value: TaggedValue) -> TofuResult<()> {
        if self.index.contains(&value) {
            tracing::debug!(value = %value, "rejected duplicate set element");
            return Err(duplicate());
        }
        reserve(&mut self.items, 1)?;
        self.index.insert(value.clone());
        self.items.push(value);
        Ok(())
    }

    /// Remove the element equal to `value`.
    pub fn remove(&mut self, value: &TaggedValue) -> TofuResult<TaggedValue> {
        if !self.index.remove(value) {
            return Err(not_found());
        }
        let at = self
            .items
            .iter()
            .position(|item| item.equals(value))
            .ok_or_else(not_found)?;
        Ok(self.items.remove(at))
    }

    pub fn contains(&self, value: &TaggedValue) -> bool {
        self.index.contains(value)
    }

    /// Element at insertion position `index`.
    pub fn get(&self, index: usize) -> Option<&TaggedValue> {
        self.items.get(index)
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    pub fn take(&mut self) -> SetOf {
        SetOf {
            items: std::mem::take(&mut self.items),
            index: std::mem::take(&mut self.index),
            tag: self.tag,
        }
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, TaggedValue> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[TaggedValue] {
        &self.items
    }
}
