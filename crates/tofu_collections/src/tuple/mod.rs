//! Small ordered group of tagged values.
//!
//! Tuples are usually short, so up to four elements live inline.

use smallvec::SmallVec;
use tofu_types::TypeTag;
use tofu_value::{
    allocation_failure_from, empty_container, index_out_of_bounds, TaggedValue, TofuResult,
};

use crate::config::CollectionConfig;
use crate::element::{admit, element_tag, make, resolve_element_tag};

const INLINE: usize = 4;

/// Ordered group of tagged values.
#[derive(Clone, Debug, Default)]
pub struct Tuple {
    items: SmallVec<[TaggedValue; INLINE]>,
    tag: TypeTag,
}

impl Tuple {
    pub fn new(type_id: &str) -> Self {
        Tuple {
            items: SmallVec::new(),
            tag: element_tag(type_id),
        }
    }

    pub fn with_config(type_id: &str, config: &CollectionConfig) -> TofuResult<Self> {
        let tag = resolve_element_tag(type_id, config.type_policy)?;
        let mut items = SmallVec::new();
        items
            .try_reserve(config.initial_capacity)
            .map_err(|e| allocation_failure_from(config.initial_capacity, &e))?;
        Ok(Tuple { items, tag })
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

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Append an element built from `text`.
    pub fn add(&mut self, text: &str) -> TofuResult<()> {
        self.append(make(self.tag, text))
    }

    pub fn add_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        self.append(value)
    }

    fn append(&mut self, value: TaggedValue) -> TofuResult<()> {
        self.items
            .try_reserve(1)
            .map_err(|e| allocation_failure_from(1, &e))?;
        self.items.push(value);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> TofuResult<TaggedValue> {
        if index >= self.items.len() {
            return Err(index_out_of_bounds(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&TaggedValue> {
        self.items.get(index)
    }

    pub fn set(&mut self, index: usize, text: &str) -> TofuResult<()> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| index_out_of_bounds(index, len))?
            .set_value(text)
    }

    pub fn front(&self) -> Option<&TaggedValue> {
        self.items.first()
    }

    pub fn back(&self) -> Option<&TaggedValue> {
        self.items.last()
    }

    pub fn set_front(&mut self, text: &str) -> TofuResult<()> {
        self.items
            .first_mut()
            .ok_or_else(|| empty_container("tuple"))?
            .set_value(text)
    }

    pub fn set_back(&mut self, text: &str) -> TofuResult<()> {
        self.items
            .last_mut()
            .ok_or_else(|| empty_container("tuple"))?
            .set_value(text)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn take(&mut self) -> Tuple {
        Tuple {
            items: std::mem::take(&mut self.items),
            tag: self.tag,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaggedValue> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[TaggedValue] {
        &self.items
    }
}

#[cfg(test)]
mod tests;
