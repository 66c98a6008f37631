//! Growable array of tagged values.
//!
//! Read-only algorithms (search, filter, min, ...) take [`Vector::as_slice`]
//! directly. In-place reordering and mutation go through the vector's own
//! `sort`, `reverse`, and `transform`, which keep every element at the
//! vector's type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use tofu_types::TypeTag;
use tofu_value::{
    callback_failed, empty_container, index_out_of_bounds, slices_equal, TaggedValue, TofuResult,
};

use crate::config::CollectionConfig;
use crate::element::{admit, element_tag, make, reserve, resolve_element_tag, vec_with_capacity};

/// Growable array of tagged values.
#[derive(Clone, Debug, Default)]
pub struct Vector {
    items: Vec<TaggedValue>,
    tag: TypeTag,
}

impl Vector {
    pub fn new(type_id: &str) -> Self {
        Vector {
            items: Vec::new(),
            tag: element_tag(type_id),
        }
    }

    pub fn with_config(type_id: &str, config: &CollectionConfig) -> TofuResult<Self> {
        Ok(Vector {
            items: vec_with_capacity(config.initial_capacity)?,
            tag: resolve_element_tag(type_id, config.type_policy)?,
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

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[TaggedValue] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaggedValue> {
        self.items.iter()
    }
}

// Insertion

impl Vector {
    pub fn push_back(&mut self, text: &str) -> TofuResult<()> {
        let len = self.items.len();
        self.place(len, make(self.tag, text))
    }

    pub fn push_front(&mut self, text: &str) -> TofuResult<()> {
        self.place(0, make(self.tag, text))
    }

    /// Insert before position `index`; `index == len` appends.
    pub fn push_at(&mut self, index: usize, text: &str) -> TofuResult<()> {
        self.place(index, make(self.tag, text))
    }

    pub fn push_back_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        let len = self.items.len();
        self.place(len, value)
    }

    pub fn push_front_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        self.place(0, value)
    }

    pub fn push_at_value(&mut self, index: usize, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        self.place(index, value)
    }

    fn place(&mut self, index: usize, value: TaggedValue) -> TofuResult<()> {
        if index > self.items.len() {
            return Err(index_out_of_bounds(index, self.items.len()));
        }
        reserve(&mut self.items, 1)?;
        self.items.insert(index, value);
        Ok(())
    }
}

// Removal

impl Vector {
    pub fn pop_back(&mut self) -> TofuResult<TaggedValue> {
        self.items.pop().ok_or_else(|| empty_container("vector"))
    }

    pub fn pop_front(&mut self) -> TofuResult<TaggedValue> {
        if self.items.is_empty() {
            return Err(empty_container("vector"));
        }
        Ok(self.items.remove(0))
    }

    pub fn pop_at(&mut self, index: usize) -> TofuResult<TaggedValue> {
        if index >= self.items.len() {
            return Err(index_out_of_bounds(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn take(&mut self) -> Vector {
        Vector {
            items: std::mem::take(&mut self.items),
            tag: self.tag,
        }
    }
}

// In-place algorithms

impl Vector {
    /// Stable in-place sort under `compare`.
    pub fn sort(&mut self, ascending: bool) {
        tofu_algorithm::sort(&mut self.items, ascending);
    }

    /// Stable in-place sort under a caller-supplied order.
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&TaggedValue, &TaggedValue) -> Ordering,
    {
        tofu_algorithm::sort_by(&mut self.items, cmp);
    }

    pub fn reverse(&mut self) {
        tofu_algorithm::reverse(&mut self.items);
    }

    /// Apply `f` to every element, stopping at the first failure.
    ///
    /// Each element is updated on a copy that replaces the original only if
    /// `f` succeeds and the result still has the vector's type. A callback
    /// error becomes `CallbackFailed`; a changed tag becomes `TypeMismatch`
    /// and leaves that element as it was. Earlier elements keep their new
    /// state.
    pub fn transform<F, E>(&mut self, mut f: F) -> TofuResult<()>
    where
        F: FnMut(&mut TaggedValue) -> Result<(), E>,
        E: fmt::Display,
    {
        for (index, item) in self.items.iter_mut().enumerate() {
            let mut candidate = item.clone();
            if let Err(e) = f(&mut candidate) {
                tracing::debug!(index, error = %e, "vector transform aborted");
                return Err(callback_failed(index, e.to_string()));
            }
            *item = admit(self.tag, candidate)?;
        }
        Ok(())
    }
}

// Access

impl Vector {
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

    /// First element equal to `value`.
    pub fn search(&self, value: &TaggedValue) -> Option<usize> {
        self.items.iter().position(|item| item.equals(value))
    }
}

impl Index<usize> for Vector {
    type Output = TaggedValue;

    fn index(&self, index: usize) -> &TaggedValue {
        &self.items[index]
    }
}

impl PartialEq for Vector {
    /// Element-wise equality; the element type is not compared.
    fn eq(&self, other: &Self) -> bool {
        slices_equal(&self.items, &other.items)
    }
}

impl Eq for Vector {}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a TaggedValue;
    type IntoIter = std::slice::Iter<'a, TaggedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
