//! Last-in first-out stack.
//!
//! Positional access counts from the top: index 0 is the most recent push.

use tofu_types::TypeTag;
use tofu_value::{empty_container, index_out_of_bounds, TaggedValue, TofuResult};

use crate::element::{admit, element_tag, make, reserve};

/// LIFO stack of tagged values.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    items: Vec<TaggedValue>,
    tag: TypeTag,
}

impl Stack {
    pub fn new(type_id: &str) -> Self {
        Stack {
            items: Vec::new(),
            tag: element_tag(type_id),
        }
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

    pub fn push(&mut self, text: &str) -> TofuResult<()> {
        reserve(&mut self.items, 1)?;
        self.items.push(make(self.tag, text));
        Ok(())
    }

    pub fn push_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        reserve(&mut self.items, 1)?;
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> TofuResult<TaggedValue> {
        self.items.pop().ok_or_else(|| empty_container("stack"))
    }

    pub fn top(&self) -> Option<&TaggedValue> {
        self.items.last()
    }

    /// Element `index` positions below the top.
    pub fn get(&self, index: usize) -> Option<&TaggedValue> {
        self.items.iter().rev().nth(index)
    }

    pub fn set(&mut self, index: usize, text: &str) -> TofuResult<()> {
        let len = self.items.len();
        self.items
            .iter_mut()
            .rev()
            .nth(index)
            .ok_or_else(|| index_out_of_bounds(index, len))?
            .set_value(text)
    }

    /// First element equal to `value`, searching from the top.
    pub fn search(&self, value: &TaggedValue) -> Option<&TaggedValue> {
        self.iter().find(|item| item.equals(value))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn take(&mut self) -> Stack {
        Stack {
            items: std::mem::take(&mut self.items),
            tag: self.tag,
        }
    }

    /// Top to bottom.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, TaggedValue>> {
        self.items.iter().rev()
    }
}

#[cfg(test)]
mod tests;
