//! Double-ended queue.

use std::collections::VecDeque;

use tofu_types::TypeTag;
use tofu_value::{empty_container, index_out_of_bounds, TaggedValue, TofuResult};

use crate::element::{admit, element_tag, make, reserve_deque};

/// Double-ended queue of tagged values.
#[derive(Clone, Debug, Default)]
pub struct DQueue {
    items: VecDeque<TaggedValue>,
    tag: TypeTag,
}

impl DQueue {
    pub fn new(type_id: &str) -> Self {
        DQueue {
            items: VecDeque::new(),
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

    pub fn push_front(&mut self, text: &str) -> TofuResult<()> {
        reserve_deque(&mut self.items, 1)?;
        self.items.push_front(make(self.tag, text));
        Ok(())
    }

    pub fn push_back(&mut self, text: &str) -> TofuResult<()> {
        reserve_deque(&mut self.items, 1)?;
        self.items.push_back(make(self.tag, text));
        Ok(())
    }

    pub fn push_front_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        reserve_deque(&mut self.items, 1)?;
        self.items.push_front(value);
        Ok(())
    }

    pub fn push_back_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        reserve_deque(&mut self.items, 1)?;
        self.items.push_back(value);
        Ok(())
    }

    pub fn pop_front(&mut self) -> TofuResult<TaggedValue> {
        self.items
            .pop_front()
            .ok_or_else(|| empty_container("dqueue"))
    }

    pub fn pop_back(&mut self) -> TofuResult<TaggedValue> {
        self.items
            .pop_back()
            .ok_or_else(|| empty_container("dqueue"))
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
        self.items.front()
    }

    pub fn back(&self) -> Option<&TaggedValue> {
        self.items.back()
    }

    pub fn set_front(&mut self, text: &str) -> TofuResult<()> {
        self.items
            .front_mut()
            .ok_or_else(|| empty_container("dqueue"))?
            .set_value(text)
    }

    pub fn set_back(&mut self, text: &str) -> TofuResult<()> {
        self.items
            .back_mut()
            .ok_or_else(|| empty_container("dqueue"))?
            .set_value(text)
    }

    /// First element equal to `value`.
    pub fn search(&self, value: &TaggedValue) -> Option<&TaggedValue> {
        self.items.iter().find(|item| item.equals(value))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn take(&mut self) -> DQueue {
        DQueue {
            items: std::mem::take(&mut self.items),
            tag: self.tag,
        }
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, TaggedValue> {
        self.items.iter()
    }
}
