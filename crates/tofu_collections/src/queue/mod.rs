//! First-in first-out queue.

use std::collections::VecDeque;

use tofu_types::TypeTag;
use tofu_value::{empty_container, TaggedValue, TofuResult};

use crate::element::{admit, element_tag, make, reserve_deque};

/// FIFO queue of tagged values.
#[derive(Clone, Debug, Default)]
pub struct Queue {
    items: VecDeque<TaggedValue>,
    tag: TypeTag,
}

impl Queue {
    pub fn new(type_id: &str) -> Self {
        Queue {
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

    /// Add an element built from `text` at the back.
    pub fn enqueue(&mut self, text: &str) -> TofuResult<()> {
        self.push(make(self.tag, text))
    }

    pub fn enqueue_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        self.push(value)
    }

    fn push(&mut self, value: TaggedValue) -> TofuResult<()> {
        reserve_deque(&mut self.items, 1)?;
        self.items.push_back(value);
        Ok(())
    }

    /// Remove the element at the front.
    pub fn dequeue(&mut self) -> TofuResult<TaggedValue> {
        self.items
            .pop_front()
            .ok_or_else(|| empty_container("queue"))
    }

    pub fn front(&self) -> Option<&TaggedValue> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&TaggedValue> {
        self.items.back()
    }

    /// First element equal to `value`.
    pub fn search(&self, value: &TaggedValue) -> Option<&TaggedValue> {
        self.items.iter().find(|item| item.equals(value))
    }

    pub fn contains(&self, value: &TaggedValue) -> bool {
        self.search(value).is_some()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Move the contents out, leaving an empty queue of the same type.
    pub fn take(&mut self) -> Queue {
        Queue {
            items: std::mem::take(&mut self.items),
            tag: self.tag,
        }
    }

    /// Front-to-back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, TaggedValue> {
        self.items.iter()
    }
}
