//! Priority queue.
//!
//! Entries are kept in service order: higher priority first, and FIFO among
//! equal priorities. Index 0 is always the next element `pop` returns.

use std::collections::VecDeque;

use tofu_types::TypeTag;
use tofu_value::{empty_container, index_out_of_bounds, not_found, TaggedValue, TofuResult};

use crate::element::{admit, element_tag, make, reserve_deque};

#[derive(Clone, Debug)]
struct Entry {
    value: TaggedValue,
    priority: i32,
}

/// Priority queue of tagged values.
#[derive(Clone, Debug, Default)]
pub struct PQueue {
    entries: VecDeque<Entry>,
    tag: TypeTag,
}

impl PQueue {
    pub fn new(type_id: &str) -> Self {
        PQueue {
            entries: VecDeque::new(),
            tag: element_tag(type_id),
        }
    }

    #[inline]
    pub fn element_type(&self) -> TypeTag {
        self.tag
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

    /// Insert an element built from `text` behind every entry of equal or
    /// higher priority.
    pub fn insert(&mut self, text: &str, priority: i32) -> TofuResult<()> {
        self.place(make(self.tag, text), priority)
    }

    pub fn insert_value(&mut self, value: TaggedValue, priority: i32) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        self.place(value, priority)
    }

    fn place(&mut self, value: TaggedValue, priority: i32) -> TofuResult<()> {
        reserve_deque(&mut self.entries, 1)?;
        let at = self.entries.partition_point(|e| e.priority >= priority);
        self.entries.insert(at, Entry { value, priority });
        Ok(())
    }

    /// Remove the highest-priority element.
    pub fn pop(&mut self) -> TofuResult<TaggedValue> {
        self.entries
            .pop_front()
            .map(|e| e.value)
            .ok_or_else(|| empty_container("pqueue"))
    }

    /// Remove the first element equal to `value` with exactly `priority`.
    pub fn remove(&mut self, value: &TaggedValue, priority: i32) -> TofuResult<TaggedValue> {
        self.search(value, priority)
            .and_then(|at| self.entries.remove(at))
            .map(|e| e.value)
            .ok_or_else(not_found)
    }

    /// Service-order index of the first element equal to `value` with
    /// exactly `priority`.
    pub fn search(&self, value: &TaggedValue, priority: i32) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.priority == priority && e.value.equals(value))
    }

    pub fn get(&self, index: usize) -> Option<&TaggedValue> {
        self.entries.get(index).map(|e| &e.value)
    }

    pub fn priority_at(&self, index: usize) -> Option<i32> {
        self.entries.get(index).map(|e| e.priority)
    }

    /// Replace the payload at `index`; the priority is unchanged.
    pub fn set(&mut self, index: usize, text: &str) -> TofuResult<()> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or_else(|| index_out_of_bounds(index, len))?
            .value
            .set_value(text)
    }

    pub fn front(&self) -> Option<&TaggedValue> {
        self.entries.front().map(|e| &e.value)
    }

    pub fn back(&self) -> Option<&TaggedValue> {
        self.entries.back().map(|e| &e.value)
    }

    pub fn set_front(&mut self, text: &str) -> TofuResult<()> {
        self.entries
            .front_mut()
            .ok_or_else(|| empty_container("pqueue"))?
            .value
            .set_value(text)
    }

    pub fn set_back(&mut self, text: &str) -> TofuResult<()> {
        self.entries
            .back_mut()
            .ok_or_else(|| empty_container("pqueue"))?
            .value
            .set_value(text)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn take(&mut self) -> PQueue {
        PQueue {
            entries: std::mem::take(&mut self.entries),
            tag: self.tag,
        }
    }

    /// Elements with their priorities, in service order.
    pub fn iter(&self) -> impl Iterator<Item = (&TaggedValue, i32)> + '_ {
        self.entries.iter().map(|e| (&e.value, e.priority))
    }
}
