//! Singly linked list of owned boxed nodes.
//!
//! Appends walk to the tail; prepends are O(1). Teardown and cloning are
//! iterative, so long lists never recurse through their nodes.

use std::fmt;
use std::iter::FusedIterator;

use tofu_types::TypeTag;
use tofu_value::{empty_container, index_out_of_bounds, not_found, TaggedValue, TofuResult};

use crate::element::{admit, element_tag, make};

type Link = Option<Box<Node>>;

struct Node {
    value: TaggedValue,
    next: Link,
}

/// Singly linked list of tagged values.
#[derive(Default)]
pub struct SList {
    head: Link,
    len: usize,
    tag: TypeTag,
}

impl SList {
    /// Empty list whose elements have type `type_id` (unknown ids become `any`).
    pub fn new(type_id: &str) -> Self {
        SList {
            head: None,
            len: 0,
            tag: element_tag(type_id),
        }
    }

    #[inline]
    pub fn element_type(&self) -> TypeTag {
        self.tag
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Move the contents out, leaving an empty list of the same type.
    pub fn take(&mut self) -> SList {
        let empty = SList {
            head: None,
            len: 0,
            tag: self.tag,
        };
        std::mem::replace(self, empty)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

// Insertion

impl SList {
    /// Append an element built from `text`.
    pub fn insert(&mut self, text: &str) -> TofuResult<()> {
        self.push_back_node(make(self.tag, text))
    }

    /// Append a ready value of the list's type.
    pub fn insert_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        self.push_back_node(value)
    }

    /// Prepend an element built from `text`.
    pub fn insert_front(&mut self, text: &str) {
        let value = make(self.tag, text);
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    fn push_back_node(&mut self, value: TaggedValue) -> TofuResult<()> {
        let len = self.len;
        let tail = self
            .link_mut(len)
            .ok_or_else(|| index_out_of_bounds(len, len))?;
        *tail = Some(Box::new(Node { value, next: None }));
        self.len += 1;
        Ok(())
    }

    /// The link slot `index` hops from the head (`len` is the tail slot).
    fn link_mut(&mut self, index: usize) -> Option<&mut Link> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

// Removal

impl SList {
    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &TaggedValue) -> TofuResult<TaggedValue> {
        let index = self.position(value).ok_or_else(not_found)?;
        self.remove_at(index)
    }

    /// Remove the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> TofuResult<TaggedValue> {
        let len = self.len;
        let link = self
            .link_mut(index)
            .ok_or_else(|| index_out_of_bounds(index, len))?;
        let mut node = link.take().ok_or_else(|| index_out_of_bounds(index, len))?;
        *link = node.next.take();
        self.len -= 1;
        Ok(node.value)
    }

    /// Drop every element, keeping the element type.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }
}

// Access

impl SList {
    /// First element equal to `value`.
    pub fn search(&self, value: &TaggedValue) -> Option<&TaggedValue> {
        self.iter().find(|item| item.equals(value))
    }

    pub fn contains(&self, value: &TaggedValue) -> bool {
        self.search(value).is_some()
    }

    fn position(&self, value: &TaggedValue) -> Option<usize> {
        self.iter().position(|item| item.equals(value))
    }

    pub fn get(&self, index: usize) -> Option<&TaggedValue> {
        self.iter().nth(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut TaggedValue> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node?.next.as_deref_mut();
        }
        node.map(|n| &mut n.value)
    }

    /// Replace the payload at `index`, honoring the element's mutable flag.
    pub fn set(&mut self, index: usize, text: &str) -> TofuResult<()> {
        let len = self.len;
        self.get_mut(index)
            .ok_or_else(|| index_out_of_bounds(index, len))?
            .set_value(text)
    }

    pub fn front(&self) -> Option<&TaggedValue> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn back(&self) -> Option<&TaggedValue> {
        self.iter().last()
    }

    pub fn set_front(&mut self, text: &str) -> TofuResult<()> {
        if self.is_empty() {
            return Err(empty_container("slist"));
        }
        self.set(0, text)
    }

    pub fn set_back(&mut self, text: &str) -> TofuResult<()> {
        match self.len.checked_sub(1) {
            Some(last) => self.set(last, text),
            None => Err(empty_container("slist")),
        }
    }

    /// Reverse in place by relinking nodes.
    pub fn reverse(&mut self) {
        tracing::trace!(len = self.len, "slist reverse");
        let mut reversed: Link = None;
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }
}

impl Drop for SList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for SList {
    fn clone(&self) -> Self {
        let mut copy = SList {
            head: None,
            len: 0,
            tag: self.tag,
        };
        // Build reversed with O(1) prepends, then relink once.
        for value in self.iter() {
            let next = copy.head.take();
            copy.head = Some(Box::new(Node {
                value: value.clone(),
                next,
            }));
        }
        copy.len = self.len;
        copy.reverse();
        copy
    }
}

impl fmt::Debug for SList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a SList {
    type Item = &'a TaggedValue;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Front-to-back iterator over an [`SList`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TaggedValue;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests;
