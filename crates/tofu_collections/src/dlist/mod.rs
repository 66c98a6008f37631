//! Doubly linked list over an index arena.
//!
//! Nodes live in a `Vec` of slots and link to each other by [`NodeIdx`].
//! Freed slots are threaded onto a free list and reused by later inserts,
//! so indices stay stable while a node is alive.

use std::fmt;
use std::iter::FusedIterator;

use tofu_types::TypeTag;
use tofu_value::{
    allocation_failure, empty_container, index_out_of_bounds, not_found, TaggedValue, TofuResult,
};

use crate::element::{admit, element_tag, make, reserve};

/// Index of a node slot in the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(u32);

impl NodeIdx {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone)]
struct Node {
    value: TaggedValue,
    prev: Option<NodeIdx>,
    next: Option<NodeIdx>,
}

#[derive(Clone)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<NodeIdx> },
}

/// Doubly linked list of tagged values.
#[derive(Clone, Default)]
pub struct DList {
    slots: Vec<Slot>,
    free: Option<NodeIdx>,
    head: Option<NodeIdx>,
    tail: Option<NodeIdx>,
    len: usize,
    tag: TypeTag,
}

impl DList {
    /// Empty list whose elements have type `type_id` (unknown ids become `any`).
    pub fn new(type_id: &str) -> Self {
        DList {
            tag: element_tag(type_id),
            ..DList::default()
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
        self.len == 0
    }

    #[inline]
    pub fn not_empty(&self) -> bool {
        self.len != 0
    }

    /// Move the contents out, leaving an empty list of the same type.
    pub fn take(&mut self) -> DList {
        let empty = DList {
            tag: self.tag,
            ..DList::default()
        };
        std::mem::replace(self, empty)
    }

    /// Drop every element and release the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Front-to-back iterator; `.rev()` walks back to front.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Back-to-front iterator.
    pub fn iter_rev(&self) -> std::iter::Rev<Iter<'_>> {
        self.iter().rev()
    }
}

// Arena

impl DList {
    fn node(&self, idx: NodeIdx) -> Option<&Node> {
        match self.slots.get(idx.index()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    fn node_mut(&mut self, idx: NodeIdx) -> Option<&mut Node> {
        match self.slots.get_mut(idx.index()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    fn alloc(&mut self, node: Node) -> TofuResult<NodeIdx> {
        if let Some(idx) = self.free {
            if let Some(slot) = self.slots.get_mut(idx.index()) {
                if let Slot::Vacant { next_free } = *slot {
                    self.free = next_free;
                    *slot = Slot::Occupied(node);
                    return Ok(idx);
                }
            }
        }
        let idx = u32::try_from(self.slots.len())
            .map(NodeIdx)
            .map_err(|_| allocation_failure(self.slots.len() + 1))?;
        reserve(&mut self.slots, 1)?;
        self.slots.push(Slot::Occupied(node));
        Ok(idx)
    }

    fn release(&mut self, idx: NodeIdx) -> Option<Node> {
        let slot = self.slots.get_mut(idx.index())?;
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(slot, vacant) {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                Some(node)
            }
            already @ Slot::Vacant { .. } => {
                *slot = already;
                None
            }
        }
    }

    /// Detach `idx` from its neighbours and free its slot.
    fn unlink(&mut self, idx: NodeIdx) -> Option<TaggedValue> {
        let node = self.release(idx)?;
        match node.prev {
            Some(prev) => {
                if let Some(p) = self.node_mut(prev) {
                    p.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(n) = self.node_mut(next) {
                    n.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Index of the `index`-th node, walking from the nearer end.
    fn idx_at(&self, index: usize) -> Option<NodeIdx> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = self.node(cursor?)?.next;
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(self.len - 1 - index) {
                cursor = self.node(cursor?)?.prev;
            }
            cursor
        }
    }

    fn position(&self, value: &TaggedValue) -> Option<NodeIdx> {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.node(idx)?;
            if node.value.equals(value) {
                return Some(idx);
            }
            cursor = node.next;
        }
        None
    }
}

// Insertion and removal

impl DList {
    pub fn push_back(&mut self, text: &str) -> TofuResult<()> {
        self.link_back(make(self.tag, text))
    }

    pub fn push_front(&mut self, text: &str) -> TofuResult<()> {
        self.link_front(make(self.tag, text))
    }

    pub fn push_back_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        self.link_back(value)
    }

    pub fn push_front_value(&mut self, value: TaggedValue) -> TofuResult<()> {
        let value = admit(self.tag, value)?;
        self.link_front(value)
    }

    fn link_back(&mut self, value: TaggedValue) -> TofuResult<()> {
        let prev = self.tail;
        let idx = self.alloc(Node {
            value,
            prev,
            next: None,
        })?;
        match prev.and_then(|p| self.node_mut(p)) {
            Some(p) => p.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        Ok(())
    }

    fn link_front(&mut self, value: TaggedValue) -> TofuResult<()> {
        let next = self.head;
        let idx = self.alloc(Node {
            value,
            prev: None,
            next,
        })?;
        match next.and_then(|n| self.node_mut(n)) {
            Some(n) => n.prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        Ok(())
    }

    pub fn pop_back(&mut self) -> TofuResult<TaggedValue> {
        self.tail
            .and_then(|idx| self.unlink(idx))
            .ok_or_else(|| empty_container("dlist"))
    }

    pub fn pop_front(&mut self) -> TofuResult<TaggedValue> {
        self.head
            .and_then(|idx| self.unlink(idx))
            .ok_or_else(|| empty_container("dlist"))
    }

    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &TaggedValue) -> TofuResult<TaggedValue> {
        self.position(value)
            .and_then(|idx| self.unlink(idx))
            .ok_or_else(not_found)
    }
}

// Access

impl DList {
    /// First element equal to `value`.
    pub fn search(&self, value: &TaggedValue) -> Option<&TaggedValue> {
        self.position(value)
            .and_then(|idx| self.node(idx))
            .map(|node| &node.value)
    }

    pub fn contains(&self, value: &TaggedValue) -> bool {
        self.position(value).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&TaggedValue> {
        self.idx_at(index)
            .and_then(|idx| self.node(idx))
            .map(|node| &node.value)
    }

    /// Replace the payload at `index`, honoring the element's mutable flag.
    pub fn set(&mut self, index: usize, text: &str) -> TofuResult<()> {
        let len = self.len;
        self.idx_at(index)
            .and_then(|idx| self.node_mut(idx))
            .ok_or_else(|| index_out_of_bounds(index, len))?
            .value
            .set_value(text)
    }

    pub fn front(&self) -> Option<&TaggedValue> {
        self.head
            .and_then(|idx| self.node(idx))
            .map(|node| &node.value)
    }

    pub fn back(&self) -> Option<&TaggedValue> {
        self.tail
            .and_then(|idx| self.node(idx))
            .map(|node| &node.value)
    }

    /// Reverse in place by swapping every node's links.
    pub fn reverse(&mut self) {
        tracing::trace!(len = self.len, "dlist reverse");
        for slot in &mut self.slots {
            if let Slot::Occupied(node) = slot {
                std::mem::swap(&mut node.prev, &mut node.next);
            }
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }
}

impl fmt::Debug for DList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a DList {
    type Item = &'a TaggedValue;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Double-ended iterator over a [`DList`].
pub struct Iter<'a> {
    list: &'a DList,
    front: Option<NodeIdx>,
    back: Option<NodeIdx>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TaggedValue;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}
