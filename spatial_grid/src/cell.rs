// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linked cell storage.
//!
//! Every body reference held by a grid lives in one slot of a per-grid [`Arena`].
//! A [`Cell`] is an intrusive doubly-linked list threaded through those slots, so
//! appending, unlinking and moving a single node between cells is O(1), never
//! allocates, and never changes the slot of any other body.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

#[derive(Debug)]
struct Node<B> {
    body: Rc<B>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Slot storage shared by all cells of one grid.
pub(crate) struct Arena<B> {
    nodes: Vec<Option<Node<B>>>,
    free_list: Vec<usize>,
}

impl<B> Default for Arena<B> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<B> Debug for Arena<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arena")
            .field("total_slots", &self.nodes.len())
            .field("free_slots", &self.free_list.len())
            .finish()
    }
}

impl<B> Arena<B> {
    /// Store `body` in a detached node and return its slot.
    pub(crate) fn insert(&mut self, body: Rc<B>) -> usize {
        let node = Node {
            body,
            prev: None,
            next: None,
        };
        if let Some(slot) = self.free_list.pop() {
            self.nodes[slot] = Some(node);
            slot
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    /// Free a detached node, handing back its body reference.
    fn release(&mut self, slot: usize) -> Rc<B> {
        let node = self.nodes[slot]
            .take()
            .expect("grid invariant violated: releasing vacant slot");
        self.free_list.push(slot);
        node.body
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
    }

    fn node(&self, slot: usize) -> &Node<B> {
        self.nodes
            .get(slot)
            .expect("grid invariant violated: cell references out-of-bounds slot")
            .as_ref()
            .expect("grid invariant violated: cell references vacant slot")
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node<B> {
        self.nodes
            .get_mut(slot)
            .expect("grid invariant violated: cell references out-of-bounds slot")
            .as_mut()
            .expect("grid invariant violated: cell references vacant slot")
    }
}

/// One grid cell: a list of arena slots in insertion order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl Cell {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Link a detached node at the end of this cell.
    pub(crate) fn push_back<B>(&mut self, arena: &mut Arena<B>, slot: usize) {
        let tail = self.tail;
        let node = arena.node_mut(slot);
        node.prev = tail;
        node.next = None;
        match tail {
            Some(t) => arena.node_mut(t).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Detach a node that is linked into this cell. The slot stays allocated.
    pub(crate) fn unlink<B>(&mut self, arena: &mut Arena<B>, slot: usize) {
        let node = arena.node_mut(slot);
        let (prev, next) = (node.prev.take(), node.next.take());
        match prev {
            Some(p) => arena.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => arena.node_mut(n).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    /// First slot whose body satisfies `pred`.
    pub(crate) fn find<B>(
        &self,
        arena: &Arena<B>,
        mut pred: impl FnMut(&Rc<B>) -> bool,
    ) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = arena.node(slot);
            if pred(&node.body) {
                return Some(slot);
            }
            cursor = node.next;
        }
        None
    }

    /// Unlink and free every node whose body satisfies `pred`. Returns how many were removed.
    pub(crate) fn remove_where<B>(
        &mut self,
        arena: &mut Arena<B>,
        mut pred: impl FnMut(&Rc<B>) -> bool,
    ) -> usize {
        let mut removed = 0;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = arena.node(slot);
            cursor = node.next;
            if pred(&node.body) {
                self.unlink(arena, slot);
                drop(arena.release(slot));
                removed += 1;
            }
        }
        removed
    }

    pub(crate) fn iter<'a, B>(&self, arena: &'a Arena<B>) -> CellBodies<'a, B> {
        CellBodies {
            arena,
            next: self.head,
            remaining: self.len,
        }
    }
}

/// Iterator over the bodies of one cell, in insertion order.
///
/// Returned by [`Grid::cell_bodies`][crate::Grid::cell_bodies].
pub struct CellBodies<'a, B> {
    arena: &'a Arena<B>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, B> Iterator for CellBodies<'a, B> {
    type Item = &'a Rc<B>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.next?;
        let node = self.arena.node(slot);
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.body)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<B> ExactSizeIterator for CellBodies<'_, B> {}

impl<B> FusedIterator for CellBodies<'_, B> {}

impl<B> Debug for CellBodies<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CellBodies")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
