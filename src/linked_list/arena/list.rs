use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::mem;

use super::iter::Iter;
use super::node::{NodeRef, Slot};

/// Returned when the slot store cannot grow to hold one more node.
///
/// This is the recoverable failure mode: the list is unchanged and the
/// caller may retry or abandon the larger operation.
#[derive(Debug, thiserror::Error)]
#[error("failed to reserve space for a list node")]
pub struct AllocError(#[from] TryReserveError);

/// A singly linked list backed by an arena of slots.
///
/// The list owns its nodes and the data they hold. Insertions return a
/// [`NodeRef`] for the new node; `insert_after`/`remove_after` work through
/// such handles in O(1). Removed slots are recycled before the store grows.
pub struct SingleList<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeRef>,
    head: Option<NodeRef>,
    tail: Option<NodeRef>,
    len: usize,
}

impl<T> SingleList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SingleList {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// store has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        SingleList {
            slots: Vec::with_capacity(capacity),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Inserts `data` at the head of the list and returns the new node's
    /// handle. If the list was empty, the node is also the tail.
    pub fn push(&mut self, data: T) -> Result<NodeRef, AllocError> {
        let node = self.alloc(data, self.head)?;
        if self.len == 0 {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
        Ok(node)
    }

    /// Removes the head node and returns its data.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty. An empty pop is a breach of the call
    /// contract, not a recoverable condition; check [`SingleList::len`]
    /// first.
    pub fn pop(&mut self) -> T {
        let head = self.head.expect("pop from an empty list");
        let (data, next) = self.release(head);
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        data
    }

    /// Inserts `data` at the tail of the list and returns the new node's
    /// handle. On an empty list this is identical to `push`.
    pub fn append(&mut self, data: T) -> Result<NodeRef, AllocError> {
        let Some(tail) = self.tail else {
            return self.push(data);
        };
        let node = self.alloc(data, None)?;
        self.set_next(tail, Some(node));
        self.tail = Some(node);
        self.len += 1;
        Ok(node)
    }

    /// Inserts `data` immediately after `node` and returns the new node's
    /// handle. If `node` was the tail, the new node becomes the tail.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not name a live node of this list.
    pub fn insert_after(&mut self, node: NodeRef, data: T) -> Result<NodeRef, AllocError> {
        let next = self.next(node);
        let new = self.alloc(data, next)?;
        self.set_next(node, Some(new));
        if self.tail == Some(node) {
            self.tail = Some(new);
        }
        self.len += 1;
        Ok(new)
    }

    /// Removes the node immediately after `node` and returns its data. If
    /// the removed node was the tail, `node` becomes the tail.
    ///
    /// # Panics
    ///
    /// Panics if `node` is the tail or does not name a live node of this
    /// list.
    pub fn remove_after(&mut self, node: NodeRef) -> T {
        let victim = self.next(node).expect("no successor to remove");
        let (data, rest) = self.release(victim);
        self.set_next(node, rest);
        if self.tail == Some(victim) {
            self.tail = Some(node);
        }
        self.len -= 1;
        data
    }

    /// Alias for `append`: adds `data` at the back of the queue.
    pub fn enqueue(&mut self, data: T) -> Result<NodeRef, AllocError> {
        self.append(data)
    }

    /// Alias for `pop`: removes the element at the front of the queue.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn dequeue(&mut self) -> T {
        self.pop()
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the store can hold before growing.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Handle of the first node, or `None` if the list is empty.
    pub fn head(&self) -> Option<NodeRef> {
        self.head
    }

    /// Handle of the last node, or `None` if the list is empty.
    pub fn tail(&self) -> Option<NodeRef> {
        self.tail
    }

    /// Handle of the node after `node`, or `None` at the tail.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not name a live node of this list.
    pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
        match self.slots.get(node.0) {
            Some(Slot::Occupied { next, .. }) => *next,
            _ => panic!("NodeRef does not name a live node"),
        }
    }

    /// Returns the data of `node`, or `None` if the handle is stale.
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        match self.slots.get(node.0) {
            Some(Slot::Occupied { data, .. }) => Some(data),
            _ => None,
        }
    }

    /// Mutable counterpart of [`SingleList::get`].
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        match self.slots.get_mut(node.0) {
            Some(Slot::Occupied { data, .. }) => Some(data),
            _ => None,
        }
    }

    /// Removes every element, handing each one to `destroy` in head-to-tail
    /// order. The list stays usable afterwards and the store keeps its
    /// capacity.
    pub fn clear_with<F>(&mut self, mut destroy: F)
    where
        F: FnMut(T),
    {
        while !self.is_empty() {
            destroy(self.pop());
        }
    }

    /// Removes and drops every element.
    pub fn clear(&mut self) {
        self.clear_with(drop);
    }

    /// Returns an iterator over the elements, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Occupies a slot with `data`, recycling the free chain before growing
    /// the store.
    fn alloc(&mut self, data: T, next: Option<NodeRef>) -> Result<NodeRef, AllocError> {
        match self.free {
            Some(node) => {
                let next_free = match &self.slots[node.0] {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied { .. } => unreachable!(),
                };
                self.slots[node.0] = Slot::Occupied { data, next };
                self.free = next_free;
                Ok(node)
            }
            None => {
                self.slots.try_reserve(1)?;
                let node = NodeRef(self.slots.len());
                self.slots.push(Slot::Occupied { data, next });
                Ok(node)
            }
        }
    }

    /// Vacates an occupied slot onto the free chain, returning its data and
    /// successor.
    fn release(&mut self, node: NodeRef) -> (T, Option<NodeRef>) {
        let vacant = Slot::Vacant { next_free: self.free };
        match mem::replace(&mut self.slots[node.0], vacant) {
            Slot::Occupied { data, next } => {
                self.free = Some(node);
                (data, next)
            }
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    fn set_next(&mut self, node: NodeRef, next: Option<NodeRef>) {
        match &mut self.slots[node.0] {
            Slot::Occupied { next: succ, .. } => *succ = next,
            Slot::Vacant { .. } => unreachable!(),
        }
    }
}

impl<T> Default for SingleList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for SingleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
