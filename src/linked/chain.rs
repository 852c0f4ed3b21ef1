//! Arena-backed doubly-linked chain.
//!
//! This module provides [`DoublyLinkedChain`], the substrate shared by
//! [`Deque`](super::Deque) and [`LinkedList`](super::LinkedList).
//!
//! # Overview
//!
//! Nodes live in a `Vec` of slots owned by the chain. Neighbor links are
//! [`NodeIndex`] handles into that arena rather than pointers, so a node is
//! owned exactly once (by its slot) and the back-link can never dangle or
//! double-free. Removed slots are threaded onto a free list and reused by the
//! next insertion.
//!
//! ```text
//! slots:  [ B | free | A | C ]          head = 2, tail = 3, length = 3
//!
//!          A(2) <-> B(0) <-> C(3)
//! ```
//!
//! Every mutation updates `head`, `tail`, `length` and the neighbor links
//! together, so the chain is consistent whenever control returns to the
//! caller.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::mem;

use super::node::{Node, NodeIndex, Slot};
use crate::container::write_sequence;
use crate::{CollectionError, Container};

/// A doubly-linked sequence with O(1) operations at both ends and
/// bidirectional positional access.
///
/// # Time Complexity
///
/// | Operation                  | Complexity            |
/// |----------------------------|-----------------------|
/// | `push_front` / `push_back` | O(1) amortized        |
/// | `pop_front` / `pop_back`   | O(1)                  |
/// | `front` / `back`           | O(1)                  |
/// | `get` / `get_mut`          | O(min(i, n - i))      |
/// | `insert`                   | O(min(i, n - i))      |
/// | `remove`                   | O(min(i, n - i))      |
/// | `find`                     | O(n)                  |
/// | `len` / `is_empty`         | O(1)                  |
///
/// # Examples
///
/// ```rust
/// use linear_collections::linked::DoublyLinkedChain;
///
/// let mut chain = DoublyLinkedChain::new();
/// chain.push_back(2);
/// chain.push_front(1);
/// chain.insert(2, 3).unwrap();
/// assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(chain.remove(1), Ok(2));
/// ```
///
/// # Memory
///
/// The arena keeps the peak number of slots it has ever held. Popping or
/// removing elements puts their slots on the free list instead of returning
/// them to the allocator; [`clear`](Self::clear) and
/// [`shrink_to_fit`](Self::shrink_to_fit) on an empty chain release them.
#[derive(Clone)]
pub struct DoublyLinkedChain<T> {
    /// Node arena; links are indices into this vector.
    slots: Vec<Slot<T>>,
    /// Head of the free list threaded through vacant slots.
    free: Option<NodeIndex>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
    length: usize,
}

impl<T> DoublyLinkedChain<T> {
    /// Creates a new empty chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::linked::DoublyLinkedChain;
    ///
    /// let chain: DoublyLinkedChain<i32> = DoublyLinkedChain::new();
    /// assert!(chain.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Creates an empty chain with arena space for `capacity` nodes.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of elements in the chain.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the chain contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Adds an element at the front.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    pub fn push_front(&mut self, value: T) {
        let index = self.allocate(Node::new(value, None, self.head));
        match self.head {
            Some(old_head) => self.node_mut(old_head).previous = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.length += 1;
    }

    /// Adds an element at the back.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    pub fn push_back(&mut self, value: T) {
        let index = self.allocate(Node::new(value, self.tail, None));
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the chain is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::CollectionError;
    /// use linear_collections::linked::DoublyLinkedChain;
    ///
    /// let mut chain: DoublyLinkedChain<i32> = (1..=2).collect();
    /// assert_eq!(chain.pop_front(), Ok(1));
    /// assert_eq!(chain.pop_front(), Ok(2));
    /// assert_eq!(chain.pop_front(), Err(CollectionError::EmptyCollection));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, CollectionError> {
        let Some(head) = self.head else {
            trace_event!("pop_front on empty chain");
            return Err(CollectionError::EmptyCollection);
        };
        Ok(self.unlink(head))
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the chain is empty.
    pub fn pop_back(&mut self) -> Result<T, CollectionError> {
        let Some(tail) = self.tail else {
            trace_event!("pop_back on empty chain");
            return Err(CollectionError::EmptyCollection);
        };
        Ok(self.unlink(tail))
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the chain is empty.
    pub fn front(&self) -> Result<&T, CollectionError> {
        self.head
            .map(|head| &self.node(head).value)
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the chain is empty.
    pub fn back(&self) -> Result<&T, CollectionError> {
        self.tail
            .map(|tail| &self.node(tail).value)
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The walk starts from whichever end is closer, so at most `len() / 2`
    /// links are followed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::CollectionError;
    /// use linear_collections::linked::DoublyLinkedChain;
    ///
    /// let chain: DoublyLinkedChain<i32> = [10, 20, 30].into_iter().collect();
    /// assert_eq!(chain.get(2), Ok(&30));
    /// assert_eq!(
    ///     chain.get(3),
    ///     Err(CollectionError::IndexOutOfRange { index: 3, length: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        let position = self.position(index)?;
        Ok(&self.node(position).value)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let position = self.position(index)?;
        Ok(&mut self.node_mut(position).value)
    }

    /// Inserts `value` so that it becomes the element at `index`, shifting
    /// later elements back by one.
    ///
    /// `index == 0` behaves as [`push_front`](Self::push_front) and
    /// `index == len()` as [`push_back`](Self::push_back).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index > len()`.
    ///
    /// # Complexity
    ///
    /// O(min(index, len - index))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::linked::DoublyLinkedChain;
    ///
    /// let mut chain: DoublyLinkedChain<i32> = [1, 3].into_iter().collect();
    /// chain.insert(1, 2).unwrap();
    /// chain.insert(3, 4).unwrap();
    /// assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if index > self.length {
            trace_event!(index, length = self.length, "insert out of range");
            return Err(CollectionError::out_of_range(index, self.length));
        }
        if index == 0 {
            self.push_front(value);
        } else if index == self.length {
            self.push_back(value);
        } else {
            let successor = self.locate(index);
            self.link_before(successor, value);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`,
    /// which includes every index of an empty chain.
    ///
    /// # Complexity
    ///
    /// O(min(index, len - index))
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        let position = self.position(index)?;
        Ok(self.unlink(position))
    }

    /// Returns the index of the first element equal to `value` under
    /// `equals`, or `None` if no element matches.
    ///
    /// `equals` is called as `equals(element, value)`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::linked::DoublyLinkedChain;
    ///
    /// let chain: DoublyLinkedChain<&str> = ["Apple", "Banana"].into_iter().collect();
    /// assert_eq!(chain.find(&"banana", |a, b| a.eq_ignore_ascii_case(b)), Some(1));
    /// assert_eq!(chain.find(&"cherry", |a, b| a == b), None);
    /// ```
    pub fn find<F>(&self, value: &T, equals: F) -> Option<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        self.iter().position(|element| equals(element, value))
    }

    /// Shrinks the arena as much as the live nodes allow.
    ///
    /// Slots vacated by `pop_*` and `remove` stay on the free list for reuse.
    /// On an empty chain this drops them all; otherwise only the spare
    /// capacity past the highest slot is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::linked::DoublyLinkedChain;
    ///
    /// let mut chain: DoublyLinkedChain<i32> = (0..1000).collect();
    /// while chain.pop_front().is_ok() {}
    /// chain.shrink_to_fit();
    /// chain.push_back(1);
    /// assert_eq!(chain.len(), 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if self.length == 0 {
            self.slots.clear();
            self.free = None;
        }
        self.slots.shrink_to_fit();
    }

    /// Removes every element and releases the arena's slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Returns a front-to-back iterator over references to the elements.
    ///
    /// The iterator is double-ended, so `.rev()` walks back-to-front.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    // =========================================================================
    // Link surgery
    // =========================================================================

    /// Validates `index` and walks to its node.
    fn position(&self, index: usize) -> Result<NodeIndex, CollectionError> {
        if index >= self.length {
            trace_event!(index, length = self.length, "position out of range");
            return Err(CollectionError::out_of_range(index, self.length));
        }
        Ok(self.locate(index))
    }

    /// Walks to the node at `index` from the closer end.
    ///
    /// `index` must be less than `self.length`.
    fn locate(&self, index: usize) -> NodeIndex {
        self.walk(index).0
    }

    /// Walks to the node at `index` and reports how many links were followed.
    ///
    /// Starts from the head when `index < length / 2` and from the tail
    /// otherwise, so the step count never exceeds `length / 2`.
    fn walk(&self, index: usize) -> (NodeIndex, usize) {
        debug_assert!(index < self.length);
        let mut current;
        let steps;
        if index < self.length / 2 {
            current = self.head;
            steps = index;
            for _ in 0..steps {
                current = current.and_then(|node| self.node(node).next);
            }
        } else {
            current = self.tail;
            steps = self.length - 1 - index;
            for _ in 0..steps {
                current = current.and_then(|node| self.node(node).previous);
            }
        }
        let node = current.unwrap_or_else(|| unreachable!("chain is shorter than its length"));
        (node, steps)
    }

    /// Links a new node holding `value` directly before `successor`.
    fn link_before(&mut self, successor: NodeIndex, value: T) -> NodeIndex {
        let predecessor = self.node(successor).previous;
        let index = self.allocate(Node::new(value, predecessor, Some(successor)));
        self.node_mut(successor).previous = Some(index);
        match predecessor {
            Some(predecessor) => self.node_mut(predecessor).next = Some(index),
            None => self.head = Some(index),
        }
        self.length += 1;
        index
    }

    /// Detaches the node at `index`, joins its neighbors, and returns its
    /// value.
    ///
    /// Covers head, tail and interior nodes: a missing neighbor on either
    /// side promotes the other neighbor to `head` or `tail` instead.
    fn unlink(&mut self, index: NodeIndex) -> T {
        let node = self.release(index);
        match node.previous {
            Some(previous) => self.node_mut(previous).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).previous = node.previous,
            None => self.tail = node.previous,
        }
        self.length -= 1;
        node.value
    }

    // =========================================================================
    // Arena
    // =========================================================================

    fn node(&self, index: NodeIndex) -> &Node<T> {
        match &self.slots[index.slot()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {}", index.slot()),
        }
    }

    fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match &mut self.slots[index.slot()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {}", index.slot()),
        }
    }

    /// Stores `node`, reusing a vacant slot when one is available.
    fn allocate(&mut self, node: Node<T>) -> NodeIndex {
        let Some(index) = self.free else {
            let index = NodeIndex::new(self.slots.len());
            self.slots.push(Slot::Occupied(node));
            return index;
        };
        let slot = &mut self.slots[index.slot()];
        let Slot::Vacant { next_free } = *slot else {
            unreachable!("free list points at occupied slot {}", index.slot())
        };
        *slot = Slot::Occupied(node);
        self.free = next_free;
        trace_event!(slot = index.slot(), "reused vacant slot");
        index
    }

    /// Takes the node out of its slot and pushes the slot onto the free list.
    fn release(&mut self, index: NodeIndex) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match mem::replace(&mut self.slots[index.slot()], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(index);
                node
            }
            Slot::Vacant { .. } => unreachable!("released vacant slot {}", index.slot()),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A double-ended iterator over references to the elements of a
/// [`DoublyLinkedChain`].
pub struct Iter<'a, T> {
    chain: &'a DoublyLinkedChain<T>,
    front: Option<NodeIndex>,
    back: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.node(self.back?);
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the elements of a [`DoublyLinkedChain`].
#[derive(Clone)]
pub struct IntoIter<T> {
    chain: DoublyLinkedChain<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.length, Some(self.chain.length))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chain.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("IntoIter").field(&self.chain).finish()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Container<T> for DoublyLinkedChain<T> {
    fn len(&self) -> usize {
        self.length
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DoublyLinkedChain<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut chain = Self::with_capacity(iter.size_hint().0);
        chain.extend(iter);
        chain
    }
}

impl<T> Extend<T> for DoublyLinkedChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T> IntoIterator for DoublyLinkedChain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedChain<T> {}

impl<T: Hash> Hash for DoublyLinkedChain<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedChain<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedChain<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(formatter, self.iter())
    }
}

// =============================================================================
// Tests
// =============================================================================
