//! Binary heap stored as a complete binary tree in a `Vec`.
//!
//! The element at index `i` has children at `2i + 1` and `2i + 2` and its
//! parent at `(i - 1) / 2`. The sequence never has gaps. Under the heap's
//! [`HeapOrder`], no child precedes its parent; `push` and `pop` restore that
//! before returning.
//!
//! ```text
//!            1                 items: [1, 3, 7, 5, 9]
//!          /   \
//!         3     7
//!        / \
//!       5   9
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::order::{HeapOrder, MaxOrder, MinOrder};
use crate::container::write_sequence;
use crate::{CollectionError, Container};

/// A binary heap whose root is the first element under `O`.
///
/// Use the [`MinHeap`] and [`MaxHeap`] aliases rather than naming `O`
/// directly.
///
/// # Time Complexity
///
/// | Operation          | Complexity     |
/// |--------------------|----------------|
/// | `push`             | O(log n)       |
/// | `pop`              | O(log n)       |
/// | `peek`             | O(1)           |
/// | `len` / `is_empty` | O(1)           |
/// | `to_vec`           | O(n)           |
/// | `from(Vec)`        | O(n)           |
///
/// # Examples
///
/// ```rust
/// use linear_collections::CollectionError;
/// use linear_collections::heap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.push(5);
/// heap.push(1);
/// heap.push(3);
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.pop(), Ok(3));
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Err(CollectionError::EmptyCollection));
/// ```
pub struct BinaryHeap<T, O> {
    items: Vec<T>,
    order: PhantomData<O>,
}

/// A heap that yields its smallest element first.
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

/// A heap that yields its largest element first.
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

impl<T, O> BinaryHeap<T, O> {
    /// Creates a new empty heap.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            order: PhantomData,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the root element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.items.first().ok_or(CollectionError::EmptyCollection)
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the elements in backing (heap) order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the heap and returns the backing sequence in heap order.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Ord, O: HeapOrder> BinaryHeap<T, O> {
    /// Adds an element, then sifts it up until its parent no longer follows
    /// it.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the root element.
    ///
    /// The last element is moved into the root slot and sifted down.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the heap is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::heap::MaxHeap;
    ///
    /// let mut heap: MaxHeap<i32> = [5, 3, 7, 1, 9].into_iter().collect();
    /// assert_eq!(heap.pop(), Ok(9));
    /// assert_eq!(heap.pop(), Ok(7));
    /// assert_eq!(heap.len(), 3);
    /// ```
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        if self.items.is_empty() {
            trace_event!("pop on empty heap");
            return Err(CollectionError::EmptyCollection);
        }
        let root = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Consumes the heap and returns its elements in pop order: ascending
    /// for a [`MinHeap`], descending for a [`MaxHeap`].
    ///
    /// # Complexity
    ///
    /// O(n log n)
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Moves the element at `index` towards the root while it precedes its
    /// parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !O::precedes(&self.items[index], &self.items[parent]) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` towards the leaves while a child
    /// precedes it.
    ///
    /// The left child wins ties between children, and a child equal to its
    /// parent stays put.
    fn sift_down(&mut self, mut index: usize) {
        let length = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut top = index;

            if left < length && O::precedes(&self.items[left], &self.items[top]) {
                top = left;
            }
            if right < length && O::precedes(&self.items[right], &self.items[top]) {
                top = right;
            }
            if top == index {
                break;
            }

            self.items.swap(index, top);
            index = top;
        }
    }
}

impl<T: Clone, O> BinaryHeap<T, O> {
    /// Returns the backing sequence, in heap order, as a new `Vec`.
    ///
    /// The result is a copy: only the root position is meaningful, and
    /// changing it does not affect the heap.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T, O> Container<T> for BinaryHeap<T, O> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, O> Default for BinaryHeap<T, O> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, O> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            order: PhantomData,
        }
    }
}

/// Builds a heap from an arbitrary `Vec` by sifting down every internal node,
/// last parent first.
///
/// # Complexity
///
/// O(n)
impl<T: Ord, O: HeapOrder> From<Vec<T>> for BinaryHeap<T, O> {
    fn from(items: Vec<T>) -> Self {
        let mut heap = Self {
            items,
            order: PhantomData,
        };
        for index in (0..heap.items.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }
}

impl<T: Ord, O: HeapOrder> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord, O: HeapOrder> Extend<T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, O> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display, O> fmt::Display for BinaryHeap<T, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(formatter, &self.items)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, O> serde::Serialize for BinaryHeap<T, O> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::container::serialize_sequence(serializer, self.items.len(), &self.items)
    }
}

/// Deserialization pushes each element, so any input sequence yields a valid
/// heap.
#[cfg(feature = "serde")]
impl<'de, T, O> serde::Deserialize<'de> for BinaryHeap<T, O>
where
    T: serde::Deserialize<'de> + Ord,
    O: HeapOrder,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(crate::container::SequenceVisitor::<Self, T>::new(
            "a sequence",
        ))
    }
}
