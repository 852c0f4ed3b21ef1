//! LIFO stack backed by a `Vec`.

use std::fmt;

use crate::container::write_sequence;
use crate::{CollectionError, Container};

/// A last-in, first-out stack.
///
/// Index 0 of the backing `Vec` is the bottom; the top is the last element,
/// so `push` and `pop` are amortized O(1).
///
/// # Examples
///
/// ```rust
/// use linear_collections::array::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(format!("{stack}"), "[1]");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Puts an element on top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.items.pop().ok_or_else(|| {
            trace_event!("pop on empty stack");
            CollectionError::EmptyCollection
        })
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.items.last().ok_or(CollectionError::EmptyCollection)
    }

    /// Returns the number of elements in the stack.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator from the top of the stack to the bottom.
    #[inline]
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T: Clone> Stack<T> {
    /// Returns the elements bottom to top in a new `Vec`.
    ///
    /// The last element of the result is the top of the stack.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Container<T> for Stack<T> {
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

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes the elements in iteration order, so the last one ends on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders top to bottom.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(formatter, self.iter())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Serializes bottom to top, so deserializing pushes the elements back in
/// their original order.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Stack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::container::serialize_sequence(serializer, self.items.len(), &self.items)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Stack<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(crate::container::SequenceVisitor::<Self, T>::new(
            "a sequence",
        ))
    }
}
