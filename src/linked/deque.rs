//! Double-ended queue over a [`DoublyLinkedChain`].
//!
//! [`Deque`] exposes only end operations; every method is a direct delegation
//! to the chain, so the invariant maintenance lives in one place.

use std::fmt;

use super::chain::{DoublyLinkedChain, IntoIter, Iter};
use crate::{CollectionError, Container};

/// A double-ended queue with O(1) insertion and removal at both ends.
///
/// # Time Complexity
///
/// | Operation                    | Complexity     |
/// |------------------------------|----------------|
/// | `push_front` / `push_back`   | O(1) amortized |
/// | `pop_front` / `pop_back`     | O(1)           |
/// | `peek_front` / `peek_back`   | O(1)           |
/// | `len` / `is_empty`           | O(1)           |
/// | `to_vec`                     | O(n)           |
///
/// # Examples
///
/// ```rust
/// use linear_collections::linked::Deque;
///
/// let mut deque = Deque::new();
/// deque.push_front(1);
/// deque.push_front(2);
/// assert_eq!(deque.pop_front(), Ok(2));
/// assert_eq!(deque.pop_front(), Ok(1));
/// assert!(deque.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Deque<T> {
    chain: DoublyLinkedChain<T>,
}

impl<T> Deque<T> {
    /// Creates a new empty deque.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain: DoublyLinkedChain::new(),
        }
    }

    /// Creates an empty deque with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: DoublyLinkedChain::with_capacity(capacity),
        }
    }

    /// Adds an element at the front.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.chain.push_front(value);
    }

    /// Adds an element at the back.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, CollectionError> {
        self.chain.pop_front()
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::CollectionError;
    /// use linear_collections::linked::Deque;
    ///
    /// let mut deque = Deque::from_slice(&[1, 2]);
    /// assert_eq!(deque.pop_back(), Ok(2));
    /// assert_eq!(deque.pop_back(), Ok(1));
    /// assert_eq!(deque.pop_back(), Err(CollectionError::EmptyCollection));
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, CollectionError> {
        self.chain.pop_back()
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    #[inline]
    pub fn peek_front(&self) -> Result<&T, CollectionError> {
        self.chain.front()
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    #[inline]
    pub fn peek_back(&self) -> Result<&T, CollectionError> {
        self.chain.back()
    }

    /// Returns the number of elements in the deque.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Returns a front-to-back iterator over references to the elements.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T: Clone> Deque<T> {
    /// Creates a deque holding the elements of `slice` in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::linked::Deque;
    ///
    /// let deque = Deque::from_slice(&["a", "b", "c"]);
    /// assert_eq!(deque.peek_front(), Ok(&"a"));
    /// assert_eq!(deque.peek_back(), Ok(&"c"));
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }

    /// Returns the elements front to back in a new `Vec`.
    ///
    /// The result is an independent copy; changing it does not affect the
    /// deque.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.chain.iter().cloned().collect()
    }
}

impl<T> Container<T> for Deque<T> {
    fn len(&self) -> usize {
        self.chain.len()
    }

    fn clear(&mut self) {
        self.chain.clear();
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.chain.iter().cloned().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<DoublyLinkedChain<T>> for Deque<T> {
    #[inline]
    fn from(chain: DoublyLinkedChain<T>) -> Self {
        Self { chain }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            chain: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.chain.extend(iter);
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.chain.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.chain, formatter)
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Deque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::container::serialize_sequence(serializer, self.len(), self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Deque<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(crate::container::SequenceVisitor::<Self, T>::new("a sequence"))
    }
}
