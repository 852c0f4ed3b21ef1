//! Index-addressed doubly-linked list over a [`DoublyLinkedChain`].

use std::fmt;

use super::chain::{DoublyLinkedChain, IntoIter, Iter};
use crate::{CollectionError, Container};

/// A doubly-linked list with positional access.
///
/// Positional operations walk from the head when the index lies in the first
/// half of the list and from the tail otherwise, so reaching any element takes
/// at most `len() / 2` steps.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `append` / `prepend`   | O(1) amortized    |
/// | `get` / `get_mut`      | O(min(i, n - i))  |
/// | `insert`               | O(min(i, n - i))  |
/// | `delete`               | O(min(i, n - i))  |
/// | `find`                 | O(n)              |
/// | `len` / `is_empty`     | O(1)              |
///
/// # Examples
///
/// ```rust
/// use linear_collections::CollectionError;
/// use linear_collections::linked::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.append("b");
/// list.prepend("a");
/// list.insert(2, "c").unwrap();
/// assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
/// assert_eq!(list.get(9), Err(CollectionError::IndexOutOfRange { index: 9, length: 3 }));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LinkedList<T> {
    chain: DoublyLinkedChain<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain: DoublyLinkedChain::new(),
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: DoublyLinkedChain::with_capacity(capacity),
        }
    }

    /// Adds an element at the end of the list.
    #[inline]
    pub fn append(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Adds an element at the start of the list.
    #[inline]
    pub fn prepend(&mut self, value: T) {
        self.chain.push_front(value);
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::linked::LinkedList;
    ///
    /// let list = LinkedList::from_slice(&[10, 20, 30, 40, 50]);
    /// assert_eq!(list.get(0), Ok(&10));
    /// assert_eq!(list.get(4), Ok(&50));
    /// assert!(list.get(5).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.chain.get(index)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        self.chain.get_mut(index)
    }

    /// Inserts `value` so that it becomes the element at `index`.
    ///
    /// Elements previously at `index` and after move back by one.
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index > len()`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        self.chain.insert(index, value)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    /// An empty list has no valid index, so deleting from it always reports
    /// this error rather than [`CollectionError::EmptyCollection`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::linked::LinkedList;
    ///
    /// let mut list = LinkedList::from_slice(&[10, 20, 30, 40, 50]);
    /// assert_eq!(list.delete(2), Ok(30));
    /// assert_eq!(list.to_vec(), vec![10, 20, 40, 50]);
    /// ```
    #[inline]
    pub fn delete(&mut self, index: usize) -> Result<T, CollectionError> {
        self.chain.remove(index)
    }

    /// Returns the index of the first element matching `value` under
    /// `equals`, or `None` if nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::linked::LinkedList;
    ///
    /// let list = LinkedList::from_slice(&["Hello", "World"]);
    /// assert_eq!(list.find(&"world", |a, b| a.eq_ignore_ascii_case(b)), Some(1));
    /// assert_eq!(list.find(&"world", |a, b| a == b), None);
    /// ```
    #[inline]
    pub fn find<F>(&self, value: &T, equals: F) -> Option<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        self.chain.find(value, equals)
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the list contains no elements.
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

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `value`.
    ///
    /// Shorthand for `find(value, PartialEq::eq)`.
    #[inline]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.chain.find(value, |element, candidate| element == candidate)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Creates a list holding the elements of `slice` in order.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }

    /// Returns the elements front to back in a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.chain.iter().cloned().collect()
    }
}

impl<T> Container<T> for LinkedList<T> {
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

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<DoublyLinkedChain<T>> for LinkedList<T> {
    #[inline]
    fn from(chain: DoublyLinkedChain<T>) -> Self {
        Self { chain }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            chain: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.chain.extend(iter);
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.chain.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.chain, formatter)
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::container::serialize_sequence(serializer, self.len(), self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for LinkedList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(crate::container::SequenceVisitor::<Self, T>::new(
            "a sequence",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_append_and_prepend_order() {
        let mut list = LinkedList::new();
        list.append(2);
        list.append(3);
        list.prepend(1);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_position_uses_partial_eq() {
        let list = LinkedList::from_slice(&[3, 1, 4, 1, 5]);
        assert_eq!(list.position(&1), Some(1));
        assert_eq!(list.position(&9), None);
    }

    #[rstest]
    fn test_delete_until_empty() {
        let mut list = LinkedList::from_slice(&[1, 2, 3]);
        assert_eq!(list.delete(1), Ok(2));
        assert_eq!(list.delete(1), Ok(3));
        assert_eq!(list.delete(0), Ok(1));
        assert_eq!(list.delete(0), Err(CollectionError::out_of_range(0, 0)));
        assert!(list.is_empty());
    }
}
