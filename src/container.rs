//! Behavior shared by every container.
//!
//! [`Container`] is the common surface (`len`, `is_empty`, `clear`, `to_vec`)
//! that lets callers treat stacks, queues, deques, lists and heaps uniformly.
//! This module also holds the crate-private rendering and serde helpers used by
//! the individual containers.

use std::fmt;

/// The operations every container in this crate supports.
///
/// Each container also exposes these as inherent methods; the trait exists
/// for code that is generic over the container kind.
///
/// # Examples
///
/// ```rust
/// use linear_collections::Container;
/// use linear_collections::linked::Deque;
/// use linear_collections::array::Stack;
///
/// fn drain_count<T: Clone, C: Container<T>>(container: &mut C) -> usize {
///     let count = container.len();
///     container.clear();
///     count
/// }
///
/// let mut deque: Deque<i32> = (1..=3).collect();
/// let mut stack: Stack<i32> = (1..=5).collect();
/// assert_eq!(drain_count(&mut deque), 3);
/// assert_eq!(drain_count(&mut stack), 5);
/// assert!(deque.is_empty() && stack.is_empty());
/// ```
pub trait Container<T> {
    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Returns the elements as a newly allocated `Vec`, in the container's
    /// logical order.
    ///
    /// The result never aliases the container's storage: mutating it has no
    /// effect on the container.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

/// Writes `elements` as `[e0 e1 ... en]`, or `[]` when there are none.
pub(crate) fn write_sequence<I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    write!(formatter, "[")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            write!(formatter, " ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "]")
}

// =============================================================================
// Serde Support
// =============================================================================

/// Visitor that rebuilds a container by extending it with each sequence
/// element in order.
#[cfg(feature = "serde")]
pub(crate) struct SequenceVisitor<C, T> {
    expecting: &'static str,
    marker: std::marker::PhantomData<(C, T)>,
}

#[cfg(feature = "serde")]
impl<C, T> SequenceVisitor<C, T> {
    pub(crate) const fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, C, T> serde::de::Visitor<'de> for SequenceVisitor<C, T>
where
    C: Default + Extend<T>,
    T: serde::Deserialize<'de>,
{
    type Value = C;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut container = C::default();
        while let Some(element) = seq.next_element()? {
            container.extend(std::iter::once(element));
        }
        Ok(container)
    }
}

/// Serializes `elements` as a sequence of `length` items.
#[cfg(feature = "serde")]
pub(crate) fn serialize_sequence<'a, S, I, T>(
    serializer: S,
    length: usize,
    elements: I,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    I: IntoIterator<Item = &'a T>,
    T: serde::Serialize + 'a,
{
    use serde::ser::SerializeSeq;
    let mut seq = serializer.serialize_seq(Some(length))?;
    for element in elements {
        seq.serialize_element(element)?;
    }
    seq.end()
}
