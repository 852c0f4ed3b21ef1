//! Error type shared by every container.
//!
//! Two failure kinds cover the whole crate: reading from an empty container
//! and addressing a position outside the container.

use thiserror::Error;

/// Represents the ways a container operation can fail.
///
/// Neither variant is fatal. Callers can avoid [`EmptyCollection`] by
/// checking `is_empty` first and [`IndexOutOfRange`] by checking `len`.
///
/// [`EmptyCollection`]: CollectionError::EmptyCollection
/// [`IndexOutOfRange`]: CollectionError::IndexOutOfRange
///
/// # Examples
///
/// ```rust
/// use linear_collections::CollectionError;
///
/// let error = CollectionError::IndexOutOfRange { index: 5, length: 3 };
/// assert_eq!(format!("{error}"), "index 5 out of range for length 3");
///
/// let error = CollectionError::EmptyCollection;
/// assert_eq!(format!("{error}"), "collection is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CollectionError {
    /// An extraction or peek was attempted on a container with no elements.
    #[error("collection is empty")]
    EmptyCollection,
    /// A positional operation addressed an index outside the container.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The container length at the time of the request.
        length: usize,
    },
}

impl CollectionError {
    /// Creates an [`CollectionError::IndexOutOfRange`] for `index` in a
    /// container of `length` elements.
    #[inline]
    #[must_use]
    pub const fn out_of_range(index: usize, length: usize) -> Self {
        Self::IndexOutOfRange { index, length }
    }

    /// Returns `true` if this is [`CollectionError::EmptyCollection`].
    #[inline]
    #[must_use]
    pub const fn is_empty_collection(&self) -> bool {
        matches!(self, Self::EmptyCollection)
    }

    /// Returns `true` if this is [`CollectionError::IndexOutOfRange`].
    #[inline]
    #[must_use]
    pub const fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
