//! # linear-collections
//!
//! Generic in-memory linear collections with documented complexity and
//! typed errors.
//!
//! ## Overview
//!
//! - **Linked**: [`DoublyLinkedChain`](linked::DoublyLinkedChain), and the two
//!   views built on it, [`Deque`](linked::Deque) and
//!   [`LinkedList`](linked::LinkedList)
//! - **Heap**: [`BinaryHeap`](heap::BinaryHeap) with the [`MinHeap`](heap::MinHeap)
//!   and [`MaxHeap`](heap::MaxHeap) variants
//! - **Array**: [`Stack`](array::Stack) and [`Queue`](array::Queue)
//!
//! Every fallible operation returns `Result<_, CollectionError>`. Reading from an
//! empty container is an [`CollectionError::EmptyCollection`], never a default
//! value.
//!
//! ## Feature Flags
//!
//! - `linked`: Doubly-linked chain, deque and linked list
//! - `heap`: Binary min/max heaps
//! - `array`: Array-backed stack and queue
//! - `serde`: `Serialize`/`Deserialize` for every container
//! - `tracing`: Trace-level events from container operations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use linear_collections::prelude::*;
//!
//! let mut deque = Deque::new();
//! deque.push_front(1);
//! deque.push_front(2);
//! assert_eq!(deque.pop_front(), Ok(2));
//!
//! let mut heap: MinHeap<i32> = [5, 3, 7, 1, 9].into_iter().collect();
//! assert_eq!(heap.pop(), Ok(1));
//!
//! let empty: Stack<String> = Stack::new();
//! assert_eq!(empty.peek(), Err(CollectionError::EmptyCollection));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[macro_use]
mod trace;

mod container;
mod error;

pub use container::Container;
pub use error::CollectionError;

/// Prelude module for convenient imports.
///
/// Re-exports every container enabled by the active features together with
/// [`Container`] and [`CollectionError`].
///
/// # Usage
///
/// ```rust
/// use linear_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{CollectionError, Container};

    #[cfg(feature = "linked")]
    pub use crate::linked::*;

    #[cfg(feature = "heap")]
    pub use crate::heap::*;

    #[cfg(feature = "array")]
    pub use crate::array::*;
}

#[cfg(feature = "linked")]
pub mod linked;

#[cfg(feature = "heap")]
pub mod heap;

#[cfg(feature = "array")]
pub mod array;
