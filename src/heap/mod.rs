//! Array-backed binary heaps.
//!
//! - [`BinaryHeap`]: complete binary tree stored in a `Vec`, parameterized by a
//!   [`HeapOrder`] direction
//! - [`MinHeap`]: smallest element at the root
//! - [`MaxHeap`]: largest element at the root
//!
//! # Examples
//!
//! ```rust
//! use linear_collections::heap::{MaxHeap, MinHeap};
//!
//! let mut min_heap = MinHeap::new();
//! let mut max_heap = MaxHeap::new();
//! for value in [5, 3, 7, 1, 9] {
//!     min_heap.push(value);
//!     max_heap.push(value);
//! }
//! assert_eq!(min_heap.into_sorted_vec(), vec![1, 3, 5, 7, 9]);
//! assert_eq!(max_heap.into_sorted_vec(), vec![9, 7, 5, 3, 1]);
//! ```

mod binary_heap;
mod order;

pub use binary_heap::{BinaryHeap, MaxHeap, MinHeap};
pub use order::{HeapOrder, MaxOrder, MinOrder};

static_assertions::assert_impl_all!(MinHeap<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(MaxHeap<String>: Send, Sync, Clone);
