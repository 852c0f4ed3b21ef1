//! Doubly-linked containers.
//!
//! This module provides one node substrate and two views over it:
//!
//! - [`DoublyLinkedChain`]: arena-backed doubly-linked sequence that owns the
//!   head/tail/length bookkeeping and all link surgery
//! - [`Deque`]: double-ended queue, O(1) at both ends
//! - [`LinkedList`]: positional access (`get`, `insert`, `delete`, `find`)
//!   that walks from whichever end is closer
//!
//! # Examples
//!
//! ## `Deque`
//!
//! ```rust
//! use linear_collections::linked::Deque;
//!
//! let mut deque = Deque::new();
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//! assert_eq!(deque.to_vec(), vec![0, 1, 2]);
//! assert_eq!(deque.pop_back(), Ok(2));
//! ```
//!
//! ## `LinkedList`
//!
//! ```rust
//! use linear_collections::linked::LinkedList;
//!
//! let mut list: LinkedList<i32> = [10, 20, 30, 40, 50].into_iter().collect();
//! assert_eq!(list.get(3), Ok(&40));
//! assert_eq!(list.delete(0), Ok(10));
//! assert_eq!(list.find(&30, |a, b| a == b), Some(1));
//! ```

mod chain;
mod deque;
mod list;
mod node;

pub use chain::{DoublyLinkedChain, IntoIter, Iter};
pub use deque::Deque;
pub use list::LinkedList;

static_assertions::assert_impl_all!(DoublyLinkedChain<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Deque<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(LinkedList<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Deque<std::rc::Rc<i32>>: Send, Sync);
