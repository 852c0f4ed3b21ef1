//! Array-backed containers.
//!
//! - [`Stack`]: last-in, first-out over a `Vec`
//! - [`Queue`]: first-in, first-out over a ring buffer
//!
//! # Examples
//!
//! ```rust
//! use linear_collections::array::{Queue, Stack};
//!
//! let mut stack: Stack<i32> = (1..=3).collect();
//! let mut queue: Queue<i32> = (1..=3).collect();
//! assert_eq!(stack.pop(), Ok(3));
//! assert_eq!(queue.dequeue(), Ok(1));
//! ```

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;

static_assertions::assert_impl_all!(Stack<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Queue<String>: Send, Sync, Clone);
