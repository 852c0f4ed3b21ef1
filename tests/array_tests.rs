//! Unit tests for Stack and Queue.

use linear_collections::CollectionError;
use linear_collections::array::{Queue, Stack};
use rstest::rstest;

// =============================================================================
// Stack
// =============================================================================

#[rstest]
fn test_stack_new_is_empty() {
    let stack: Stack<i32> = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}

#[rstest]
fn test_stack_push_pop_is_lifo() {
    let mut stack = Stack::new();
    stack.push("a");
    stack.push("b");
    stack.push("c");
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Ok("c"));
    assert_eq!(stack.pop(), Ok("b"));
    assert_eq!(stack.pop(), Ok("a"));
    assert!(stack.is_empty());
}

#[rstest]
fn test_stack_peek_does_not_remove() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.peek(), Ok(&2));
    assert_eq!(stack.peek(), Ok(&2));
    assert_eq!(stack.len(), 2);
}

#[rstest]
fn test_stack_empty_errors() {
    let mut stack: Stack<f64> = Stack::new();
    assert_eq!(stack.pop(), Err(CollectionError::EmptyCollection));
    assert_eq!(stack.peek(), Err(CollectionError::EmptyCollection));
}

#[rstest]
fn test_stack_clear() {
    let mut stack: Stack<i32> = (1..=5).collect();
    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(CollectionError::EmptyCollection));
}

#[rstest]
fn test_stack_to_vec_is_bottom_to_top_copy() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    let mut copy = stack.to_vec();
    assert_eq!(copy, vec![1, 2, 3]);
    copy[2] = 99;
    assert_eq!(stack.peek(), Ok(&3));
}

#[rstest]
fn test_stack_display_top_to_bottom() {
    let stack: Stack<i32> = (1..=3).collect();
    assert_eq!(format!("{stack}"), "[3 2 1]");
    assert_eq!(format!("{stack:?}"), "[3, 2, 1]");
}

// =============================================================================
// Queue
// =============================================================================

#[rstest]
fn test_queue_new_is_empty() {
    let queue: Queue<i32> = Queue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}

#[rstest]
fn test_queue_enqueue_dequeue_is_fifo() {
    let mut queue = Queue::new();
    for value in 1..=3 {
        queue.enqueue(value);
    }
    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.dequeue(), Ok(2));
    assert_eq!(queue.dequeue(), Ok(3));
    assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));
}

#[rstest]
fn test_queue_peek_does_not_remove() {
    let mut queue = Queue::new();
    queue.enqueue("first");
    queue.enqueue("second");
    assert_eq!(queue.peek(), Ok(&"first"));
    assert_eq!(queue.len(), 2);
}

#[rstest]
fn test_queue_empty_errors() {
    let mut queue: Queue<Vec<u8>> = Queue::new();
    assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));
    assert_eq!(queue.peek(), Err(CollectionError::EmptyCollection));
}

#[rstest]
fn test_queue_interleaved() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    assert_eq!(queue.dequeue(), Ok(1));
    queue.enqueue(3);
    assert_eq!(queue.to_vec(), vec![2, 3]);
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![2, 3]);
}

#[rstest]
fn test_queue_clear_and_display() {
    let mut queue: Queue<i32> = (1..=3).collect();
    assert_eq!(format!("{queue}"), "[1 2 3]");
    queue.clear();
    assert_eq!(format!("{queue}"), "[]");
}
