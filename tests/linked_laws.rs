//! Property-based tests for Deque and LinkedList.
//!
//! Random operation sequences are applied both to the container under test
//! and to a `std::collections::VecDeque` model; every observable result and
//! the final contents must agree.

use std::collections::VecDeque;

use linear_collections::linked::{Deque, LinkedList};
use proptest::prelude::*;

// =============================================================================
// Operation strategies
// =============================================================================

#[derive(Debug, Clone)]
enum DequeOperation {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
}

fn deque_operation() -> impl Strategy<Value = DequeOperation> {
    prop_oneof![
        any::<i32>().prop_map(DequeOperation::PushFront),
        any::<i32>().prop_map(DequeOperation::PushBack),
        Just(DequeOperation::PopFront),
        Just(DequeOperation::PopBack),
    ]
}

/// Positions are drawn unbounded and reduced modulo the current length when
/// applied, so most operations hit a valid index.
#[derive(Debug, Clone)]
enum ListOperation {
    Append(i32),
    Prepend(i32),
    Insert(usize, i32),
    Delete(usize),
    Get(usize),
}

fn list_operation() -> impl Strategy<Value = ListOperation> {
    prop_oneof![
        any::<i32>().prop_map(ListOperation::Append),
        any::<i32>().prop_map(ListOperation::Prepend),
        (any::<usize>(), any::<i32>()).prop_map(|(index, value)| ListOperation::Insert(index, value)),
        any::<usize>().prop_map(ListOperation::Delete),
        any::<usize>().prop_map(ListOperation::Get),
    ]
}

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..50)
}

proptest! {
    // =========================================================================
    // Deque
    // =========================================================================

    #[test]
    fn prop_deque_matches_vec_deque(operations in prop::collection::vec(deque_operation(), 0..200)) {
        let mut deque = Deque::new();
        let mut model = VecDeque::new();
        for operation in operations {
            match operation {
                DequeOperation::PushFront(value) => {
                    deque.push_front(value);
                    model.push_front(value);
                }
                DequeOperation::PushBack(value) => {
                    deque.push_back(value);
                    model.push_back(value);
                }
                DequeOperation::PopFront => prop_assert_eq!(deque.pop_front().ok(), model.pop_front()),
                DequeOperation::PopBack => prop_assert_eq!(deque.pop_back().ok(), model.pop_back()),
            }
            prop_assert_eq!(deque.len(), model.len());
            prop_assert_eq!(deque.is_empty(), model.is_empty());
            prop_assert_eq!(deque.peek_front().ok(), model.front());
            prop_assert_eq!(deque.peek_back().ok(), model.back());
        }
        prop_assert_eq!(deque.to_vec(), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_deque_from_slice_round_trip(values in small_vec()) {
        prop_assert_eq!(Deque::from_slice(&values).to_vec(), values);
    }

    #[test]
    fn prop_deque_push_back_pop_front_is_fifo(values in small_vec()) {
        let mut deque = Deque::new();
        for value in &values {
            deque.push_back(*value);
        }
        let drained: Vec<i32> = std::iter::from_fn(|| deque.pop_front().ok()).collect();
        prop_assert_eq!(drained, values);
    }

    #[test]
    fn prop_deque_push_front_pop_front_is_lifo(values in small_vec()) {
        let mut deque = Deque::new();
        for value in &values {
            deque.push_front(*value);
        }
        let drained: Vec<i32> = std::iter::from_fn(|| deque.pop_front().ok()).collect();
        let mut expected = values;
        expected.reverse();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn prop_deque_len_is_adds_minus_removes(values in small_vec(), removes in 0_usize..60) {
        let mut deque: Deque<i32> = values.iter().copied().collect();
        let removes = removes.min(values.len());
        for _ in 0..removes {
            prop_assert!(deque.pop_back().is_ok());
        }
        prop_assert_eq!(deque.len(), values.len() - removes);
        prop_assert_eq!(deque.is_empty(), deque.len() == 0);
    }

    #[test]
    fn prop_deque_iter_rev_matches_reverse(values in small_vec()) {
        let deque: Deque<i32> = values.iter().copied().collect();
        let reversed: Vec<i32> = deque.iter().rev().copied().collect();
        prop_assert_eq!(reversed, values.into_iter().rev().collect::<Vec<_>>());
    }

    // =========================================================================
    // LinkedList
    // =========================================================================

    #[test]
    fn prop_list_matches_vec_deque(operations in prop::collection::vec(list_operation(), 0..200)) {
        let mut list = LinkedList::new();
        let mut model: VecDeque<i32> = VecDeque::new();
        for operation in operations {
            match operation {
                ListOperation::Append(value) => {
                    list.append(value);
                    model.push_back(value);
                }
                ListOperation::Prepend(value) => {
                    list.prepend(value);
                    model.push_front(value);
                }
                ListOperation::Insert(index, value) => {
                    let index = index % (model.len() + 2);
                    let result = list.insert(index, value);
                    if index <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(index, value);
                    } else {
                        prop_assert!(result.unwrap_err().is_index_out_of_range());
                    }
                }
                ListOperation::Delete(index) => {
                    let index = index % (model.len() + 1);
                    prop_assert_eq!(list.delete(index).ok(), model.remove(index));
                }
                ListOperation::Get(index) => {
                    let index = index % (model.len() + 1);
                    prop_assert_eq!(list.get(index).ok(), model.get(index));
                }
            }
            prop_assert_eq!(list.len(), model.len());
        }
        prop_assert_eq!(list.to_vec(), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_list_get_every_index(values in small_vec()) {
        let list = LinkedList::from_slice(&values);
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(list.get(index), Ok(value));
        }
        prop_assert!(list.get(values.len()).is_err());
    }

    #[test]
    fn prop_list_find_matches_position(values in small_vec(), needle in any::<i32>()) {
        let list = LinkedList::from_slice(&values);
        let expected = values.iter().position(|value| *value == needle);
        prop_assert_eq!(list.find(&needle, |a, b| a == b), expected);
    }

    #[test]
    fn prop_list_find_locates_present_elements(values in prop::collection::vec(any::<i32>(), 1..50), pick in any::<prop::sample::Index>()) {
        let list = LinkedList::from_slice(&values);
        let needle = values[pick.index(values.len())];
        let found = list.find(&needle, |a, b| a == b);
        prop_assert!(found.is_some());
        prop_assert_eq!(list.get(found.unwrap()), Ok(&needle));
    }

    #[test]
    fn prop_list_to_vec_is_independent(values in prop::collection::vec(any::<i32>(), 1..50)) {
        let list = LinkedList::from_slice(&values);
        let mut copy = list.to_vec();
        copy[0] = copy[0].wrapping_add(1);
        prop_assert_eq!(list.get(0), Ok(&values[0]));
    }
}
