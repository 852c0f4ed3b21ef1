//! Unit tests for Deque.
//!
//! These tests exercise the deque through its public API: both ends,
//! emptiness errors, bulk construction and defensive copies.

use linear_collections::linked::Deque;
use linear_collections::{CollectionError, Container};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_deque_is_empty() {
    let deque: Deque<i32> = Deque::new();
    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);
    assert!(deque.to_vec().is_empty());
}

#[rstest]
fn test_from_slice_then_to_vec_is_identity() {
    let source = [3, 1, 4, 1, 5, 9, 2, 6];
    let deque = Deque::from_slice(&source);
    assert_eq!(deque.to_vec(), source.to_vec());
}

#[rstest]
fn test_from_empty_slice() {
    let deque: Deque<i32> = Deque::from_slice(&[]);
    assert!(deque.is_empty());
}

// =============================================================================
// Ends
// =============================================================================

#[rstest]
fn test_push_front_then_pop_front_reverses() {
    let mut deque = Deque::new();
    deque.push_front(1);
    deque.push_front(2);
    assert_eq!(deque.pop_front(), Ok(2));
    assert_eq!(deque.pop_front(), Ok(1));
}

#[rstest]
fn test_push_back_then_pop_back_reverses() {
    let mut deque = Deque::new();
    deque.push_back(1);
    deque.push_back(2);
    assert_eq!(deque.pop_back(), Ok(2));
    assert_eq!(deque.pop_back(), Ok(1));
}

#[rstest]
fn test_push_front_then_pop_back_preserves_order() {
    let mut deque = Deque::new();
    for value in 1..=4 {
        deque.push_front(value);
    }
    let drained: Vec<i32> = std::iter::from_fn(|| deque.pop_back().ok()).collect();
    assert_eq!(drained, vec![1, 2, 3, 4]);
}

#[rstest]
fn test_mixed_ends() {
    let mut deque = Deque::new();
    deque.push_back(2);
    deque.push_front(1);
    deque.push_back(3);
    deque.push_front(0);
    assert_eq!(deque.to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(deque.peek_front(), Ok(&0));
    assert_eq!(deque.peek_back(), Ok(&3));
}

#[rstest]
fn test_single_element_is_both_ends() {
    let mut deque = Deque::new();
    deque.push_back("only");
    assert_eq!(deque.peek_front(), Ok(&"only"));
    assert_eq!(deque.peek_back(), Ok(&"only"));
    assert_eq!(deque.pop_back(), Ok("only"));
    assert_eq!(deque.peek_front(), Err(CollectionError::EmptyCollection));
}

// =============================================================================
// Errors on empty
// =============================================================================

#[rstest]
fn test_empty_deque_reports_empty_collection_for_integers() {
    let mut deque: Deque<i32> = Deque::new();
    assert_eq!(deque.pop_front(), Err(CollectionError::EmptyCollection));
    assert_eq!(deque.pop_back(), Err(CollectionError::EmptyCollection));
    assert_eq!(deque.peek_front(), Err(CollectionError::EmptyCollection));
    assert_eq!(deque.peek_back(), Err(CollectionError::EmptyCollection));
}

#[rstest]
fn test_empty_deque_reports_empty_collection_for_strings() {
    let mut deque: Deque<String> = Deque::new();
    assert_eq!(deque.pop_front(), Err(CollectionError::EmptyCollection));
    assert_eq!(deque.peek_back(), Err(CollectionError::EmptyCollection));
}

#[rstest]
fn test_drained_deque_reports_empty_collection() {
    let mut deque = Deque::from_slice(&[1]);
    assert_eq!(deque.pop_front(), Ok(1));
    assert_eq!(deque.pop_front(), Err(CollectionError::EmptyCollection));
    deque.push_back(2);
    assert_eq!(deque.pop_back(), Ok(2));
}

// =============================================================================
// Size, clear and copies
// =============================================================================

#[rstest]
#[case(5, 0)]
#[case(5, 3)]
#[case(5, 5)]
fn test_len_after_adds_and_removes(#[case] adds: usize, #[case] removes: usize) {
    let mut deque = Deque::new();
    for value in 0..adds {
        deque.push_back(value);
    }
    for _ in 0..removes {
        deque.pop_front().unwrap();
    }
    assert_eq!(deque.len(), adds - removes);
    assert_eq!(deque.is_empty(), adds == removes);
}

#[rstest]
fn test_clear_resets_and_allows_reuse() {
    let mut deque = Deque::from_slice(&[1, 2, 3]);
    deque.clear();
    assert!(deque.is_empty());
    assert_eq!(deque.pop_front(), Err(CollectionError::EmptyCollection));
    deque.push_back(4);
    assert_eq!(deque.to_vec(), vec![4]);
}

#[rstest]
fn test_to_vec_is_defensive_copy() {
    let deque = Deque::from_slice(&[1, 2, 3]);
    let mut copy = deque.to_vec();
    copy[0] = 100;
    copy.push(4);
    assert_eq!(deque.peek_front(), Ok(&1));
    assert_eq!(deque.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_container_trait_object_style_usage() {
    fn total<C: Container<i32>>(container: &C) -> i32 {
        container.to_vec().iter().sum()
    }
    let deque = Deque::from_slice(&[1, 2, 3]);
    assert_eq!(total(&deque), 6);
}

// =============================================================================
// Iteration and formatting
// =============================================================================

#[rstest]
fn test_iter_both_directions() {
    let deque: Deque<i32> = (1..=4).collect();
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
}

#[rstest]
fn test_extend_appends_at_back() {
    let mut deque = Deque::from_slice(&[1]);
    deque.extend([2, 3]);
    assert_eq!(deque.to_vec(), vec![1, 2, 3]);
}

#[rstest]
#[case(vec![], "[]")]
#[case(vec![1], "[1]")]
#[case(vec![1, 2, 3], "[1 2 3]")]
fn test_display(#[case] elements: Vec<i32>, #[case] expected: &str) {
    let deque: Deque<i32> = elements.into_iter().collect();
    assert_eq!(format!("{deque}"), expected);
}

#[rstest]
fn test_debug() {
    let deque = Deque::from_slice(&["a", "b"]);
    assert_eq!(format!("{deque:?}"), r#"["a", "b"]"#);
}
