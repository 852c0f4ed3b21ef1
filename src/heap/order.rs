//! Heap direction markers.

mod sealed {
    pub trait Sealed {}
}

/// Selects which end of the total order a [`BinaryHeap`](super::BinaryHeap)
/// keeps at its root.
///
/// Implemented only by [`MinOrder`] and [`MaxOrder`]; element types provide
/// the ordering itself through [`Ord`].
pub trait HeapOrder: sealed::Sealed {
    /// Returns `true` if `candidate` must sit above `other` in the heap.
    ///
    /// Equal elements never precede each other, so they are never swapped.
    fn precedes<T: Ord>(candidate: &T, other: &T) -> bool;
}

/// Smallest element at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

/// Largest element at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl sealed::Sealed for MinOrder {}
impl sealed::Sealed for MaxOrder {}

impl HeapOrder for MinOrder {
    #[inline]
    fn precedes<T: Ord>(candidate: &T, other: &T) -> bool {
        candidate < other
    }
}

impl HeapOrder for MaxOrder {
    #[inline]
    fn precedes<T: Ord>(candidate: &T, other: &T) -> bool {
        candidate > other
    }
}
