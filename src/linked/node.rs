//! Arena nodes and the handles that link them.

/// Stable handle to a node slot in a chain's arena.
///
/// A handle stays valid from the moment its node is linked until the node is
/// removed; slots of removed nodes are recycled for later insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(usize);

impl NodeIndex {
    #[inline]
    pub(crate) const fn new(slot: usize) -> Self {
        Self(slot)
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0
    }
}

/// A value cell with handles to its neighbors.
///
/// `next` follows the chain from head to tail; `previous` is the back-link
/// and must always mirror it: if `a.next == Some(b)` then
/// `b.previous == Some(a)`.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) previous: Option<NodeIndex>,
    pub(crate) next: Option<NodeIndex>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) const fn new(value: T, previous: Option<NodeIndex>, next: Option<NodeIndex>) -> Self {
        Self {
            value,
            previous,
            next,
        }
    }
}

/// One arena cell: either a live node or a link in the free list.
#[derive(Debug, Clone)]
pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeIndex> },
}
