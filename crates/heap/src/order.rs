use crate::PriorityNode;

/// Ordering policy of a binary heap.
///
/// `precedes(a, b)` is true when `a` is strictly more extreme than `b`, i.e.
/// `a` belongs closer to the root. Equal elements never precede each other.
pub trait HeapOrder<T> {
    fn precedes(a: &T, b: &T) -> bool;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MaxOrder;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MinOrder;

/// Lowest priority first; the value carries no ordering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ByPriority;

impl<T: PartialOrd> HeapOrder<T> for MaxOrder {
    #[inline(always)]
    fn precedes(a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: PartialOrd> HeapOrder<T> for MinOrder {
    #[inline(always)]
    fn precedes(a: &T, b: &T) -> bool {
        a < b
    }
}

impl<V, P: PartialOrd> HeapOrder<PriorityNode<V, P>> for ByPriority {
    #[inline(always)]
    fn precedes(a: &PriorityNode<V, P>, b: &PriorityNode<V, P>) -> bool {
        a.priority < b.priority
    }
}
