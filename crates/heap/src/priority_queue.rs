use crate::binary_heap::BinaryHeap;
use crate::order::ByPriority;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriorityNode<V, P> {
    pub value: V,
    pub priority: P,
}

impl<V, P> PriorityNode<V, P> {
    pub fn new(value: V, priority: P) -> Self {
        Self { value, priority }
    }
}

/// Min-priority queue: the node with the lowest `priority` is dequeued first.
///
/// There is no decrease-key. Enqueuing a value again with a smaller priority
/// leaves the older node in the queue; callers that care must recognise and
/// skip it when it surfaces.
#[derive(Clone, Debug)]
pub struct PriorityQueue<V, P = u64> {
    heap: BinaryHeap<PriorityNode<V, P>, ByPriority>,
}

impl<V, P: PartialOrd> PriorityQueue<V, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn peek(&self) -> Option<&PriorityNode<V, P>> {
        self.heap.peek()
    }

    /// Heap-ordered storage, root first.
    #[inline]
    pub fn as_slice(&self) -> &[PriorityNode<V, P>] {
        self.heap.as_slice()
    }

    pub fn enqueue(&mut self, value: V, priority: P) -> &mut Self {
        self.heap.insert(PriorityNode::new(value, priority));
        self
    }

    pub fn dequeue(&mut self) -> Option<PriorityNode<V, P>> {
        self.heap.extract()
    }
}

impl<V, P: PartialOrd> Default for PriorityQueue<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P: PartialOrd> Extend<(V, P)> for PriorityQueue<V, P> {
    fn extend<I: IntoIterator<Item = (V, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<V, P: PartialOrd> FromIterator<(V, P)> for PriorityQueue<V, P> {
    fn from_iter<I: IntoIterator<Item = (V, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
