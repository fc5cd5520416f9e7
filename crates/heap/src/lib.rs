mod binary_heap;
mod order;
mod priority_queue;

pub use binary_heap::{BinaryHeap, MaxBinaryHeap, MinBinaryHeap};
pub use order::{ByPriority, HeapOrder, MaxOrder, MinOrder};
pub use priority_queue::{PriorityNode, PriorityQueue};

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{
        BinaryHeap, ByPriority, HeapOrder, MaxBinaryHeap, MaxOrder, MinBinaryHeap, MinOrder,
        PriorityNode, PriorityQueue,
    };

    fn assert_heap_invariant<T, O: HeapOrder<T>>(values: &[T]) {
        for i in 1..values.len() {
            let parent = (i - 1) / 2;
            assert!(
                !O::precedes(&values[i], &values[parent]),
                "child {i} precedes parent {parent}"
            );
        }
    }

    fn priorities<V, P: Copy>(queue: &PriorityQueue<V, P>) -> Vec<P>
    where
        P: PartialOrd,
    {
        queue.as_slice().iter().map(|node| node.priority).collect()
    }

    #[test]
    fn max_insert_layout() {
        let mut heap = MaxBinaryHeap::new();
        heap.insert(10).insert(5).insert(15);
        assert_eq!(heap.as_slice(), &[15, 5, 10]);
        assert_eq!(heap.peek(), Some(&15));
    }

    #[test]
    fn max_extract_layout() {
        let mut heap = MaxBinaryHeap::new();
        heap.insert(10).insert(5).insert(15);
        assert_eq!(heap.extract_max(), Some(15));
        assert_eq!(heap.as_slice(), &[10, 5]);

        let mut heap: MaxBinaryHeap<i32> = [10, 5, 15, 3].into_iter().collect();
        assert_eq!(heap.extract_max(), Some(15));
        assert_eq!(heap.as_slice(), &[10, 5, 3]);
        assert_eq!(heap.extract_max(), Some(10));
        assert_eq!(heap.as_slice(), &[5, 3]);
    }

    #[test]
    fn empty_returns_none() {
        let mut max: MaxBinaryHeap<i32> = MaxBinaryHeap::new();
        assert_eq!(max.extract_max(), None);
        assert!(max.is_empty());
        assert_eq!(max.peek(), None);

        let mut min: MinBinaryHeap<u64> = MinBinaryHeap::default();
        assert_eq!(min.extract_min(), None);

        let mut queue: PriorityQueue<&str> = PriorityQueue::new();
        assert_eq!(queue.dequeue(), None);
        assert!(queue.as_slice().is_empty());
    }

    #[test]
    fn single_element_round_trip() {
        let mut heap = MinBinaryHeap::new();
        heap.insert(0_u32);
        assert_eq!(heap.extract_min(), Some(0));
        assert_eq!(heap.extract_min(), None);
    }

    #[test]
    fn contains_scans_storage() {
        let heap: MinBinaryHeap<i32> = [4, 8, 1, 9].into_iter().collect();
        assert!(heap.contains(&8));
        assert!(!heap.contains(&7));
    }

    #[test]
    fn queue_enqueue_layout() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(10, 2).enqueue(5, 1).enqueue(15, 3);
        assert_eq!(priorities(&queue), vec![1, 2, 3]);
        assert_eq!(queue.peek(), Some(&PriorityNode::new(5, 1)));
    }

    #[test]
    fn queue_dequeue_lowest_priority_first() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(10, 2).enqueue(5, 1).enqueue(15, 3);
        assert_eq!(queue.dequeue(), Some(PriorityNode::new(5, 1)));
        assert_eq!(
            queue.as_slice(),
            &[PriorityNode::new(10, 2), PriorityNode::new(15, 3)]
        );

        let mut queue = PriorityQueue::new();
        queue.enqueue(10, 2).enqueue(5, 1).enqueue(15, 3).enqueue(3, 1);
        assert_eq!(queue.dequeue(), Some(PriorityNode::new(5, 1)));
        assert_eq!(queue.dequeue(), Some(PriorityNode::new(3, 1)));
        assert_eq!(
            queue.as_slice(),
            &[PriorityNode::new(10, 2), PriorityNode::new(15, 3)]
        );
    }

    #[test]
    fn sink_down_prefers_left_on_tie() {
        let mut queue = PriorityQueue::new();
        queue
            .enqueue("root", 0)
            .enqueue("left", 1)
            .enqueue("right", 1)
            .enqueue("deep", 5);
        assert_eq!(queue.dequeue().map(|n| n.value), Some("root"));
        assert_eq!(queue.dequeue().map(|n| n.value), Some("left"));
        assert_eq!(queue.dequeue().map(|n| n.value), Some("right"));
        assert_eq!(queue.dequeue().map(|n| n.value), Some("deep"));
    }

    #[test]
    fn duplicate_values_keep_order() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("a", 5).enqueue("b", 3).enqueue("a", 1);
        assert_heap_invariant::<_, ByPriority>(queue.as_slice());

        let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue())
            .map(|n| (n.value, n.priority))
            .collect();
        assert_eq!(drained, vec![("a", 1), ("b", 3), ("a", 5)]);
    }

    #[test]
    fn float_priorities_with_infinity() {
        let mut queue = PriorityQueue::new();
        queue
            .enqueue('x', f64::INFINITY)
            .enqueue('y', 2.5)
            .enqueue('z', 0.0);
        let order: Vec<char> = std::iter::from_fn(|| queue.dequeue())
            .map(|n| n.value)
            .collect();
        assert_eq!(order, vec!['z', 'y', 'x']);
    }

    fn check_random<O: HeapOrder<i64>>(seed: u64, descending: bool) {
        let mut rng = StdRng::seed_from_u64(seed);
        for n in 0..48 {
            let mut heap: BinaryHeap<i64, O> = BinaryHeap::new();
            let mut expected = Vec::with_capacity(n);
            for _ in 0..n {
                let v = rng.random_range(-16..=16);
                heap.insert(v);
                expected.push(v);
                assert_heap_invariant::<_, O>(heap.as_slice());
            }

            expected.sort_unstable();
            if descending {
                expected.reverse();
            }

            let mut got = Vec::with_capacity(n);
            while let Some(v) = heap.extract() {
                assert_heap_invariant::<_, O>(heap.as_slice());
                got.push(v);
            }
            assert_eq!(got, expected, "n={n}");
        }
    }

    #[test]
    fn random_max_heap_drains_descending() {
        check_random::<MaxOrder>(0xDEAD_BEEF, true);
    }

    #[test]
    fn random_min_heap_drains_ascending() {
        check_random::<MinOrder>(0xCAFE_BABE, false);
    }

    #[test]
    fn random_interleaved_queue_ops() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let mut queue = PriorityQueue::new();
        let mut oracle: Vec<u64> = Vec::new();

        for step in 0..2_000_u32 {
            if rng.random_bool(0.6) || oracle.is_empty() {
                let p = rng.random_range(0..64_u64);
                queue.enqueue(step, p);
                oracle.push(p);
            } else {
                let node = queue.dequeue().map(|n| n.priority);
                let min_idx = oracle
                    .iter()
                    .enumerate()
                    .min_by_key(|&(_, p)| *p)
                    .map(|(i, _)| i);
                let expected = min_idx.map(|i| oracle.swap_remove(i));
                assert_eq!(node, expected, "step={step}");
            }
            assert_heap_invariant::<_, ByPriority>(queue.as_slice());
            assert_eq!(queue.len(), oracle.len());
        }
    }
}
