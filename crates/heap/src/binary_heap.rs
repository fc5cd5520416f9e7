use std::fmt;
use std::marker::PhantomData;

use crate::order::{HeapOrder, MaxOrder, MinOrder};

pub type MaxBinaryHeap<T> = BinaryHeap<T, MaxOrder>;
pub type MinBinaryHeap<T> = BinaryHeap<T, MinOrder>;

/// Array-backed binary heap.
///
/// The element at index `i` is never preceded (in the sense of `O`) by its
/// children at `2i + 1` and `2i + 2`. The storage is rearranged on every
/// mutation, so it is only exposed as a read-only slice.
pub struct BinaryHeap<T, O> {
    values: Vec<T>,
    _order: PhantomData<O>,
}

impl<T, O: HeapOrder<T>> BinaryHeap<T, O> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            _order: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.values.first()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Linear scan; heaps give no search guarantee better than O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values.iter().any(|v| v == value)
    }

    /// Appends `value` and sifts it up. O(log n).
    pub fn insert(&mut self, value: T) -> &mut Self {
        self.values.push(value);
        self.sift_up(self.values.len() - 1);
        self
    }

    /// Removes the root, or returns `None` when the heap is empty. O(log n).
    pub fn extract(&mut self) -> Option<T> {
        let last = self.values.pop()?;
        if self.values.is_empty() {
            return Some(last);
        }
        let root = std::mem::replace(&mut self.values[0], last);
        self.sink_down(0);
        Some(root)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !O::precedes(&self.values[index], &self.values[parent]) {
                break;
            }
            self.values.swap(index, parent);
            index = parent;
        }
    }

    // The left child wins ties against an equal right child.
    fn sink_down(&mut self, mut index: usize) {
        let len = self.values.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut swap = None;

            if left < len && O::precedes(&self.values[left], &self.values[index]) {
                swap = Some(left);
            }
            if right < len {
                let challenger = match swap {
                    None => index,
                    Some(left) => left,
                };
                if O::precedes(&self.values[right], &self.values[challenger]) {
                    swap = Some(right);
                }
            }

            let Some(child) = swap else {
                break;
            };
            self.values.swap(index, child);
            index = child;
        }
    }
}

impl<T: PartialOrd> BinaryHeap<T, MaxOrder> {
    pub fn extract_max(&mut self) -> Option<T> {
        self.extract()
    }
}

impl<T: PartialOrd> BinaryHeap<T, MinOrder> {
    pub fn extract_min(&mut self) -> Option<T> {
        self.extract()
    }
}

impl<T, O: HeapOrder<T>> Default for BinaryHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, O> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            _order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("values", &self.values)
            .finish()
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, O: HeapOrder<T>> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}
