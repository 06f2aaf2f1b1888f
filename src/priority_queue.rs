//! Priority queue backed by [`BinaryHeap`]
//!
//! [`PriorityQueue`] presents heap semantics under queue vocabulary through
//! the [`Queue`] and [`Container`] traits. It adds no ordering logic of its
//! own: every operation forwards to the single heap it owns, and
//! [`HeapError::Empty`](crate::HeapError::Empty) is passed through unchanged.
//!
//! The front of the queue is the element that outranks all others under the
//! comparator. When several elements tie for the front, any one of them may be
//! returned.
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heaps::{Container, MaxOrder, PriorityQueue, Queue};
//!
//! let mut queue = PriorityQueue::new(MaxOrder);
//! queue.enqueue(3);
//! queue.enqueue(7);
//! queue.enqueue(5);
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.dequeue(), Ok(7));
//! assert_eq!(queue.peek(), Ok(&5));
//! ```

use std::fmt;

use crate::binary_heap::BinaryHeap;
use crate::comparator::Comparator;
use crate::options::HeapOptions;
use crate::traits::{Container, Queue, Result};

/// A priority queue ordered by the comparator `C`
pub struct PriorityQueue<T, C> {
    heap: BinaryHeap<T, C>,
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `comparator`
    pub fn new(comparator: C) -> Self {
        Self {
            heap: BinaryHeap::new(comparator),
        }
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(comparator, capacity),
        }
    }

    /// Creates an empty queue, forwarding `options` to the underlying heap
    pub fn with_options(comparator: C, options: HeapOptions) -> Self {
        Self {
            heap: BinaryHeap::with_options(comparator, options),
        }
    }

    /// Consumes the queue, returning its elements in dequeue order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Returns the comparator the underlying heap was built with
    pub fn comparator(&self) -> &C {
        self.heap.comparator()
    }

    /// Iterates over the queued elements in heap level order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }
}

impl<T, C> Container<T> for PriorityQueue<T, C> {
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.heap.as_slice().to_vec()
    }
}

impl<T, C: Comparator<T>> Queue<T> for PriorityQueue<T, C> {
    fn enqueue(&mut self, item: T) {
        self.heap.push(item)
    }

    fn dequeue(&mut self) -> Result<T> {
        self.heap.pop()
    }

    fn peek(&self) -> Result<&T> {
        self.heap.peek()
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter)
    }
}

impl<T, C: Comparator<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for PriorityQueue<T, C> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PriorityQueue[")?;
        for (i, item) in self.heap.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{MaxOrder, MinOrder};
    use crate::traits::HeapError;

    fn int_min(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn test_queue_lifecycle() {
        let mut queue: PriorityQueue<i32, _> = PriorityQueue::new(int_min);

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), Err(HeapError::Empty));
        assert_eq!(queue.dequeue(), Err(HeapError::Empty));

        queue.enqueue(10);
        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek(), Ok(&10));
        assert_eq!(queue.dequeue(), Ok(10));
        assert!(queue.is_empty());

        queue.enqueue(20);
        queue.enqueue(30);
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_order_min() {
        let mut queue = PriorityQueue::new(MinOrder);
        queue.extend([5, 1, 3, 2]);
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(5));
        assert_eq!(queue.dequeue(), Err(HeapError::Empty));
    }

    #[test]
    fn test_dequeue_order_max() {
        let mut queue = PriorityQueue::with_capacity(MaxOrder, 4);
        queue.extend([1, 3, 5, 6]);
        assert_eq!(queue.into_sorted_vec(), vec![6, 5, 3, 1]);
    }

    #[test]
    fn test_options_are_forwarded() {
        let options = HeapOptions::default()
            .with_initial_capacity(16)
            .release_on_clear(true);
        let mut queue: PriorityQueue<u8, _> = PriorityQueue::with_options(MinOrder, options);
        assert!(queue.heap.capacity() >= 16);

        queue.enqueue(1);
        queue.clear();
        assert_eq!(queue.heap.capacity(), 0);
    }

    #[test]
    fn test_comparator_is_shared_with_heap() {
        let queue: PriorityQueue<i32, _> = PriorityQueue::new(MaxOrder);
        assert_eq!(*queue.comparator(), MaxOrder);
    }

    #[test]
    fn test_values_and_display() {
        let mut queue = PriorityQueue::new(int_min);
        queue.extend([1, 3, 5, 2]);
        assert_eq!(queue.values(), vec![1, 2, 5, 3]);
        assert_eq!(queue.to_string(), "PriorityQueue[1, 2, 5, 3]");
        assert_eq!(queue.iter().count(), 4);
    }
}
