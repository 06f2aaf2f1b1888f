//! Common traits for the containers in this crate
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Container`]: Base trait for anything that holds elements and can report
//!   its size or be emptied
//! - [`Queue`]: Extended trait adding admission/removal vocabulary on top of
//!   [`Container`]
//!
//! [`BinaryHeap`](crate::binary_heap::BinaryHeap) implements [`Container`];
//! [`PriorityQueue`](crate::priority_queue::PriorityQueue) implements both.

/// Error type for heap and queue operations
///
/// There is exactly one failure mode: asking for the extremal element of an
/// empty structure. It is always recoverable; the structure stays valid and
/// can be pushed to afterwards.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// `pop`/`dequeue` or `peek` was called with no elements present
    #[error("binary heap is empty")]
    Empty,
}

/// Result type for heap and queue operations
pub type Result<T> = std::result::Result<T, HeapError>;

/// Base trait for element containers
///
/// # Example
///
/// ```rust
/// use rust_comparator_heaps::{Container, MinHeap};
///
/// let mut heap = MinHeap::default();
/// heap.push(2);
/// heap.push(1);
///
/// assert_eq!(Container::len(&heap), 2);
/// Container::clear(&mut heap);
/// assert!(Container::is_empty(&heap));
/// ```
pub trait Container<T> {
    /// Returns true if the container holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the container
    fn len(&self) -> usize;

    /// Removes every element, dropping them
    fn clear(&mut self);

    /// Returns a copy of every element
    ///
    /// The order is whatever the container stores internally; for heaps this
    /// is level order, not sorted order.
    fn values(&self) -> Vec<T>
    where
        T: Clone;
}

/// Queue-shaped vocabulary over a [`Container`]
///
/// # Example
///
/// ```rust
/// use rust_comparator_heaps::{Container, HeapError, MinOrder, PriorityQueue, Queue};
///
/// let mut queue = PriorityQueue::new(MinOrder);
/// queue.enqueue(10);
/// assert_eq!(queue.peek(), Ok(&10));
/// assert_eq!(queue.dequeue(), Ok(10));
/// assert!(queue.is_empty());
/// assert_eq!(queue.dequeue(), Err(HeapError::Empty));
/// ```
pub trait Queue<T>: Container<T> {
    /// Admits an element
    ///
    /// # Time Complexity
    /// O(log n) for heap-backed queues.
    fn enqueue(&mut self, item: T);

    /// Removes and returns the front element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue holds no elements.
    fn dequeue(&mut self) -> Result<T>;

    /// Returns the front element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue holds no elements.
    fn peek(&self) -> Result<&T>;
}
