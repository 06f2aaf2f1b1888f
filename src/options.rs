//! Construction options shared by [`BinaryHeap`](crate::BinaryHeap) and
//! [`PriorityQueue`](crate::PriorityQueue)
//!
//! None of these settings change which element comes out next; they only
//! affect how the backing storage is allocated.

/// Storage configuration for a heap
///
/// # Example
///
/// ```rust
/// use rust_comparator_heaps::{BinaryHeap, HeapOptions, MinOrder};
///
/// let options = HeapOptions::default()
///     .with_initial_capacity(64)
///     .release_on_clear(true);
/// let heap: BinaryHeap<u32, _> = BinaryHeap::with_options(MinOrder, options);
/// assert!(heap.capacity() >= 64);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapOptions {
    /// Number of elements to reserve up front
    pub initial_capacity: usize,
    /// Drop the backing allocation on `clear` instead of keeping it for reuse
    pub release_on_clear: bool,
}

impl HeapOptions {
    /// Sets the number of elements to reserve up front
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Chooses whether `clear` releases the backing allocation
    pub fn release_on_clear(mut self, release: bool) -> Self {
        self.release_on_clear = release;
        self
    }
}
