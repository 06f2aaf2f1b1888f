//! Comparator-Driven Heaps for Rust
//!
//! This crate provides an array-backed binary heap whose ordering is injected
//! at construction time, plus a queue-shaped facade over it.
//!
//! # Features
//!
//! - **Binary Heap**: O(log n) push and pop, O(1) peek; min-heap, max-heap or any
//!   other strict ordering depending on the comparator
//! - **Priority Queue**: `enqueue`/`dequeue`/`peek` vocabulary over a single owned heap
//! - **Comparators**: plain `Fn(&T, &T) -> bool` functions, [`MinOrder`],
//!   [`MaxOrder`], [`Reversed`], and the [`ThreeWay`] adapter for
//!   [`Ordering`](std::cmp::Ordering)-returning functions
//!
//! Popping or peeking an empty structure returns [`HeapError::Empty`]; the
//! structure stays usable. Nothing here is internally synchronized: wrap a heap
//! in a mutex if several threads need it.
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heaps::{BinaryHeap, HeapError};
//!
//! fn less(a: &i32, b: &i32) -> bool {
//!     a < b
//! }
//!
//! let mut heap = BinaryHeap::new(less);
//! heap.push(1);
//! heap.push(3);
//! heap.push(5);
//! heap.push(2);
//!
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.peek(), Err(HeapError::Empty));
//! ```

pub mod binary_heap;
pub mod comparator;
pub mod options;
pub mod priority_queue;
pub mod traits;

// Re-export the main types for convenience
pub use binary_heap::{BinaryHeap, MaxHeap, MinHeap};
pub use comparator::{Comparator, MaxOrder, MinOrder, Reversed, ThreeWay};
pub use options::HeapOptions;
pub use priority_queue::PriorityQueue;
pub use traits::{Container, HeapError, Queue, Result};
