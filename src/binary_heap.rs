//! Array-backed binary heap with an injected comparator
//!
//! Elements live in a `Vec` that encodes a complete binary tree in level
//! order: index 0 is the root, and the node at index `i` has its children at
//! `2i + 1` and `2i + 2`. The [`Comparator`] supplied at construction decides
//! whether the root is the minimum, the maximum, or the extremal element of
//! any other strict ordering.
//!
//! ```text
//!          0
//!        /   \
//!       1     2
//!      / \   / \
//!     3   4 5   6
//! ```
//!
//! Equal-rank elements come out in an unspecified order; the heap is not
//! stable.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `len`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heaps::{BinaryHeap, HeapError, MaxOrder};
//!
//! let mut heap = BinaryHeap::new(MaxOrder);
//! heap.push(1);
//! heap.push(3);
//! heap.push(5);
//! heap.push(6);
//!
//! assert_eq!(heap.peek(), Ok(&6));
//! assert_eq!(heap.pop(), Ok(6));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! ```
//!
//! # Concurrency
//!
//! There is no internal synchronization. The heap is `Send`/`Sync` exactly
//! when `T` and the comparator are; callers that share one across threads
//! must wrap it in a lock themselves.

use std::fmt;

use crate::comparator::{Comparator, MaxOrder, MinOrder};
use crate::options::HeapOptions;
use crate::traits::{Container, HeapError, Result};

/// A binary heap ordered by the comparator `C`
pub struct BinaryHeap<T, C> {
    /// Complete binary tree in level order
    data: Vec<T>,
    comparator: C,
    release_on_clear: bool,
}

/// A heap that yields its smallest element first
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

/// A heap that yields its largest element first
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`
    pub fn new(comparator: C) -> Self {
        Self::with_options(comparator, HeapOptions::default())
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        Self::with_options(
            comparator,
            HeapOptions::default().with_initial_capacity(capacity),
        )
    }

    /// Creates an empty heap configured by `options`
    pub fn with_options(comparator: C, options: HeapOptions) -> Self {
        if options.initial_capacity > 0 {
            log::trace!(
                "reserving binary heap storage for {} elements",
                options.initial_capacity
            );
        }
        Self {
            data: Vec::with_capacity(options.initial_capacity),
            comparator,
            release_on_clear: options.release_on_clear,
        }
    }

    /// Inserts an element, restoring heap order by sifting it up
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the extremal element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements. The heap
    /// is left untouched and remains usable.
    pub fn pop(&mut self) -> Result<T> {
        if self.data.is_empty() {
            log::trace!("pop on empty binary heap");
            return Err(HeapError::Empty);
        }

        // The last element takes the root's slot, then sinks into place.
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(root)
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Move element at index up while it outranks its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self
                .comparator
                .outranks(&self.data[index], &self.data[parent])
            {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while one of its children outranks it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(index);
            let right = right_child(index);
            let mut best = index;

            if left < len
                && self
                    .comparator
                    .outranks(&self.data[left], &self.data[best])
            {
                best = left;
            }
            // compared against the best so far, not the left child, so a
            // right child that outranks the node still wins when the left
            // child is incomparable with it
            if right < len
                && self
                    .comparator
                    .outranks(&self.data[right], &self.data[best])
            {
                best = right;
            }

            if best != index {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Returns the extremal element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or_else(|| {
            log::trace!("peek on empty binary heap");
            HeapError::Empty
        })
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every element
    ///
    /// The backing allocation is kept for reuse unless the heap was built
    /// with [`HeapOptions::release_on_clear`].
    pub fn clear(&mut self) {
        log::debug!("clearing binary heap of {} elements", self.data.len());
        if self.release_on_clear {
            self.data = Vec::new();
        } else {
            self.data.clear();
        }
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the comparator fixed at construction
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the elements in level order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in level order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the backing vector in level order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, C> Container<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self)
    }

    fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Comparator<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for BinaryHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            comparator: self.comparator.clone(),
            release_on_clear: self.release_on_clear,
        }
    }
}

// Closures are not `Debug`, so the comparator is left out.
impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display, C> fmt::Display for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryHeap[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
