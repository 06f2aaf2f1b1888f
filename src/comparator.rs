//! Ordering policies injected into heaps at construction time
//!
//! A [`Comparator`] answers one question: must `a` sit strictly above `b` in
//! heap order? Answering with "less than" yields a min-heap, answering with
//! "greater than" yields a max-heap. The heap never hard-codes a direction.
//!
//! Any `Fn(&T, &T) -> bool` is a comparator, so plain functions and closures
//! with annotated argument types work directly:
//!
//! ```rust
//! use rust_comparator_heaps::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new(|a: &&str, b: &&str| a.len() > b.len());
//! heap.push("ox");
//! heap.push("heron");
//! heap.push("cat");
//! assert_eq!(heap.pop(), Ok("heron"));
//! ```
//!
//! # Contract
//!
//! The comparator must be a strict ordering: `outranks(a, a)` is false, and
//! `outranks(a, b)` implies `!outranks(b, a)`. A comparator that breaks this
//! does not cause memory unsafety, but the order in which elements come out
//! of the heap is then unspecified.

use std::cmp::Ordering;

/// A strict "outranks" relation over `T`
pub trait Comparator<T: ?Sized> {
    /// Returns true iff `a` must be strictly above `b` in heap order
    fn outranks(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element first, using [`Ord`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Comparator<T> for MinOrder {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element first, using [`Ord`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Comparator<T> for MaxOrder {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Inverts another comparator
///
/// ```rust
/// use rust_comparator_heaps::{BinaryHeap, MinOrder, Reversed};
///
/// let mut heap = BinaryHeap::new(Reversed(MinOrder));
/// heap.extend([1, 5, 3]);
/// assert_eq!(heap.pop(), Ok(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self.0.outranks(b, a)
    }
}

/// Adapts a three-way comparison into the boolean "outranks" convention
///
/// `a` outranks `b` iff the wrapped function returns [`Ordering::Less`], so an
/// ascending comparison such as [`Ord::cmp`] produces a min-heap. Wrap it in
/// [`Reversed`] for the opposite direction.
///
/// ```rust
/// use rust_comparator_heaps::{BinaryHeap, ThreeWay};
///
/// let mut heap = BinaryHeap::new(ThreeWay(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0)));
/// heap.push((2, 'b'));
/// heap.push((1, 'a'));
/// assert_eq!(heap.peek(), Ok(&(1, 'a')));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeWay<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for ThreeWay<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b) == Ordering::Less
    }
}
