//! Comparators that parameterize a [`BinaryHeap`]'s notion of "greater".
//!
//! A comparator is any implementor of the [`Compare`] trait. Closures and fn
//! pointers of signature `Fn(&T, &T) -> Ordering` implement it via a blanket
//! impl, so most callers never name a comparator type explicitly:
//!
//! ```
//! use cairn::BinaryHeap;
//!
//! let mut heap = BinaryHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! heap.push(3).push(1).push(2);
//! assert_eq!(heap.pop(), Ok(1)); // min-heap: the inverted order ranks 1 greatest
//! ```
//!
//! [`NaturalOrder`] is the default comparator and delegates to the element
//! type's [`Ord`] implementation, making the heap an ordinary max-heap.
//!
//! [`BinaryHeap`]: crate::BinaryHeap

use core::cmp::Ordering;

/// A three-way ordering strategy over values of type `T`.
///
/// Implementors must behave as a consistent total order proxy: the result for
/// a given pair of values must not change between calls, and the order must be
/// transitive. A comparator that breaks this contract leaves the heap in an
/// unspecified order, but never causes memory unsafety or out-of-bounds
/// access, since all index arithmetic is bounds-checked against the current
/// length before use.
pub trait Compare<T: ?Sized> {
    /// Compares two values, returning [`Ordering::Greater`] when `a` should
    /// rank above `b` in the heap.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Compare<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// A zero-sized comparator that delegates to the [`Ord`] implementation of
/// the compared type.
///
/// This is the default comparator of [`BinaryHeap`](crate::BinaryHeap), under
/// which the heap is a max-heap by natural magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: ?Sized + Ord> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparator adaptor that inverts another comparator, in the manner of
/// [`core::cmp::Reverse`].
///
/// `Reverse(NaturalOrder)` turns a max-heap into a min-heap:
///
/// ```
/// use cairn::{BinaryHeap, NaturalOrder, Reverse};
///
/// let mut heap = BinaryHeap::with_comparator(Reverse(NaturalOrder));
/// heap.push(3).push(1).push(2);
/// assert_eq!(heap.pop(), Ok(1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reverse<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
