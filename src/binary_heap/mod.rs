//! A priority queue implemented with a binary heap, ranked by a
//! runtime-supplied comparator.

use crate::order::{Compare, NaturalOrder};
use alloc::vec::{self, Vec};
use cfg_if::cfg_if;
use core::fmt;
use core::iter::FusedIterator;
use core::mem::{swap, ManuallyDrop};
use core::ptr;
use core::slice;

#[cfg(test)]
mod tests;

/// A priority queue implemented with a binary heap.
///
/// The heap is a max-heap with respect to its comparator `C`: the element
/// that the comparator ranks greatest sits at the root and is the one
/// returned by [`peek`] and [`pop`]. With the default [`NaturalOrder`]
/// comparator this coincides with the standard library's `BinaryHeap`; a
/// min-heap is obtained by inverting the comparator, for example with
/// [`Reverse`](crate::Reverse) or a closure that flips its arguments.
///
/// # Examples
///
/// ```
/// use cairn::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
///
/// // The mutating operations return the heap again, so calls can be chained.
/// heap.push(1).push(5).push(2);
///
/// assert_eq!(heap.peek(), Some(&5));
/// assert_eq!(heap.len(), 3);
///
/// // Elements come out in descending comparator order.
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Ok(2));
/// assert_eq!(heap.pop(), Ok(1));
///
/// // Unlike `peek` on an empty heap, `pop` on an empty heap is an error.
/// assert!(heap.pop().is_err());
/// assert_eq!(heap.peek(), None);
/// ```
///
/// A custom comparator ranks elements without any `Ord` requirement on the
/// element type itself:
///
/// ```
/// use cairn::BinaryHeap;
///
/// struct Task {
///     name: &'static str,
///     priority: u32,
/// }
///
/// let mut queue = BinaryHeap::with_comparator(|a: &Task, b: &Task| {
///     a.priority.cmp(&b.priority)
/// });
///
/// queue.push(Task { name: "compact", priority: 1 });
/// queue.push(Task { name: "flush", priority: 10 });
/// queue.push(Task { name: "scrub", priority: 5 });
///
/// assert_eq!(queue.pop().unwrap().name, "flush");
/// assert_eq!(queue.pop().unwrap().name, "scrub");
/// assert_eq!(queue.pop().unwrap().name, "compact");
/// ```
///
/// # Comparator replacement
///
/// The comparator may be replaced after construction with
/// [`set_comparator`]. Doing so does not reorder anything: the heap property
/// is only re-established by an explicit [`rebuild`], and until then the
/// extraction order is unspecified.
///
/// # Time complexity
///
/// | [push]        | [pop]         | [peek]  | [rebuild]/[load_from] |
/// |---------------|---------------|---------|-----------------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1)  | *O*(*n*)              |
///
/// [`peek`]: BinaryHeap::peek
/// [`pop`]: BinaryHeap::pop
/// [`set_comparator`]: BinaryHeap::set_comparator
/// [`rebuild`]: BinaryHeap::rebuild
/// [push]: BinaryHeap::push
/// [pop]: BinaryHeap::pop
/// [peek]: BinaryHeap::peek
/// [rebuild]: BinaryHeap::rebuild
/// [load_from]: BinaryHeap::load_from
pub struct BinaryHeap<T, C = NaturalOrder> {
    data: Vec<T>,
    cmp: C,
}

/// The error returned by [`BinaryHeap::pop`] on an empty heap.
///
/// The heap is left untouched by the failed call: still empty, still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pop on an empty heap")
    }
}

cfg_if! {
    if #[cfg(feature = "std")] {
        impl std::error::Error for EmptyHeapError {}
    }
}

impl<T: Clone, C: Clone> Clone for BinaryHeap<T, C> {
    fn clone(&self) -> Self {
        BinaryHeap { data: self.data.clone(), cmp: self.cmp.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.cmp.clone_from(&source.cmp);
    }
}

impl<T, C: Default> Default for BinaryHeap<T, C> {
    /// Creates an empty `BinaryHeap` with its default comparator.
    #[inline]
    fn default() -> BinaryHeap<T, C> {
        BinaryHeap { data: Vec::new(), cmp: C::default() }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> BinaryHeap<T> {
    /// Creates an empty `BinaryHeap` ordered by [`NaturalOrder`], i.e. a
    /// max-heap over `T: Ord`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cairn::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new() -> BinaryHeap<T> {
        BinaryHeap { data: Vec::new(), cmp: NaturalOrder }
    }

    /// Creates an empty [`NaturalOrder`] `BinaryHeap` with at least the
    /// specified capacity.
    ///
    /// The heap will be able to hold at least `capacity` elements without
    /// reallocating. This method is allowed to allocate for more elements
    /// than `capacity`. If `capacity` is 0, the heap will not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use cairn::BinaryHeap;
    /// let mut heap = BinaryHeap::with_capacity(10);
    /// assert!(heap.capacity() >= 10);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> BinaryHeap<T> {
        BinaryHeap { data: Vec::with_capacity(capacity), cmp: NaturalOrder }
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty `BinaryHeap` ranked by the given comparator.
    ///
    /// # Examples
    ///
    /// A min-heap over `i32`:
    ///
    /// ```
    /// use cairn::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    ///
    /// heap.push(1).push(5).push(2);
    ///
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert_eq!(heap.pop(), Ok(2));
    /// assert_eq!(heap.pop(), Ok(5));
    /// ```
    #[must_use]
    pub fn with_comparator(cmp: C) -> BinaryHeap<T, C> {
        BinaryHeap { data: Vec::new(), cmp }
    }

    /// Pushes an item onto the heap, then sifts it up to its position.
    ///
    /// Returns the heap again so that pushes can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use cairn::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// heap.push(3).push(5).push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The expected cost of `push`, averaged over every possible ordering of
    /// the elements being pushed, and over a sufficiently large number of
    /// pushes, is *O*(1). The worst case cost of a *single* call is *O*(*n*),
    /// when capacity is exhausted and the backing storage needs a resize.
    pub fn push(&mut self, item: T) -> &mut Self {
        let old_len = self.data.len();
        self.data.push(item);
        // SAFETY: old_len = self.data.len() - 1 < self.data.len().
        unsafe { self.sift_up(old_len) };
        self
    }

    /// Removes the greatest item from the heap and returns it, or
    /// `Err(EmptyHeapError)` if the heap is empty.
    ///
    /// The last element is moved into the root slot and sifted down; the
    /// failed call on an empty heap has no effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use cairn::{BinaryHeap, EmptyHeapError};
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::from(vec![1, 3]);
    ///
    /// assert_eq!(heap.pop(), Ok(3));
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert_eq!(heap.pop(), Err(EmptyHeapError));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* elements is
    /// *O*(log(*n*)).
    pub fn pop(&mut self) -> Result<T, EmptyHeapError> {
        let mut item = self.data.pop().ok_or(EmptyHeapError)?;
        if !self.data.is_empty() {
            swap(&mut item, &mut self.data[0]);
            // SAFETY: !self.data.is_empty() means that self.data.len() > 0.
            unsafe { self.sift_down(0) };
        }
        Ok(item)
    }

    /// Replaces the heap's contents with the given values, in arbitrary
    /// order, then re-establishes the heap property with [`rebuild`].
    ///
    /// Runs in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cairn::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// heap.push(42);
    ///
    /// heap.load_from([3, 9, 6]);
    /// assert_eq!(heap.pop(), Ok(9));
    /// assert_eq!(heap.len(), 2);
    /// ```
    ///
    /// [`rebuild`]: BinaryHeap::rebuild
    pub fn load_from<I: IntoIterator<Item = T>>(&mut self, values: I) -> &mut Self {
        self.data = values.into_iter().collect();
        self.rebuild()
    }

    /// Re-establishes the heap property over the current contents in
    /// *O*(*n*) time, by sifting down every index from `len / 2` down to the
    /// root. A no-op on an empty heap, and on any heap that is already valid.
    ///
    /// This is only needed after [`set_comparator`], which deliberately does
    /// not reorder anything itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use cairn::BinaryHeap;
    ///
    /// fn ascending(a: &i32, b: &i32) -> Ordering { a.cmp(b) }
    /// fn descending(a: &i32, b: &i32) -> Ordering { b.cmp(a) }
    ///
    /// let mut heap: BinaryHeap<i32, fn(&i32, &i32) -> Ordering> =
    ///     BinaryHeap::with_comparator(ascending);
    /// heap.push(1).push(5).push(2);
    ///
    /// heap.set_comparator(descending).rebuild();
    /// assert_eq!(heap.pop(), Ok(1));
    /// ```
    ///
    /// [`set_comparator`]: BinaryHeap::set_comparator
    pub fn rebuild(&mut self) -> &mut Self {
        if !self.data.is_empty() {
            let mut pos = self.data.len() / 2;
            loop {
                // SAFETY: pos <= len / 2 < len, since the heap is non-empty.
                unsafe { self.sift_down(pos) };
                if pos == 0 {
                    break;
                }
                pos -= 1;
            }
        }
        self
    }

    /// Consumes the `BinaryHeap` and returns a vector in sorted (ascending
    /// comparator) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cairn::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::from(vec![1, 2, 4, 5, 7]);
    /// heap.push(6).push(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            // SAFETY: `end` goes from `self.data.len() - 1` to 1 (both
            // included), so 0 < end < self.data.len().
            unsafe { self.sift_down_range(0, end) };
        }
        self.into_vec()
    }

    // The implementations of sift_up and sift_down use unsafe blocks in
    // order to move an element out of the vector (leaving behind a hole),
    // shift the others along and move the removed element back into the
    // vector at the final location of the hole. The `Hole` type is used to
    // represent this, and makes sure the hole is filled back at the end of
    // its scope, even on panic. Using a hole halves the number of moves
    // relative to pairwise swaps while producing an identical array.

    /// Takes the element at `pos` and moves it up the heap, while it ranks
    /// strictly greater than its parent. Elements ranked equal to their
    /// parent stay put.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.data.len()`.
    unsafe fn sift_up(&mut self, pos: usize) {
        // SAFETY: The caller guarantees that pos < self.data.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > 0 {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > 0, so hole.pos() - 1 can't underflow and
            //  parent < hole.pos() is a valid index distinct from hole.pos().
            if !self.cmp.compare(hole.element(), unsafe { hole.get(parent) }).is_gt() {
                break;
            }

            // SAFETY: Same as above.
            unsafe { hole.move_to(parent) };
        }
    }

    /// Takes the element at `pos` and moves it down the heap, while some
    /// child within `..end` ranks strictly greater than it.
    ///
    /// The left child is inspected first and the right child only displaces
    /// it on a strictly greater comparison, so ties resolve to the lower
    /// index. This tie-break is observable through [`as_slice`] and must not
    /// change.
    ///
    /// [`as_slice`]: BinaryHeap::as_slice
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.data.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.data.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        loop {
            let left = 2 * hole.pos() + 1;
            let right = left + 1;
            let mut winner = hole.pos();

            // SAFETY: left < end <= self.data.len(), and
            //  left == 2 * hole.pos() + 1 != hole.pos().
            if left < end && self.cmp.compare(unsafe { hole.get(left) }, hole.element()).is_gt() {
                winner = left;
            }

            if right < end {
                let greatest = if winner == hole.pos() {
                    hole.element()
                } else {
                    // SAFETY: winner == left here, which was already proven
                    //  to be a valid index distinct from hole.pos().
                    unsafe { hole.get(winner) }
                };
                // SAFETY: right < end <= self.data.len(), and
                //  right == 2 * hole.pos() + 2 != hole.pos().
                if self.cmp.compare(unsafe { hole.get(right) }, greatest).is_gt() {
                    winner = right;
                }
            }

            if winner == hole.pos() {
                return;
            }

            // SAFETY: winner is one of the child indexes, both already
            //  proven valid and distinct from hole.pos().
            unsafe { hole.move_to(winner) };
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.data.len()`.
    unsafe fn sift_down(&mut self, pos: usize) {
        let end = self.data.len();
        // SAFETY: pos < end is guaranteed by the caller.
        unsafe { self.sift_down_range(pos, end) };
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Replaces the active comparator without touching the stored elements.
    ///
    /// The heap property is *not* re-established: until the caller invokes
    /// [`rebuild`], the heap's extraction order is unspecified (though every
    /// operation remains memory-safe and the size accounting remains exact).
    ///
    /// Returns the heap again so the usual follow-up can be chained:
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use cairn::BinaryHeap;
    ///
    /// fn ascending(a: &u32, b: &u32) -> Ordering { a.cmp(b) }
    /// fn descending(a: &u32, b: &u32) -> Ordering { b.cmp(a) }
    ///
    /// let mut heap: BinaryHeap<u32, fn(&u32, &u32) -> Ordering> =
    ///     BinaryHeap::with_comparator(ascending);
    /// heap.load_from([2, 7, 4]);
    ///
    /// heap.set_comparator(descending).rebuild();
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    ///
    /// [`rebuild`]: BinaryHeap::rebuild
    pub fn set_comparator(&mut self, cmp: C) -> &mut Self {
        self.cmp = cmp;
        self
    }

    /// Returns a reference to the active comparator.
    #[must_use]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the greatest item in the heap, or `None` if it is empty.
    ///
    /// Peeking an empty heap is not an error, so callers can poll cheaply.
    ///
    /// # Examples
    ///
    /// ```
    /// use cairn::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push(1).push(5).push(2);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` elements more than the
    /// current length.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Drops all items from the heap. The comparator is retained.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns a slice of all values in the underlying vector, in heap
    /// order (root first, not globally sorted).
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Returns a snapshot copy of the underlying vector, in heap order.
    ///
    /// The snapshot is only heap-ordered, not globally sorted; its first
    /// element is the root. Runs in *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use cairn::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// heap.push(16).push(11).push(10).push(7).push(22);
    ///
    /// assert_eq!(heap.to_vec(), [22, 16, 10, 7, 11]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consumes the `BinaryHeap` and returns the underlying vector in heap
    /// order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns an iterator visiting all values in the underlying vector, in
    /// arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cairn::BinaryHeap;
    /// let heap: BinaryHeap<i32> = BinaryHeap::from(vec![1, 2, 3, 4]);
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in heap.iter() {
    ///     println!("{x}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Creates a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Moves hole to new location.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// An iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::iter()`]. See its
/// documentation for more.
///
/// [`iter`]: BinaryHeap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: BinaryHeap::into_iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, C: Compare<T> + Default> From<Vec<T>> for BinaryHeap<T, C> {
    /// Converts a `Vec<T>` into a `BinaryHeap<T, C>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> BinaryHeap<T, C> {
        let mut heap = BinaryHeap { data: vec, cmp: C::default() };
        heap.rebuild();
        heap
    }
}

impl<T, C: Compare<T> + Default, const N: usize> From<[T; N]> for BinaryHeap<T, C> {
    /// ```
    /// use cairn::BinaryHeap;
    ///
    /// let mut h1: BinaryHeap<i32> = BinaryHeap::from([1, 4, 2, 3]);
    /// let mut h2: BinaryHeap<i32> = [1, 4, 2, 3].into();
    /// while let (Ok(a), Ok(b)) = (h1.pop(), h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> BinaryHeap<T, C> {
        Self::from_iter(arr)
    }
}

impl<T, C> From<BinaryHeap<T, C>> for Vec<T> {
    /// Converts a `BinaryHeap<T, C>` into a `Vec<T>`.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: BinaryHeap<T, C>) -> Vec<T> {
        heap.data
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BinaryHeap<T, C> {
        BinaryHeap::from(Vec::from_iter(iter))
    }
}

impl<T, C> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out
    /// of the heap in arbitrary order. The heap cannot be used after calling
    /// this.
    ///
    /// # Examples
    ///
    /// ```
    /// use cairn::BinaryHeap;
    /// let heap: BinaryHeap<i32> = BinaryHeap::from(vec![1, 2, 3, 4]);
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in heap.into_iter() {
    ///     // x has type i32, not &i32
    ///     println!("{x}");
    /// }
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}
