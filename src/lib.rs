#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! A binary heap that sorts according to a specified comparator rather than
//! the [`Ord`] trait.
//!
//! The standard library's [`BinaryHeap`][std-heap] bakes its ordering into the
//! element type. This crate's [`BinaryHeap`] instead carries an ordering
//! *value*: any implementor of the [`Compare`] trait, including plain
//! closures and fn pointers. The same element type can therefore be ranked
//! differently by different heaps, and a heap's ordering can be swapped out
//! at runtime, followed by an explicit [`rebuild`].
//!
//! When no comparator is specified, [`NaturalOrder`] is used and the heap
//! behaves as an ordinary max-heap over `T: Ord`.
//!
//! [std-heap]: https://doc.rust-lang.org/std/collections/struct.BinaryHeap.html
//! [`rebuild`]: BinaryHeap::rebuild

extern crate alloc;

mod binary_heap;
pub mod order;

pub use binary_heap::{BinaryHeap, EmptyHeapError, IntoIter, Iter};
pub use order::{Compare, NaturalOrder, Reverse};
