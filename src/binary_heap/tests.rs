use super::*;
use crate::order::{Compare, NaturalOrder, Reverse};
use core::cmp::Ordering;
use rand::seq::SliceRandom;
use rand::Rng;

/// Adapted from `std::test_helpers::test_rng`, since these tests rely on the
/// seed not being the same for every RNG invocation too.
#[track_caller]
fn test_rng() -> rand_xorshift::XorShiftRng {
    use std::hash::{BuildHasher, Hash, Hasher};
    let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
    std::panic::Location::caller().hash(&mut hasher);
    let hc64 = hasher.finish();
    let seed_vec = hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<Vec<u8>>();
    let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
    rand::SeedableRng::from_seed(seed)
}

/// Audits the heap invariant: no node ranks strictly above its parent.
fn assert_heap_property<T, C: Compare<T>>(heap: &BinaryHeap<T, C>) {
    let data = heap.as_slice();
    for i in 1..data.len() {
        let parent = (i - 1) / 2;
        assert_ne!(
            heap.comparator().compare(&data[parent], &data[i]),
            Ordering::Less,
            "node {i} ranks above its parent {parent}"
        );
    }
}

fn drain_all<T, C: Compare<T>>(heap: &mut BinaryHeap<T, C>) -> Vec<T> {
    let mut drained = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        drained.push(heap.pop().unwrap());
    }
    drained
}

#[test]
fn test_push_updates_peek() {
    let mut heap = BinaryHeap::new();
    assert_eq!(heap.peek(), None);
    heap.push(16);
    assert_eq!(heap.peek(), Some(&16));
    heap.push(11).push(10);
    assert_eq!(heap.peek(), Some(&16));
    heap.push(7).push(22);
    assert_eq!(heap.peek(), Some(&22));
}

#[test]
fn test_snapshot_has_exact_heap_shape() {
    // The sift-up rules (parent at (i - 1) / 2, swap only on a strictly
    // greater comparison) fully determine this array.
    let mut heap = BinaryHeap::new();
    heap.push(16).push(11).push(10).push(7).push(22);
    assert_eq!(heap.as_slice(), [22, 16, 10, 7, 11]);
    assert_eq!(heap.to_vec(), [22, 16, 10, 7, 11]);
    // Taking the snapshot does not disturb the heap.
    assert_eq!(heap.as_slice(), [22, 16, 10, 7, 11]);
}

#[test]
fn test_pop_in_descending_order() {
    let mut heap = BinaryHeap::new();
    heap.push(16).push(11).push(10).push(7).push(22);
    for expected in [22, 16, 11, 10, 7] {
        assert_eq!(heap.pop(), Ok(expected));
        assert_heap_property(&heap);
    }
    assert_eq!(heap.pop(), Err(EmptyHeapError));
}

#[test]
fn test_pop_on_empty_is_error_peek_is_not() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::new();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), Err(EmptyHeapError));
    // The failed pop left the heap usable.
    heap.push(3);
    assert_eq!(heap.pop(), Ok(3));
    assert_eq!(heap.pop(), Err(EmptyHeapError));
}

#[test]
fn test_error_display() {
    assert_eq!(EmptyHeapError.to_string(), "pop on an empty heap");
}

#[test]
fn test_is_empty() {
    let mut heap = BinaryHeap::new();
    assert!(heap.is_empty());
    assert!(!heap.push(1).is_empty());
    heap.pop().unwrap();
    assert!(heap.is_empty());
}

#[test]
fn test_size_accounting() {
    let mut rng = test_rng();
    let mut heap = BinaryHeap::new();
    let mut expected_len = 0usize;
    for _ in 0..500 {
        if rng.gen_range(0..3) == 0 {
            match heap.pop() {
                Ok(_) => expected_len -= 1,
                Err(EmptyHeapError) => assert_eq!(expected_len, 0),
            }
        } else {
            heap.push(rng.gen_range(0..100u32));
            expected_len += 1;
        }
        assert_eq!(heap.len(), expected_len);
        assert_eq!(heap.is_empty(), expected_len == 0);
    }
}

#[test]
fn test_heap_property_after_interleaved_ops() {
    let mut rng = test_rng();
    let mut heap = BinaryHeap::new();
    for _ in 0..1000 {
        if rng.gen_range(0..3) == 0 {
            let _ = heap.pop();
        } else {
            heap.push(rng.gen_range(0..50u32));
        }
        assert_heap_property(&heap);
    }
}

#[test]
fn test_load_from_empty() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::new();
    heap.load_from(Vec::new());
    assert!(heap.to_vec().is_empty());
    assert!(heap.is_empty());
}

#[test]
fn test_load_from_replaces_contents() {
    let mut heap = BinaryHeap::new();
    heap.push(1000).push(2000);
    heap.load_from([3, 9, 6]);
    assert_eq!(heap.len(), 3);
    assert_eq!(drain_all(&mut heap), [9, 6, 3]);
}

#[test]
fn test_load_from_shuffled_range() {
    let mut values: Vec<u32> = (0..=1000).collect();
    values.shuffle(&mut test_rng());

    let mut heap = BinaryHeap::new();
    heap.load_from(values.clone());
    assert_heap_property(&heap);

    values.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(drain_all(&mut heap), values);
}

#[test]
fn test_rebuild_shape_is_exact() {
    // Sifting down every index from len / 2 to 0, left child inspected
    // first, pins this array exactly.
    let mut heap = BinaryHeap::new();
    heap.load_from([1, 2, 3, 4, 5]);
    assert_eq!(heap.as_slice(), [5, 4, 3, 1, 2]);
}

#[test]
fn test_sift_ties_keep_the_lower_index() {
    // Equal children: the left one wins the sift-down comparison.
    let mut heap = BinaryHeap::new();
    heap.load_from([0, 7, 7]);
    assert_eq!(heap.as_slice(), [7, 0, 7]);

    // Equal parent: sift-up does not swap.
    let mut heap = BinaryHeap::new();
    heap.push(5).push(5).push(5);
    assert_eq!(heap.as_slice(), [5, 5, 5]);
}

#[test]
fn test_rebuild_is_idempotent() {
    let mut values: Vec<u32> = (0..300).collect();
    values.shuffle(&mut test_rng());

    let mut heap = BinaryHeap::new();
    heap.load_from(values);
    let snapshot = heap.to_vec();
    heap.rebuild();
    assert_eq!(heap.to_vec(), snapshot);
}

#[test]
fn test_set_comparator_defers_reordering() {
    fn ascending(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }
    fn descending(a: &i32, b: &i32) -> Ordering {
        b.cmp(a)
    }

    let mut heap: BinaryHeap<i32, fn(&i32, &i32) -> Ordering> =
        BinaryHeap::with_comparator(ascending);
    heap.load_from([2, 9, 4, 7, 1]);
    let snapshot = heap.to_vec();

    // Swapping the comparator must not move anything by itself.
    heap.set_comparator(descending);
    assert_eq!(heap.to_vec(), snapshot);

    // After the explicit rebuild the heap is a min-heap.
    heap.rebuild();
    assert_heap_property(&heap);
    assert_eq!(drain_all(&mut heap), [1, 2, 4, 7, 9]);
}

#[test]
fn test_closure_comparator_min_heap() {
    let mut heap = BinaryHeap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    heap.push(3).push(11).push(5).push(2);
    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(drain_all(&mut heap), [2, 3, 5, 11]);
}

#[test]
fn test_reverse_adapter() {
    let mut heap = BinaryHeap::with_comparator(Reverse(NaturalOrder));
    heap.load_from([3, 11, 5, 2]);
    assert_eq!(drain_all(&mut heap), [2, 3, 5, 11]);

    let mut heap = BinaryHeap::with_comparator(Reverse(Reverse(NaturalOrder)));
    heap.load_from([3, 11, 5, 2]);
    assert_eq!(drain_all(&mut heap), [11, 5, 3, 2]);
}

#[test]
fn test_extraction_sorts_random_multisets() {
    let mut rng = test_rng();
    for _ in 0..10 {
        let values: Vec<u32> = (0..300).map(|_| rng.gen_range(0..50)).collect();

        let mut heap: BinaryHeap<u32> = values.iter().copied().collect();
        assert_heap_property(&heap);

        let mut expected = values;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(drain_all(&mut heap), expected);
    }
}

#[test]
fn test_matches_std_binary_heap() {
    let mut rng = test_rng();
    let values: Vec<u32> = (0..500).map(|_| rng.gen_range(0..100)).collect();

    let mut ours = BinaryHeap::new();
    let mut std_heap = std::collections::BinaryHeap::new();
    for &v in &values {
        ours.push(v);
        std_heap.push(v);
    }
    while let Some(expected) = std_heap.pop() {
        assert_eq!(ours.pop(), Ok(expected));
    }
    assert!(ours.is_empty());
}

#[test]
fn test_duplicates_pop_in_order() {
    let mut heap = BinaryHeap::new();
    heap.load_from([5, 5, 1, 9, 5]);
    assert_eq!(drain_all(&mut heap), [9, 5, 5, 5, 1]);
}

#[test]
fn test_chaining() {
    let mut heap = BinaryHeap::new();
    heap.load_from([4, 1]).push(7).rebuild();
    assert_eq!(drain_all(&mut heap), [7, 4, 1]);
}

#[test]
fn test_into_sorted_vec() {
    let mut values: Vec<u32> = (0..200).map(|i| i % 37).collect();
    values.shuffle(&mut test_rng());

    let heap: BinaryHeap<u32> = values.iter().copied().collect();
    let sorted = heap.into_sorted_vec();

    values.sort_unstable();
    assert_eq!(sorted, values);
}

#[test]
fn test_into_sorted_vec_respects_comparator() {
    let mut heap = BinaryHeap::with_comparator(Reverse(NaturalOrder));
    heap.load_from([3, 1, 4, 1, 5]);
    // Ascending under the reversed comparator is numerically descending.
    assert_eq!(heap.into_sorted_vec(), [5, 4, 3, 1, 1]);
}

#[test]
fn test_from_vec_and_array() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::from(vec![9, 1, 5]);
    assert_heap_property(&heap);
    assert_eq!(drain_all(&mut heap), [9, 5, 1]);

    let mut heap: BinaryHeap<i32> = BinaryHeap::from([9, 1, 5]);
    assert_eq!(drain_all(&mut heap), [9, 5, 1]);
}

#[test]
fn test_extend_and_collect() {
    let mut heap: BinaryHeap<i32> = (0..10).collect();
    heap.extend(10..20);
    assert_heap_property(&heap);
    assert_eq!(heap.len(), 20);
    assert_eq!(heap.pop(), Ok(19));
}

#[test]
fn test_iter_visits_everything_in_heap_order() {
    let mut heap = BinaryHeap::new();
    heap.push(16).push(11).push(10).push(7).push(22);
    let contents: Vec<i32> = heap.iter().copied().collect();
    assert_eq!(contents, heap.as_slice());

    let contents: Vec<i32> = (&heap).into_iter().copied().collect();
    assert_eq!(contents, heap.as_slice());

    let contents: Vec<i32> = heap.into_iter().collect();
    assert_eq!(contents, [22, 16, 10, 7, 11]);
}

#[test]
fn test_into_vec_exposes_storage() {
    let mut heap = BinaryHeap::new();
    heap.push(16).push(11).push(10).push(7).push(22);
    assert_eq!(Vec::from(heap), [22, 16, 10, 7, 11]);
}

#[test]
fn test_clone_and_debug() {
    let mut heap = BinaryHeap::new();
    heap.push(16).push(11).push(10).push(7).push(22);

    let clone = heap.clone();
    assert_eq!(clone.as_slice(), heap.as_slice());

    assert_eq!(format!("{heap:?}"), "[22, 16, 10, 7, 11]");
}

#[test]
fn test_clear_retains_comparator() {
    let mut heap = BinaryHeap::with_comparator(Reverse(NaturalOrder));
    heap.load_from([3, 1, 2]);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), Err(EmptyHeapError));

    heap.push(3).push(1).push(2);
    assert_eq!(heap.pop(), Ok(1));
}

#[test]
fn test_with_capacity_and_reserve() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::with_capacity(100);
    assert!(heap.capacity() >= 100);
    heap.reserve(200);
    assert!(heap.capacity() >= 200);
    assert!(heap.is_empty());
}

#[test]
fn test_non_ord_element_type() {
    // The element type carries no ordering of its own.
    struct Job {
        id: &'static str,
        priority: u8,
    }

    let mut heap = BinaryHeap::with_comparator(|a: &Job, b: &Job| a.priority.cmp(&b.priority));
    heap.push(Job { id: "low", priority: 1 });
    heap.push(Job { id: "high", priority: 200 });
    heap.push(Job { id: "mid", priority: 60 });

    assert_eq!(heap.pop().map(|job| job.id), Ok("high"));
    assert_eq!(heap.pop().map(|job| job.id), Ok("mid"));
    assert_eq!(heap.pop().map(|job| job.id), Ok("low"));
}

#[test]
fn test_default_is_empty_max_heap() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    assert!(heap.is_empty());
    heap.push(2).push(8).push(4);
    assert_eq!(heap.pop(), Ok(8));
}
