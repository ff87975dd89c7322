//! Extreme stress tests that really push the heap to its limits
//!
//! These tests perform large numbers of operations in various patterns,
//! crossing the grow and shrink thresholds repeatedly.

use array_heaps::{BinaryHeapArray, Heap, HeapOrdering};

const MINIMUM: usize = BinaryHeapArray::<i32>::MINIMUM_SIZE;

/// Test massive numbers of inserts and pops
fn test_massive_operations(ordering: HeapOrdering) {
    let mut heap = BinaryHeapArray::with_ordering(ordering);

    for i in 0..10_000 {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);
    assert_eq!(heap.capacity(), 16_384);
    assert!(heap.validate());

    let expected: Vec<i32> = match ordering {
        HeapOrdering::Ascending => (0..10_000).collect(),
        HeapOrdering::Descending => (0..10_000).rev().collect(),
    };
    for value in expected {
        assert_eq!(heap.pop(), Some(value));
    }

    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), MINIMUM);
}

/// Test the driver workload: 1500 random-looking values into a max-heap
fn test_driver_workload(ordering: HeapOrdering) {
    let mut heap = BinaryHeapArray::with_ordering(ordering);

    for i in 0..1500 {
        assert!(heap.push((i * 7919) % 1000));
    }

    assert_eq!(heap.len(), 1500);
    assert!(heap.capacity() > MINIMUM);
    assert!(heap.validate());
    assert_eq!(heap.snapshot().len(), 1500);

    let rendered = heap.to_string();
    assert_eq!(rendered.lines().count(), 1500);
}

/// Test repeatedly crossing the grow and shrink thresholds
fn test_sawtooth(ordering: HeapOrdering) {
    let mut heap = BinaryHeapArray::with_ordering(ordering);
    let mut next = 0;

    for _ in 0..5 {
        while heap.len() < 3 * MINIMUM {
            heap.push((next * 31) % 4093);
            next += 1;
        }
        assert_eq!(heap.capacity(), 4 * MINIMUM);

        while heap.len() > MINIMUM / 4 {
            heap.pop();
        }
        assert_eq!(heap.capacity(), MINIMUM);
        assert!(heap.validate());
    }
}

/// Test removing every element by value, from the back of the snapshot
fn test_remove_everything_by_value(ordering: HeapOrdering) {
    let mut heap = BinaryHeapArray::with_ordering(ordering);
    for i in 0..3000 {
        heap.push((i * 17) % 3001);
    }

    while let Some(&value) = heap.snapshot().last() {
        assert_eq!(heap.remove(&value), Some(value));
        assert!(heap.len() <= heap.capacity());
    }

    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), MINIMUM);
    assert!(heap.validate());
}

/// Test removing interior elements keeps the heap valid at every step
fn test_interior_removals(ordering: HeapOrdering) {
    let mut heap = BinaryHeapArray::with_ordering(ordering);
    for i in 0..2000 {
        heap.push((i * 7) % 2003);
    }

    let mut step = 0;
    while heap.len() > 1 {
        let snapshot = heap.snapshot();
        let value = snapshot[(snapshot.len() / 2 + step) % snapshot.len()];
        assert_eq!(heap.remove(&value), Some(value));
        assert!(heap.validate());
        step += 1;
    }
}

#[test]
fn test_min_massive_operations() {
    test_massive_operations(HeapOrdering::Ascending);
}

#[test]
fn test_max_massive_operations() {
    test_massive_operations(HeapOrdering::Descending);
}

#[test]
fn test_min_driver_workload() {
    test_driver_workload(HeapOrdering::Ascending);
}

#[test]
fn test_max_driver_workload() {
    test_driver_workload(HeapOrdering::Descending);
}

#[test]
fn test_min_sawtooth() {
    test_sawtooth(HeapOrdering::Ascending);
}

#[test]
fn test_max_sawtooth() {
    test_sawtooth(HeapOrdering::Descending);
}

#[test]
fn test_min_remove_everything_by_value() {
    test_remove_everything_by_value(HeapOrdering::Ascending);
}

#[test]
fn test_max_remove_everything_by_value() {
    test_remove_everything_by_value(HeapOrdering::Descending);
}

#[test]
fn test_min_interior_removals() {
    test_interior_removals(HeapOrdering::Ascending);
}

#[test]
fn test_max_interior_removals() {
    test_interior_removals(HeapOrdering::Descending);
}
