//! Common traits for heap data structures
//!
//! This module provides the contract shared by heap containers in this crate:
//!
//! - [`Heap`]: insert, peek, remove the extreme element, remove by value,
//!   membership test and structural validation
//! - [`HeapError`]: the error type for operations a heap declines to perform
//!
//! Unlike `std::collections::BinaryHeap`, which is always a max-heap, a heap
//! implementing this trait picks its ordering at construction time (see
//! [`HeapOrdering`](crate::ordering::HeapOrdering)).

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The operation is declared by the contract but not provided by this heap
    #[error("operation `{operation}` is not supported by this heap")]
    Unsupported {
        /// Name of the rejected operation
        operation: &'static str,
    },
    /// Text could not be parsed as an ordering mode
    #[error("unknown heap ordering `{0}` (expected `min` or `max`)")]
    UnknownOrdering(String),
}

/// Base trait for heap/priority queue data structures
///
/// Elements are their own priority: `T: Ord` decides which element is the
/// extreme one, and equality (`Eq`, implied by `Ord`) decides which element
/// [`remove`](Heap::remove) and [`contains`](Heap::contains) match.
///
/// # Example
///
/// ```rust
/// use array_heaps::Heap;
/// use array_heaps::array_heap::BinaryHeapArray;
///
/// let mut heap = BinaryHeapArray::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert!(heap.validate());
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap with the default (ascending) ordering
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of live elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// Always succeeds and returns `true`.
    ///
    /// # Time Complexity
    /// O(log n) amortized (the occasional resize is O(n)).
    fn push(&mut self, value: T) -> bool;

    /// Returns the extreme element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the extreme element
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn pop(&mut self) -> Option<T>;

    /// Removes the first element equal to `value` and returns it
    ///
    /// # Time Complexity
    /// O(n) for the scan, O(log n) to restore the heap order.
    fn remove(&mut self, value: &T) -> Option<T>;

    /// Returns true if an element equal to `value` is present
    fn contains(&self, value: &T) -> bool;

    /// Removes every element
    fn clear(&mut self);

    /// Checks the heap-order invariant over every live element
    ///
    /// An empty heap is valid.
    fn validate(&self) -> bool;

    /// Bulk export into an owned collection
    ///
    /// # Errors
    /// Heaps that do not provide this return [`HeapError::Unsupported`].
    fn to_collection(&self) -> Result<Vec<T>, HeapError>;
}
