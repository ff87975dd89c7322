//! Array-backed Binary Heaps for Rust
//!
//! This crate provides a binary heap stored as an implicit tree in a single
//! resizable array, usable either as a min-heap or as a max-heap.
//!
//! # Features
//!
//! - **Selectable ordering**: ascending (min-heap) or descending (max-heap), fixed at construction
//! - **Removal by value**: remove any element, not just the root, in O(n)
//! - **Self-validation**: check the heap-order invariant over the whole tree
//! - **Amortized resizing**: the buffer doubles when full and halves when under-used,
//!   never shrinking below [`BinaryHeapArray::MINIMUM_SIZE`]
//! - **Tree rendering**: `Display` draws the heap as an indented tree
//!
//! # Example
//!
//! ```rust
//! use array_heaps::{BinaryHeapArray, Heap, HeapOrdering};
//!
//! let mut heap = BinaryHeapArray::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! heap.push(1);
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.peek(), Some(&3));
//! assert!(heap.validate());
//!
//! let mut max_heap = BinaryHeapArray::with_ordering(HeapOrdering::Descending);
//! for value in [4, 9, 2] {
//!     max_heap.push(value);
//! }
//! assert_eq!(max_heap.peek(), Some(&9));
//! ```

pub mod array_heap;
pub mod ordering;
mod printer;
pub mod traits;

// Re-export the main types for convenience
pub use array_heap::BinaryHeapArray;
pub use ordering::HeapOrdering;
pub use traits::{Heap, HeapError};
