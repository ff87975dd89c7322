//! Array-backed Binary Heap implementation
//!
//! A binary heap stored as an implicit tree in one contiguous buffer: the
//! children of slot `i` live at `2i + 1` and `2i + 2`, its parent at
//! `(i - 1) / 2`. The heap is a min-heap or a max-heap depending on the
//! [`HeapOrdering`] chosen at construction.
//!
//! The buffer length is tracked separately from the number of live elements.
//! It starts at [`BinaryHeapArray::MINIMUM_SIZE`], doubles when an insert finds
//! it full, and halves after a removal leaves it less than half used, never
//! dropping below the minimum.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity         |
//! |------------|--------------------|
//! | `push`     | O(log n) amortized |
//! | `pop`      | O(log n) amortized |
//! | `peek`     | O(1)               |
//! | `remove`   | O(n)               |
//! | `contains` | O(n)               |
//! | `validate` | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use array_heaps::{Heap, HeapOrdering};
//! use array_heaps::array_heap::BinaryHeapArray;
//!
//! let mut heap = BinaryHeapArray::with_ordering(HeapOrdering::Descending);
//! heap.push(3);
//! heap.push(7);
//! heap.push(5);
//!
//! assert_eq!(heap.peek(), Some(&7));
//! assert_eq!(heap.remove(&5), Some(5));
//! assert_eq!(heap.pop(), Some(7));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use std::fmt;

use crate::ordering::{HeapOrdering, Outranks};
use crate::traits::{Heap, HeapError};

/// A binary heap over a resizable array
///
/// Slots `[0, len)` hold live elements in heap order; slots
/// `[len, capacity)` are empty.
pub struct BinaryHeapArray<T: Ord> {
    ordering: HeapOrdering,
    /// Strict comparison derived from `ordering`, fixed at construction
    outranks: Outranks<T>,
    /// The buffer; its length is the heap's capacity
    slots: Vec<Option<T>>,
    /// Number of live elements
    count: usize,
}

pub(crate) fn parent_index(index: usize) -> Option<usize> {
    if index > 0 {
        Some((index - 1) / 2)
    } else {
        None
    }
}

pub(crate) fn left_index(index: usize) -> usize {
    2 * index + 1
}

pub(crate) fn right_index(index: usize) -> usize {
    2 * index + 2
}

impl<T: Ord> BinaryHeapArray<T> {
    /// Starting capacity, and the floor below which the buffer never shrinks
    pub const MINIMUM_SIZE: usize = 1024;

    /// Creates an empty heap with the given ordering
    pub fn with_ordering(ordering: HeapOrdering) -> Self {
        let mut slots = Vec::with_capacity(Self::MINIMUM_SIZE);
        slots.resize_with(Self::MINIMUM_SIZE, || None);
        Self {
            ordering,
            outranks: ordering.outranks(),
            slots,
            count: 0,
        }
    }

    /// Returns the ordering chosen at construction
    pub fn ordering(&self) -> HeapOrdering {
        self.ordering
    }

    /// Returns the number of slots in the buffer, live or not
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Copies the live elements out in internal (heap, not sorted) order
    pub fn snapshot(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.slots[..self.count].iter().flatten().cloned().collect()
    }

    /// Returns the live element at `index`, if any
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index < self.count {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.slots[..self.count]
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    /// Move element at index up while it outranks its parent
    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = parent_index(index) {
            let moves_up = match (self.get(index), self.get(parent)) {
                (Some(value), Some(above)) => (self.outranks)(value, above),
                _ => false,
            };
            if !moves_up {
                break;
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down while a child outranks it
    ///
    /// When both children outrank the element the better child is swapped
    /// up; between equal children the right one wins. Returns the index
    /// where the element settled.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let outranks = self.outranks;
        loop {
            let Some(value) = self.get(index) else {
                return index;
            };
            let left = left_index(index);
            let right = right_index(index);
            let left_better = self.get(left).filter(|&child| outranks(child, value));
            let right_better = self.get(right).filter(|&child| outranks(child, value));

            let target = match (left_better, right_better) {
                (Some(l), Some(r)) => {
                    if outranks(l, r) {
                        left
                    } else {
                        right
                    }
                }
                (None, Some(_)) => right,
                (Some(_), None) => left,
                (None, None) => return index,
            };

            self.slots.swap(index, target);
            index = target;
        }
    }

    /// Removes the live element at `index`
    ///
    /// The last live element fills the hole and is sifted into place. An
    /// element taken from the middle of the heap may outrank its new parent,
    /// so it is sifted up from wherever the downward pass leaves it.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.count {
            return None;
        }

        self.count -= 1;
        let last = self.count;
        self.slots.swap(index, last);
        let removed = self.slots[last].take();

        let settled = self.sift_down(index);
        self.sift_up(settled);

        let shrink_size = self.slots.len() >> 1;
        if shrink_size >= Self::MINIMUM_SIZE && self.count < shrink_size {
            self.shrink();
        }

        removed
    }

    /// Double the buffer
    ///
    /// Only called when `count == capacity`, so doubling the live count is
    /// the same as doubling the buffer length.
    fn grow(&mut self) {
        let grow_size = self.count << 1;
        self.slots.resize_with(grow_size, || None);
    }

    /// Halve the buffer
    fn shrink(&mut self) {
        let shrink_size = self.slots.len() >> 1;
        self.slots.truncate(shrink_size);
        self.slots.shrink_to_fit();
    }

    fn validate_node(&self, index: usize) -> bool {
        let Some(value) = self.get(index) else {
            return false;
        };
        let left = left_index(index);
        let right = right_index(index);

        // A right child without a left child is never a heap
        if right < self.count && left >= self.count {
            return false;
        }

        [left, right]
            .into_iter()
            .filter(|&child| child < self.count)
            .all(|child| match self.get(child) {
                Some(below) => !(self.outranks)(below, value) && self.validate_node(child),
                None => false,
            })
    }
}

impl<T: Ord> Heap<T> for BinaryHeapArray<T> {
    fn new() -> Self {
        Self::with_ordering(HeapOrdering::default())
    }

    fn len(&self) -> usize {
        self.count
    }

    fn push(&mut self, value: T) -> bool {
        if self.count >= self.slots.len() {
            self.grow();
        }
        self.slots[self.count] = Some(value);
        self.count += 1;
        self.sift_up(self.count - 1);
        true
    }

    fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    fn pop(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.position(value)?;
        self.remove_at(index)
    }

    fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    fn clear(&mut self) {
        for slot in &mut self.slots[..self.count] {
            *slot = None;
        }
        self.count = 0;
    }

    fn validate(&self) -> bool {
        if self.count > self.slots.len() {
            return false;
        }
        self.count == 0 || self.validate_node(0)
    }

    fn to_collection(&self) -> Result<Vec<T>, HeapError> {
        Err(HeapError::Unsupported {
            operation: "to_collection",
        })
    }
}

impl<T: Ord> Default for BinaryHeapArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BinaryHeapArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Live<'a, T>(&'a [Option<T>]);

        impl<T: fmt::Debug> fmt::Debug for Live<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter().flatten()).finish()
            }
        }

        f.debug_struct("BinaryHeapArray")
            .field("ordering", &self.ordering)
            .field("len", &self.count)
            .field("capacity", &self.slots.len())
            .field("elements", &Live(&self.slots[..self.count]))
            .finish()
    }
}
