//! Tree rendering for array heaps
//!
//! `Display` draws the implicit tree one node per line, children indented
//! under their parent:
//!
//! ```text
//! └── 1
//!     ├── 3
//!     │   └── 5
//!     └── 8
//! ```

use std::fmt;

use crate::array_heap::{left_index, right_index, BinaryHeapArray};
use crate::traits::Heap;

const TAIL: &str = "└── ";
const BRANCH: &str = "├── ";
const BLANK_INDENT: &str = "    ";
const RAIL_INDENT: &str = "│   ";

impl<T: Ord + fmt::Display> fmt::Display for BinaryHeapArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Tree has no nodes.");
        }
        write_node(self, f, 0, "", true)
    }
}

fn write_node<T: Ord + fmt::Display>(
    heap: &BinaryHeapArray<T>,
    f: &mut fmt::Formatter<'_>,
    index: usize,
    prefix: &str,
    is_tail: bool,
) -> fmt::Result {
    let Some(value) = heap.get(index) else {
        return Ok(());
    };
    writeln!(f, "{}{}{}", prefix, if is_tail { TAIL } else { BRANCH }, value)?;

    let child_prefix = format!("{}{}", prefix, if is_tail { BLANK_INDENT } else { RAIL_INDENT });
    let left = left_index(index);
    let right = right_index(index);
    let len = heap.len();

    if left < len {
        write_node(heap, f, left, &child_prefix, right >= len)?;
    }
    if right < len {
        write_node(heap, f, right, &child_prefix, true)?;
    }
    Ok(())
}
