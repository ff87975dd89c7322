//! Ordering modes for array heaps
//!
//! A heap decides once, at construction, whether its root holds the minimum
//! ([`HeapOrdering::Ascending`]) or the maximum ([`HeapOrdering::Descending`]).
//! Every comparison afterwards goes through a single [`Outranks`] function
//! chosen here, so the heap code never branches on the mode itself.

use std::fmt;
use std::str::FromStr;

use crate::traits::HeapError;

/// Returns true when the first argument belongs strictly closer to the root
/// than the second.
pub type Outranks<T> = fn(&T, &T) -> bool;

/// Which end of the order sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrdering {
    /// Min-heap: parent <= child, the root holds the minimum
    #[default]
    Ascending,
    /// Max-heap: parent >= child, the root holds the maximum
    Descending,
}

impl HeapOrdering {
    /// Returns the strict "better than" comparison for this ordering
    pub fn outranks<T: Ord>(self) -> Outranks<T> {
        match self {
            HeapOrdering::Ascending => less::<T>,
            HeapOrdering::Descending => greater::<T>,
        }
    }
}

fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

fn greater<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

impl fmt::Display for HeapOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOrdering::Ascending => write!(f, "min"),
            HeapOrdering::Descending => write!(f, "max"),
        }
    }
}

impl FromStr for HeapOrdering {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" | "asc" | "ascending" => Ok(HeapOrdering::Ascending),
            "max" | "desc" | "descending" => Ok(HeapOrdering::Descending),
            _ => Err(HeapError::UnknownOrdering(s.to_string())),
        }
    }
}
