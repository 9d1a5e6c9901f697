//! Common traits for the heap
//!
//! - [`Priority`]: the floating-point ordering key stored next to every payload
//! - [`Heap`]: base trait with `Option`-returning push/peek/pop, in the shape of
//!   the standard library's `BinaryHeap`
//! - [`HeapError`]: the recoverable failures (only reservation can fail)

use std::collections::TryReserveError;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// Doubling the capacity would overflow `usize`
    CapacityOverflow,
    /// The allocator refused to grow the backing storage
    AllocationFailed(TryReserveError),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::CapacityOverflow => {
                write!(f, "heap capacity would overflow usize")
            }
            HeapError::AllocationFailed(err) => {
                write!(f, "failed to grow heap storage: {}", err)
            }
        }
    }
}

impl std::error::Error for HeapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeapError::CapacityOverflow => None,
            HeapError::AllocationFailed(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for HeapError {
    fn from(err: TryReserveError) -> Self {
        HeapError::AllocationFailed(err)
    }
}

/// Ordering key of a heap element
///
/// Priorities are compared with strict less-than only. Duplicates are
/// allowed and carry no ordering guarantee among themselves. `NaN` is not
/// ordered against anything; a heap containing one stays memory-safe but its
/// pop order is unspecified.
pub trait Priority: Copy + PartialOrd + fmt::Debug {}

impl Priority for f32 {}
impl Priority for f64 {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), heaps here
/// store (priority, item) pairs to separate the ordering key from the data.
/// Empty heaps return `None` rather than tripping a precondition.
///
/// # Example
///
/// ```rust
/// use simple_heap::Heap;
/// use simple_heap::SimpleHeap;
///
/// let mut heap: SimpleHeap<&str> = Heap::new();
/// heap.push(3.0, "three");
/// heap.push(1.0, "one");
/// heap.push(2.0, "two");
///
/// assert_eq!(heap.peek(), Some((&1.0, &"one")));
/// assert_eq!(heap.pop(), Some((1.0, "one")));
/// ```
pub trait Heap<T, P: Priority> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n) comparisons, amortized O(1) reallocation.
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while this is a min-heap.
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}
