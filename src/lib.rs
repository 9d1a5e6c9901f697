//! Simple binary min-heap for Rust
//!
//! This crate provides [`SimpleHeap`], an array-backed priority queue that
//! only supports insertion and removal from the top. Each element pairs a
//! floating-point priority with a payload the heap never looks at.
//!
//! # Features
//!
//! - **Insert**: O(log n) comparisons, amortized O(1) reallocation (capacity doubles)
//! - **Peek minimum**: O(1)
//! - **Pop minimum**: O(log n), writing each displaced node once
//! - **Clear / destroy**: optional release callback per payload, capacity kept on clear
//!
//! There is no `decrease_key`, arbitrary removal or merge, and equal
//! priorities pop in an unspecified order.
//!
//! # Example
//!
//! ```rust
//! use simple_heap::SimpleHeap;
//!
//! let mut heap: SimpleHeap<&str> = SimpleHeap::new();
//! heap.insert(5.0, "five");
//! heap.insert(1.0, "one");
//! heap.insert(3.0, "three");
//!
//! assert_eq!(heap.peek_min_priority(), 1.0);
//! assert_eq!(heap.pop_min(), "one");
//!
//! let mut released = Vec::new();
//! heap.destroy(|payload| released.push(payload));
//! assert_eq!(released.len(), 2);
//! ```
//!
//! # Cargo features
//!
//! - `strict-preconditions`: keep the emptiness assertions on
//!   `peek_min_priority`/`pop_min` in release builds.

mod sift;
pub mod simple;
pub mod traits;

// Re-export the main types for convenience
pub use simple::SimpleHeap;
pub use traits::{Heap, HeapError, Priority};
