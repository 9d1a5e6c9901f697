//! Simple Heap implementation
//!
//! An array-backed binary min-heap that only supports insertion and removal
//! from the top. Every element pairs a floating-point priority with an opaque
//! payload; the heap moves payloads around but never inspects them.
//!
//! Storage is a single contiguous buffer whose capacity starts at
//! `max(1, reserve_hint)` and doubles whenever an insert would overflow it.
//! Capacity is never given back by `pop_min` or `clear`, so a cleared heap can
//! be refilled without reallocating.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity          |
//! |---------------------|---------------------|
//! | `insert`            | O(log n), amortized O(1) growth |
//! | `pop_min`           | O(log n)            |
//! | `peek_min_priority` | O(1)                |
//! | `clear`             | O(n) payload drops  |
//!
//! # Example
//!
//! ```rust
//! use simple_heap::SimpleHeap;
//!
//! let mut heap: SimpleHeap<&str> = SimpleHeap::with_capacity(4);
//! heap.insert(3.0, "three");
//! heap.insert(1.0, "one");
//! heap.insert(2.0, "two");
//!
//! assert_eq!(heap.peek_min_priority(), 1.0);
//! assert_eq!(heap.pop_min(), "one");
//! assert_eq!(heap.pop_min(), "two");
//! assert_eq!(heap.pop_min(), "three");
//! assert!(heap.is_empty());
//! ```

use crate::sift::{sift_down, sift_up, HeapNode};
use crate::traits::{Heap, HeapError, Priority};
use log::{debug, trace};
use std::fmt;
use std::mem;

/// A binary min-heap over (priority, payload) pairs
///
/// `P` defaults to `f32`. Equal priorities are allowed and pop in no
/// particular order.
///
/// `peek_min_priority` and `pop_min` require a non-empty heap. The check is a
/// `debug_assert!` (a hard `assert!` with the `strict-preconditions` feature);
/// release builds without it still panic, through the slice bounds check or
/// the empty-buffer path, and never return a stale value. [`peek_min`] and
/// [`try_pop_min`] are the checked alternatives.
///
/// [`peek_min`]: SimpleHeap::peek_min
/// [`try_pop_min`]: SimpleHeap::try_pop_min
pub struct SimpleHeap<T, P = f32> {
    /// Live nodes in heap order; `nodes.len()` is the heap length
    nodes: Vec<HeapNode<P, T>>,
    /// Logical slot count, always >= 1 and <= `nodes.capacity()`
    capacity: usize,
}

impl<T, P: Priority> SimpleHeap<T, P> {
    /// Creates an empty heap with room for a single element.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty heap with room for `max(1, reserve_hint)` elements.
    ///
    /// Use when the size of the heap is known in advance.
    pub fn with_capacity(reserve_hint: usize) -> Self {
        let capacity = reserve_hint.max(1);
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns true if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of slots allocated for elements (at least 1).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts `payload` with the given priority. Duplicate priorities are
    /// allowed.
    pub fn insert(&mut self, priority: P, payload: T) {
        if self.nodes.len() == self.capacity {
            self.grow_to(self.doubled_capacity());
        }

        let index = self.nodes.len();
        self.nodes.push(HeapNode { priority, payload });
        sift_up(&mut self.nodes, index);
    }

    /// Returns the lowest priority in the heap.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    #[inline]
    #[track_caller]
    pub fn peek_min_priority(&self) -> P {
        self.check_non_empty("peek_min_priority");
        self.nodes[0].priority
    }

    /// Removes the element with the lowest priority and returns its payload.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn pop_min(&mut self) -> T {
        self.check_non_empty("pop_min");
        match self.pop_node() {
            Some(node) => node.payload,
            None => empty_heap_violation("pop_min"),
        }
    }

    /// Returns the lowest priority and its payload, or `None` if empty.
    pub fn peek_min(&self) -> Option<(&P, &T)> {
        self.nodes.first().map(|node| (&node.priority, &node.payload))
    }

    /// Removes the element with the lowest priority, or returns `None` if empty.
    pub fn try_pop_min(&mut self) -> Option<(P, T)> {
        self.pop_node().map(|node| (node.priority, node.payload))
    }

    /// Ensures room for at least `additional` more elements, doubling the
    /// capacity as many times as needed.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        match self.target_capacity(additional) {
            Ok(target) if target > self.capacity => self.grow_to(target),
            Ok(_) => {}
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible counterpart of [`reserve`](Self::reserve).
    ///
    /// On error the heap is left unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), HeapError> {
        let target = self.target_capacity(additional)?;
        if target == self.capacity {
            return Ok(());
        }

        self.nodes.try_reserve_exact(target - self.nodes.len())?;
        trace!("SimpleHeap reserved {} -> {} slots", self.capacity, target);
        self.capacity = target;
        Ok(())
    }

    /// Removes every element, dropping the payloads. Capacity is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Removes every element, handing each payload to `release` in storage
    /// order (not priority order). Capacity is kept.
    pub fn clear_with<F>(&mut self, mut release: F)
    where
        F: FnMut(T),
    {
        debug!("SimpleHeap releasing {} payloads on clear", self.nodes.len());
        for node in self.nodes.drain(..) {
            release(node.payload);
        }
    }

    /// Consumes the heap, handing each live payload to `release` in storage
    /// order (not priority order) before the storage is freed.
    ///
    /// Dropping the heap instead drops the payloads in place.
    pub fn destroy<F>(self, mut release: F)
    where
        F: FnMut(T),
    {
        debug!("SimpleHeap releasing {} payloads on destroy", self.nodes.len());
        for node in self.nodes {
            release(node.payload);
        }
    }

    fn pop_node(&mut self) -> Option<HeapNode<P, T>> {
        let mut node = self.nodes.pop()?;
        if !self.nodes.is_empty() {
            // The former last node becomes the root and sinks into place.
            mem::swap(&mut node, &mut self.nodes[0]);
            sift_down(&mut self.nodes, 0);
        }
        Some(node)
    }

    #[inline]
    #[track_caller]
    fn check_non_empty(&self, op: &str) {
        #[cfg(feature = "strict-preconditions")]
        assert!(!self.nodes.is_empty(), "{} called on an empty SimpleHeap", op);
        #[cfg(not(feature = "strict-preconditions"))]
        debug_assert!(!self.nodes.is_empty(), "{} called on an empty SimpleHeap", op);
    }

    fn doubled_capacity(&self) -> usize {
        match self.capacity.checked_mul(2) {
            Some(capacity) => capacity,
            None => panic!("{}", HeapError::CapacityOverflow),
        }
    }

    /// Smallest power-of-two multiple of the current capacity that fits
    /// `additional` more elements.
    fn target_capacity(&self, additional: usize) -> Result<usize, HeapError> {
        let needed = self
            .nodes
            .len()
            .checked_add(additional)
            .ok_or(HeapError::CapacityOverflow)?;

        let mut target = self.capacity;
        while target < needed {
            target = target.checked_mul(2).ok_or(HeapError::CapacityOverflow)?;
        }
        Ok(target)
    }

    fn grow_to(&mut self, capacity: usize) {
        trace!("SimpleHeap growing {} -> {} slots", self.capacity, capacity);
        self.nodes.reserve_exact(capacity - self.nodes.len());
        self.capacity = capacity;
    }
}

#[cold]
#[track_caller]
fn empty_heap_violation(op: &str) -> ! {
    panic!("{} called on an empty SimpleHeap", op)
}

impl<T, P: Priority> Heap<T, P> for SimpleHeap<T, P> {
    fn new() -> Self {
        SimpleHeap::new()
    }

    fn is_empty(&self) -> bool {
        SimpleHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        SimpleHeap::len(self)
    }

    fn push(&mut self, priority: P, item: T) {
        self.insert(priority, item);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.peek_min()
    }

    fn pop(&mut self) -> Option<(P, T)> {
        self.try_pop_min()
    }
}

impl<T: Clone, P: Priority> Clone for SimpleHeap<T, P> {
    fn clone(&self) -> Self {
        let mut nodes = Vec::with_capacity(self.capacity);
        nodes.extend_from_slice(&self.nodes);
        Self {
            nodes,
            capacity: self.capacity,
        }
    }
}

impl<T, P: Priority> Default for SimpleHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Priority> fmt::Debug for SimpleHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleHeap")
            .field("len", &self.nodes.len())
            .field("capacity", &self.capacity)
            .field("min_priority", &self.nodes.first().map(|node| node.priority))
            .finish()
    }
}

impl<T, P: Priority> Extend<(P, T)> for SimpleHeap<T, P> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (priority, payload) in iter {
            self.insert(priority, payload);
        }
    }
}

impl<T, P: Priority> FromIterator<(P, T)> for SimpleHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}
