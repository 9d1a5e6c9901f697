//! Sift routines for the array-backed heap
//!
//! Both routines lift one node out of the buffer into a [`Hole`], shift
//! neighbours into the vacated slot while searching for the node's final
//! position, and write the lifted node back exactly once. Compared with
//! pairwise swapping this halves the node writes per level.
//!
//! Index layout: the children of `i` are `2i + 1` and `2i + 2`, its parent is
//! `(i - 1) / 2`.

use crate::traits::Priority;
use std::mem::ManuallyDrop;
use std::ptr;

/// A priority paired with its caller-owned payload
#[derive(Debug, Clone)]
pub(crate) struct HeapNode<P, T> {
    pub(crate) priority: P,
    pub(crate) payload: T,
}

#[inline(always)]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline(always)]
pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// A slot whose node has been moved out of the buffer
///
/// While the hole is alive `data[pos]` is logically uninitialized and the
/// lifted node lives in `elt`. Dropping the hole writes `elt` into
/// `data[pos]`, so the slice is whole again even on unwind.
struct Hole<'a, P, T> {
    data: &'a mut [HeapNode<P, T>],
    elt: ManuallyDrop<HeapNode<P, T>>,
    pos: usize,
}

impl<'a, P: Priority, T> Hole<'a, P, T> {
    /// # Safety
    ///
    /// `pos` must be in bounds of `data`.
    #[inline]
    unsafe fn new(data: &'a mut [HeapNode<P, T>], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFETY: pos is in bounds; the slot is treated as vacated from here on.
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Priority of the lifted node
    #[inline]
    fn priority(&self) -> P {
        self.elt.priority
    }

    /// Priority of the live node at `index`
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and different from the hole position.
    #[inline]
    unsafe fn priority_at(&self, index: usize) -> P {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index).priority }
    }

    /// Moves the node at `index` into the hole; the hole moves to `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and different from the hole position.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let base = self.data.as_mut_ptr();
            ptr::copy_nonoverlapping(base.add(index), base.add(self.pos), 1);
        }
        self.pos = index;
    }
}

impl<P, T> Drop for Hole<'_, P, T> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: pos is in bounds and vacated; fill it with the lifted node.
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// Moves the node at `pos` toward the root until its parent is not greater.
///
/// Ties stop the walk, so a newly inserted duplicate stays below its equal.
/// Returns the final index of the node.
///
/// # Panics
///
/// Panics if `pos` is out of bounds.
pub(crate) fn sift_up<P: Priority, T>(data: &mut [HeapNode<P, T>], pos: usize) -> usize {
    assert!(pos < data.len(), "sift_up start {} out of bounds", pos);

    // SAFETY: checked above.
    let mut hole = unsafe { Hole::new(data, pos) };
    let priority = hole.priority();

    while hole.pos() > 0 {
        let p = parent(hole.pos());

        // SAFETY: p < hole.pos() < len.
        if priority >= unsafe { hole.priority_at(p) } {
            break;
        }

        // SAFETY: same as above.
        unsafe { hole.move_to(p) };
    }

    hole.pos()
}

/// Moves the node at `pos` toward the leaves while a child is strictly smaller.
///
/// The left child is examined first and the right child only replaces it when
/// strictly smaller, so an exact left/right tie descends to the left. The
/// lifted node wins ties against both children. Returns the final index.
///
/// # Panics
///
/// Panics if `pos` is out of bounds.
pub(crate) fn sift_down<P: Priority, T>(data: &mut [HeapNode<P, T>], pos: usize) -> usize {
    let end = data.len();
    assert!(pos < end, "sift_down start {} out of bounds", pos);

    // SAFETY: checked above.
    let mut hole = unsafe { Hole::new(data, pos) };
    let priority = hole.priority();

    loop {
        let left = left_child(hole.pos());
        if left >= end {
            break;
        }
        let right = left + 1;

        let mut smallest = hole.pos();
        let mut smallest_priority = priority;

        // SAFETY: pos < left < end.
        let left_priority = unsafe { hole.priority_at(left) };
        if left_priority < smallest_priority {
            smallest = left;
            smallest_priority = left_priority;
        }

        if right < end {
            // SAFETY: pos < right < end.
            let right_priority = unsafe { hole.priority_at(right) };
            if right_priority < smallest_priority {
                smallest = right;
            }
        }

        if smallest == hole.pos() {
            break;
        }

        // SAFETY: smallest is one of the children checked above.
        unsafe { hole.move_to(smallest) };
    }

    hole.pos()
}
