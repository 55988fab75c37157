//! Cursor storage and the slot arithmetic shared by every ring buffer.

#[cfg(not(feature = "portable-atomic"))]
use core::sync::atomic::{AtomicUsize, Ordering};
use core::{cell::Cell, num::NonZeroUsize};
use crossbeam_utils::CachePadded;
#[cfg(feature = "portable-atomic")]
use portable_atomic::{AtomicUsize, Ordering};

/// Cursor pointing into ring buffer storage.
///
/// Each cursor has exactly one writer. The other side only reads it.
pub trait Index {
    fn new(value: usize) -> Self;
    fn get(&self) -> usize;
    fn set(&self, value: usize);
}

/// Cursor for single-threaded ring buffers.
#[derive(Default)]
pub struct LocalIndex {
    value: Cell<usize>,
}

impl Index for LocalIndex {
    #[inline]
    fn new(value: usize) -> Self {
        Self { value: Cell::new(value) }
    }
    #[inline]
    fn get(&self) -> usize {
        self.value.get()
    }
    #[inline]
    fn set(&self, value: usize) {
        self.value.set(value);
    }
}

/// Cursor that can be shared between the producer and the consumer thread.
///
/// Placed on its own cache line so that producer and consumer don't contend on the same line.
#[derive(Default)]
pub struct SharedIndex {
    value: CachePadded<AtomicUsize>,
}

impl Index for SharedIndex {
    #[inline]
    fn new(value: usize) -> Self {
        Self {
            value: CachePadded::new(AtomicUsize::new(value)),
        }
    }
    #[inline]
    fn get(&self) -> usize {
        self.value.load(Ordering::Acquire)
    }
    #[inline]
    fn set(&self, value: usize) {
        self.value.store(value, Ordering::Release);
    }
}

/// Moves slot index one step forward, wrapping to `0` at `slots`.
///
/// Same as `(index + 1) % slots` but without the division.
#[inline]
pub fn advance(index: usize, slots: NonZeroUsize) -> usize {
    let next = index + 1;
    if next == slots.get() {
        0
    } else {
        next
    }
}

/// Number of occupied slots for a given pair of `head` (write) and `tail` (read) indices.
///
/// One slot is always kept vacant, so the result never exceeds `slots - 1`.
#[inline]
pub fn occupied(head: usize, tail: usize, slots: NonZeroUsize) -> usize {
    if advance(head, slots) == tail {
        slots.get() - 1
    } else if head >= tail {
        head - tail
    } else {
        slots.get() + head - tail
    }
}
