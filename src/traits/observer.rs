use crate::index::{advance, occupied};
use core::num::NonZeroUsize;

/// Ring buffer observer.
///
/// Can observe ring buffer state but cannot safely access its data.
///
/// # Details
///
/// The ring buffer consists of caller-owned storage of `slots` items and two indices:
/// `write` (head, the slot the next item goes to) and `read` (tail, the oldest stored item).
/// Both indices are always in `0..slots`.
///
/// The buffer is empty when `write == read` and full when advancing `write` by one would make it equal to `read`.
/// So one slot always stays vacant and the buffer can store at most `slots - 1` items.
///
/// Only the producer moves `write` and only the consumer moves `read`.
pub trait Observer {
    type Item: Copy;

    /// Number of slots in the underlying storage.
    ///
    /// It is constant during the whole ring buffer lifetime.
    fn slots(&self) -> NonZeroUsize;

    /// Index of the oldest item in the ring buffer (tail).
    ///
    /// Index value is in range `0..slots`.
    fn read_index(&self) -> usize;
    /// Index of the next vacant slot in the ring buffer (head).
    ///
    /// Index value is in range `0..slots`.
    fn write_index(&self) -> usize;

    /// Copy item out of the slot.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`Self::slots`] and the slot must not be written concurrently.
    unsafe fn read_slot(&self, index: usize) -> Self::Item;

    /// Store item into the slot.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`Self::slots`] and the slot must not be accessed concurrently.
    unsafe fn write_slot(&self, index: usize, value: Self::Item);

    /// Capacity of the ring buffer.
    ///
    /// Equals to `slots - 1` and is constant during the whole ring buffer lifetime.
    #[inline]
    fn capacity(&self) -> usize {
        self.slots().get() - 1
    }

    /// The number of items stored in the buffer.
    ///
    /// *Actual number may be greater or less than returned value due to concurring activity of producer or consumer respectively.*
    #[inline]
    fn size(&self) -> usize {
        occupied(self.write_index(), self.read_index(), self.slots())
    }

    /// The number of remaining free places in the buffer.
    ///
    /// *Actual number may be greater or less than returned value due to concurring activity of consumer or producer respectively.*
    #[inline]
    fn vacant(&self) -> usize {
        self.capacity() - self.size()
    }

    /// Checks if the ring buffer is empty.
    ///
    /// *The result may become irrelevant at any time because of concurring producer activity.*
    #[inline]
    fn is_empty(&self) -> bool {
        self.read_index() == self.write_index()
    }

    /// Checks if the ring buffer is full.
    ///
    /// *The result may become irrelevant at any time because of concurring consumer activity.*
    #[inline]
    fn is_full(&self) -> bool {
        advance(self.write_index(), self.slots()) == self.read_index()
    }
}
