mod local;
mod shared;
pub mod traits;

pub use traits::RbRef;

use crate::{
    index::Index,
    storage::Slots,
    trace,
    traits::{
        consumer::{impl_consumer_traits, Consumer},
        producer::{impl_producer_traits, Producer},
        Observer, RingBuffer, SplitRef,
    },
    wrap::{Cons, Prod},
};
use core::{fmt, num::NonZeroUsize};

/// Ring buffer working on caller-owned storage.
///
/// The storage is borrowed for `'a` and is given back untouched in size when the ring buffer is dropped
/// or destructured with [`Self::into_raw_parts`]. Nothing is allocated.
///
/// `I` is the kind of cursors used for the read and write indices.
/// See [`SharedRb`](`crate::SharedRb`) and [`LocalRb`](`crate::LocalRb`).
pub struct Rb<'a, T: Copy, I: Index> {
    storage: Slots<'a, T>,
    read: I,
    write: I,
}

impl<'a, T: Copy, I: Index> Rb<'a, T, I> {
    /// Creates an empty ring buffer on top of `storage`.
    ///
    /// One slot of the storage is kept vacant, so the ring buffer can hold `storage.len() - 1` items.
    ///
    /// *Panics if `storage` has less than 2 slots.*
    pub fn new(storage: &'a mut [T]) -> Self {
        Self::from_raw_parts(storage, 0, 0)
    }

    /// Constructs ring buffer from storage and indices.
    ///
    /// Items in `read..write` (wrapping around the end of storage) are treated as stored.
    ///
    /// *Panics if `storage` has less than 2 slots or if any of indices is out of storage bounds.*
    pub fn from_raw_parts(storage: &'a mut [T], read: usize, write: usize) -> Self {
        let slots = storage.len();
        assert!(slots > 1, "ring buffer storage must have at least 2 slots, got {}", slots);
        assert!(
            read < slots && write < slots,
            "ring buffer indices ({}, {}) out of bounds of {} slots",
            read,
            write,
            slots
        );
        trace::debug!(slots, capacity = slots - 1, read, write, "ring buffer created");
        Self {
            storage: Slots::new(storage),
            read: I::new(read),
            write: I::new(write),
        }
    }

    /// Destructures ring buffer into underlying storage and `read` and `write` indices.
    pub fn into_raw_parts(self) -> (&'a mut [T], usize, usize) {
        let (read, write) = (self.read_index(), self.write_index());
        (self.storage.into_inner(), read, write)
    }
}

impl<T: Copy, I: Index> Observer for Rb<'_, T, I> {
    type Item = T;

    #[inline]
    fn slots(&self) -> NonZeroUsize {
        self.storage.len()
    }

    #[inline]
    fn read_index(&self) -> usize {
        self.read.get()
    }
    #[inline]
    fn write_index(&self) -> usize {
        self.write.get()
    }

    #[inline]
    unsafe fn read_slot(&self, index: usize) -> T {
        self.storage.read(index)
    }
    #[inline]
    unsafe fn write_slot(&self, index: usize, value: T) {
        self.storage.write(index, value)
    }
}

impl<T: Copy, I: Index> Producer for Rb<'_, T, I> {
    #[inline]
    unsafe fn set_write_index(&self, value: usize) {
        self.write.set(value);
    }
}

impl<T: Copy, I: Index> Consumer for Rb<'_, T, I> {
    #[inline]
    unsafe fn set_read_index(&self, value: usize) {
        self.read.set(value);
    }
}

impl<T: Copy, I: Index> RingBuffer for Rb<'_, T, I> {}

impl<'a, T: Copy, I: Index> SplitRef for Rb<'a, T, I> {
    type RefProd<'r> = Prod<&'r Self> where Self: 'r;
    type RefCons<'r> = Cons<&'r Self> where Self: 'r;

    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>) {
        let this: &Self = self;
        (Prod::new(this), Cons::new(this))
    }
}

impl<T: Copy, I: Index> fmt::Debug for Rb<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rb")
            .field("slots", &self.slots())
            .field("read", &self.read_index())
            .field("write", &self.write_index())
            .field("size", &self.size())
            .finish()
    }
}

impl_producer_traits!(Rb<'a, T: Copy, I: Index>);
impl_consumer_traits!(Rb<'a, T: Copy, I: Index>);
