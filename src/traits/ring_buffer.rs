use super::{Consumer, Observer, Producer};
use crate::{index::advance, trace};

/// An abstract ring buffer that is accessed as a whole.
///
/// Methods of this trait move both indices. They take `&mut self` on the buffer itself,
/// which cannot coexist with its producer and consumer halves, so they never race with
/// concurrent insertion or removal.
pub trait RingBuffer: Observer + Consumer + Producer {
    /// Pushes an item to the ring buffer overwriting the oldest item if the buffer is full.
    ///
    /// Returns overwritten item if overwriting took place.
    ///
    /// *This moves the read index from the writing side.*
    /// *It must not be used while a consumer may be reading from the buffer on another thread,*
    /// *which is why it is unavailable on the producer half.*
    /// *Use [`Producer::try_insert`] for concurrent operation.*
    fn forced_insert(&mut self, value: Self::Item) -> Option<Self::Item> {
        let slots = self.slots();
        let head = self.write_index();
        let tail = self.read_index();
        let dropped = if advance(head, slots) == tail {
            Some(unsafe { self.read_slot(tail) })
        } else {
            None
        };
        unsafe { self.write_slot(head, value) };
        if dropped.is_some() {
            trace::trace!(head, tail, "overwriting oldest item");
            unsafe { self.set_read_index(advance(tail, slots)) };
        }
        unsafe { self.set_write_index(advance(head, slots)) };
        dropped
    }

    /// Appends items from an iterator to the ring buffer.
    ///
    /// *This method consumes iterator until its end.*
    /// Exactly last `min(iter.len(), capacity)` items from the iterator will be stored in the ring buffer.
    fn forced_insert_iter<I: Iterator<Item = Self::Item>>(&mut self, iter: I) {
        for value in iter {
            self.forced_insert(value);
        }
    }

    /// Appends items from slice to the ring buffer overwriting existing items in the ring buffer.
    ///
    /// If the slice length is greater than ring buffer capacity then only last `capacity` items from slice will be stored in the buffer.
    fn forced_insert_slice(&mut self, values: &[Self::Item]) {
        let values = &values[values.len().saturating_sub(self.capacity())..];
        let excess = values.len().saturating_sub(self.vacant());
        self.skip(excess);
        self.insert_slice(values);
    }

    /// Makes the buffer empty by moving both indices to the first slot.
    ///
    /// Stored items are not erased from the storage, they just become unreachable.
    fn reset(&mut self) {
        trace::debug!(head = self.write_index(), tail = self.read_index(), "reset");
        unsafe {
            self.set_read_index(0);
            self.set_write_index(0);
        }
    }
}
