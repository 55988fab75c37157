use super::Observer;
use crate::{
    error::BufferEmpty,
    index::{advance, occupied},
};
use core::iter::FusedIterator;

/// Consumer part of ring buffer.
///
/// Moves only the read index, so it may run concurrently with a [`Producer`](`super::Producer`) of the same buffer.
pub trait Consumer: Observer {
    /// Set read index.
    ///
    /// # Safety
    ///
    /// Index must be in `0..slots` and go only forward, never passing the write index.
    unsafe fn set_read_index(&self, value: usize);

    /// Returns a copy of the oldest item without removing it.
    ///
    /// Never moves the read index.
    fn peek(&self) -> Result<Self::Item, BufferEmpty> {
        let tail = self.read_index();
        if tail == self.write_index() {
            Err(BufferEmpty)
        } else {
            Ok(unsafe { self.read_slot(tail) })
        }
    }

    /// Removes the oldest item from the ring buffer and returns it.
    ///
    /// Returns [`BufferEmpty`] and leaves the buffer untouched if there is nothing to remove.
    fn remove(&mut self) -> Result<Self::Item, BufferEmpty> {
        let tail = self.read_index();
        if tail == self.write_index() {
            return Err(BufferEmpty);
        }
        let value = unsafe { self.read_slot(tail) };
        unsafe { self.set_read_index(advance(tail, self.slots())) };
        Ok(value)
    }

    /// Discards the oldest item without reading it.
    fn remove_oldest(&mut self) -> Result<(), BufferEmpty> {
        let tail = self.read_index();
        if tail == self.write_index() {
            return Err(BufferEmpty);
        }
        unsafe { self.set_read_index(advance(tail, self.slots())) };
        Ok(())
    }

    /// Removes items from the ring buffer and writes them into a slice.
    ///
    /// Returns count of items been removed.
    fn remove_slice(&mut self, values: &mut [Self::Item]) -> usize {
        let slots = self.slots();
        let head = self.write_index();
        let mut tail = self.read_index();
        let mut count = 0;
        for place in values.iter_mut() {
            if tail == head {
                break;
            }
            *place = unsafe { self.read_slot(tail) };
            tail = advance(tail, slots);
            count += 1;
        }
        unsafe { self.set_read_index(tail) };
        count
    }

    /// Removes at most `count` oldest items from the buffer.
    ///
    /// Returns the number of discarded items.
    ///
    /// ```
    /// # extern crate circbuf;
    /// # use circbuf::{LocalRb, traits::*};
    /// # fn main() {
    /// let mut storage = [0; 9];
    /// let mut rb = LocalRb::new(&mut storage);
    ///
    /// assert_eq!(rb.insert_iter(0..8), 8);
    ///
    /// assert_eq!(rb.skip(4), 4);
    /// assert_eq!(rb.skip(8), 4);
    /// assert_eq!(rb.skip(4), 0);
    /// # }
    /// ```
    fn skip(&mut self, count: usize) -> usize {
        let slots = self.slots();
        let head = self.write_index();
        let mut tail = self.read_index();
        let mut skipped = 0;
        while skipped < count && tail != head {
            tail = advance(tail, slots);
            skipped += 1;
        }
        unsafe { self.set_read_index(tail) };
        skipped
    }

    /// Removes all items currently stored in the buffer.
    ///
    /// Unlike [`RingBuffer::reset`](`super::RingBuffer::reset`) it moves only the read index
    /// and so is safe to call while the producer is active.
    ///
    /// Returns the number of discarded items.
    fn clear(&mut self) -> usize {
        let head = self.write_index();
        let count = occupied(head, self.read_index(), self.slots());
        unsafe { self.set_read_index(head) };
        count
    }

    /// Returns an iterator that removes items one by one from the ring buffer.
    fn pop_iter(&mut self) -> PopIter<'_, Self> {
        PopIter { target: self }
    }

    /// Returns a front-to-back iterator over copies of items in the ring buffer.
    ///
    /// This iterator does not remove items out of the ring buffer.
    /// Items appended after the iterator was created are not visited.
    fn iter(&self) -> Iter<'_, Self> {
        Iter {
            target: self,
            index: self.read_index(),
            end: self.write_index(),
        }
    }

    #[cfg(feature = "std")]
    /// Removes bytes from the ring buffer into `buffer`.
    ///
    /// Returns [`std::io::ErrorKind::WouldBlock`] if the buffer is empty and `buffer` is not.
    fn read(&mut self, buffer: &mut [u8]) -> std::io::Result<usize>
    where
        Self: Consumer<Item = u8>,
    {
        let n = self.remove_slice(buffer);
        if n == 0 && !buffer.is_empty() {
            Err(std::io::ErrorKind::WouldBlock.into())
        } else {
            Ok(n)
        }
    }
}

/// An iterator that removes items from the ring buffer.
pub struct PopIter<'a, C: Consumer + ?Sized> {
    target: &'a mut C,
}

impl<C: Consumer + ?Sized> Iterator for PopIter<'_, C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.target.remove().ok()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.size(), None)
    }
}

/// Iterator over ring buffer contents.
pub struct Iter<'a, C: Consumer + ?Sized> {
    target: &'a C,
    index: usize,
    end: usize,
}

impl<C: Consumer + ?Sized> Iterator for Iter<'_, C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.end {
            return None;
        }
        let value = unsafe { self.target.read_slot(self.index) };
        self.index = advance(self.index, self.target.slots());
        Some(value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<C: Consumer + ?Sized> ExactSizeIterator for Iter<'_, C> {
    fn len(&self) -> usize {
        occupied(self.end, self.index, self.target.slots())
    }
}

impl<C: Consumer + ?Sized> FusedIterator for Iter<'_, C> {}

macro_rules! impl_consumer_traits {
    ($type:ident $(< $( $param:tt $( : $first_bound:tt $(+ $next_bound:tt )* )? ),+ >)?) => {
        #[cfg(feature = "std")]
        impl $(< $( $param $( : $first_bound $(+ $next_bound )* )? ),+ >)? std::io::Read for $type $(< $( $param ),+ >)?
        where
            Self: $crate::traits::Consumer<Item = u8>,
        {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                <Self as $crate::traits::Consumer>::read(self, buf)
            }
        }
    };
}
pub(crate) use impl_consumer_traits;
