use super::Observer;
use crate::{error::BufferFull, index::advance};

/// Producer part of ring buffer.
///
/// Moves only the write index, so it may run concurrently with a [`Consumer`](`super::Consumer`) of the same buffer.
pub trait Producer: Observer {
    /// Set write index.
    ///
    /// # Safety
    ///
    /// Index must be in `0..slots` and go only forward, never passing the read index.
    ///
    /// All slots between the read index and `value` must be initialized.
    unsafe fn set_write_index(&self, value: usize);

    /// Appends an item to the ring buffer.
    ///
    /// If buffer is full returns a [`BufferFull`] containing the item that hasn't been appended.
    /// The buffer is not modified in that case.
    fn try_insert(&mut self, value: Self::Item) -> Result<(), BufferFull<Self::Item>> {
        let head = self.write_index();
        let next = advance(head, self.slots());
        if next == self.read_index() {
            return Err(BufferFull(value));
        }
        unsafe {
            self.write_slot(head, value);
            self.set_write_index(next);
        }
        Ok(())
    }

    /// Appends items from an iterator to the ring buffer.
    /// Elements that haven't been added to the ring buffer remain in the iterator.
    ///
    /// Returns count of items been appended to the ring buffer.
    ///
    /// *Inserted items are committed to the ring buffer all at once in the end,*
    /// *e.g. when buffer is full or iterator has ended.*
    fn insert_iter<I: Iterator<Item = Self::Item>>(&mut self, mut iter: I) -> usize {
        let slots = self.slots();
        let tail = self.read_index();
        let mut head = self.write_index();
        let mut count = 0;
        while advance(head, slots) != tail {
            match iter.next() {
                Some(value) => unsafe { self.write_slot(head, value) },
                None => break,
            }
            head = advance(head, slots);
            count += 1;
        }
        unsafe { self.set_write_index(head) };
        count
    }

    /// Appends items from slice to the ring buffer.
    ///
    /// Returns count of items been appended to the ring buffer.
    fn insert_slice(&mut self, values: &[Self::Item]) -> usize {
        self.insert_iter(values.iter().copied())
    }
}

macro_rules! impl_producer_traits {
    ($type:ident $(< $( $param:tt $( : $first_bound:tt $(+ $next_bound:tt )* )? ),+ >)?) => {

        #[cfg(feature = "std")]
        impl $(< $( $param $( : $first_bound $(+ $next_bound )* )? ),+ >)? std::io::Write for $type $(< $( $param ),+ >)?
        where
            Self: $crate::traits::Producer<Item = u8>,
        {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                let n = $crate::traits::Producer::insert_slice(self, buf);
                if n == 0 && !buf.is_empty() {
                    Err(std::io::ErrorKind::WouldBlock.into())
                } else {
                    Ok(n)
                }
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl $(< $( $param $( : $first_bound $(+ $next_bound )* )? ),+ >)? core::fmt::Write for $type $(< $( $param ),+ >)?
        where
            Self: $crate::traits::Producer<Item = u8>,
        {
            fn write_str(&mut self, s: &str) -> core::fmt::Result {
                let n = $crate::traits::Producer::insert_slice(self, s.as_bytes());
                if n != s.len() {
                    Err(core::fmt::Error)
                } else {
                    Ok(())
                }
            }
        }
    };
}
pub(crate) use impl_producer_traits;
