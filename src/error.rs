use thiserror::Error;

/// [`Producer::try_insert`](`crate::traits::Producer::try_insert`) error.
///
/// Cannot insert: ring buffer is full. Contains the item that hasn't been inserted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ring buffer is full")]
pub struct BufferFull<T>(pub T);

impl<T> BufferFull<T> {
    /// Returns the rejected item.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// [`Consumer::remove`](`crate::traits::Consumer::remove`), [`Consumer::peek`](`crate::traits::Consumer::peek`)
/// and [`Consumer::remove_oldest`](`crate::traits::Consumer::remove_oldest`) error.
///
/// Cannot read: ring buffer is empty.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ring buffer is empty")]
pub struct BufferEmpty;
