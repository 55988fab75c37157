use core::{marker::PhantomData, num::NonZeroUsize, ptr::NonNull, slice};

/// Caller-owned slots the ring buffer works on.
///
/// Holds the exclusive borrow of the storage for `'a`: the ring buffer never allocates,
/// reallocates or frees it, and the caller gets it back intact when the borrow ends.
pub struct Slots<'a, T> {
    ptr: NonNull<T>,
    len: NonZeroUsize,
    _borrow: PhantomData<&'a mut [T]>,
}

// Producer and consumer never access the same slot at the same time, so sharing
// the slots only requires items to be movable between threads.
unsafe impl<T: Send> Send for Slots<'_, T> {}
unsafe impl<T: Send> Sync for Slots<'_, T> {}

impl<'a, T> Slots<'a, T> {
    /// *Panics if `storage` is empty.*
    pub fn new(storage: &'a mut [T]) -> Self {
        let len = NonZeroUsize::new(storage.len()).expect("storage must not be empty");
        Self {
            ptr: NonNull::from(storage).cast(),
            len,
            _borrow: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Copies the item out of the slot.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`Self::len`]. No write to the same slot may happen concurrently.
    #[inline]
    pub unsafe fn read(&self, index: usize) -> T
    where
        T: Copy,
    {
        debug_assert!(index < self.len.get());
        self.ptr.as_ptr().add(index).read()
    }

    /// Overwrites the slot.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`Self::len`]. No other access to the same slot may happen concurrently.
    #[inline]
    pub unsafe fn write(&self, index: usize, value: T)
    where
        T: Copy,
    {
        debug_assert!(index < self.len.get());
        self.ptr.as_ptr().add(index).write(value)
    }

    /// Gives the storage back to the caller.
    pub fn into_inner(self) -> &'a mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len.get()) }
    }
}
