use crate::traits::RingBuffer;
#[cfg(feature = "alloc")]
use crate::alias::Arc;
#[cfg(feature = "alloc")]
use alloc::rc::Rc;

/// Reference to a ring buffer held by its producer, consumer or observer.
///
/// # Safety
///
/// [`Self::rb`] must return the same ring buffer for the whole lifetime of the reference and all of its clones.
pub unsafe trait RbRef: Clone {
    type Rb: RingBuffer;
    fn rb(&self) -> &Self::Rb;
}

unsafe impl<B: RingBuffer> RbRef for &B {
    type Rb = B;
    #[inline]
    fn rb(&self) -> &B {
        self
    }
}
#[cfg(feature = "alloc")]
unsafe impl<B: RingBuffer> RbRef for Rc<B> {
    type Rb = B;
    #[inline]
    fn rb(&self) -> &B {
        self
    }
}
#[cfg(feature = "alloc")]
unsafe impl<B: RingBuffer> RbRef for Arc<B> {
    type Rb = B;
    #[inline]
    fn rb(&self) -> &B {
        self
    }
}
