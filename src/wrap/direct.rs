use crate::{
    rb::RbRef,
    traits::{
        consumer::{impl_consumer_traits, Consumer},
        producer::{impl_producer_traits, Producer},
        Observer,
    },
};
use core::{fmt, num::NonZeroUsize};

/// Wrapper that gives access to one end of the ring buffer.
///
/// `P` grants access to the write end, `C` grants access to the read end.
pub struct Direct<R: RbRef, const P: bool, const C: bool> {
    rb: R,
}

/// Observer of ring buffer.
pub type Obs<R> = Direct<R, false, false>;
/// Producer of ring buffer.
pub type Prod<R> = Direct<R, true, false>;
/// Consumer of ring buffer.
pub type Cons<R> = Direct<R, false, true>;

impl<R: RbRef> Clone for Obs<R> {
    fn clone(&self) -> Self {
        Self { rb: self.rb.clone() }
    }
}

impl<R: RbRef, const P: bool, const C: bool> Direct<R, P, C> {
    /// There must be no more than one wrapper of the same ring buffer with the same parameter being `true`.
    pub(crate) fn new(rb: R) -> Self {
        Self { rb }
    }

    /// Creates an observer of the same ring buffer.
    pub fn observe(&self) -> Obs<R> {
        Obs { rb: self.rb.clone() }
    }

    #[inline]
    fn rb(&self) -> &R::Rb {
        self.rb.rb()
    }
}

impl<R: RbRef, const P: bool, const C: bool> Observer for Direct<R, P, C> {
    type Item = <R::Rb as Observer>::Item;

    #[inline]
    fn slots(&self) -> NonZeroUsize {
        self.rb().slots()
    }
    #[inline]
    fn read_index(&self) -> usize {
        self.rb().read_index()
    }
    #[inline]
    fn write_index(&self) -> usize {
        self.rb().write_index()
    }
    #[inline]
    unsafe fn read_slot(&self, index: usize) -> Self::Item {
        self.rb().read_slot(index)
    }
    #[inline]
    unsafe fn write_slot(&self, index: usize, value: Self::Item) {
        self.rb().write_slot(index, value)
    }
}

impl<R: RbRef> Producer for Prod<R> {
    #[inline]
    unsafe fn set_write_index(&self, value: usize) {
        self.rb().set_write_index(value)
    }
}

impl<R: RbRef> Consumer for Cons<R> {
    #[inline]
    unsafe fn set_read_index(&self, value: usize) {
        self.rb().set_read_index(value)
    }
}

impl<R: RbRef, const P: bool, const C: bool> fmt::Debug for Direct<R, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (P, C) {
            (true, false) => "Prod",
            (false, true) => "Cons",
            _ => "Obs",
        };
        f.debug_struct(name)
            .field("read", &self.read_index())
            .field("write", &self.write_index())
            .field("size", &self.size())
            .finish()
    }
}

impl_producer_traits!(Prod<R: RbRef>);
impl_consumer_traits!(Cons<R: RbRef>);
