#[cfg(feature = "alloc")]
use crate::{
    traits::Split,
    wrap::{Cons, Prod},
};
use crate::alias::LocalRb;
#[cfg(feature = "alloc")]
use alloc::rc::Rc;

#[cfg(feature = "alloc")]
impl<'a, T: Copy> Split for LocalRb<'a, T> {
    type Prod = Prod<Rc<Self>>;
    type Cons = Cons<Rc<Self>>;

    fn split(self) -> (Self::Prod, Self::Cons) {
        let rb = Rc::new(self);
        (Prod::new(rb.clone()), Cons::new(rb))
    }
}

impl<'a, T: Copy> From<&'a mut [T]> for LocalRb<'a, T> {
    fn from(storage: &'a mut [T]) -> Self {
        Self::new(storage)
    }
}
