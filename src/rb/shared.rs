#[cfg(feature = "alloc")]
use crate::{
    alias::Arc,
    traits::Split,
    wrap::{Cons, Prod},
};
use crate::alias::SharedRb;

#[cfg(feature = "alloc")]
impl<'a, T: Copy> Split for SharedRb<'a, T> {
    type Prod = Prod<Arc<Self>>;
    type Cons = Cons<Arc<Self>>;

    fn split(self) -> (Self::Prod, Self::Cons) {
        let rb = Arc::new(self);
        (Prod::new(rb.clone()), Cons::new(rb))
    }
}

impl<'a, T: Copy> From<&'a mut [T]> for SharedRb<'a, T> {
    fn from(storage: &'a mut [T]) -> Self {
        Self::new(storage)
    }
}
