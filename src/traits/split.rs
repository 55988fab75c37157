use crate::traits::{Consumer, Observer, Producer};

/// Split the ring buffer into an owning producer and consumer.
///
/// Each half may be moved to its own thread. The buffer itself is no longer reachable,
/// so operations that move both indices can't be called after splitting.
pub trait Split: Observer {
    /// Producer type.
    type Prod: Producer<Item = Self::Item>;
    /// Consumer type.
    type Cons: Consumer<Item = Self::Item>;

    /// Perform splitting.
    fn split(self) -> (Self::Prod, Self::Cons);
}

/// Split the ring buffer by reference into producer and consumer.
///
/// The buffer stays mutably borrowed while any of the halves is alive.
pub trait SplitRef: Observer {
    /// Ref producer type.
    type RefProd<'r>: Producer<Item = Self::Item> + 'r
    where
        Self: 'r;
    /// Ref consumer type.
    type RefCons<'r>: Consumer<Item = Self::Item> + 'r
    where
        Self: 'r;

    /// Perform splitting by reference.
    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>);
}
