use crate::{
    index::{LocalIndex, SharedIndex},
    rb::Rb,
    wrap::{Cons, Prod},
};

#[cfg(all(feature = "alloc", not(feature = "portable-atomic")))]
pub use alloc::sync::Arc;
#[cfg(all(feature = "alloc", feature = "portable-atomic"))]
pub use portable_atomic_util::Arc;

/// Ring buffer that can be shared between a producer thread and a consumer thread.
///
/// Note that there is no explicit requirement of `T: Send`. Instead ring buffer will work just fine even with `T: !Send`
/// until you try to send its producer or consumer to another thread.
#[cfg_attr(
    feature = "std",
    doc = r##"
```
use std::thread;
use circbuf::{SharedRb, traits::*};

let mut storage = [0u32; 16];
let mut rb = SharedRb::new(&mut storage);
let (mut prod, mut cons) = rb.split_ref();

thread::scope(|s| {
    s.spawn(move || {
        for i in 0..100 {
            while prod.try_insert(i).is_err() {}
        }
    });
    s.spawn(move || {
        for i in 0..100 {
            loop {
                if let Ok(x) = cons.remove() {
                    assert_eq!(x, i);
                    break;
                }
            }
        }
    });
});
```
"##
)]
pub type SharedRb<'a, T> = Rb<'a, T, SharedIndex>;

/// Ring buffer for using in single thread.
///
/// Does *not* implement [`Sync`]. And its [`Producer`](`crate::traits::Producer`) and [`Consumer`](`crate::traits::Consumer`) do *not* implement [`Send`].
///
#[cfg_attr(
    feature = "std",
    doc = r##"
This code must fail to compile:

```compile_fail
use std::thread;
use circbuf::{LocalRb, traits::*};

let mut storage = [0i32; 16];
let mut rb = LocalRb::new(&mut storage);
let (mut prod, mut cons) = rb.split_ref();
thread::scope(|s| {
    s.spawn(move || {
        prod.try_insert(123).unwrap();
    });
    s.spawn(move || {
        assert_eq!(cons.remove().unwrap(), 123);
    });
});
```
"##
)]
pub type LocalRb<'a, T> = Rb<'a, T, LocalIndex>;

/// Alias for [`SharedRb`] producer borrowing the ring buffer.
pub type SharedProd<'r, 'a, T> = Prod<&'r SharedRb<'a, T>>;

/// Alias for [`SharedRb`] consumer borrowing the ring buffer.
pub type SharedCons<'r, 'a, T> = Cons<&'r SharedRb<'a, T>>;

/// Alias for [`SharedRb`] producer owning a reference-counted ring buffer.
#[cfg(feature = "alloc")]
pub type ArcProd<'a, T> = Prod<Arc<SharedRb<'a, T>>>;

/// Alias for [`SharedRb`] consumer owning a reference-counted ring buffer.
#[cfg(feature = "alloc")]
pub type ArcCons<'a, T> = Cons<Arc<SharedRb<'a, T>>>;
