//! Lock-free single-producer single-consumer circular buffer over caller-owned storage.
//!
//! The ring buffer never allocates: it borrows a slice provided by the caller and keeps two indices into it.
//! One slot always stays vacant to tell the full buffer from the empty one, so storage of `N` slots holds up to `N - 1` items.
//!
//! # Threads
//!
//! [`SharedRb`] may be split into a [`Producer`](`traits::Producer`) and a [`Consumer`](`traits::Consumer`)
//! which can be used from two different threads without locking.
//! The producer only moves the write index and the consumer only moves the read index.
//!
//! [`RingBuffer::forced_insert`](`traits::RingBuffer::forced_insert`) and [`RingBuffer::reset`](`traits::RingBuffer::reset`)
//! move both indices and so are only available on the whole ring buffer, before splitting or after the halves are gone.
//!
//! # Example
//!
//! ```
//! use circbuf::{SharedRb, traits::*};
//!
//! let mut storage = [0.0f32; 8];
//! let mut rb = SharedRb::new(&mut storage);
//! assert_eq!(rb.capacity(), 7);
//!
//! rb.try_insert(69.69).unwrap();
//! assert_eq!(rb.remove(), Ok(69.69));
//! assert!(rb.is_empty());
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod alias;
pub mod error;
pub mod index;
pub mod rb;
pub mod storage;
mod trace;
pub mod traits;
pub mod wrap;

pub use alias::*;
pub use error::{BufferEmpty, BufferFull};
pub use rb::Rb;

#[cfg(test)]
mod tests;
