//! Lifecycle events.
//!
//! Forwarded to [`tracing`](https://docs.rs/tracing) when the `tracing` feature is enabled, compiled out otherwise.
//! Not emitted by the lock-free insert and remove operations.

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

pub(crate) use {debug, trace};
