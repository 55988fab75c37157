#[cfg(feature = "test_local")]
use crate::LocalRb as Rb;
#[cfg(not(feature = "test_local"))]
use crate::SharedRb as Rb;

mod iter;
mod new;
mod skip;
mod types;
