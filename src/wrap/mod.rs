pub mod direct;

pub use direct::{Cons, Obs, Prod};
