//! ring/mod.rs
//! Ring closure: zero padding to a prime length plus a bridge suffix that
//! repeats the head of the ring, so a reader can cross the seam contiguously.

pub mod primes;
pub mod types;
pub mod encode;
pub mod decode;

pub use primes::{is_prime, next_prime};
pub use types::*;
pub use encode::*;
pub use decode::*;
