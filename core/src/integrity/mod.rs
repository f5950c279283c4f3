//! integrity/mod.rs
//! Weak, non-cryptographic corruption check for the post-ring code vector.

pub mod digest;

pub use digest::*;
