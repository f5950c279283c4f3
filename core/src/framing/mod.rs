//! framing/mod.rs
//! Frame markers over the wrapped ring.
//!
//! Layout of the framed output:
//!
//! ```text
//! [M][chunk 0][M][chunk 1] ... [M][chunk k-1]
//! ```
//!
//! `M` is chosen per stream so it never occurs in the payload. Every chunk is
//! `chunk_size` codes except possibly the last.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
