//! metadata/mod.rs
//! In-memory metadata. Serialization is left to the caller; every record
//! derives serde so any format works.

pub mod types;

pub use types::*;
pub use crate::framing::FrameMeta;
