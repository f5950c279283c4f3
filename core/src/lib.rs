//! ccc-core
//!
//! Lossless ring codec: bytes -> quaternary symbols -> LZW codes -> prime
//! ring with bridge -> framed code stream, plus the metadata to invert it.
//! Pure in-memory functions; no I/O, no global state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Layers, leaves first
pub mod packing;
pub mod compression;
pub mod ring;
pub mod integrity;
pub mod framing;
pub mod metadata;
pub mod stats;
pub mod telemetry;

// Facade
pub mod codec;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{Codec, CodecConfig, Diagnostics, LineSink};
    pub use crate::constants::RESET_MARKER;
    pub use crate::framing::FrameMeta;
    pub use crate::metadata::{CompressionMeta, CoreMeta};
    pub use crate::stats::{EfficiencyReport, Stats};
    pub use crate::telemetry::{Stage, TelemetrySnapshot};
    pub use crate::types::{Code, CodecError, ErrorKind, ValidationMode};
}
