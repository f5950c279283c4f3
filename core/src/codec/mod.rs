//! codec/mod.rs
//! Codec facade, config, orchestration and the diagnostics sink.

pub mod config;
pub mod core;
pub mod diagnostics;
pub mod pipeline;

pub use self::config::*;
pub use self::core::*;
pub use self::diagnostics::*;
pub use self::pipeline::*;
