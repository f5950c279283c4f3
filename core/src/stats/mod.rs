//! stats/mod.rs
//! Read-only accounting over codec inputs and outputs.

pub mod entropy;
pub mod report;
pub mod efficiency;

pub use entropy::*;
pub use report::*;
pub use efficiency::*;
