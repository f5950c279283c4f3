//! codec/config.rs
//! Codec tunables. Every field has a default so partial configs load cleanly
//! from any serde source.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_MIN_PATTERN_LENGTH};
use crate::types::{CodecError, ValidationMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Ring codes between two frame markers.
    pub chunk_size: u64,
    /// Accepted and carried, but the coder does not use it.
    pub min_pattern_length: u64,
    /// Strict surfaces every fault as an error; lenient defaults and warns.
    pub strict: bool,
    /// Emit progress lines through the diagnostics sink.
    pub verbose: bool,
    /// When false, strict mode rejects empty inputs.
    pub allow_empty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            min_pattern_length: DEFAULT_MIN_PATTERN_LENGTH,
            strict: true,
            verbose: false,
            allow_empty: true,
        }
    }
}

impl CodecConfig {
    pub fn lenient() -> Self {
        Self { strict: false, ..Self::default() }
    }

    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    #[inline]
    pub fn mode(&self) -> ValidationMode {
        ValidationMode::from_strict(self.strict)
    }

    pub fn validate(&self) -> Result<(), CodecError> {
        validate_chunk_size(self.chunk_size)?;
        Ok(())
    }
}

pub fn validate_chunk_size(chunk_size: u64) -> Result<(), CodecError> {
    if chunk_size == 0 {
        return Err(CodecError::InvalidConfig("chunk_size must be at least 1".into()));
    }
    Ok(())
}
