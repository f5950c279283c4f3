//! metadata/types.rs
//! Plain records produced by `compress` and consumed by `decompress`.

use serde::{Deserialize, Serialize};

use crate::framing::FrameMeta;
use crate::packing::symbol_length_for_bits;
use crate::types::CodecError;

/// Size bookkeeping for the byte/symbol layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoreMeta {
    pub symbol_length: u64,
    pub original_size: u64,
    pub original_bits_length: u64,
}

impl CoreMeta {
    pub fn for_input(original_size: u64, original_bits_length: u64) -> Self {
        Self {
            symbol_length: symbol_length_for_bits(original_bits_length),
            original_size,
            original_bits_length,
        }
    }

    pub fn validate(&self) -> Result<(), CodecError> {
        let bits = self.original_size.checked_mul(8).ok_or_else(|| {
            CodecError::InvalidMetadata(format!("original size {} overflows bit count", self.original_size))
        })?;
        if bits != self.original_bits_length {
            return Err(CodecError::InvalidMetadata(format!(
                "{} bytes carry {} bits, metadata says {}",
                self.original_size, bits, self.original_bits_length
            )));
        }
        let symbols = symbol_length_for_bits(bits);
        if symbols != self.symbol_length {
            return Err(CodecError::InvalidMetadata(format!(
                "{} bits make {} symbols, metadata says {}",
                bits, symbols, self.symbol_length
            )));
        }
        Ok(())
    }
}

/// Full record for one compressed stream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompressionMeta {
    pub core: CoreMeta,
    pub frame: FrameMeta,
    /// Framed code count per input byte; 0 for empty input.
    pub ratio: f64,
}

impl CompressionMeta {
    /// Metadata for an empty input: every length zero, chunk size kept.
    pub fn empty(chunk_size: u64) -> Self {
        Self {
            frame: FrameMeta { chunk_size, ..FrameMeta::default() },
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.core.original_size == 0
    }

    pub fn validate(&self) -> Result<(), CodecError> {
        self.core.validate()?;
        self.frame.validate()?;
        if self.is_empty() != self.frame.is_empty() {
            return Err(CodecError::InvalidMetadata(format!(
                "original size {} does not match ring length {}",
                self.core.original_size, self.frame.ring_length
            )));
        }
        Ok(())
    }
}

/// Framed codes per original byte.
pub fn expansion_ratio(framed_len: usize, original_size: usize) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    framed_len as f64 / original_size as f64
}
