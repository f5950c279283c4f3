//! framing/types.rs

use serde::{Deserialize, Serialize};

use crate::ring::{bridge_length, is_prime};
use crate::types::{Code, CodecError};

/// Everything needed to strip the frame markers and trim the ring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameMeta {
    pub marker_code: Code,
    pub chunk_size: u64,
    pub ring_length: u64,
    pub pre_ring_length: u64,
    /// Index of every marker in the framed output, ascending.
    pub marker_positions: Vec<u64>,
    /// Weak hash of the post-ring sequence (ring + bridge).
    pub hash: String,
}

impl FrameMeta {
    /// Bridge length implied by `ring_length`; 0 for an empty stream.
    pub fn bridge_length(&self) -> u64 {
        if self.ring_length == 0 {
            return 0;
        }
        bridge_length(self.ring_length)
    }

    /// Post-ring code count (ring + bridge).
    pub fn wrapped_length(&self) -> u64 {
        self.ring_length + self.bridge_length()
    }

    /// Framed code count (wrapped codes plus one marker per chunk).
    pub fn framed_length(&self) -> u64 {
        self.wrapped_length() + self.marker_positions.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.ring_length == 0
    }

    /// Structural consistency check.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.is_empty() {
            if self.pre_ring_length != 0 || !self.marker_positions.is_empty() {
                return Err(CodecError::InvalidMetadata(
                    "empty ring with codes or markers recorded".into(),
                ));
            }
            return Ok(());
        }
        if !is_prime(self.ring_length) {
            return Err(CodecError::InvalidMetadata(format!(
                "ring length {} is not prime",
                self.ring_length
            )));
        }
        if self.pre_ring_length > self.ring_length {
            return Err(CodecError::InvalidMetadata(format!(
                "pre-ring length {} exceeds ring length {}",
                self.pre_ring_length, self.ring_length
            )));
        }
        if self.chunk_size == 0 {
            return Err(CodecError::InvalidMetadata("chunk size is zero".into()));
        }
        let expected_markers = self.wrapped_length().div_ceil(self.chunk_size);
        if self.marker_positions.len() as u64 != expected_markers {
            return Err(CodecError::InvalidMetadata(format!(
                "{} marker positions recorded, {} chunks expected",
                self.marker_positions.len(),
                expected_markers
            )));
        }
        if self.marker_positions.windows(2).any(|w| w[0] >= w[1]) {
            return Err(CodecError::InvalidMetadata(
                "marker positions are not strictly increasing".into(),
            ));
        }
        Ok(())
    }
}
