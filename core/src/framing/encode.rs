//! framing/encode.rs
//! Interleave a per-stream marker code ahead of every chunk.

use crate::constants::RESET_MARKER;
use crate::framing::types::FrameMeta;
use crate::integrity::weak_hash;
use crate::ring::RingLayout;
use crate::types::{Code, CodecError};

/// Smallest code above every ring value that is neither in the ring nor the
/// reset marker.
pub fn select_marker(ring: &[Code]) -> Result<Code, CodecError> {
    let overflow = || CodecError::InvalidStream(format!("no free marker code above {}", Code::MAX - 1));

    let mut marker = match ring.iter().max() {
        Some(&max) => max.checked_add(1).ok_or_else(overflow)?,
        None => 0,
    };
    while marker == RESET_MARKER || ring.contains(&marker) {
        marker = marker.checked_add(1).ok_or_else(overflow)?;
    }
    Ok(marker)
}

/// Split `ring` into `chunk_size` chunks, prefixing each with the marker.
pub fn insert_markers(
    ring: &[Code],
    chunk_size: u64,
    layout: &RingLayout,
) -> Result<(Vec<Code>, FrameMeta), CodecError> {
    if chunk_size == 0 {
        return Err(CodecError::InvalidConfig("chunk size must be positive".into()));
    }
    let marker = select_marker(ring)?;
    // a chunk larger than the address space is one chunk
    let step = usize::try_from(chunk_size).unwrap_or(usize::MAX);

    let chunk_count = ring.len().div_ceil(step);
    let mut framed = Vec::with_capacity(ring.len() + chunk_count);
    let mut marker_positions = Vec::with_capacity(chunk_count);

    for chunk in ring.chunks(step) {
        marker_positions.push(framed.len() as u64);
        framed.push(marker);
        framed.extend_from_slice(chunk);
    }

    let meta = FrameMeta {
        marker_code: marker,
        chunk_size,
        ring_length: layout.ring_length,
        pre_ring_length: layout.pre_ring_length,
        marker_positions,
        hash: weak_hash(ring),
    };
    Ok((framed, meta))
}
