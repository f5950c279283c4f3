//! ring/decode.rs
//! Trim a ring back to its payload and read across the seam.

use crate::types::{Code, CodecError};

/// First `pre_ring_length` codes; padding and bridge are dropped.
pub fn unwrap(wrapped: &[Code], pre_ring_length: u64) -> Result<Vec<Code>, CodecError> {
    let keep = usize::try_from(pre_ring_length)
        .ok()
        .filter(|&n| n <= wrapped.len())
        .ok_or_else(|| {
            CodecError::InvalidStream(format!(
                "ring holds {} codes, {} expected before padding",
                wrapped.len(),
                pre_ring_length
            ))
        })?;
    Ok(wrapped[..keep].to_vec())
}

/// Read `len` codes starting at `start`, wrapping modulo `ring_length`.
pub fn circular_read(
    wrapped: &[Code],
    ring_length: u64,
    start: u64,
    len: usize,
) -> Result<Vec<Code>, CodecError> {
    if len == 0 {
        return Ok(Vec::new());
    }
    let ring = usize::try_from(ring_length)
        .ok()
        .filter(|&n| n > 0 && n <= wrapped.len())
        .ok_or_else(|| {
            CodecError::InvalidStream(format!(
                "ring length {} does not fit {} wrapped codes",
                ring_length,
                wrapped.len()
            ))
        })?;
    let start = (start % ring_length) as usize;
    Ok((0..len).map(|i| wrapped[(start + i) % ring]).collect())
}

/// Borrow a seam-crossing window directly from ring + bridge.
///
/// `None` when the window starts outside the ring or runs past the bridge;
/// use [`circular_read`] for those.
pub fn seam_slice(wrapped: &[Code], ring_length: u64, start: u64, len: usize) -> Option<&[Code]> {
    if start >= ring_length {
        return None;
    }
    let start = usize::try_from(start).ok()?;
    let end = start.checked_add(len)?;
    wrapped.get(start..end)
}
