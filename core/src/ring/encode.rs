//! ring/encode.rs
//! Close a code vector into a prime-length ring with a seam bridge.

use crate::ring::types::RingLayout;
use crate::types::Code;

/// Pad `codes` with zeros to the next prime length, then append a copy of
/// the first `bridge_length` elements.
pub fn wrap(codes: &[Code]) -> (Vec<Code>, RingLayout) {
    let layout = RingLayout::for_length(codes.len() as u64);
    let ring_length = layout.ring_length as usize;
    let bridge = layout.bridge_length as usize;

    let mut out = Vec::with_capacity(ring_length + bridge);
    out.extend_from_slice(codes);
    out.resize(ring_length, 0);
    out.extend_from_within(..bridge);

    (out, layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_codes() {
        let codes: Vec<Code> = (1..=10).collect();
        let (ring, layout) = wrap(&codes);
        assert_eq!(ring, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3]);
        assert_eq!(layout.pre_ring_length, 10);
        assert_eq!(layout.ring_length, 11);
    }

    #[test]
    fn empty_becomes_smallest_ring() {
        let (ring, layout) = wrap(&[]);
        assert_eq!(ring, vec![0, 0, 0]);
        assert_eq!(layout.ring_length, 2);
        assert_eq!(layout.bridge_length, 1);
    }

    #[test]
    fn prime_length_needs_no_padding() {
        let (ring, layout) = wrap(&[7, 8, 9]);
        assert_eq!(layout.padding(), 0);
        assert_eq!(ring, vec![7, 8, 9, 7]);
    }
}
