//! ring/types.rs

use crate::constants::MAX_BRIDGE_LEN;
use crate::ring::primes::isqrt;

/// Shape of a wrapped code vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingLayout {
    /// Code count before padding.
    pub pre_ring_length: u64,
    /// Prime-padded length.
    pub ring_length: u64,
    /// Copied prefix appended after the ring.
    pub bridge_length: u64,
}

impl RingLayout {
    pub fn for_length(pre_ring_length: u64) -> Self {
        let ring_length = crate::ring::next_prime(pre_ring_length);
        Self {
            pre_ring_length,
            ring_length,
            bridge_length: bridge_length(ring_length),
        }
    }

    #[inline]
    pub fn padding(&self) -> u64 {
        self.ring_length - self.pre_ring_length
    }

    #[inline]
    pub fn total_length(&self) -> u64 {
        self.ring_length + self.bridge_length
    }
}

/// min(floor(sqrt(ring_length)), 10)
pub fn bridge_length(ring_length: u64) -> u64 {
    isqrt(ring_length).min(MAX_BRIDGE_LEN as u64)
}
