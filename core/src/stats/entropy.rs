//! stats/entropy.rs
//! Shannon entropy over byte streams and code sequences.

use byteorder::{ByteOrder, LittleEndian};

use crate::types::Code;

/// H = -sum(p * log2 p) over byte values, in bits per byte. 0.0 when empty.
pub fn entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut freq = [0u64; 256];
    for &b in data {
        freq[b as usize] += 1;
    }

    let total = data.len() as f64;
    let mut h = 0.0;
    for &count in freq.iter().filter(|&&c| c > 0) {
        let p = count as f64 / total;
        h -= p * p.log2();
    }
    h
}

/// Bits needed to represent `value`; 1 for zero.
#[inline]
pub fn bits_needed(value: Code) -> u32 {
    if value == 0 {
        1
    } else {
        Code::BITS - value.leading_zeros()
    }
}

/// Little-endian bytes for `code`, as few as hold it (at least one).
#[inline]
pub fn min_bytes(code: Code) -> usize {
    bits_needed(code).div_ceil(8) as usize
}

/// Expand codes to the minimum-width little-endian byte stream.
pub fn codes_to_le_bytes(codes: &[Code]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 2);
    let mut buf = [0u8; 4];
    for &code in codes {
        let width = min_bytes(code);
        LittleEndian::write_uint(&mut buf, code as u64, width);
        out.extend_from_slice(&buf[..width]);
    }
    out
}

/// Entropy of a code sequence through its little-endian byte stream.
pub fn code_entropy(codes: &[Code]) -> f64 {
    entropy(&codes_to_le_bytes(codes))
}
