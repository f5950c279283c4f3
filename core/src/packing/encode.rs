//! packing/encode.rs
//! bytes -> symbols, most significant bit pair first.

use crate::constants::{BITS_PER_SYMBOL, SYMBOLS_PER_BYTE};
use crate::packing::types::{Symbol, symbols_to_string};

/// Expand bytes into symbols and report the pre-padding bit count.
///
/// Every byte contributes four symbols (bit pairs 7-6, 5-4, 3-2, 1-0). A byte
/// buffer always yields an even bit count, so the odd-tail `A` pad never fires
/// here; it only matters for callers that pack raw bit strings.
pub fn pack_symbols(bytes: &[u8]) -> (Vec<Symbol>, u64) {
    let bits_len = bytes.len() as u64 * 8;
    let mut symbols = Vec::with_capacity(bytes.len() * SYMBOLS_PER_BYTE as usize);

    for &byte in bytes {
        symbols.push(Symbol::from_bits(byte >> 6));
        symbols.push(Symbol::from_bits(byte >> 4));
        symbols.push(Symbol::from_bits(byte >> 2));
        symbols.push(Symbol::from_bits(byte));
    }

    (symbols, bits_len)
}

/// String form of [`pack_symbols`].
pub fn pack(bytes: &[u8]) -> (String, u64) {
    let (symbols, bits_len) = pack_symbols(bytes);
    (symbols_to_string(&symbols), bits_len)
}

/// Symbol count for a given bit length, rounded up.
#[inline]
pub fn symbol_length_for_bits(bits_len: u64) -> u64 {
    bits_len.div_ceil(BITS_PER_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_ascii_bytes() {
        let (symbols, bits) = pack(&[0x41, 0x42, 0x43, 0x44]);
        assert_eq!(symbols, "CAACCAAGCAATCACA");
        assert_eq!(bits, 32);
    }

    #[test]
    fn extremes() {
        assert_eq!(pack(&[0x00]).0, "AAAA");
        assert_eq!(pack(&[0xFF]).0, "TTTT");
        assert_eq!(pack(&[0b1110_0100]).0, "TGCA");
    }

    #[test]
    fn empty_input() {
        let (symbols, bits) = pack(&[]);
        assert!(symbols.is_empty());
        assert_eq!(bits, 0);
    }

    #[test]
    fn symbol_length_rounds_up() {
        assert_eq!(symbol_length_for_bits(104), 52);
        assert_eq!(symbol_length_for_bits(7), 4);
        assert_eq!(symbol_length_for_bits(0), 0);
    }
}
