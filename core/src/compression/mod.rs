//! compression/mod.rs
//! LZW condensation over the four-symbol alphabet.
//!
//! Codes 0..=3 are the singletons A, C, G, T. Learned phrases take
//! 4..=65534. Code 65535 is the in-band reset marker.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;

use crate::codec::Diagnostics;
use crate::packing::{parse_symbols, symbols_to_string};
use crate::types::{Code, CodecError, ValidationMode};

/// Encode a symbol string.
pub fn lzw_encode(
    symbols: &str,
    mode: ValidationMode,
    diag: &Diagnostics,
) -> Result<Vec<Code>, CodecError> {
    let parsed = parse_symbols(symbols, mode, diag)?;
    lzw_encode_symbols(&parsed, diag)
}

/// Decode a code sequence back to a symbol string.
pub fn lzw_decode(
    codes: &[Code],
    mode: ValidationMode,
    diag: &Diagnostics,
) -> Result<String, CodecError> {
    let symbols = lzw_decode_codes(codes, mode, diag)?;
    Ok(symbols_to_string(&symbols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    #[test]
    fn string_round_trip() {
        let diag = Diagnostics::silent();
        let text = "ACGTACGTTTGACAACGT";
        let codes = lzw_encode(text, ValidationMode::Strict, &diag).unwrap();
        assert_eq!(lzw_decode(&codes, ValidationMode::Strict, &diag).unwrap(), text);
    }

    #[test]
    fn lower_case_is_normalised() {
        let diag = Diagnostics::silent();
        let codes = lzw_encode("acgt", ValidationMode::Strict, &diag).unwrap();
        assert_eq!(codes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn bad_symbol_policy() {
        let diag = Diagnostics::silent();
        let err = lzw_encode("ACXG", ValidationMode::Strict, &diag).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSymbol);
        let codes = lzw_encode("ACXG", ValidationMode::Lenient, &diag).unwrap();
        assert_eq!(codes, vec![0, 1, 2]);
    }
}
