//! packing/decode.rs
//! symbols -> bytes, plus symbol-string parsing.

use crate::codec::Diagnostics;
use crate::packing::types::Symbol;
use crate::types::{CodecError, ValidationMode};

/// Parse a symbol string.
///
/// Strict: the first character outside the alphabet is an `InvalidSymbol`
/// error. Lenient: such characters are dropped and one warning is emitted.
pub fn parse_symbols(
    symbols: &str,
    mode: ValidationMode,
    diag: &Diagnostics,
) -> Result<Vec<Symbol>, CodecError> {
    let mut out = Vec::with_capacity(symbols.len());
    let mut skipped = 0usize;
    let mut first_bad: Option<(usize, char)> = None;

    for (position, c) in symbols.chars().enumerate() {
        match Symbol::from_char(c) {
            Some(s) => out.push(s),
            None if mode.is_strict() => {
                return Err(CodecError::InvalidSymbol { symbol: c, position });
            }
            None => {
                skipped += 1;
                first_bad.get_or_insert((position, c));
            }
        }
    }

    if let Some((position, c)) = first_bad {
        diag.warn(format!(
            "skipped {} invalid symbol(s), first {:?} at position {}",
            skipped, c, position
        ));
    }

    Ok(out)
}

/// Reassemble bytes from symbols and fit the result to `original_size`.
///
/// Four symbols make one byte, MSB first. A partial tail group is right
/// padded with zero bits. The output is then truncated or zero-extended to
/// exactly `original_size` bytes.
pub fn unpack_symbols(symbols: &[Symbol], original_size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(original_size.max(symbols.len().div_ceil(4)));

    for group in symbols.chunks(4) {
        let mut byte = 0u8;
        for (i, s) in group.iter().enumerate() {
            byte |= s.bits() << (6 - 2 * i);
        }
        out.push(byte);
    }

    out.resize(original_size, 0);
    out
}

/// String form of [`unpack_symbols`] with mode-aware parsing.
pub fn unpack(
    symbols: &str,
    original_size: u64,
    mode: ValidationMode,
    diag: &Diagnostics,
) -> Result<Vec<u8>, CodecError> {
    let size = usize::try_from(original_size).map_err(|_| {
        CodecError::InvalidMetadata(format!("original size {} exceeds address space", original_size))
    })?;
    let parsed = parse_symbols(symbols, mode, diag)?;
    Ok(unpack_symbols(&parsed, size))
}
