//! compression/encode.rs
//! Streaming LZW encoder over the quaternary alphabet.

use crate::codec::Diagnostics;
use crate::compression::types::{Compressor, EncodeDictionary};
use crate::constants::RESET_MARKER;
use crate::packing::Symbol;
use crate::types::{Code, CodecError};

/// LZW encoder with in-band dictionary resets.
///
/// `current` is the code of the phrase being built; `None` means the empty
/// phrase. When the dictionary has no code left below [`RESET_MARKER`], the
/// encoder emits the marker right after the pending code and starts over with
/// the four singletons.
pub struct LzwEncoder {
    dict: EncodeDictionary,
    current: Option<Code>,
    resets: u64,
    emitted: u64,
    diag: Diagnostics,
}

impl LzwEncoder {
    pub fn new(diag: Diagnostics) -> Self {
        Self {
            dict: EncodeDictionary::new(),
            current: None,
            resets: 0,
            emitted: 0,
            diag,
        }
    }

    /// Resets emitted so far.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Codes emitted so far, reset markers included.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    fn emit(&mut self, code: Code, out: &mut Vec<Code>) {
        out.push(code);
        self.emitted += 1;
    }
}

impl Compressor for LzwEncoder {
    fn compress_chunk(&mut self, input: &[Symbol], out: &mut Vec<Code>) -> Result<(), CodecError> {
        for &symbol in input {
            let Some(current) = self.current else {
                self.current = Some(symbol.code());
                continue;
            };

            if let Some(extended) = self.dict.lookup(current, symbol) {
                self.current = Some(extended);
                continue;
            }

            self.emit(current, out);
            if self.dict.is_full() {
                self.emit(RESET_MARKER, out);
                self.dict.reset();
                self.resets += 1;
                self.diag.debug(format!(
                    "dictionary full, reset #{} after {} codes",
                    self.resets, self.emitted
                ));
            } else {
                self.dict.learn(current, symbol)?;
            }
            self.current = Some(symbol.code());
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<Code>) -> Result<(), CodecError> {
        if let Some(current) = self.current.take() {
            self.emit(current, out);
        }
        Ok(())
    }
}

/// One-shot encode of a symbol run.
pub fn lzw_encode_symbols(symbols: &[Symbol], diag: &Diagnostics) -> Result<Vec<Code>, CodecError> {
    let mut encoder = LzwEncoder::new(diag.clone());
    let mut out = Vec::with_capacity(symbols.len() / 2 + 1);
    encoder.compress_chunk(symbols, &mut out)?;
    encoder.finish(&mut out)?;
    Ok(out)
}

/// Number of reset markers in an encoder output.
pub fn count_resets(codes: &[Code]) -> u64 {
    codes.iter().filter(|&&c| c == RESET_MARKER).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    #[test]
    fn classic_example() {
        // A C A C A C A -> A, C, AC, ACA
        let codes = lzw_encode_symbols(&[A, C, A, C, A, C, A], &Diagnostics::silent()).unwrap();
        assert_eq!(codes, vec![0, 1, 4, 6]);
    }

    #[test]
    fn repeated_symbol() {
        // AAAAAA -> A, AA, AAA
        let codes = lzw_encode_symbols(&[A; 6], &Diagnostics::silent()).unwrap();
        assert_eq!(codes, vec![0, 4, 5]);
    }

    #[test]
    fn empty_and_single() {
        let diag = Diagnostics::silent();
        assert!(lzw_encode_symbols(&[], &diag).unwrap().is_empty());
        assert_eq!(lzw_encode_symbols(&[T], &diag).unwrap(), vec![3]);
    }

    #[test]
    fn chunked_feed_matches_one_shot() {
        let symbols: Vec<Symbol> = (0u8..200).map(|i| Symbol::from_bits(i ^ (i >> 3))).collect();
        let one_shot = lzw_encode_symbols(&symbols, &Diagnostics::silent()).unwrap();

        let mut encoder = LzwEncoder::new(Diagnostics::silent());
        let mut out = Vec::new();
        for chunk in symbols.chunks(7) {
            encoder.compress_chunk(chunk, &mut out).unwrap();
        }
        encoder.finish(&mut out).unwrap();
        assert_eq!(out, one_shot);
        assert_eq!(encoder.emitted(), out.len() as u64);
        assert_eq!(encoder.resets(), 0);
    }
}
